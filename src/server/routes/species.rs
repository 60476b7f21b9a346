//! Supported species listing endpoint.

use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::State;
use axum::Json;

/// `GET /api/v1/species`.
///
/// Returns the common names of every species the active classifier can
/// produce: the fixed development list in stub mode, the model's label
/// set resolved through the name store otherwise. Resolution may touch
/// the lookup store, so it runs off the async worker.
pub async fn list_species(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let classifier = state.classifier.clone();
    let resolver = state.resolver.clone();

    let species = tokio::task::spawn_blocking(move || classifier.species(&resolver))
        .await
        .map_err(|e| ApiError::internal(format!("Error fetching species list: {e}")))?;

    Ok(Json(species))
}
