//! HTTP gateway: router construction and serving.

pub mod error;
pub mod routes;
mod state;

pub use state::AppState;

use crate::constants::API_PREFIX;
use crate::error::{Error, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
///
/// Endpoints live under `/api/v1`; a bare `/health` alias is kept for
/// container probes. The body limit leaves headroom over the configured
/// image size so the upload check can answer with a 400 instead of the
/// transport's 413.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_image_size.saturating_mul(2);

    let api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/identify", post(routes::identify::identify))
        .route("/species", get(routes::species::list_species))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(routes::health::health))
        .with_state(state)
        .nest(API_PREFIX, api)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until interrupted.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!(
        "{}:{}",
        state.config.server.bind_address, state.config.server.port
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Server {
            reason: format!("failed to bind {addr}: {e}"),
        })?;

    info!("Listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server {
            reason: e.to_string(),
        })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
