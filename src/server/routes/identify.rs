//! Image identification endpoint.

use crate::constants::confidence;
use crate::error::Error;
use crate::pipeline::Prediction;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Required query parameters for `/identify`.
#[derive(Debug, Deserialize)]
pub struct IdentifyParams {
    /// Minimum confidence threshold, 0 to 1.
    pub threshold: f32,
    /// Maximum number of predictions to return.
    pub max_results: i64,
}

/// Response body for a successful identification.
#[derive(Debug, Serialize)]
pub struct IdentifyResponse {
    /// Ranked predictions, descending by confidence.
    pub predictions: Vec<Prediction>,
    /// Time taken to process the image, in seconds.
    pub processing_time: f64,
    /// UTC timestamp of the prediction.
    pub timestamp: DateTime<Utc>,
}

/// `POST /api/v1/identify`, expecting the multipart file field `image`.
pub async fn identify(
    State(state): State<AppState>,
    Query(params): Query<IdentifyParams>,
    multipart: Multipart,
) -> Result<Json<IdentifyResponse>, ApiError> {
    if !(confidence::MIN..=confidence::MAX).contains(&params.threshold) {
        return Err(ApiError::bad_request("Threshold must be between 0 and 1"));
    }
    if params.max_results < 1 {
        return Err(ApiError::bad_request("max_results must be greater than 0"));
    }
    #[allow(clippy::cast_sign_loss)]
    let max_results = params.max_results as usize;

    let upload = read_image_field(multipart, &state).await?;

    let start = Instant::now();
    let pipeline = state.pipeline.clone();
    let threshold = params.threshold;

    // Decoding, resizing and inference are CPU-bound; keep them off the
    // async worker threads.
    let predictions =
        tokio::task::spawn_blocking(move || pipeline.run(&upload, threshold, max_results))
            .await
            .map_err(|e| ApiError::internal(format!("Error processing image: {e}")))?
            .map_err(map_pipeline_error)?;

    let processing_time = start.elapsed().as_secs_f64();
    debug!(
        "Identified {} species in {processing_time:.3}s",
        predictions.len()
    );

    Ok(Json(IdentifyResponse {
        predictions,
        processing_time,
        timestamp: Utc::now(),
    }))
}

/// Pull the validated `image` field out of the multipart body.
async fn read_image_field(mut multipart: Multipart, state: &AppState) -> Result<Vec<u8>, ApiError> {
    let upload = &state.config.upload;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !upload.extension_allowed(&filename) {
            return Err(ApiError::bad_request(format!(
                "File extension must be one of: {}",
                upload.allowed_extensions_display()
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;

        if bytes.len() > upload.max_image_size {
            let max_mb = upload.max_image_size / (1024 * 1024);
            return Err(ApiError::bad_request(format!(
                "File size exceeds maximum of {max_mb}MB"
            )));
        }

        return Ok(bytes.to_vec());
    }

    Err(ApiError::bad_request("No image file provided"))
}

/// Decode and pipeline failures both surface as 500 with the cause text.
fn map_pipeline_error(e: Error) -> ApiError {
    match e {
        Error::ImageDecode { .. } | Error::Pipeline { .. } => {
            ApiError::internal(format!("Error processing image: {e}"))
        }
        other => other.into(),
    }
}
