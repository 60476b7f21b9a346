//! Shared test helpers for endpoint tests.

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use birdid::config::{Config, Environment};
use birdid::inference::{BirdClassifier, StubClassifier};
use birdid::names::{MemoryNameStore, NameResolver};
use birdid::server::{build_router, AppState};
use std::sync::Arc;

/// Router over the stub classifier and the in-memory dev name store.
pub fn stub_router(environment: Environment) -> Router {
    stub_router_with_config(environment, Config::default())
}

/// Same as [`stub_router`] but with a custom base configuration.
#[allow(dead_code)]
pub fn stub_router_with_config(environment: Environment, mut config: Config) -> Router {
    config.environment = environment;

    let classifier = Arc::new(BirdClassifier::Stub(StubClassifier::new()));
    let resolver = NameResolver::new(Arc::new(MemoryNameStore::from_pairs(
        birdid::constants::DEV_BIRDS,
    )));

    build_router(AppState::new(Arc::new(config), classifier, resolver))
}

/// Encode a solid-color PNG in memory.
#[allow(dead_code)]
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("in-memory PNG encoding");
    bytes.into_inner()
}

/// Build a multipart upload request with one `image` field.
#[allow(dead_code)]
pub fn identify_request(uri: &str, filename: &str, payload: &[u8]) -> Request<Body> {
    const BOUNDARY: &str = "birdid-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request construction")
}

/// Collect a response body into a JSON value.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collection");
    serde_json::from_slice(&bytes).expect("JSON body")
}
