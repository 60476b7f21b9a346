//! Shared request-handler state.

use crate::config::Config;
use crate::inference::BirdClassifier;
use crate::names::NameResolver;
use crate::pipeline::PredictionPipeline;
use std::sync::Arc;

/// Immutable state shared by all request handlers.
///
/// Constructed once at startup and passed into the router; handlers only
/// read from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// The classifier selected at startup.
    pub classifier: Arc<BirdClassifier>,
    /// Scientific-to-common name resolver.
    pub resolver: NameResolver,
    /// Prediction pipeline over the classifier and resolver.
    pub pipeline: PredictionPipeline,
}

impl AppState {
    /// Wire up shared state from the startup-constructed collaborators.
    pub fn new(
        config: Arc<Config>,
        classifier: Arc<BirdClassifier>,
        resolver: NameResolver,
    ) -> Self {
        let pipeline = PredictionPipeline::new(
            classifier.clone(),
            resolver.clone(),
            config.model.background_index,
        );
        Self {
            config,
            classifier,
            resolver,
            pipeline,
        }
    }

    /// Whether the service should report itself healthy.
    ///
    /// Unhealthy only when the classifier fell back to the stub in an
    /// environment that requires the real model. Independent of any
    /// per-request state.
    pub fn healthy(&self) -> bool {
        !self.classifier.is_stub() || self.config.environment.tolerates_missing_model()
    }
}
