//! Classifier capability and its two implementations.

mod classifier;
mod labels;
mod stub;

pub use classifier::OnnxClassifier;
pub use labels::load_labels;
pub use stub::StubClassifier;

use crate::config::Config;
use crate::error::Result;
use crate::names::NameResolver;
use crate::vision::PixelBuffer;
use tracing::{info, warn};

/// One category score from the classifier.
///
/// `label` is the scientific species name from the label set. Scores are
/// in [0, 1]; no ordering guarantee is made here, ranking is the
/// pipeline's job.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCategory {
    /// Output index in the model's label set.
    pub index: usize,
    /// Scientific species name for this index.
    pub label: String,
    /// Confidence score in [0, 1].
    pub score: f32,
}

/// The classifier capability, selected once at process startup.
///
/// `Onnx` wraps the real model asset; `Stub` is the development fallback
/// used when the asset is unavailable in a tolerant environment, keeping
/// the HTTP surface testable without the model present.
pub enum BirdClassifier {
    /// Real classifier backed by the ONNX model asset.
    Onnx(OnnxClassifier),
    /// Fixed development species with randomized scores.
    Stub(StubClassifier),
}

impl BirdClassifier {
    /// Construct the classifier for the configured environment.
    ///
    /// A model load failure is fatal in staging/production; development
    /// substitutes the stub classifier and logs the degradation.
    pub fn initialize(config: &Config) -> Result<Self> {
        match OnnxClassifier::from_config(&config.model) {
            Ok(classifier) => {
                info!(
                    "Loaded model: {} ({} labels)",
                    config.model.path.display(),
                    classifier.label_count()
                );
                Ok(Self::Onnx(classifier))
            }
            Err(e) if config.environment.tolerates_missing_model() => {
                warn!("Failed to load model, falling back to stub classifier: {e}");
                Ok(Self::Stub(StubClassifier::new()))
            }
            Err(e) => Err(e),
        }
    }

    /// Run inference on a preprocessed pixel buffer.
    pub fn infer(&self, buffer: &PixelBuffer) -> Result<Vec<RawCategory>> {
        match self {
            Self::Onnx(classifier) => classifier.infer(buffer),
            Self::Stub(stub) => Ok(stub.infer()),
        }
    }

    /// Whether the stub fallback is active.
    pub fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }

    /// Common names of every species this classifier can produce.
    ///
    /// The stub returns the fixed development list in its defined order;
    /// the real classifier resolves its label set through the name store.
    pub fn species(&self, resolver: &NameResolver) -> Vec<String> {
        match self {
            Self::Onnx(classifier) => classifier
                .labels()
                .iter()
                .map(|label| resolver.resolve(label))
                .collect(),
            Self::Stub(stub) => stub.species(),
        }
    }
}

impl std::fmt::Debug for BirdClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Onnx(_) => f.write_str("BirdClassifier::Onnx"),
            Self::Stub(_) => f.write_str("BirdClassifier::Stub"),
        }
    }
}
