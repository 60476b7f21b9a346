//! ONNX classifier wrapper around an ort session.

use crate::config::ModelConfig;
use crate::constants::input::CHANNELS;
use crate::error::{Error, Result};
use crate::inference::{load_labels, RawCategory};
use crate::vision::PixelBuffer;
use ndarray::Array4;
use ort::session::Session;
use ort::value::TensorRef;
use std::sync::Mutex;
use tracing::debug;

/// Image classifier backed by an ONNX model asset.
///
/// The session is built once at startup from a fixed model path. ort
/// sessions need exclusive access during a forward pass, so the session
/// sits behind a mutex held only for the duration of `run`; no other
/// state is shared across requests.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    labels: Vec<String>,
}

impl OnnxClassifier {
    /// Build a classifier from model configuration.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        if !config.path.exists() {
            return Err(Error::ModelFileNotFound {
                path: config.path.clone(),
            });
        }
        if !config.labels.exists() {
            return Err(Error::LabelsFileNotFound {
                path: config.labels.clone(),
            });
        }

        let labels = load_labels(&config.labels)?;

        let session = Session::builder()
            .and_then(|mut b| b.commit_from_file(&config.path))
            .map_err(|e| Error::ClassifierBuild {
                reason: e.to_string(),
            })?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .ok_or_else(|| Error::ClassifierBuild {
                reason: "model has no inputs".to_string(),
            })?;
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| Error::ClassifierBuild {
                reason: "model has no outputs".to_string(),
            })?;

        debug!(
            "Model loaded: input '{}', output '{}', {} labels",
            input_name,
            output_name,
            labels.len()
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            labels,
        })
    }

    /// The scientific names of the label set, indexed by output position.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels in the label set.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Run a forward pass over a preprocessed buffer.
    ///
    /// Deterministic for identical input buffers. Returns one category per
    /// model output, scores clamped to [0, 1]; ordering is left to the
    /// caller.
    pub fn infer(&self, buffer: &PixelBuffer) -> Result<Vec<RawCategory>> {
        let size = buffer.size() as usize;
        let pixels: Vec<f32> = buffer
            .as_bytes()
            .iter()
            .map(|&b| f32::from(b) / 255.0)
            .collect();

        let input = Array4::from_shape_vec((1, size, size, CHANNELS), pixels).map_err(|e| {
            Error::Inference {
                reason: format!("input tensor shape mismatch: {e}"),
            }
        })?;

        let tensor = TensorRef::from_array_view(&input).map_err(|e| Error::Inference {
            reason: format!("input tensor conversion failed: {e}"),
        })?;

        let mut session = self.session.lock().map_err(|_| Error::Inference {
            reason: "classifier session lock poisoned".to_string(),
        })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => tensor])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let (_, scores) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: format!("failed to extract output tensor: {e}"),
            })?;

        let categories = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RawCategory {
                index,
                label: self
                    .labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("class {index}")),
                score: score.clamp(0.0, 1.0),
            })
            .collect();

        Ok(categories)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_config_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let labels_path = dir.path().join("labels.txt");
        let mut labels = std::fs::File::create(&labels_path).unwrap();
        writeln!(labels, "Cardinalis cardinalis").unwrap();

        let config = ModelConfig {
            path: dir.path().join("missing.onnx"),
            labels: labels_path,
            background_index: 964,
        };

        let result = OnnxClassifier::from_config(&config);
        assert!(matches!(result, Err(Error::ModelFileNotFound { .. })));
    }

    #[test]
    fn test_from_config_missing_labels_file() {
        let dir = tempfile::tempdir().unwrap();
        let model_path = dir.path().join("model.onnx");
        std::fs::File::create(&model_path).unwrap();

        let config = ModelConfig {
            path: model_path,
            labels: dir.path().join("missing.txt"),
            background_index: 964,
        };

        let result = OnnxClassifier::from_config(&config);
        assert!(matches!(result, Err(Error::LabelsFileNotFound { .. })));
    }
}
