//! Orchestration of a single identification request.

use crate::error::{Error, Result};
use crate::inference::{BirdClassifier, RawCategory};
use crate::names::NameResolver;
use crate::vision::preprocess;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A single ranked species prediction.
///
/// Immutable once constructed; request-scoped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Prediction {
    /// Common name of the species.
    pub species: String,
    /// Confidence score in [0, 1], at least the requested threshold.
    pub confidence: f32,
    /// Scientific (Latin) name of the species.
    pub scientific_name: String,
}

/// Runs preprocessing, inference and ranking for one image.
#[derive(Debug, Clone)]
pub struct PredictionPipeline {
    classifier: Arc<BirdClassifier>,
    resolver: NameResolver,
    background_index: usize,
}

impl PredictionPipeline {
    /// Create a pipeline over an initialized classifier and name resolver.
    pub fn new(
        classifier: Arc<BirdClassifier>,
        resolver: NameResolver,
        background_index: usize,
    ) -> Self {
        Self {
            classifier,
            resolver,
            background_index,
        }
    }

    /// Produce ranked predictions for encoded image bytes.
    ///
    /// Returns at most `max_results` predictions, descending by
    /// confidence, every confidence at least `threshold`. An empty result
    /// is a valid success. Decode failures propagate unchanged; any other
    /// inference-stage failure is wrapped with a readable cause.
    pub fn run(&self, raw: &[u8], threshold: f32, max_results: usize) -> Result<Vec<Prediction>> {
        let buffer = preprocess(raw)?;

        let categories = self
            .classifier
            .infer(&buffer)
            .map_err(|e| Error::Pipeline {
                reason: e.to_string(),
            })?;
        debug!("Classifier returned {} categories", categories.len());

        let predictions = rank(
            categories,
            threshold,
            max_results,
            self.background_index,
            &self.resolver,
        );
        debug!(
            "{} predictions above threshold {threshold}",
            predictions.len()
        );

        Ok(predictions)
    }
}

/// Filter, resolve, sort and truncate raw classifier output.
///
/// The background index is dropped unconditionally, whatever its score.
/// Ties on confidence break lexicographically on the common name so the
/// ordering is deterministic.
fn rank(
    categories: Vec<RawCategory>,
    threshold: f32,
    max_results: usize,
    background_index: usize,
    resolver: &NameResolver,
) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = categories
        .into_iter()
        .filter(|c| c.score >= threshold && c.index != background_index)
        .map(|c| Prediction {
            species: resolver.resolve(&c.label),
            confidence: c.score,
            scientific_name: c.label,
        })
        .collect();

    predictions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.species.cmp(&b.species))
    });
    predictions.truncate(max_results);
    predictions
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::names::MemoryNameStore;

    fn resolver() -> NameResolver {
        NameResolver::new(Arc::new(MemoryNameStore::from_pairs(
            crate::constants::DEV_BIRDS,
        )))
    }

    fn category(index: usize, label: &str, score: f32) -> RawCategory {
        RawCategory {
            index,
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_rank_filters_below_threshold() {
        let categories = vec![
            category(0, "Cardinalis cardinalis", 0.9),
            category(1, "Cyanocitta cristata", 0.4),
            category(2, "Turdus migratorius", 0.6),
        ];

        let predictions = rank(categories, 0.5, 10, 964, &resolver());
        assert_eq!(predictions.len(), 2);
        assert!(predictions.iter().all(|p| p.confidence >= 0.5));
    }

    #[test]
    fn test_rank_drops_background_regardless_of_score() {
        let categories = vec![
            category(964, "background", 0.99),
            category(0, "Cardinalis cardinalis", 0.7),
        ];

        let predictions = rank(categories, 0.0, 10, 964, &resolver());
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].scientific_name, "Cardinalis cardinalis");
    }

    #[test]
    fn test_rank_sorted_descending() {
        let categories = vec![
            category(0, "Cardinalis cardinalis", 0.3),
            category(1, "Cyanocitta cristata", 0.9),
            category(2, "Turdus migratorius", 0.6),
        ];

        let predictions = rank(categories, 0.0, 10, 964, &resolver());
        let confidences: Vec<f32> = predictions.iter().map(|p| p.confidence).collect();
        assert_eq!(confidences, vec![0.9, 0.6, 0.3]);
    }

    #[test]
    fn test_rank_tie_breaks_on_species_name() {
        let categories = vec![
            category(2, "Turdus migratorius", 0.5),
            category(1, "Cyanocitta cristata", 0.5),
        ];

        let predictions = rank(categories, 0.0, 10, 964, &resolver());
        // Equal confidence: "American Robin" sorts before "Blue Jay"
        assert_eq!(predictions[0].species, "American Robin");
        assert_eq!(predictions[1].species, "Blue Jay");
    }

    #[test]
    fn test_rank_truncates_to_max_results() {
        let categories = vec![
            category(0, "Cardinalis cardinalis", 0.9),
            category(1, "Cyanocitta cristata", 0.8),
            category(2, "Turdus migratorius", 0.7),
        ];

        let predictions = rank(categories, 0.0, 2, 964, &resolver());
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].confidence, 0.9);
        assert_eq!(predictions[1].confidence, 0.8);
    }

    #[test]
    fn test_rank_unknown_species_resolves_to_sentinel() {
        let categories = vec![category(7, "Corvus imaginarius", 0.8)];

        let predictions = rank(categories, 0.0, 10, 964, &resolver());
        assert_eq!(predictions[0].species, "Unknown Bird");
        assert_eq!(predictions[0].scientific_name, "Corvus imaginarius");
    }

    #[test]
    fn test_rank_empty_is_valid() {
        let predictions = rank(Vec::new(), 0.5, 10, 964, &resolver());
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_run_propagates_decode_error_unchanged() {
        let pipeline = PredictionPipeline::new(
            Arc::new(BirdClassifier::Stub(crate::inference::StubClassifier::new())),
            resolver(),
            964,
        );

        let result = pipeline.run(b"plain text, not an image", 0.5, 3);
        assert!(matches!(result, Err(Error::ImageDecode { .. })));
    }

    #[test]
    fn test_run_with_stub_honors_threshold_and_cardinality() {
        use image::{ImageFormat, Rgb, RgbImage};
        use std::io::Cursor;

        let img = RgbImage::from_pixel(224, 224, Rgb([0, 128, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let pipeline = PredictionPipeline::new(
            Arc::new(BirdClassifier::Stub(crate::inference::StubClassifier::new())),
            resolver(),
            964,
        );

        let predictions = pipeline.run(bytes.get_ref(), 0.5, 3).unwrap();
        assert!(predictions.len() <= 3);
        assert!(predictions.iter().all(|p| p.confidence >= 0.5));
        for window in predictions.windows(2) {
            assert!(window[0].confidence >= window[1].confidence);
        }
    }
}
