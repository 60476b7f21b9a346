//! Development fallback classifier.

use crate::constants::DEV_BIRDS;
use crate::inference::RawCategory;
use rand::Rng;

/// Stub classifier used when the model asset is unavailable.
///
/// Returns the fixed development species with randomized scores. The
/// pipeline applies threshold filtering and truncation on top, same as
/// for the real classifier.
#[derive(Debug, Default)]
pub struct StubClassifier;

impl StubClassifier {
    /// Create the stub classifier.
    pub fn new() -> Self {
        Self
    }

    /// Produce one randomized score per development species.
    pub fn infer(&self) -> Vec<RawCategory> {
        let mut rng = rand::rng();
        DEV_BIRDS
            .iter()
            .enumerate()
            .map(|(index, (scientific, _))| RawCategory {
                index,
                label: (*scientific).to_string(),
                score: rng.random_range(0.0..=1.0),
            })
            .collect()
    }

    /// The fixed development species list, common names in defined order.
    pub fn species(&self) -> Vec<String> {
        DEV_BIRDS
            .iter()
            .map(|(_, common)| (*common).to_string())
            .collect()
    }
}
