//! Prediction pipeline: preprocess, classify, rank.

mod predictor;

pub use predictor::{Prediction, PredictionPipeline};
