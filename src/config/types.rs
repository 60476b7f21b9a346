//! Configuration type definitions.

use crate::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_BACKGROUND_INDEX, DEFAULT_BIND_ADDRESS,
    DEFAULT_MAX_IMAGE_SIZE, DEFAULT_PORT,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Runtime environment.
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Classifier model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Upload validation settings.
    #[serde(default)]
    pub upload: UploadConfig,

    /// Name lookup store settings.
    #[serde(default)]
    pub names: NamesConfig,
}

/// Runtime environment the service operates in.
///
/// Development tolerates a missing model asset by substituting the stub
/// classifier; staging and production treat a load failure as fatal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; missing model falls back to the stub classifier.
    #[default]
    Development,
    /// Pre-production; model asset is required.
    Staging,
    /// Production; model asset is required.
    Production,
}

impl Environment {
    /// Whether a classifier initialization failure is tolerated.
    pub fn tolerates_missing_model(self) -> bool {
        self == Self::Development
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!(
                "environment must be one of development, staging, production; got '{other}'"
            )),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_address: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Configuration for the classifier model asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub path: PathBuf,

    /// Path to the labels file (one scientific name per line).
    pub labels: PathBuf,

    /// Reserved output index meaning "no recognizable bird".
    pub background_index: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/model.onnx"),
            labels: PathBuf::from("models/labels.txt"),
            background_index: DEFAULT_BACKGROUND_INDEX,
        }
    }
}

/// Upload validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum accepted image size in bytes.
    pub max_image_size: usize,

    /// Allowed file extensions, matched case-insensitively.
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl UploadConfig {
    /// Check a filename extension against the allowed set, case-insensitively.
    pub fn extension_allowed(&self, filename: &str) -> bool {
        let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
        !ext.is_empty()
            && filename.contains('.')
            && self.allowed_extensions.iter().any(|a| a.to_lowercase() == ext)
    }

    /// Comma-separated allowed extensions for error messages.
    pub fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions.join(", ")
    }
}

/// Name lookup store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// Path to the SQLite database mapping scientific to common names.
    pub database: PathBuf,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("data/birdnames.db"),
        }
    }
}
