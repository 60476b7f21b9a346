//! Error types for birdid.

/// Result type alias for birdid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for birdid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Model file does not exist.
    #[error("model file does not exist: {path}")]
    ModelFileNotFound {
        /// Path to the missing model file.
        path: std::path::PathBuf,
    },

    /// Labels file does not exist.
    #[error("labels file does not exist: {path}")]
    LabelsFileNotFound {
        /// Path to the missing labels file.
        path: std::path::PathBuf,
    },

    /// Failed to read labels file.
    #[error("failed to read labels file '{path}'")]
    LabelsRead {
        /// Path to the labels file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to build classifier.
    #[error("failed to build classifier: {reason}")]
    ClassifierBuild {
        /// Description of the build failure.
        reason: String,
    },

    /// Inference failed.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// Uploaded bytes could not be decoded as an image.
    #[error("failed to decode image: {reason}")]
    ImageDecode {
        /// Description of the decode failure.
        reason: String,
    },

    /// Prediction pipeline failed outside of decoding.
    #[error("prediction pipeline failed: {reason}")]
    Pipeline {
        /// Description of the pipeline failure.
        reason: String,
    },

    /// Failed to open the name lookup store.
    #[error("failed to open name store '{path}'")]
    NameStoreOpen {
        /// Path to the store file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// Name lookup query failed.
    #[error("name lookup failed: {reason}")]
    NameLookup {
        /// Description of the lookup failure.
        reason: String,
    },

    /// Server failed to bind or serve.
    #[error("server error: {reason}")]
    Server {
        /// Description of the server failure.
        reason: String,
    },
}
