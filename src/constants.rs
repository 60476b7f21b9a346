//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config files and user-facing messages.
pub const APP_NAME: &str = "birdid";

/// Classifier input geometry.
pub mod input {
    /// Edge length of the square classifier input, in pixels.
    pub const TARGET_SIZE: u32 = 224;

    /// Number of color channels the classifier expects (RGB).
    pub const CHANNELS: usize = 3;

    /// Fill value for padded border pixels (black).
    pub const PAD_FILL: [u8; 3] = [0, 0, 0];
}

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f32 = 1.0;
}

/// Default maximum accepted upload size in bytes (10 MiB).
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Default allowed upload file extensions, lowercase.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Reserved classifier output index meaning "no recognizable bird".
///
/// This is an artifact of the trained label set shipped with the default
/// model asset and can be overridden in configuration.
pub const DEFAULT_BACKGROUND_INDEX: usize = 964;

/// Sentinel common name returned when a scientific name cannot be resolved.
pub const UNKNOWN_BIRD: &str = "Unknown Bird";

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

/// API route prefix.
pub const API_PREFIX: &str = "/api/v1";

/// Species used by the stub classifier and the development name store.
///
/// Pairs of (scientific name, common name). Order is significant: the
/// `/species` endpoint returns the common names in this order when the
/// stub classifier is active.
pub const DEV_BIRDS: &[(&str, &str)] = &[
    ("Cardinalis cardinalis", "Northern Cardinal"),
    ("Cyanocitta cristata", "Blue Jay"),
    ("Turdus migratorius", "American Robin"),
    ("Haemorhous mexicanus", "House Finch"),
    ("Poecile atricapillus", "Black-capped Chickadee"),
];
