//! Configuration file loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(|| Ok(Config::default()), load_config_file)
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigValidation {
        message: format!("failed to serialize config: {e}"),
    })?;

    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path);
        assert!(config.is_ok());
        let config = config.ok().unwrap();
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
environment = "production"

[model]
path = "/srv/models/birds.onnx"
labels = "/srv/models/labels.txt"
background_index = 964

[upload]
max_image_size = 1048576
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.model.background_index, 964);
        assert_eq!(config.upload.max_image_size, 1_048_576);
        // Unspecified sections keep their defaults
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(config.is_err());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("birdid.toml");

        let mut config = Config::default();
        config.environment = Environment::Staging;
        config.server.port = 9000;

        save_config(&config, &path).unwrap();
        let reloaded = load_config_file(&path).unwrap();
        assert_eq!(reloaded.environment, Environment::Staging);
        assert_eq!(reloaded.server.port, 9000);
    }
}
