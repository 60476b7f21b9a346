//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_upload(config)?;
    validate_model(config)?;
    Ok(())
}

/// Validate upload settings.
fn validate_upload(config: &Config) -> Result<()> {
    let upload = &config.upload;

    if upload.max_image_size == 0 {
        return Err(Error::ConfigValidation {
            message: "max_image_size must be at least 1 byte".to_string(),
        });
    }

    if upload.allowed_extensions.is_empty() {
        return Err(Error::ConfigValidation {
            message: "allowed_extensions must not be empty".to_string(),
        });
    }

    if let Some(bad) = upload
        .allowed_extensions
        .iter()
        .find(|e| e.is_empty() || e.contains('.'))
    {
        return Err(Error::ConfigValidation {
            message: format!("invalid extension '{bad}' (must be non-empty, without dot)"),
        });
    }

    Ok(())
}

/// Validate model settings.
///
/// File existence is not checked here: the development environment is
/// allowed to run without the model asset (stub classifier), and the
/// classifier constructor reports missing files itself.
fn validate_model(config: &Config) -> Result<()> {
    if config.model.path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "model path must not be empty".to_string(),
        });
    }

    if config.model.labels.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "labels path must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_max_image_size() {
        let mut config = Config::default();
        config.upload.max_image_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_extensions() {
        let mut config = Config::default();
        config.upload.allowed_extensions.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_dotted_extension() {
        let mut config = Config::default();
        config.upload.allowed_extensions = vec![".jpg".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_model_path() {
        let mut config = Config::default();
        config.model.path = std::path::PathBuf::new();
        let result = validate_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            Error::ConfigValidation { .. }
        ));
    }
}
