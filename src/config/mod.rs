//! Configuration loading and validation.

mod file;
mod types;
mod validate;

pub use file::{load_config, load_config_file, save_config};
pub use types::{Config, Environment, ModelConfig, NamesConfig, ServerConfig, UploadConfig};
pub use validate::validate_config;
