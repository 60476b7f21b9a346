//! CLI argument definitions.

use crate::config::Environment;
use clap::Parser;
use std::path::PathBuf;

/// Bird species identification REST service.
#[derive(Debug, Parser)]
#[command(name = "birdid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "BIRDID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured runtime environment.
    #[arg(short, long, env = "BIRDID_ENVIRONMENT")]
    pub environment: Option<Environment>,

    /// Override the configured bind address.
    #[arg(long, env = "BIRDID_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Override the configured port.
    #[arg(short, long, env = "BIRDID_PORT")]
    pub port: Option<u16>,

    /// Override the configured model path.
    #[arg(long, env = "BIRDID_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log warnings and errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["birdid"]);
        assert!(cli.config.is_none());
        assert!(cli.environment.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_environment_override() {
        let cli = Cli::parse_from(["birdid", "-e", "production", "-p", "9000"]);
        assert_eq!(cli.environment, Some(Environment::Production));
        assert_eq!(cli.port, Some(9000));
    }
}
