//! Birdid - bird species identification REST service.
//!
//! Accepts uploaded images over HTTP and returns ranked bird-species
//! predictions from an offline-trained ONNX classifier.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod names;
pub mod pipeline;
pub mod server;
pub mod vision;

use clap::Parser;
use cli::Cli;
use config::{load_config, validate_config, Config};
use constants::DEV_BIRDS;
use inference::BirdClassifier;
use names::{MemoryNameStore, NameResolver, NameStore, SqliteNameStore};
use server::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the birdid server.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    validate_config(&config)?;

    info!(
        "Starting {} in {} mode",
        constants::APP_NAME,
        config.environment
    );

    // Classifier selection happens once here; a load failure outside
    // development aborts startup.
    let classifier = Arc::new(BirdClassifier::initialize(&config)?);
    let resolver = NameResolver::new(build_name_store(&config));

    let state = AppState::new(Arc::new(config), classifier, resolver);
    server::serve(state).await
}

/// Fold CLI/env overrides into the loaded configuration.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(environment) = cli.environment {
        config.environment = environment;
    }
    if let Some(ref bind_address) = cli.bind_address {
        config.server.bind_address.clone_from(bind_address);
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref model_path) = cli.model_path {
        config.model.path.clone_from(model_path);
    }
}

/// Pick the name store backing.
///
/// Development without the lookup database runs on the in-memory dev
/// species table so the service stays usable end to end; everything else
/// goes through SQLite (lookups fail open either way).
fn build_name_store(config: &Config) -> Arc<dyn NameStore> {
    let db = &config.names.database;
    if config.environment.tolerates_missing_model() && !db.exists() {
        warn!(
            "Name database '{}' not found, using development species table",
            db.display()
        );
        Arc::new(MemoryNameStore::from_pairs(DEV_BIRDS))
    } else {
        Arc::new(SqliteNameStore::new(db.clone()))
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    // ORT logging is suppressed by default; use -v for its warnings.
    let filter_str = if quiet {
        "warn,ort=off".to_string()
    } else {
        match verbose {
            0 => "info,ort=off".to_string(),
            1 => "debug,ort=warn".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}
