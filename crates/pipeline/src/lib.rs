//! IMU Activity Pipeline
//!
//! Wires the simulated IMU into the windowed feature extractor and produces
//! labeled feature vectors for classifier training.

pub mod config;
pub mod dataset;

pub use self::config::{LogFormat, PipelineConfig};
pub use self::dataset::{generate_dataset, summarize, ActivitySummary, LabeledFeatures};

use feature_engine::FeatureError;
use signal_sim::SimError;
use std::str::FromStr;
use thiserror::Error;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Pipeline error types
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// Initialize logging
pub fn init_logging(level: &str, format: LogFormat) {
    let max_level = Level::from_str(level).unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(true);

    let installed = match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    if installed.is_err() {
        warn!("Tracing subscriber already installed");
    }
}
