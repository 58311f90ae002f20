//! IMU Activity Pipeline - Main Entry Point

use anyhow::Context;
use feature_engine::{FeatureScaler, FeatureVector, FEATURE_NAMES};
use pipeline::{generate_dataset, init_logging, summarize, PipelineConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1);
    let config = PipelineConfig::load(path.as_deref()).context("failed to load configuration")?;
    init_logging(&config.log_level, config.log_format);

    info!("=== IMU Activity Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Feature schema: {}", FEATURE_NAMES.join(", "));

    let rows = generate_dataset(&config)?;

    for s in summarize(&rows, &config)? {
        info!(
            "[{}] {}: rows={} var_z={:.5} dom_freq={:.2} Hz energy={:.5}",
            s.label, s.activity, s.rows, s.mean_vertical_variance, s.mean_dominant_frequency, s.mean_energy
        );
    }

    let features: Vec<FeatureVector> = rows.iter().map(|r| r.features).collect();
    let scaler = FeatureScaler::fit(&features)?;
    let bundle = scaler.to_bytes()?;
    info!("Scaler fitted on {} rows ({} byte bundle)", features.len(), bundle.len());

    Ok(())
}
