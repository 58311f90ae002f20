//! Labeled feature-vector generation

use crate::{PipelineConfig, PipelineError};
use feature_engine::{FeatureVector, WindowedFeatureExtractor};
use serde::{Deserialize, Serialize};
use signal_sim::{Activity, SignalGenerator};
use tracing::{debug, info};

/// One training row: features followed by the activity label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledFeatures {
    pub features: FeatureVector,
    pub label: u32,
}

/// Per-activity averages over generated rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub activity: Activity,
    pub label: u32,
    pub rows: usize,
    pub mean_vertical_variance: f64,
    pub mean_dominant_frequency: f64,
    pub mean_energy: f64,
}

fn step(
    sim: &mut SignalGenerator,
    extractor: &mut WindowedFeatureExtractor,
) -> Result<(), PipelineError> {
    sim.update();
    extractor.add_sample(sim.get_acceleration()?, sim.get_gyroscope()?);
    Ok(())
}

/// Generate `windows_per_activity` labeled rows for every configured activity.
///
/// Before collecting rows for an activity the window is refilled with
/// `window_size` fresh samples, so no row mixes two activities.
pub fn generate_dataset(config: &PipelineConfig) -> Result<Vec<LabeledFeatures>, PipelineError> {
    config.validate()?;
    let activities = config.parsed_activities()?;
    let first = activities[0].name();

    let mut sim = match config.seed {
        Some(seed) => SignalGenerator::with_seed(config.sample_rate_hz, first, seed)?,
        None => SignalGenerator::new(config.sample_rate_hz, first)?,
    };
    let mut extractor = WindowedFeatureExtractor::new(config.window_size, config.sample_rate_hz)?;

    info!(
        "Generating {} rows per activity ({} activities, window={}, {} Hz)",
        config.windows_per_activity,
        activities.len(),
        config.window_size,
        config.sample_rate_hz
    );

    let mut rows = Vec::with_capacity(activities.len() * config.windows_per_activity);
    for (label, &activity) in activities.iter().enumerate() {
        sim.set_activity(activity);

        for _ in 0..config.window_size {
            step(&mut sim, &mut extractor)?;
        }

        for _ in 0..config.windows_per_activity {
            step(&mut sim, &mut extractor)?;
            rows.push(LabeledFeatures {
                features: extractor.compute_features()?,
                label: label as u32,
            });
        }

        debug!(
            "{}: {} rows, simulated t={:.2}s",
            activity,
            config.windows_per_activity,
            sim.get_current_time()
        );
    }

    Ok(rows)
}

/// Average key features per label
pub fn summarize(
    rows: &[LabeledFeatures],
    config: &PipelineConfig,
) -> Result<Vec<ActivitySummary>, PipelineError> {
    let activities = config.parsed_activities()?;

    Ok(activities
        .into_iter()
        .enumerate()
        .filter_map(|(label, activity)| {
            let label = label as u32;
            let matching: Vec<&FeatureVector> = rows
                .iter()
                .filter(|r| r.label == label)
                .map(|r| &r.features)
                .collect();
            if matching.is_empty() {
                return None;
            }

            let n = matching.len() as f64;
            let avg = |f: fn(&FeatureVector) -> f64| matching.iter().map(|&v| f(v)).sum::<f64>() / n;

            Some(ActivitySummary {
                activity,
                label,
                rows: matching.len(),
                mean_vertical_variance: avg(|v| v.accel_variance[ring_buffer::VERTICAL_AXIS]),
                mean_dominant_frequency: avg(|v| v.dominant_frequency),
                mean_energy: avg(|v| v.energy),
            })
        })
        .collect())
}
