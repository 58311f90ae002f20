//! Pipeline configuration

use crate::PipelineError;
use serde::{Deserialize, Serialize};
use signal_sim::Activity;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "imu-pipeline";

/// Environment variable prefix (`IMU_SAMPLE_RATE_HZ`, `IMU_ACTIVITIES`, ...)
pub const ENV_PREFIX: &str = "IMU";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Simulated IMU sample rate (Hz)
    pub sample_rate_hz: f64,

    /// Sliding window length (samples)
    pub window_size: usize,

    /// Feature vectors collected per activity
    pub windows_per_activity: usize,

    /// RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,

    /// Activities to simulate; the label of each is its index
    pub activities: Vec<String>,

    /// Log level filter
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 100.0,
            window_size: 64,
            windows_per_activity: 1000,
            seed: None,
            activities: vec!["sitting".to_string(), "walking".to_string()],
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl PipelineConfig {
    /// Load from an optional config file plus `IMU_*` environment overrides.
    ///
    /// Without an explicit path, `imu-pipeline.{toml,json,yaml}` is used if
    /// present.
    pub fn load(path: Option<&str>) -> Result<Self, PipelineError> {
        let file = match path {
            Some(p) => config::File::with_name(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("activities"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Small, seeded configuration for smoke runs
    pub fn quick() -> Self {
        Self {
            window_size: 50,
            windows_per_activity: 20,
            seed: Some(42),
            ..Default::default()
        }
    }

    /// Check ranges and activity names
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(PipelineError::Invalid(format!(
                "sample_rate_hz must be finite and > 0, got {}",
                self.sample_rate_hz
            )));
        }
        if self.window_size == 0 {
            return Err(PipelineError::Invalid("window_size must be > 0".to_string()));
        }
        if self.activities.is_empty() {
            return Err(PipelineError::Invalid("at least one activity is required".to_string()));
        }
        self.parsed_activities()?;
        Ok(())
    }

    /// Configured activities, in label order
    pub fn parsed_activities(&self) -> Result<Vec<Activity>, PipelineError> {
        self.activities
            .iter()
            .map(|name| name.parse::<Activity>().map_err(PipelineError::from))
            .collect()
    }
}
