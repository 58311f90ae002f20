//! Synthetic IMU Signal Generation
//!
//! Produces 6-axis wearable IMU samples characteristic of a physical activity:
//! - Gravity bias on the vertical accelerometer axis
//! - Deterministic per-activity oscillations (gait cadence, leg swing)
//! - Per-axis Gaussian sensor noise from an owned, seedable RNG

pub mod activity;
pub mod generator;
pub mod noise;

pub use activity::{Activity, ActivityProfile, Channel, Waveform, GRAVITY};
pub use generator::SignalGenerator;
pub use noise::NoiseGenerator;

use thiserror::Error;

/// Simulation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Unknown activity: {0:?}")]
    UnknownActivity(String),

    #[error("No sample generated yet; call update() first")]
    NoDataYet,

    #[error("Invalid sample rate: {0} Hz (must be finite and > 0)")]
    InvalidSampleRate(f64),
}
