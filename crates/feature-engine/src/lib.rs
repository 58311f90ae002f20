//! Feature Engineering Engine
//!
//! Maintains a sliding window of IMU samples and extracts a fixed-order
//! statistical and frequency domain feature vector for activity classification.

mod features;
mod fft;
mod scaler;
mod statistics;

pub use features::{
    FeatureVector, WindowedFeatureExtractor, FEATURE_DIMENSION, FEATURE_NAMES,
};
pub use fft::{dominant_frequency, DftAnalyzer, FftAnalyzer, SpectralEstimator};
pub use ring_buffer::WindowState;
pub use scaler::FeatureScaler;
pub use statistics::StatisticalFeatures;

use thiserror::Error;

/// Feature extraction error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Window not yet fully populated
    #[error("Insufficient data: window holds {have} of {need} samples")]
    InsufficientData { have: usize, need: usize },

    /// Invalid construction parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scaler fitted on zero feature vectors
    #[error("Cannot fit scaler on an empty dataset")]
    EmptyDataset,

    /// Scaler bundle (de)serialization failed
    #[error("Scaler encoding failed: {0}")]
    Encoding(String),
}

impl From<postcard::Error> for FeatureError {
    fn from(err: postcard::Error) -> Self {
        FeatureError::Encoding(err.to_string())
    }
}
