//! Feature Vector Assembly

use crate::fft::{FftAnalyzer, SpectralEstimator};
use crate::statistics::StatisticalFeatures;
use crate::FeatureError;
use ring_buffer::{ImuSample, SlidingWindow, Vec3, WindowState, VERTICAL_AXIS};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 8;

/// Column names, in vector order. This order is part of the public contract.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "Mean_AccX",
    "Mean_AccY",
    "Mean_AccZ",
    "Var_AccX",
    "Var_AccY",
    "Var_AccZ",
    "Dom_Freq",
    "Energy",
];

/// Feature vector for activity classification
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Per-axis acceleration mean (m/s²)
    pub accel_mean: Vec3,
    /// Per-axis acceleration population variance
    pub accel_variance: Vec3,
    /// Dominant frequency of vertical acceleration (Hz)
    pub dominant_frequency: f64,
    /// Mean squared magnitude of mean-subtracted acceleration
    pub energy: f64,
}

impl FeatureVector {
    /// Raw feature values in [`FEATURE_NAMES`] order
    pub fn values(&self) -> [f64; FEATURE_DIMENSION] {
        let [mx, my, mz] = self.accel_mean;
        let [vx, vy, vz] = self.accel_variance;
        [mx, my, mz, vx, vy, vz, self.dominant_frequency, self.energy]
    }

    /// Look up a feature by column name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values()[i])
    }

    /// Check that every entry is a finite number
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

/// Sliding-window feature extractor over pushed IMU samples
pub struct WindowedFeatureExtractor<S = FftAnalyzer> {
    /// Most recent samples
    window: SlidingWindow<ImuSample>,
    /// Sample rate (Hz), used for bin-to-Hz conversion
    sample_rate_hz: f64,
    /// Spectrum strategy
    estimator: S,
}

fn validate(window_size: usize, sample_rate_hz: f64) -> Result<(), FeatureError> {
    if window_size == 0 {
        return Err(FeatureError::InvalidConfig(
            "window size must be greater than 0".to_string(),
        ));
    }
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(FeatureError::InvalidConfig(format!(
            "sample rate must be finite and > 0, got {}",
            sample_rate_hz
        )));
    }
    Ok(())
}

impl WindowedFeatureExtractor<FftAnalyzer> {
    /// Create an extractor using the FFT spectrum estimator
    pub fn new(window_size: usize, sample_rate_hz: f64) -> Result<Self, FeatureError> {
        validate(window_size, sample_rate_hz)?;
        Self::with_estimator(window_size, sample_rate_hz, FftAnalyzer::new(window_size))
    }
}

impl<S: SpectralEstimator> WindowedFeatureExtractor<S> {
    /// Create an extractor with a custom spectrum estimator
    pub fn with_estimator(
        window_size: usize,
        sample_rate_hz: f64,
        estimator: S,
    ) -> Result<Self, FeatureError> {
        validate(window_size, sample_rate_hz)?;
        let window = SlidingWindow::new(window_size).ok_or_else(|| {
            FeatureError::InvalidConfig("window size must be greater than 0".to_string())
        })?;

        Ok(Self {
            window,
            sample_rate_hz,
            estimator,
        })
    }

    /// Push one reading into the window, evicting the oldest when full
    pub fn add_sample(&mut self, accel: Vec3, gyro: Vec3) {
        let timestamp = self.window.total_pushed() as f64 / self.sample_rate_hz;
        self.window.push(ImuSample::new(timestamp, accel, gyro));
    }

    /// Compute features over the current window.
    ///
    /// Fails with [`FeatureError::InsufficientData`] until the window holds
    /// exactly `window_size` samples.
    pub fn compute_features(&self) -> Result<FeatureVector, FeatureError> {
        if !self.window.is_full() {
            return Err(FeatureError::InsufficientData {
                have: self.window.len(),
                need: self.window.capacity(),
            });
        }

        let axes: [Vec<f64>; 3] = [0, 1, 2]
            .map(|axis| StatisticalFeatures::extract_accel_axis(&self.window, axis));
        let stats = [
            StatisticalFeatures::compute(&axes[0]),
            StatisticalFeatures::compute(&axes[1]),
            StatisticalFeatures::compute(&axes[2]),
        ];

        let dominant_frequency = self
            .estimator
            .dominant_frequency(&axes[VERTICAL_AXIS], self.sample_rate_hz);

        let n = self.window.len() as f64;
        let energy = self
            .window
            .iter()
            .map(|s| {
                (0..3)
                    .map(|axis| {
                        let d = s.accel[axis] - stats[axis].mean;
                        d * d
                    })
                    .sum::<f64>()
            })
            .sum::<f64>()
            / n;

        let features = FeatureVector {
            accel_mean: [0, 1, 2]
                .map(|axis| finite_or_zero(FEATURE_NAMES[axis], stats[axis].mean)),
            accel_variance: [0, 1, 2]
                .map(|axis| finite_or_zero(FEATURE_NAMES[3 + axis], stats[axis].variance)),
            dominant_frequency: finite_or_zero(FEATURE_NAMES[6], dominant_frequency),
            energy: finite_or_zero(FEATURE_NAMES[7], energy),
        };

        debug!(
            "Features over {} samples: var_z={:.5}, dom_freq={:.2} Hz, energy={:.5}",
            self.window.len(),
            features.accel_variance[VERTICAL_AXIS],
            features.dominant_frequency,
            features.energy
        );

        Ok(features)
    }

    /// Current fill state
    pub fn window_state(&self) -> WindowState {
        self.window.state()
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Window capacity
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Sample rate (Hz)
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Samples in the window, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &ImuSample> + '_ {
        self.window.iter()
    }
}

fn finite_or_zero(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("Non-finite {} ({}) replaced with 0", name, value);
        0.0
    }
}
