//! Per-feature standardization
//!
//! The fitted mean/std-dev bundle travels with a trained model so that live
//! feature vectors are scaled exactly as the training set was.

use crate::features::{FeatureVector, FEATURE_DIMENSION};
use crate::statistics::StatisticalFeatures;
use crate::FeatureError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Columns whose spread is at or below this are scaled by 1.0
const MIN_STD_DEV: f64 = 1e-12;

/// Z-score scaler fitted on a set of feature vectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    /// Per-feature mean
    pub mean: [f64; FEATURE_DIMENSION],
    /// Per-feature population std-dev; zero-spread columns hold 1.0
    pub std_dev: [f64; FEATURE_DIMENSION],
}

impl FeatureScaler {
    /// Fit per-feature mean and standard deviation
    pub fn fit(rows: &[FeatureVector]) -> Result<Self, FeatureError> {
        if rows.is_empty() {
            return Err(FeatureError::EmptyDataset);
        }

        let mut mean = [0.0; FEATURE_DIMENSION];
        let mut std_dev = [1.0; FEATURE_DIMENSION];

        for column in 0..FEATURE_DIMENSION {
            let values: Vec<f64> = rows.iter().map(|r| r.values()[column]).collect();
            let stats = StatisticalFeatures::compute(&values);
            mean[column] = stats.mean;
            if stats.std_dev.is_finite() && stats.std_dev > MIN_STD_DEV {
                std_dev[column] = stats.std_dev;
            }
        }

        debug!("Fitted scaler on {} feature vectors", rows.len());
        Ok(Self { mean, std_dev })
    }

    /// Standardize one feature vector
    pub fn transform(&self, features: &FeatureVector) -> [f64; FEATURE_DIMENSION] {
        let values = features.values();
        let mut scaled = [0.0; FEATURE_DIMENSION];
        for i in 0..FEATURE_DIMENSION {
            scaled[i] = (values[i] - self.mean[i]) / self.std_dev[i];
        }
        scaled
    }

    /// Encode the scaler bundle
    pub fn to_bytes(&self) -> Result<Vec<u8>, FeatureError> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Decode a scaler bundle
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FeatureError> {
        Ok(postcard::from_bytes(bytes)?)
    }
}
