//! Statistical Features Computation

use ring_buffer::ImuSample;

/// Statistical features for a signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticalFeatures {
    /// Mean value
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Standard deviation
    pub std_dev: f64,
}

impl StatisticalFeatures {
    /// Compute statistical features from a slice of values.
    ///
    /// Two passes: the mean first, then the mean squared deviation from it.
    /// Accumulating deviations avoids the cancellation of `E[x²] - E[x]²`
    /// on signals with a large offset such as gravity.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        // Summing offsets from the first value keeps a constant signal's
        // mean exact, so its variance is exactly zero.
        let pivot = values[0];
        let mean = pivot + values.iter().map(|&v| v - pivot).sum::<f64>() / n;

        let variance = values
            .iter()
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Extract one accelerometer axis from samples
    pub fn extract_accel_axis<'a, I>(samples: I, axis: usize) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a ImuSample>,
    {
        samples.into_iter().map(|s| s.accel[axis]).collect()
    }

    /// Extract one gyroscope axis from samples
    pub fn extract_gyro_axis<'a, I>(samples: I, axis: usize) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a ImuSample>,
    {
        samples.into_iter().map(|s| s.gyro[axis]).collect()
    }
}
