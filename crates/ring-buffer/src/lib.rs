//! Sliding Window Ring Buffer
//!
//! Provides a fixed-capacity FIFO window for IMU sample storage.

mod buffer;

pub use buffer::{Iter, SlidingWindow, WindowState};

use serde::{Deserialize, Serialize};

/// Three-axis vector (x, y, z)
pub type Vec3 = [f64; 3];

/// Vertical axis index (gravity acts along Z)
pub const VERTICAL_AXIS: usize = 2;

/// One synchronized 6-axis IMU reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImuSample {
    /// Seconds since the start of the stream
    pub timestamp: f64,
    /// Linear acceleration (m/s²)
    pub accel: Vec3,
    /// Angular velocity (deg/s)
    pub gyro: Vec3,
}

impl ImuSample {
    /// Create a new sample
    pub fn new(timestamp: f64, accel: Vec3, gyro: Vec3) -> Self {
        Self {
            timestamp,
            accel,
            gyro,
        }
    }

    /// Magnitude of the acceleration vector
    pub fn accel_magnitude(&self) -> f64 {
        self.accel.iter().map(|a| a * a).sum::<f64>().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_magnitude() {
        let sample = ImuSample::new(0.0, [3.0, 4.0, 0.0], [0.0; 3]);
        assert!((sample.accel_magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_postcard_roundtrip() {
        let sample = ImuSample::new(0.25, [0.1, -0.2, 9.81], [1.0, 2.0, 3.0]);
        let bytes = postcard::to_allocvec(&sample).unwrap();
        let decoded: ImuSample = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(sample, decoded);
    }
}
