//! Frequency Domain Analysis

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Spectral peaks at or below this magnitude are treated as a flat signal
const MIN_PEAK_MAGNITUDE: f64 = 1e-9;

/// Strategy for estimating the magnitude spectrum of a real signal
pub trait SpectralEstimator {
    /// Magnitudes of DFT bins `0..=n/2` for a signal of length `n`
    fn magnitude_spectrum(&self, signal: &[f64]) -> Vec<f64>;

    /// Dominant frequency (Hz) of the mean-subtracted signal
    fn dominant_frequency(&self, signal: &[f64], sample_rate: f64) -> f64 {
        if signal.len() < 2 {
            return 0.0;
        }
        let mean = signal.iter().sum::<f64>() / signal.len() as f64;
        let centered: Vec<f64> = signal.iter().map(|v| v - mean).collect();
        let magnitudes = self.magnitude_spectrum(&centered);
        dominant_frequency(&magnitudes, signal.len(), sample_rate)
    }
}

/// Frequency of the strongest non-DC bin.
///
/// `magnitudes` holds bins `0..=len/2` of a length-`len` transform. Ties go to
/// the lowest bin. A spectrum with no bin above the flat-signal threshold
/// yields `0.0`.
pub fn dominant_frequency(magnitudes: &[f64], len: usize, sample_rate: f64) -> f64 {
    if len == 0 {
        return 0.0;
    }

    let mut max_magnitude = MIN_PEAK_MAGNITUDE;
    let mut dominant_bin = None;

    for (bin, &magnitude) in magnitudes.iter().enumerate().skip(1) {
        if magnitude.is_finite() && magnitude > max_magnitude {
            max_magnitude = magnitude;
            dominant_bin = Some(bin);
        }
    }

    match dominant_bin {
        Some(bin) => bin as f64 * sample_rate / len as f64,
        None => 0.0,
    }
}

/// FFT-based spectrum estimator, planned once for a fixed window length
pub struct FftAnalyzer {
    /// Planned forward transform
    fft: Arc<dyn Fft<f64>>,
    /// Length the plan was built for
    len: usize,
}

impl FftAnalyzer {
    /// Create a new FFT analyzer for signals of length `len`
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(len),
            len,
        }
    }

    /// Planned transform length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the plan is for empty signals
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl SpectralEstimator for FftAnalyzer {
    fn magnitude_spectrum(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        if n == 0 {
            return Vec::new();
        }

        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();

        if n == self.len {
            self.fft.process(&mut buffer);
        } else {
            FftPlanner::new().plan_fft_forward(n).process(&mut buffer);
        }

        buffer.iter().take(n / 2 + 1).map(|c| c.norm()).collect()
    }
}

/// Direct O(n²) DFT estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct DftAnalyzer;

impl SpectralEstimator for DftAnalyzer {
    fn magnitude_spectrum(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        if n == 0 {
            return Vec::new();
        }
        let step = -2.0 * std::f64::consts::PI / n as f64;

        (0..=n / 2)
            .map(|k| {
                let mut sum = Complex::new(0.0, 0.0);
                for (i, &v) in signal.iter().enumerate() {
                    let angle = step * (k * i % n) as f64;
                    sum += Complex::new(angle.cos(), angle.sin()) * v;
                }
                sum.norm()
            })
            .collect()
    }
}
