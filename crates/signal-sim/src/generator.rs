//! Simulated wearable IMU

use crate::activity::{Activity, Channel};
use crate::noise::NoiseGenerator;
use crate::SimError;
use ring_buffer::{ImuSample, Vec3};
use tracing::{debug, info};

const ACCEL_CHANNELS: [Channel; 3] = [Channel::AccelX, Channel::AccelY, Channel::AccelZ];
const GYRO_CHANNELS: [Channel; 3] = [Channel::GyroX, Channel::GyroY, Channel::GyroZ];

/// Synthetic 6-axis IMU driven by an activity profile.
///
/// Simulated time is derived from an integer tick counter, so after `n`
/// calls to [`update`](Self::update) it is exactly `n / sample_rate_hz`.
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    sample_rate_hz: f64,
    activity: Activity,
    ticks: u64,
    noise: NoiseGenerator,
    last_sample: Option<ImuSample>,
}

impl SignalGenerator {
    /// Create a generator with an entropy-seeded noise source
    pub fn new(sample_rate_hz: f64, activity: &str) -> Result<Self, SimError> {
        Self::with_noise(sample_rate_hz, activity, NoiseGenerator::from_entropy())
    }

    /// Create a generator whose sample stream is fully determined by `seed`
    pub fn with_seed(sample_rate_hz: f64, activity: &str, seed: u64) -> Result<Self, SimError> {
        Self::with_noise(sample_rate_hz, activity, NoiseGenerator::from_seed(seed))
    }

    fn with_noise(
        sample_rate_hz: f64,
        activity: &str,
        noise: NoiseGenerator,
    ) -> Result<Self, SimError> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(SimError::InvalidSampleRate(sample_rate_hz));
        }
        let activity: Activity = activity.parse()?;
        debug!("IMU simulator created: {} Hz, activity={}", sample_rate_hz, activity);

        Ok(Self {
            sample_rate_hz,
            activity,
            ticks: 0,
            noise,
            last_sample: None,
        })
    }

    /// Advance simulated time by one sample period and synthesize a sample
    pub fn update(&mut self) {
        self.ticks += 1;
        let t = self.get_current_time();
        let profile = self.activity.profile();

        let mut accel: Vec3 = [0.0; 3];
        for (axis, channel) in ACCEL_CHANNELS.into_iter().enumerate() {
            accel[axis] = profile.deterministic(channel, t)
                + self.noise.gaussian(profile.accel_noise_std[axis]);
        }
        accel[ring_buffer::VERTICAL_AXIS] += profile.gravity_bias;

        let mut gyro: Vec3 = [0.0; 3];
        for (axis, channel) in GYRO_CHANNELS.into_iter().enumerate() {
            gyro[axis] = profile.deterministic(channel, t)
                + self.noise.gaussian(profile.gyro_noise_std[axis]);
        }

        self.last_sample = Some(ImuSample::new(t, accel, gyro));
    }

    /// Switch the activity used by subsequent updates
    pub fn set_curr_activity(&mut self, activity: &str) -> Result<(), SimError> {
        let activity = activity.parse()?;
        self.set_activity(activity);
        Ok(())
    }

    /// Typed variant of [`set_curr_activity`](Self::set_curr_activity)
    pub fn set_activity(&mut self, activity: Activity) {
        if activity != self.activity {
            info!(
                "Activity switch at t={:.3}s: {} -> {}",
                self.get_current_time(),
                self.activity,
                activity
            );
        }
        self.activity = activity;
    }

    /// Acceleration of the last sample (m/s²)
    pub fn get_acceleration(&self) -> Result<Vec3, SimError> {
        self.last_sample.map(|s| s.accel).ok_or(SimError::NoDataYet)
    }

    /// Angular velocity of the last sample (deg/s)
    pub fn get_gyroscope(&self) -> Result<Vec3, SimError> {
        self.last_sample.map(|s| s.gyro).ok_or(SimError::NoDataYet)
    }

    /// Last synthesized sample, if any
    pub fn last_sample(&self) -> Option<ImuSample> {
        self.last_sample
    }

    /// Simulated elapsed time (seconds)
    pub fn get_current_time(&self) -> f64 {
        self.ticks as f64 / self.sample_rate_hz
    }

    /// Active activity
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Sample rate (Hz)
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }
}
