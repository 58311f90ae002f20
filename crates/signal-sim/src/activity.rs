//! Activity profiles
//!
//! Each activity is a plain parameter set. The generator evaluates every
//! profile with the same algorithm, so adding an activity means adding a
//! variant here and its profile constant, nothing else.

use crate::SimError;
use ring_buffer::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard gravity (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Output channel a waveform component drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
}

/// Sinusoidal component `amplitude * sin(2π * frequency_hz * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    pub channel: Channel,
    /// Base frequency (Hz)
    pub frequency_hz: f64,
    /// Peak amplitude (m/s² for accel channels, deg/s for gyro channels)
    pub amplitude: f64,
    /// Phase offset (radians)
    pub phase: f64,
}

impl Waveform {
    /// Evaluate the component at time `t` (seconds)
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * std::f64::consts::PI * self.frequency_hz * t + self.phase).sin()
    }
}

/// Synthesis parameters for one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityProfile {
    /// Constant bias on the vertical accelerometer axis (m/s²)
    pub gravity_bias: f64,
    /// Deterministic oscillation components
    pub waveforms: &'static [Waveform],
    /// Accelerometer noise std-dev per axis (m/s²)
    pub accel_noise_std: Vec3,
    /// Gyroscope noise std-dev per axis (deg/s)
    pub gyro_noise_std: Vec3,
}

impl ActivityProfile {
    /// Sum of all waveform components driving `channel` at time `t`
    pub fn deterministic(&self, channel: Channel, t: f64) -> f64 {
        self.waveforms
            .iter()
            .filter(|w| w.channel == channel)
            .map(|w| w.evaluate(t))
            .sum()
    }
}

// Slow chest rise from breathing is the only motion while seated.
static SITTING_WAVES: [Waveform; 1] = [Waveform {
    channel: Channel::AccelZ,
    frequency_hz: 0.25,
    amplitude: 0.01,
    phase: 0.0,
}];

static WALKING_WAVES: [Waveform; 4] = [
    // Vertical bounce, one per step
    Waveform {
        channel: Channel::AccelZ,
        frequency_hz: 1.8,
        amplitude: 2.0,
        phase: 0.0,
    },
    // Forward surge
    Waveform {
        channel: Channel::AccelX,
        frequency_hz: 1.8,
        amplitude: 0.8,
        phase: std::f64::consts::FRAC_PI_2,
    },
    // Lateral sway, once per stride
    Waveform {
        channel: Channel::AccelY,
        frequency_hz: 0.9,
        amplitude: 0.4,
        phase: 0.0,
    },
    // Leg swing about the pitch axis
    Waveform {
        channel: Channel::GyroY,
        frequency_hz: 0.9,
        amplitude: 60.0,
        phase: 0.0,
    },
];

static RUNNING_WAVES: [Waveform; 4] = [
    Waveform {
        channel: Channel::AccelZ,
        frequency_hz: 2.8,
        amplitude: 6.0,
        phase: 0.0,
    },
    Waveform {
        channel: Channel::AccelX,
        frequency_hz: 2.8,
        amplitude: 2.5,
        phase: std::f64::consts::FRAC_PI_2,
    },
    Waveform {
        channel: Channel::AccelY,
        frequency_hz: 1.4,
        amplitude: 1.0,
        phase: 0.0,
    },
    Waveform {
        channel: Channel::GyroY,
        frequency_hz: 1.4,
        amplitude: 180.0,
        phase: 0.0,
    },
];

static SITTING: ActivityProfile = ActivityProfile {
    gravity_bias: GRAVITY,
    waveforms: &SITTING_WAVES,
    accel_noise_std: [0.02, 0.02, 0.02],
    gyro_noise_std: [0.5, 0.5, 0.5],
};

static WALKING: ActivityProfile = ActivityProfile {
    gravity_bias: GRAVITY,
    waveforms: &WALKING_WAVES,
    accel_noise_std: [0.3, 0.3, 0.3],
    gyro_noise_std: [5.0, 5.0, 5.0],
};

static RUNNING: ActivityProfile = ActivityProfile {
    gravity_bias: GRAVITY,
    waveforms: &RUNNING_WAVES,
    accel_noise_std: [0.8, 0.8, 0.8],
    gyro_noise_std: [12.0, 12.0, 12.0],
};

/// Physical activity the simulated wearer performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Sitting,
    Walking,
    Running,
}

impl Activity {
    /// All registered activities
    pub const ALL: [Activity; 3] = [Activity::Sitting, Activity::Walking, Activity::Running];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Activity::Sitting => "sitting",
            Activity::Walking => "walking",
            Activity::Running => "running",
        }
    }

    /// Synthesis parameters for this activity
    pub fn profile(self) -> &'static ActivityProfile {
        match self {
            Activity::Sitting => &SITTING,
            Activity::Walking => &WALKING,
            Activity::Running => &RUNNING,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Activity::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownActivity(s.to_string()))
    }
}
