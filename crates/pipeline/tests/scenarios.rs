//! End-to-end simulator → extractor scenarios

use feature_engine::{FeatureError, WindowState, WindowedFeatureExtractor, FEATURE_DIMENSION};
use pipeline::{generate_dataset, PipelineConfig};
use signal_sim::{SignalGenerator, GRAVITY};

const SAMPLE_RATE: f64 = 100.0;
const WINDOW: usize = 50;

fn run(activity: &str, seed: u64) -> feature_engine::FeatureVector {
    let mut sim = SignalGenerator::with_seed(SAMPLE_RATE, activity, seed).unwrap();
    let mut extractor = WindowedFeatureExtractor::new(WINDOW, SAMPLE_RATE).unwrap();

    for _ in 0..WINDOW {
        sim.update();
        extractor.add_sample(sim.get_acceleration().unwrap(), sim.get_gyroscope().unwrap());
    }

    assert_eq!(extractor.window_state(), WindowState::Full);
    extractor.compute_features().unwrap()
}

#[test]
fn sitting_window_reads_gravity_and_low_variance() {
    let features = run("sitting", 7);

    assert_eq!(features.values().len(), FEATURE_DIMENSION);
    assert!(features.is_finite());
    assert!((features.accel_mean[2] - GRAVITY).abs() < 0.05, "mean_z={}", features.accel_mean[2]);
    assert!(features.accel_variance[2] < 0.01, "var_z={}", features.accel_variance[2]);
}

#[test]
fn walking_variance_is_an_order_of_magnitude_above_sitting() {
    for seed in [1, 2, 3, 99] {
        let sitting = run("sitting", seed).accel_variance[2];
        let walking = run("walking", seed).accel_variance[2];
        assert!(
            walking >= 10.0 * sitting,
            "seed {}: walking={} sitting={}",
            seed,
            walking,
            sitting
        );
    }
}

#[test]
fn walking_dominant_frequency_near_cadence() {
    // 2 s window at 100 Hz gives 0.5 Hz bins; the 1.8 Hz step lands in bin 4
    let mut sim = SignalGenerator::with_seed(SAMPLE_RATE, "walking", 5).unwrap();
    let mut extractor = WindowedFeatureExtractor::new(200, SAMPLE_RATE).unwrap();
    for _ in 0..200 {
        sim.update();
        extractor.add_sample(sim.get_acceleration().unwrap(), sim.get_gyroscope().unwrap());
    }
    let freq = extractor.compute_features().unwrap().dominant_frequency;
    assert!((freq - 1.8).abs() <= 0.5, "dom_freq={}", freq);
}

#[test]
fn features_fail_until_window_is_full() {
    let mut sim = SignalGenerator::with_seed(SAMPLE_RATE, "walking", 3).unwrap();
    let mut extractor = WindowedFeatureExtractor::new(WINDOW, SAMPLE_RATE).unwrap();

    for pushed in 0..WINDOW {
        assert_eq!(
            extractor.compute_features(),
            Err(FeatureError::InsufficientData { have: pushed, need: WINDOW })
        );
        sim.update();
        extractor.add_sample(sim.get_acceleration().unwrap(), sim.get_gyroscope().unwrap());
    }
    assert!(extractor.compute_features().is_ok());
}

#[test]
fn window_holds_last_samples_after_overflow() {
    let mut sim = SignalGenerator::with_seed(SAMPLE_RATE, "walking", 12).unwrap();
    let mut extractor = WindowedFeatureExtractor::new(WINDOW, SAMPLE_RATE).unwrap();
    let mut pushed = Vec::new();

    for _ in 0..WINDOW + 17 {
        sim.update();
        let accel = sim.get_acceleration().unwrap();
        extractor.add_sample(accel, sim.get_gyroscope().unwrap());
        pushed.push(accel);
    }

    let held: Vec<[f64; 3]> = extractor.samples().map(|s| s.accel).collect();
    assert_eq!(held, pushed[17..].to_vec());
}

#[test]
fn activity_switch_flushes_through_window() {
    let mut sim = SignalGenerator::with_seed(SAMPLE_RATE, "walking", 4).unwrap();
    let mut extractor = WindowedFeatureExtractor::new(WINDOW, SAMPLE_RATE).unwrap();

    for _ in 0..WINDOW {
        sim.update();
        extractor.add_sample(sim.get_acceleration().unwrap(), sim.get_gyroscope().unwrap());
    }
    let walking = extractor.compute_features().unwrap();

    sim.set_curr_activity("sitting").unwrap();
    for _ in 0..WINDOW {
        sim.update();
        extractor.add_sample(sim.get_acceleration().unwrap(), sim.get_gyroscope().unwrap());
    }
    let sitting = extractor.compute_features().unwrap();

    assert!((sim.get_current_time() - 2.0 * WINDOW as f64 / SAMPLE_RATE).abs() < 1e-12);
    assert!(sitting.accel_variance[2] < 0.01);
    assert!(walking.accel_variance[2] > 10.0 * sitting.accel_variance[2]);
}

#[test]
fn quick_dataset_rows_are_finite() {
    let rows = generate_dataset(&PipelineConfig::quick()).unwrap();
    assert_eq!(rows.len(), 40);
    assert!(rows.iter().all(|r| r.features.is_finite()));
}
