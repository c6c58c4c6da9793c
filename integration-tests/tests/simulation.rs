use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use integration_tests::{full_run, reference_run};
use pendulum_core::{REFERENCE_PI, Sample, State};
use pendulum_models::DampedDrivenPendulum;
use pendulum_solvers::{
    Tableau,
    simulation::{self, Config, ConfigError, Error},
};

fn reference(config: &Config) -> Vec<Sample> {
    let (solution, samples) = simulation::run_collected(
        &DampedDrivenPendulum::reference(),
        &Tableau::classical_rk4(),
        config,
    )
    .expect("reference run should succeed");
    assert_eq!(solution.samples, samples.len());
    samples
}

#[test]
fn reference_scenario_end_to_end() {
    let samples = reference(&Config::default());

    assert_eq!(samples.len(), 8000);
    assert_abs_diff_eq!(samples[0].time, 20.01, epsilon = 1e-9);
    assert!(samples.iter().all(|s| s.time != 20.0));
    assert_abs_diff_eq!(
        samples.last().expect("samples").time,
        100.0,
        epsilon = 1e-9
    );
    assert!(samples.iter().all(|s| s.time > 20.0));
    assert!(
        samples
            .iter()
            .all(|s| -REFERENCE_PI < s.theta && s.theta <= REFERENCE_PI)
    );
    assert!(samples.iter().all(|s| s.theta.is_finite() && s.omega.is_finite()));
}

#[test]
fn five_time_units_past_warmup_give_five_hundred_samples() {
    let samples = reference(&reference_run(25.0));

    assert_eq!(samples.len(), 500);
    assert!(samples.iter().all(|s| s.time > 20.0));
    assert!(samples.windows(2).all(|w| w[0].time < w[1].time));
}

#[test]
fn identical_runs_are_bitwise_identical() {
    let config = reference_run(30.0);
    let first = reference(&config);
    let second = reference(&config);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.time.to_bits(), b.time.to_bits());
        assert_eq!(a.theta.to_bits(), b.theta.to_bits());
        assert_eq!(a.omega.to_bits(), b.omega.to_bits());
    }
}

#[test]
fn small_undamped_swings_have_the_linear_period() {
    let model = DampedDrivenPendulum::new(1.0, 0.0, 0.0, 0.667).expect("valid parameters");
    let config = full_run(20.0, 0.01, State::new(0.01, 0.0));

    let (_, samples) = simulation::run_collected(&model, &Tableau::classical_rk4(), &config)
        .expect("run should succeed");

    let peaks: Vec<f64> = samples
        .windows(3)
        .filter(|w| w[0].theta < w[1].theta && w[1].theta >= w[2].theta)
        .map(|w| w[1].time)
        .collect();

    assert!(peaks.len() >= 2, "found peaks at {peaks:?}");
    assert_abs_diff_eq!(peaks[0], TAU, epsilon = 0.02);
    for pair in peaks.windows(2) {
        assert_abs_diff_eq!(pair[1] - pair[0], TAU, epsilon = 0.02);
    }
}

#[test]
fn invalid_step_sizes_emit_nothing() {
    for step_size in [0.0, -0.1] {
        let config = Config {
            step_size,
            ..Config::default()
        };
        let mut samples: Vec<Sample> = Vec::new();

        let result = simulation::run(
            &DampedDrivenPendulum::reference(),
            &Tableau::classical_rk4(),
            &config,
            &mut samples,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidConfig(ConfigError::StepSize(_)))
        ));
        assert!(samples.is_empty());
    }
}

#[test]
fn huge_initial_angle_is_a_config_error() {
    for initial_theta in [1e17, -1e12] {
        let config = Config {
            initial_theta,
            total_time: 0.02,
            ..Config::default()
        };
        let mut samples: Vec<Sample> = Vec::new();

        let result = simulation::run(
            &DampedDrivenPendulum::reference(),
            &Tableau::classical_rk4(),
            &config,
            &mut samples,
        );

        assert!(matches!(
            result,
            Err(Error::InvalidConfig(ConfigError::InitialState { .. }))
        ));
        assert!(samples.is_empty());
    }
}

#[test]
fn fourth_order_methods_agree_on_the_reference_scenario() {
    let config = reference_run(25.0);
    let baseline = reference(&config);

    let (_, samples) = simulation::run_collected(
        &DampedDrivenPendulum::reference(),
        &Tableau::three_eighths(),
        &config,
    )
    .expect("run should succeed");

    assert_eq!(samples.len(), baseline.len());
    for (a, b) in samples.iter().zip(&baseline) {
        assert_abs_diff_eq!(a.theta, b.theta, epsilon = 1e-5);
        assert_abs_diff_eq!(a.omega, b.omega, epsilon = 1e-5);
    }
}
