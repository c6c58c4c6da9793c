//! Shared fixtures for the end-to-end tests.

use std::{
    path::PathBuf,
    process,
    sync::atomic::{AtomicUsize, Ordering},
};

use pendulum_core::State;
use pendulum_solvers::simulation::Config;

/// A run of the reference scenario shortened to `total_time`.
#[must_use]
pub fn reference_run(total_time: f64) -> Config {
    Config {
        total_time,
        ..Config::default()
    }
}

/// A run with no warm-up, so every step is emitted.
#[must_use]
pub fn full_run(total_time: f64, step_size: f64, initial: State) -> Config {
    Config {
        total_time,
        step_size,
        initial_theta: initial.theta,
        initial_omega: initial.omega,
        warmup: 0.0,
        ..Config::default()
    }
}

/// Euclidean distance between two states in the phase plane.
#[must_use]
pub fn distance(a: State, b: State) -> f64 {
    (a.theta - b.theta).hypot(a.omega - b.omega)
}

/// A scratch file path unique to this process and call.
///
/// The file itself is not created.
#[must_use]
pub fn scratch_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("pendulum-{}-{n}-{name}", process::id()))
}
