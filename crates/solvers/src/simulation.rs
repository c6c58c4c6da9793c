//! Fixed-step simulation driver.
//!
//! The driver owns the time loop. It asks a [`Stepper`] to advance the state,
//! wraps the angle into `(-pi, pi]`, and forwards every sample past the
//! warm-up threshold to a [`Sink`].
//!
//! A run moves through these phases:
//!
//! 1. Initializing: the [`Config`] is validated and the initial state built.
//!    An invalid config fails here, before any sample is emitted.
//! 2. Stepping: step `n` advances the state from `t_n = n * h` to
//!    `t_{n+1} = (n + 1) * h` for as long as `t_n < total_time`.
//! 3. Draining: [`Sink::finish`] flushes buffered output.
//! 4. Done: the [`Solution`] summary is returned.
//!
//! Divergence or a sink failure ends the run early with an [`Error`].
//!
//! Times are computed as `n * h` rather than by repeated addition, so the
//! sample times of a run do not drift and the warm-up boundary is exact
//! whenever `warmup` is a multiple of `h`.

mod config;
mod error;
mod solution;

pub use config::{Config, ConfigError, DEFAULT_WARMUP};
pub use error::Error;
pub use solution::Solution;

use pendulum_core::{Sample, Sink, VectorField, is_wrappable, wrap_angle};
use tracing::{info, warn};

use crate::{Stepper, Tableau};

/// Integrates `field` with `tableau` according to `config`, feeding `sink`.
///
/// Each emitted [`Sample`] carries the time of the state it records, so the
/// first sample of a run is the first multiple of `step_size` strictly
/// greater than `warmup`, and the last one is at the end of the final step.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if the config fails validation. No step is taken.
/// - [`Error::Diverged`] if any intermediate value of a step is non-finite,
///   or a step moves the angle more than [`MAX_WRAP_TURNS`] turns from zero.
///
/// [`MAX_WRAP_TURNS`]: pendulum_core::MAX_WRAP_TURNS
/// - [`Error::Sink`] if the sink rejects a sample or fails to finish.
pub fn run<F, S>(
    field: &F,
    tableau: &Tableau,
    config: &Config,
    sink: &mut S,
) -> Result<Solution, Error>
where
    F: VectorField + ?Sized,
    S: Sink + ?Sized,
{
    config.validate()?;
    info!(
        stages = tableau.stages(),
        total_time = config.total_time,
        step_size = config.step_size,
        warmup = config.warmup,
        "starting simulation"
    );

    let h = config.step_size;
    let mut stepper = Stepper::new(tableau);
    let mut state = config.initial_state();
    let mut time = 0.0;
    let mut steps = 0usize;
    let mut samples = 0usize;

    while time < config.total_time {
        state = stepper.advance(field, time, state, h).map_err(|err| {
            warn!(step = steps, time, "simulation diverged: {err}");
            Error::step(steps, err)
        })?;

        steps += 1;
        time = step_time(steps, h);

        if !is_wrappable(state.theta, config.pi) {
            warn!(step = steps - 1, time, theta = state.theta, "angle left the wrappable range");
            return Err(Error::Diverged {
                step: steps - 1,
                time,
                stage: None,
            });
        }
        state.theta = wrap_angle(state.theta, config.pi);

        if time > config.warmup {
            sink.accept(&Sample::new(time, state))
                .map_err(|err| Error::sink(time, err))?;
            samples += 1;
        }
    }

    sink.finish().map_err(|err| Error::sink(time, err))?;
    info!(steps, samples, final_time = time, "simulation complete");

    Ok(Solution {
        steps,
        samples,
        final_time: time,
        final_state: state,
    })
}

/// Runs a simulation and collects every emitted sample.
///
/// This is a convenience wrapper around [`run`] with a `Vec` sink.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn run_collected<F>(
    field: &F,
    tableau: &Tableau,
    config: &Config,
) -> Result<(Solution, Vec<Sample>), Error>
where
    F: VectorField + ?Sized,
{
    let mut samples = Vec::new();
    let solution = run(field, tableau, config, &mut samples)?;
    Ok((solution, samples))
}

/// Time at the end of step `n`.
#[allow(clippy::cast_precision_loss)]
fn step_time(n: usize, h: f64) -> f64 {
    n as f64 * h
}
