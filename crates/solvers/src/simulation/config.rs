use pendulum_core::{REFERENCE_PI, State, is_wrappable};
use serde::Deserialize;
use thiserror::Error;

/// Default warm-up threshold: samples at or before this time are discarded.
pub const DEFAULT_WARMUP: f64 = 20.0;

/// Configuration for a single simulation run.
///
/// A config is fixed for the whole run. Field names match the `[run]` table
/// of a configuration file; fields missing there take their [`Default`] value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Time at which stepping stops.
    pub total_time: f64,

    /// Fixed step size.
    pub step_size: f64,

    /// Initial angle.
    pub initial_theta: f64,

    /// Initial angular velocity.
    pub initial_omega: f64,

    /// Samples are emitted only for times strictly greater than this value.
    pub warmup: f64,

    /// Half-turn used to wrap the angle into `(-pi, pi]`.
    pub pi: f64,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("total_time must be finite and positive, got {0}")]
    TotalTime(f64),

    /// Non-finite, or an angle beyond [`MAX_WRAP_TURNS`] turns.
    ///
    /// [`MAX_WRAP_TURNS`]: pendulum_core::MAX_WRAP_TURNS
    #[error("initial state must be finite and wrappable, got theta = {theta}, omega = {omega}")]
    InitialState { theta: f64, omega: f64 },

    #[error("warmup must be finite, got {0}")]
    Warmup(f64),

    #[error("pi must be finite and positive, got {0}")]
    Pi(f64),
}

impl Default for Config {
    /// The reference scenario: 100 time units at `h = 0.01` from `theta = 1`, at rest.
    fn default() -> Self {
        Self {
            total_time: 100.0,
            step_size: 0.01,
            initial_theta: 1.0,
            initial_omega: 0.0,
            warmup: DEFAULT_WARMUP,
            pi: REFERENCE_PI,
        }
    }
}

impl Config {
    /// Validates the config before any stepping occurs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::StepSize(self.step_size));
        }
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(ConfigError::TotalTime(self.total_time));
        }
        if !self.pi.is_finite() || self.pi <= 0.0 {
            return Err(ConfigError::Pi(self.pi));
        }
        if !is_wrappable(self.initial_theta, self.pi) || !self.initial_omega.is_finite() {
            return Err(ConfigError::InitialState {
                theta: self.initial_theta,
                omega: self.initial_omega,
            });
        }
        if !self.warmup.is_finite() {
            return Err(ConfigError::Warmup(self.warmup));
        }
        Ok(())
    }

    /// Returns the initial state.
    #[must_use]
    pub fn initial_state(&self) -> State {
        State::new(self.initial_theta, self.initial_omega)
    }
}
