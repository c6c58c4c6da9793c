use pendulum_core::{State, VectorField};
use serde::Deserialize;

use crate::{ParameterError, error::positive};

/// An undamped linear oscillator: `theta'' = -natural_frequency^2 * theta`.
///
/// This is the small-angle limit of the undriven pendulum. Its closed-form
/// solution makes it useful for measuring the accuracy of a method.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Parameters")]
pub struct HarmonicOscillator {
    natural_frequency: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct Parameters {
    natural_frequency: f64,
}

impl TryFrom<Parameters> for HarmonicOscillator {
    type Error = ParameterError;

    fn try_from(p: Parameters) -> Result<Self, Self::Error> {
        Self::new(p.natural_frequency)
    }
}

impl HarmonicOscillator {
    /// Creates an oscillator.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `natural_frequency` is not finite and
    /// positive.
    pub fn new(natural_frequency: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            natural_frequency: positive("natural_frequency", natural_frequency)?,
        })
    }

    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    /// Returns the period of oscillation, `2 * pi / natural_frequency`.
    #[must_use]
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / self.natural_frequency
    }

    /// Returns the exact state at time `t` starting from `initial` at `t = 0`.
    #[must_use]
    pub fn exact(&self, initial: State, t: f64) -> State {
        let w = self.natural_frequency;
        let (sin, cos) = (w * t).sin_cos();
        State::new(
            initial.theta * cos + initial.omega / w * sin,
            -initial.theta * w * sin + initial.omega * cos,
        )
    }
}

impl VectorField for HarmonicOscillator {
    fn derivative(&self, _t: f64, theta: f64, _omega: f64) -> f64 {
        -self.natural_frequency * self.natural_frequency * theta
    }
}
