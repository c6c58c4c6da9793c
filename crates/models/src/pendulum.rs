use pendulum_core::VectorField;
use serde::Deserialize;

use crate::{ParameterError, error::finite};

/// A damped pendulum driven by a periodic torque.
///
/// The angular acceleration is
///
/// ```text
/// driving_strength * cos(driving_frequency * t)
///     - natural_frequency^2 * sin(theta)
///     - damping * omega
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Parameters")]
pub struct DampedDrivenPendulum {
    natural_frequency: f64,
    damping: f64,
    driving_strength: f64,
    driving_frequency: f64,
}

/// Unvalidated parameters, as read from configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct Parameters {
    natural_frequency: f64,
    damping: f64,
    driving_strength: f64,
    driving_frequency: f64,
}

impl TryFrom<Parameters> for DampedDrivenPendulum {
    type Error = ParameterError;

    fn try_from(p: Parameters) -> Result<Self, Self::Error> {
        Self::new(
            p.natural_frequency,
            p.damping,
            p.driving_strength,
            p.driving_frequency,
        )
    }
}

impl DampedDrivenPendulum {
    /// Creates a pendulum model.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any parameter is not finite.
    pub fn new(
        natural_frequency: f64,
        damping: f64,
        driving_strength: f64,
        driving_frequency: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            natural_frequency: finite("natural_frequency", natural_frequency)?,
            damping: finite("damping", damping)?,
            driving_strength: finite("driving_strength", driving_strength)?,
            driving_frequency: finite("driving_frequency", driving_frequency)?,
        })
    }

    /// The reference parameters: unit natural frequency, damping 0.5,
    /// unit drive at frequency 0.667.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            natural_frequency: 1.0,
            damping: 0.5,
            driving_strength: 1.0,
            driving_frequency: 0.667,
        }
    }

    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[must_use]
    pub fn driving_strength(&self) -> f64 {
        self.driving_strength
    }

    #[must_use]
    pub fn driving_frequency(&self) -> f64 {
        self.driving_frequency
    }
}

impl Default for DampedDrivenPendulum {
    fn default() -> Self {
        Self::reference()
    }
}

impl VectorField for DampedDrivenPendulum {
    fn derivative(&self, t: f64, theta: f64, omega: f64) -> f64 {
        let mut accel = self.driving_strength * (self.driving_frequency * t).cos();
        accel -= self.natural_frequency * self.natural_frequency * theta.sin();
        accel -= self.damping * omega;
        accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_each_term() {
        let model = DampedDrivenPendulum::new(2.0, 0.5, 1.5, 3.0).expect("valid parameters");

        // Drive only: cos(0) = 1.
        assert_relative_eq!(model.derivative(0.0, 0.0, 0.0), 1.5);

        // Gravity only: drive vanishes at cos(pi / 2).
        let t = FRAC_PI_2 / 3.0;
        assert_relative_eq!(model.derivative(t, FRAC_PI_2, 0.0), -4.0, epsilon = 1e-12);

        // Damping only.
        assert_relative_eq!(model.derivative(t, 0.0, 2.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_matches_documented_parameters() {
        let model = DampedDrivenPendulum::reference();

        assert_relative_eq!(model.natural_frequency(), 1.0);
        assert_relative_eq!(model.damping(), 0.5);
        assert_relative_eq!(model.driving_strength(), 1.0);
        assert_relative_eq!(model.driving_frequency(), 0.667);
        assert_relative_eq!(
            model.derivative(1.0, 1.0, 1.0),
            0.667_f64.cos() - 1.0_f64.sin() - 0.5
        );
    }

    #[test]
    fn is_pure_for_non_monotonic_times() {
        let model = DampedDrivenPendulum::reference();

        let forward = model.derivative(5.0, 0.3, -0.2);
        let _ = model.derivative(2.5, 1.0, 1.0);
        let _ = model.derivative(7.5, -PI, 4.0);
        let again = model.derivative(5.0, 0.3, -0.2);

        assert_eq!(forward.to_bits(), again.to_bits());
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let result = DampedDrivenPendulum::new(1.0, f64::NAN, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(ParameterError::NonFinite {
                name: "damping",
                ..
            })
        ));
    }
}
