/// Supplies the right-hand side of a second-order equation of motion.
///
/// Given an instant and a state, a vector field returns the angular
/// acceleration `d(omega)/dt`. The derivative of the angle is always the
/// angular velocity itself, so that half of the system is handled by the
/// stepper and never appears here.
///
/// Implementations must be pure functions of their arguments. Steppers call
/// `derivative` several times per step with intermediate, non-monotonic
/// times (`t + c[i] * h`), and rely on the result depending only on
/// `(t, theta, omega)`.
///
/// Closures of the form `Fn(f64, f64, f64) -> f64` implement this trait,
/// which is convenient for tests and one-off models.
pub trait VectorField {
    /// Returns the angular acceleration at time `t` for the given state.
    fn derivative(&self, t: f64, theta: f64, omega: f64) -> f64;
}

/// Blanket implementation for vector field closures.
impl<F> VectorField for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn derivative(&self, t: f64, theta: f64, omega: f64) -> f64 {
        self(t, theta, omega)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn evaluate(field: &impl VectorField, t: f64, theta: f64, omega: f64) -> f64 {
        field.derivative(t, theta, omega)
    }

    #[test]
    fn closure_is_a_vector_field() {
        let field = |t: f64, theta: f64, omega: f64| t - theta * omega;

        assert_relative_eq!(evaluate(&field, 2.0, 0.5, 3.0), 0.5);
        assert_relative_eq!(evaluate(&field, 0.0, 1.0, 1.0), -1.0);
    }
}
