//! One step of an explicit Runge–Kutta method.
//!
//! For a second-order system `theta'' = f(t, theta, theta')`, each stage `i`
//! of a tableau with `s` stages evaluates
//!
//! ```text
//! theta_i = theta + h * sum_{j<i} a[i][j] * k[j]
//! omega_i = omega + h * sum_{j<i} a[i][j] * l[j]
//! k[i]    = omega_i
//! l[i]    = f(t + c[i] * h, theta_i, omega_i)
//! ```
//!
//! and the weighted update `h * b[i] * (k[i], l[i])` is added to the result as
//! soon as stage `i` completes.

use pendulum_core::{State, VectorField};
use thiserror::Error;

use crate::Tableau;

/// Errors that can occur while advancing a state.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("step size must be finite and positive, got {h}")]
    InvalidStepSize { h: f64 },

    /// A stage argument, stage derivative, or the combined result was not
    /// finite. `stage` is `None` when the final combination overflowed.
    #[error("non-finite value at t = {time} (stage {stage:?})")]
    Diverged { time: f64, stage: Option<usize> },
}

/// Advances states using an explicit Runge–Kutta tableau.
///
/// A stepper borrows its tableau for the length of a run and owns one scratch
/// buffer per stage, so repeated calls to [`Stepper::advance`] do not allocate.
#[derive(Debug, Clone)]
pub struct Stepper<'a> {
    tableau: &'a Tableau,
    k: Vec<f64>,
    l: Vec<f64>,
}

impl<'a> Stepper<'a> {
    /// Creates a stepper for the given tableau.
    #[must_use]
    pub fn new(tableau: &'a Tableau) -> Self {
        let stages = tableau.stages();
        Self {
            tableau,
            k: vec![0.0; stages],
            l: vec![0.0; stages],
        }
    }

    /// Returns the tableau this stepper integrates with.
    #[must_use]
    pub fn tableau(&self) -> &'a Tableau {
        self.tableau
    }

    /// Advances `state` from time `t` by one step of size `h`.
    ///
    /// Stages are evaluated in order `0..s`, and each stage only reads the
    /// stages before it. Every stage argument starts from the state at the
    /// beginning of the step. The returned state is not wrapped; angle
    /// normalization is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidStepSize`] if `h` is not finite and
    /// positive, and [`StepError::Diverged`] as soon as any intermediate value
    /// is NaN or infinite.
    pub fn advance<F>(
        &mut self,
        field: &F,
        t: f64,
        state: State,
        h: f64,
    ) -> Result<State, StepError>
    where
        F: VectorField + ?Sized,
    {
        if !h.is_finite() || h <= 0.0 {
            return Err(StepError::InvalidStepSize { h });
        }

        let tableau = self.tableau;
        let mut next = state;

        for i in 0..tableau.stages() {
            let mut theta_arg = state.theta;
            let mut omega_arg = state.omega;
            for j in 0..i {
                let a_ij = tableau.a(i, j);
                theta_arg += (self.k[j] * a_ij) * h;
                omega_arg += (self.l[j] * a_ij) * h;
            }

            let stage_time = t + tableau.c(i) * h;
            let accel = field.derivative(stage_time, theta_arg, omega_arg);
            if !(theta_arg.is_finite() && omega_arg.is_finite() && accel.is_finite()) {
                return Err(StepError::Diverged {
                    time: stage_time,
                    stage: Some(i),
                });
            }

            self.k[i] = omega_arg;
            self.l[i] = accel;

            let b_i = tableau.b(i);
            next.theta += (self.k[i] * b_i) * h;
            next.omega += (self.l[i] * b_i) * h;
        }

        if !next.is_finite() {
            return Err(StepError::Diverged {
                time: t + h,
                stage: None,
            });
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Constant angular acceleration: exact for any consistent method of order >= 2.
    fn constant_accel(_t: f64, _theta: f64, _omega: f64) -> f64 {
        2.0
    }

    #[test]
    fn euler_step_matches_hand_calculation() {
        let tableau = Tableau::euler();
        let mut stepper = Stepper::new(&tableau);

        let field = |_t: f64, theta: f64, omega: f64| -theta - 0.5 * omega;
        let next = stepper
            .advance(&field, 0.0, State::new(1.0, 2.0), 0.1)
            .expect("euler step");

        // theta += h * omega, omega += h * f(0, 1, 2) = h * -2
        assert_relative_eq!(next.theta, 1.2);
        assert_relative_eq!(next.omega, 1.8);
    }

    #[test]
    fn classical_rk4_matches_hand_calculation() {
        let tableau = Tableau::classical_rk4();
        let mut stepper = Stepper::new(&tableau);
        let h = 0.1;

        let field = |t: f64, theta: f64, omega: f64| t - theta + omega;
        let next = stepper
            .advance(&field, 1.0, State::new(0.5, -0.5), h)
            .expect("rk4 step");

        let (theta, omega, t) = (0.5_f64, -0.5_f64, 1.0_f64);
        let k0 = omega;
        let l0 = field(t, theta, omega);
        let k1 = omega + 0.5 * h * l0;
        let l1 = field(t + 0.5 * h, theta + 0.5 * h * k0, k1);
        let k2 = omega + 0.5 * h * l1;
        let l2 = field(t + 0.5 * h, theta + 0.5 * h * k1, k2);
        let k3 = omega + h * l2;
        let l3 = field(t + h, theta + h * k2, k3);

        let expected_theta = theta + h / 6.0 * (k0 + 2.0 * k1 + 2.0 * k2 + k3);
        let expected_omega = omega + h / 6.0 * (l0 + 2.0 * l1 + 2.0 * l2 + l3);

        assert_relative_eq!(next.theta, expected_theta, epsilon = 1e-14);
        assert_relative_eq!(next.omega, expected_omega, epsilon = 1e-14);
    }

    #[test]
    fn second_order_methods_are_exact_for_constant_acceleration() {
        for tableau in [
            Tableau::midpoint(),
            Tableau::heun(),
            Tableau::ralston(),
            Tableau::classical_rk4(),
            Tableau::three_eighths(),
        ] {
            let mut stepper = Stepper::new(&tableau);
            let next = stepper
                .advance(&constant_accel, 0.0, State::new(0.0, 1.0), 0.5)
                .expect("step");

            // theta = omega0 * h + accel * h^2 / 2, omega = omega0 + accel * h
            assert_abs_diff_eq!(next.theta, 0.75, epsilon = 1e-14);
            assert_abs_diff_eq!(next.omega, 2.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn stage_times_follow_the_nodes() {
        let tableau = Tableau::three_eighths();
        let mut stepper = Stepper::new(&tableau);

        let times = std::cell::RefCell::new(Vec::new());
        let field = |t: f64, _theta: f64, _omega: f64| {
            times.borrow_mut().push(t);
            0.0
        };

        stepper
            .advance(&field, 2.0, State::new(0.0, 0.0), 0.3)
            .expect("step");

        let times = times.into_inner();
        assert_eq!(times.len(), 4);
        for (time, node) in times.iter().zip(tableau.nodes()) {
            assert_relative_eq!(*time, 2.0 + node * 0.3);
        }
    }

    #[test]
    fn repeated_steps_are_reproducible() {
        let tableau = Tableau::classical_rk4();
        let field = |t: f64, theta: f64, omega: f64| {
            1.2 * (0.667 * t).cos() - theta.sin() - 0.5 * omega
        };

        let run = || {
            let mut stepper = Stepper::new(&tableau);
            let mut state = State::new(1.0, 0.0);
            for n in 0..500_u32 {
                state = stepper
                    .advance(&field, f64::from(n) * 0.01, state, 0.01)
                    .expect("step");
            }
            state
        };

        let first = run();
        let second = run();
        assert_eq!(first.theta.to_bits(), second.theta.to_bits());
        assert_eq!(first.omega.to_bits(), second.omega.to_bits());
    }

    #[test]
    fn rejects_non_positive_step_sizes() {
        let tableau = Tableau::classical_rk4();
        let mut stepper = Stepper::new(&tableau);

        for h in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = stepper.advance(&constant_accel, 0.0, State::default(), h);
            assert!(matches!(result, Err(StepError::InvalidStepSize { .. })));
        }
    }

    #[test]
    fn reports_the_stage_that_diverged() {
        let tableau = Tableau::classical_rk4();
        let mut stepper = Stepper::new(&tableau);

        // Finite at the start of the step, NaN at the midpoint node.
        let field = |t: f64, _theta: f64, _omega: f64| if t > 0.0 { f64::NAN } else { 1.0 };
        let result = stepper.advance(&field, 0.0, State::new(0.0, 0.0), 0.1);

        assert_eq!(
            result,
            Err(StepError::Diverged {
                time: 0.05,
                stage: Some(1),
            })
        );
    }

    #[test]
    fn reports_overflow_in_the_final_combination() {
        let tableau = Tableau::euler();
        let mut stepper = Stepper::new(&tableau);

        let result = stepper.advance(&constant_accel, 0.0, State::new(f64::MAX, f64::MAX), 10.0);

        assert!(matches!(
            result,
            Err(StepError::Diverged { stage: None, .. })
        ));
    }
}
