//! Butcher tableaux for explicit Runge–Kutta methods.
//!
//! A [`Tableau`] is created once, validated, and then shared read-only by
//! every step of a run. Tables can come from the named constructors below or
//! from configuration through [`Method`].

mod error;
mod method;

pub use error::{Coefficient, ShapeError, TableauError};
pub use method::Method;

/// Tolerance for the row-sum and weight-sum consistency conditions.
pub const CONSISTENCY_TOL: f64 = 1e-9;

/// An immutable, validated Butcher tableau for an explicit method.
///
/// The coefficient matrix is stored row-major. Only entries strictly below
/// the diagonal can be nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    stages: usize,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
}

impl Tableau {
    /// Creates a tableau from its coefficient matrix, weights, and nodes.
    ///
    /// The stage count is the number of rows in `a`.
    ///
    /// # Errors
    ///
    /// Returns [`TableauError::Shape`] if `a` is empty or not square, or if
    /// `b` or `c` do not have one entry per stage.
    ///
    /// Returns another [`TableauError`] variant if any coefficient is
    /// non-finite, if `a` has a nonzero entry on or above the diagonal, if a
    /// node differs from its row sum by more than [`CONSISTENCY_TOL`], or if
    /// the weights do not sum to one within the same tolerance.
    pub fn new(a: Vec<Vec<f64>>, b: Vec<f64>, c: Vec<f64>) -> Result<Self, TableauError> {
        let stages = a.len();
        if stages == 0 {
            return Err(ShapeError::Empty.into());
        }
        if let Some((row, len)) = a
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != stages)
        {
            return Err(ShapeError::NonSquare { row, len, stages }.into());
        }
        if b.len() != stages {
            return Err(ShapeError::Weights {
                len: b.len(),
                stages,
            }
            .into());
        }
        if c.len() != stages {
            return Err(ShapeError::Nodes {
                len: c.len(),
                stages,
            }
            .into());
        }

        let tableau = Self {
            stages,
            a: a.into_iter().flatten().collect(),
            b,
            c,
        };
        tableau.validate()?;
        Ok(tableau)
    }

    /// Forward Euler: one stage, first order.
    #[must_use]
    pub fn euler() -> Self {
        Self::from_rows(&[&[0.0]], &[1.0], &[0.0])
    }

    /// Explicit midpoint: two stages, second order.
    #[must_use]
    pub fn midpoint() -> Self {
        Self::from_rows(&[&[0.0, 0.0], &[0.5, 0.0]], &[0.0, 1.0], &[0.0, 0.5])
    }

    /// Heun's method (explicit trapezoid): two stages, second order.
    #[must_use]
    pub fn heun() -> Self {
        Self::from_rows(&[&[0.0, 0.0], &[1.0, 0.0]], &[0.5, 0.5], &[0.0, 1.0])
    }

    /// Ralston's method: two stages, second order, minimal error bound.
    #[must_use]
    pub fn ralston() -> Self {
        Self::from_rows(
            &[&[0.0, 0.0], &[2.0 / 3.0, 0.0]],
            &[0.25, 0.75],
            &[0.0, 2.0 / 3.0],
        )
    }

    /// The classical Runge–Kutta method: four stages, fourth order.
    #[must_use]
    pub fn classical_rk4() -> Self {
        Self::from_rows(
            &[
                &[0.0, 0.0, 0.0, 0.0],
                &[0.5, 0.0, 0.0, 0.0],
                &[0.0, 0.5, 0.0, 0.0],
                &[0.0, 0.0, 1.0, 0.0],
            ],
            &[1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
            &[0.0, 0.5, 0.5, 1.0],
        )
    }

    /// Kutta's 3/8 rule: four stages, fourth order.
    #[must_use]
    pub fn three_eighths() -> Self {
        Self::from_rows(
            &[
                &[0.0, 0.0, 0.0, 0.0],
                &[1.0 / 3.0, 0.0, 0.0, 0.0],
                &[-1.0 / 3.0, 1.0, 0.0, 0.0],
                &[1.0, -1.0, 1.0, 0.0],
            ],
            &[0.125, 0.375, 0.375, 0.125],
            &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0],
        )
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Returns the coupling coefficient `a[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not less than [`Tableau::stages`].
    #[must_use]
    pub fn a(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.stages, "column {j} out of range");
        self.a[i * self.stages + j]
    }

    /// Returns the weight `b[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`Tableau::stages`].
    #[must_use]
    pub fn b(&self, i: usize) -> f64 {
        self.b[i]
    }

    /// Returns the node `c[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`Tableau::stages`].
    #[must_use]
    pub fn c(&self, i: usize) -> f64 {
        self.c[i]
    }

    /// Returns the weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.b
    }

    /// Returns the nodes.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.c
    }

    /// Builds a tableau from known-good static rows without validation.
    fn from_rows(a: &[&[f64]], b: &[f64], c: &[f64]) -> Self {
        Self {
            stages: b.len(),
            a: a.iter().flat_map(|row| row.iter().copied()).collect(),
            b: b.to_vec(),
            c: c.to_vec(),
        }
    }

    /// Checks the numeric conditions on an already well-shaped tableau.
    fn validate(&self) -> Result<(), TableauError> {
        let s = self.stages;

        for i in 0..s {
            for j in 0..s {
                let value = self.a(i, j);
                if !value.is_finite() {
                    return Err(TableauError::NonFinite {
                        name: Coefficient::A { row: i, col: j },
                        value,
                    });
                }
                if j >= i && value != 0.0 {
                    return Err(TableauError::NotExplicit {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
            if !self.b[i].is_finite() {
                return Err(TableauError::NonFinite {
                    name: Coefficient::B(i),
                    value: self.b[i],
                });
            }
            if !self.c[i].is_finite() {
                return Err(TableauError::NonFinite {
                    name: Coefficient::C(i),
                    value: self.c[i],
                });
            }
        }

        for i in 0..s {
            let row_sum: f64 = (0..i).map(|j| self.a(i, j)).sum();
            if (self.c[i] - row_sum).abs() > CONSISTENCY_TOL {
                return Err(TableauError::Inconsistent {
                    stage: i,
                    node: self.c[i],
                    row_sum,
                });
            }
        }

        let sum: f64 = self.b.iter().sum();
        if (sum - 1.0).abs() > CONSISTENCY_TOL {
            return Err(TableauError::WeightSum { sum });
        }

        Ok(())
    }
}

impl Default for Tableau {
    fn default() -> Self {
        Self::classical_rk4()
    }
}
