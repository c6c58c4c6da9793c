use serde::Deserialize;

use super::{Tableau, TableauError};

/// A tagged description of an explicit method, as read from configuration.
///
/// Named methods map to the matching [`Tableau`] constructor. `Custom`
/// carries raw arrays that go through [`Tableau::new`], so malformed tables
/// are reported as a [`TableauError`] rather than accepted.
///
/// In TOML:
///
/// ```toml
/// [method]
/// kind = "custom"
/// a = [[0.0, 0.0], [1.0, 0.0]]
/// b = [0.5, 0.5]
/// c = [0.0, 1.0]
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Method {
    Euler,
    Midpoint,
    Heun,
    Ralston,
    #[default]
    ClassicalRk4,
    ThreeEighths,
    Custom {
        a: Vec<Vec<f64>>,
        b: Vec<f64>,
        c: Vec<f64>,
    },
}

impl Method {
    /// Builds the tableau described by this method.
    ///
    /// # Errors
    ///
    /// Returns a [`TableauError`] if a custom table fails validation.
    pub fn tableau(&self) -> Result<Tableau, TableauError> {
        match self {
            Self::Euler => Ok(Tableau::euler()),
            Self::Midpoint => Ok(Tableau::midpoint()),
            Self::Heun => Ok(Tableau::heun()),
            Self::Ralston => Ok(Tableau::ralston()),
            Self::ClassicalRk4 => Ok(Tableau::classical_rk4()),
            Self::ThreeEighths => Ok(Tableau::three_eighths()),
            Self::Custom { a, b, c } => Tableau::new(a.clone(), b.clone(), c.clone()),
        }
    }

    /// Returns the configuration name of this method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Midpoint => "midpoint",
            Self::Heun => "heun",
            Self::Ralston => "ralston",
            Self::ClassicalRk4 => "classical_rk4",
            Self::ThreeEighths => "three_eighths",
            Self::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tableau::ShapeError;

    #[test]
    fn named_methods_build_their_tableaux() {
        assert_eq!(Method::Euler.tableau(), Ok(Tableau::euler()));
        assert_eq!(Method::default().tableau(), Ok(Tableau::classical_rk4()));
        assert_eq!(Method::ThreeEighths.tableau().map(|t| t.stages()), Ok(4));
    }

    #[test]
    fn custom_method_is_validated() {
        let method = Method::Custom {
            a: vec![vec![0.0, 0.0], vec![1.0, 0.0]],
            b: vec![0.5, 0.5],
            c: vec![0.0, 1.0],
        };
        assert_eq!(method.tableau(), Ok(Tableau::heun()));

        let method = Method::Custom {
            a: vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]],
            b: vec![0.5, 0.5],
            c: vec![0.0, 1.0],
        };
        assert_eq!(
            method.tableau(),
            Err(TableauError::Shape(ShapeError::NonSquare {
                row: 0,
                len: 3,
                stages: 2,
            }))
        );
    }
}
