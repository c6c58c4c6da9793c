use thiserror::Error;

/// Dimension mismatches in the arrays that define a tableau.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("tableau must have at least one stage")]
    Empty,

    #[error("row {row} of `a` has {len} entries but the tableau has {stages} stages")]
    NonSquare {
        row: usize,
        len: usize,
        stages: usize,
    },

    #[error("`b` has {len} weights but the tableau has {stages} stages")]
    Weights { len: usize, stages: usize },

    #[error("`c` has {len} nodes but the tableau has {stages} stages")]
    Nodes { len: usize, stages: usize },
}

/// Errors that can occur when validating a tableau.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TableauError {
    #[error("malformed tableau")]
    Shape(#[from] ShapeError),

    #[error("coefficient {name} is not finite: {value}")]
    NonFinite { name: Coefficient, value: f64 },

    #[error("a[{row}][{col}] = {value} is on or above the diagonal of an explicit method")]
    NotExplicit { row: usize, col: usize, value: f64 },

    #[error("node c[{stage}] = {node} does not match the row sum {row_sum} of `a`")]
    Inconsistent {
        stage: usize,
        node: f64,
        row_sum: f64,
    },

    #[error("weights sum to {sum}, expected 1")]
    WeightSum { sum: f64 },
}

/// Location of a single tableau coefficient, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    A { row: usize, col: usize },
    B(usize),
    C(usize),
}

impl std::fmt::Display for Coefficient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A { row, col } => write!(f, "a[{row}][{col}]"),
            Self::B(i) => write!(f, "b[{i}]"),
            Self::C(i) => write!(f, "c[{i}]"),
        }
    }
}
