//! Core traits and types for fixed-step pendulum simulation.
//!
//! This crate defines the shared abstractions that solvers, models, and
//! output stages build on:
//!
//! - [`State`]: the angle and angular velocity of a second-order system
//! - [`Sample`]: one observation emitted by a simulation driver
//! - [`VectorField`]: supplies the angular acceleration for a given time and state
//! - [`Sink`]: receives accepted samples in strictly increasing time order
//! - [`wrap_angle`]: folds an angle into the half-open interval `(-pi, pi]`

mod angle;
mod field;
mod sink;
mod state;

pub use angle::{MAX_WRAP_TURNS, REFERENCE_PI, is_wrappable, wrap_angle};
pub use field::VectorField;
pub use sink::Sink;
pub use state::{Sample, State};
