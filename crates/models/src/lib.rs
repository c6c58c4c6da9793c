//! Physical models for the pendulum solvers.
//!
//! Each model is a [`VectorField`] with parameters fixed at construction.
//! Adding a model means implementing [`VectorField`]; the solvers never change.
//!
//! - [`DampedDrivenPendulum`]: the nonlinear reference model
//! - [`HarmonicOscillator`]: the linear model with a closed-form solution
//!
//! [`VectorField`]: pendulum_core::VectorField

mod error;
mod oscillator;
mod pendulum;

pub use error::ParameterError;
pub use oscillator::HarmonicOscillator;
pub use pendulum::DampedDrivenPendulum;
