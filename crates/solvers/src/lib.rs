//! Fixed-step explicit Runge–Kutta integration for second-order systems.
//!
//! # Modules
//!
//! - [`tableau`]: validated Butcher tableaux and the named methods built on them
//! - [`stepper`]: advances a [`State`] by one step of any explicit tableau
//! - [`simulation`]: owns the time loop, wraps the angle, and forwards
//!   samples past the warm-up threshold to a [`Sink`]
//!
//! # Example
//!
//! ```
//! use pendulum_solvers::{simulation, tableau::Tableau};
//!
//! let tableau = Tableau::classical_rk4();
//! let config = simulation::Config {
//!     total_time: 1.0,
//!     step_size: 0.01,
//!     warmup: 0.5,
//!     ..simulation::Config::default()
//! };
//!
//! // Undamped, undriven pendulum with unit natural frequency.
//! let field = |_t: f64, theta: f64, _omega: f64| -theta.sin();
//!
//! let (solution, samples) = simulation::run_collected(&field, &tableau, &config)?;
//! assert_eq!(solution.samples, samples.len());
//! # Ok::<(), simulation::Error>(())
//! ```
//!
//! [`State`]: pendulum_core::State
//! [`Sink`]: pendulum_core::Sink

pub mod simulation;
pub mod stepper;
pub mod tableau;

pub use stepper::{StepError, Stepper};
pub use tableau::{Method, ShapeError, Tableau, TableauError};
