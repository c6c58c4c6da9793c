//! Library half of the `pendulum` command-line tool.
//!
//! - [`config`]: the TOML configuration file and model selection
//! - [`trajectory`]: the `time,omega,theta` trajectory file: writer sink and reader
//! - [`spectrum`]: the naive discrete Fourier transform of a trajectory
//! - [`commands`]: the `simulate` and `spectrum` subcommands

pub mod commands;
pub mod config;
pub mod spectrum;
pub mod trajectory;

mod error;

pub use error::Error;
