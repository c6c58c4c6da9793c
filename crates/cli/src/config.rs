//! The simulation configuration file.
//!
//! ```toml
//! [run]
//! total_time = 100.0
//! step_size = 0.01
//! initial_theta = 1.0
//! initial_omega = 0.0
//! warmup = 20.0
//!
//! [model]
//! kind = "damped_driven_pendulum"
//! natural_frequency = 1.0
//! damping = 0.5
//! driving_strength = 1.0
//! driving_frequency = 0.667
//!
//! [method]
//! kind = "classical_rk4"
//! ```
//!
//! Every table is optional. Missing tables and fields fall back to the
//! reference scenario.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use pendulum_core::VectorField;
use pendulum_models::{DampedDrivenPendulum, HarmonicOscillator};
use pendulum_solvers::{Method, simulation};
use serde::Deserialize;
use thiserror::Error;

/// Contents of a configuration file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub run: simulation::Config,
    pub model: Model,
    pub method: Method,
}

/// The physical model to integrate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    DampedDrivenPendulum(DampedDrivenPendulum),
    HarmonicOscillator(HarmonicOscillator),
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigFile {
    /// Loads a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigFileError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::DampedDrivenPendulum(DampedDrivenPendulum::reference())
    }
}

impl Model {
    /// Returns the configuration name of this model.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DampedDrivenPendulum(_) => "damped_driven_pendulum",
            Self::HarmonicOscillator(_) => "harmonic_oscillator",
        }
    }
}

impl VectorField for Model {
    fn derivative(&self, t: f64, theta: f64, omega: f64) -> f64 {
        match self {
            Self::DampedDrivenPendulum(model) => model.derivative(t, theta, omega),
            Self::HarmonicOscillator(model) => model.derivative(t, theta, omega),
        }
    }
}
