use std::{io, path::PathBuf};

use pendulum_solvers::{TableauError, simulation};
use thiserror::Error;

use crate::{config::ConfigFileError, spectrum::SpectrumError, trajectory::TrajectoryError};

/// Errors reported by the command-line tool.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigFileError),

    #[error("invalid method")]
    Method(#[from] TableauError),

    #[error("simulation failed")]
    Simulation(#[from] simulation::Error),

    #[error("cannot write {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}
