use std::error::Error as StdError;

use thiserror::Error;

use crate::StepError;

use super::ConfigError;

/// Errors that can occur during a simulation run.
///
/// Any error aborts the run. Samples already accepted by the sink remain a
/// valid prefix of the full trajectory.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid simulation config")]
    InvalidConfig(#[from] ConfigError),

    #[error("numerical divergence on step {step} at t = {time} (stage {stage:?})")]
    Diverged {
        step: usize,
        time: f64,
        stage: Option<usize>,
    },

    #[error("sink failed at t = {time}")]
    Sink {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn step(step: usize, err: StepError) -> Self {
        match err {
            StepError::InvalidStepSize { h } => Self::InvalidConfig(ConfigError::StepSize(h)),
            StepError::Diverged { time, stage } => Self::Diverged { step, time, stage },
        }
    }

    pub(crate) fn sink<E: StdError + Send + Sync + 'static>(time: f64, err: E) -> Self {
        Self::Sink {
            time,
            source: Box::new(err),
        }
    }
}
