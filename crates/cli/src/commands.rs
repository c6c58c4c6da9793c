//! The `simulate` and `spectrum` subcommands.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

use pendulum_solvers::simulation::{self, Solution};
use tracing::{debug, info};

use crate::{
    Error,
    config::ConfigFile,
    spectrum::{self, Series},
    trajectory::{self, CsvSink},
};

/// Runs the configured simulation and writes its trajectory to `output`.
///
/// If the run fails part way, the records already written stay in the file
/// as a valid prefix of the full trajectory.
///
/// # Errors
///
/// Returns an [`Error`] if the method is invalid, the output cannot be
/// created, or the simulation fails.
pub fn simulate(config: &ConfigFile, output: &Path) -> Result<Solution, Error> {
    let tableau = config.method.tableau()?;
    debug!(
        method = config.method.name(),
        model = config.model.name(),
        run = ?config.run,
        "loaded configuration"
    );

    let mut sink = CsvSink::create(output).map_err(|source| Error::Output {
        path: output.to_path_buf(),
        source,
    })?;

    let solution = simulation::run(&config.model, &tableau, &config.run, &mut sink)?;
    info!(
        samples = solution.samples,
        output = %output.display(),
        "wrote trajectory"
    );
    Ok(solution)
}

/// Reads the trajectory at `input` and writes its spectrum to `output`.
///
/// Returns the number of bins written.
///
/// # Errors
///
/// Returns an [`Error`] if the trajectory cannot be read, is empty, or the
/// spectrum cannot be written.
pub fn spectrum(
    input: &Path,
    output: &Path,
    series: Series,
    bins: Option<usize>,
) -> Result<usize, Error> {
    let samples = trajectory::read_file(input)?;
    debug!(samples = samples.len(), ?series, "read trajectory");

    let bins = spectrum::analyze(&samples, series, bins)?;

    let to_output = |source: io::Error| Error::Output {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(to_output)?;
    spectrum::write_bins(BufWriter::new(file), &bins).map_err(to_output)?;

    info!(bins = bins.len(), output = %output.display(), "wrote spectrum");
    Ok(bins.len())
}
