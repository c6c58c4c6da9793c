//! The trajectory file.
//!
//! One record per accepted sample, in increasing time order, with no header:
//!
//! ```text
//! time,angular_velocity,angle
//! ```
//!
//! Values use the default `f64` formatting, which never switches to exponent
//! notation and reads back to the same bits.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    num::ParseFloatError,
    path::Path,
};

use pendulum_core::{Sample, Sink};
use thiserror::Error;

/// A [`Sink`] that writes trajectory records.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    /// Creates a sink that writes records to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl CsvSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` and writes records to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> Sink for CsvSink<W> {
    type Error = io::Error;

    fn accept(&mut self, sample: &Sample) -> Result<(), Self::Error> {
        writeln!(self.writer, "{},{},{}", sample.time, sample.omega, sample.theta)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}

/// Errors that can occur while reading a trajectory.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("cannot read trajectory")]
    Io(#[from] io::Error),

    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}, field {field}: {source}")]
    Parse {
        line: usize,
        field: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// Reads trajectory records from `reader`.
///
/// Blank lines are ignored. Any other line that is not three comma-separated
/// numbers is an error; malformed records are never skipped.
///
/// # Errors
///
/// Returns a [`TrajectoryError`] on I/O failure or the first malformed line.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Sample>, TrajectoryError> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_record(index + 1, &line)?);
    }

    Ok(samples)
}

/// Reads the trajectory file at `path`.
///
/// # Errors
///
/// Returns a [`TrajectoryError`] if the file cannot be opened or read, or if
/// any record is malformed.
pub fn read_file(path: &Path) -> Result<Vec<Sample>, TrajectoryError> {
    read(BufReader::new(File::open(path)?))
}

fn parse_record(line: usize, text: &str) -> Result<Sample, TrajectoryError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [time, omega, theta] = fields[..] else {
        return Err(TrajectoryError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let parse = |field: usize, value: &str| {
        value
            .parse::<f64>()
            .map_err(|source| TrajectoryError::Parse { line, field, source })
    };

    Ok(Sample {
        time: parse(1, time)?,
        omega: parse(2, omega)?,
        theta: parse(3, theta)?,
    })
}
