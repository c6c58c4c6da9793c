//! Frequency-domain analysis of a trajectory.
//!
//! Computes the discrete Fourier transform of one series of a trajectory by
//! direct O(n^2) summation:
//!
//! ```text
//! X[k] = sum_j x[j] * (cos(2 pi k j / n) - i sin(2 pi k j / n))
//! ```
//!
//! The output file holds one `k,frequency,real,imaginary` record per bin, with
//! no header.

use std::{
    f64::consts::TAU,
    io::{self, Write},
};

use clap::ValueEnum;
use pendulum_core::Sample;
use thiserror::Error;

/// Which trajectory column to transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Series {
    /// The wrapped angle.
    #[default]
    Angle,

    /// The angular velocity.
    Velocity,
}

/// One frequency bin of a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub index: usize,
    pub frequency: f64,
    pub real: f64,
    pub imaginary: f64,
}

impl Bin {
    /// Returns the magnitude `|X[k]|`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("trajectory has no samples")]
    Empty,
}

/// Transforms one series of `samples`.
///
/// `bins` defaults to `n / 2 + 1` and is clamped to `n`. The frequency of bin
/// `k` is `k / (n * dt)`, where `dt` is the spacing of the first two samples;
/// it is zero for a single sample.
///
/// # Errors
///
/// Returns [`SpectrumError::Empty`] if there are no samples.
pub fn analyze(
    samples: &[Sample],
    series: Series,
    bins: Option<usize>,
) -> Result<Vec<Bin>, SpectrumError> {
    let n = samples.len();
    if n == 0 {
        return Err(SpectrumError::Empty);
    }

    let values: Vec<f64> = samples
        .iter()
        .map(|s| match series {
            Series::Angle => s.theta,
            Series::Velocity => s.omega,
        })
        .collect();

    let dt = match samples {
        [first, second, ..] => second.time - first.time,
        _ => 0.0,
    };
    let resolution = if dt > 0.0 { 1.0 / (to_f64(n) * dt) } else { 0.0 };

    let bins = bins.unwrap_or(n / 2 + 1).min(n);
    Ok(dft(&values, bins)
        .into_iter()
        .enumerate()
        .map(|(index, (real, imaginary))| Bin {
            index,
            frequency: to_f64(index) * resolution,
            real,
            imaginary,
        })
        .collect())
}

/// Returns the first `bins` coefficients of the DFT of `values`.
///
/// The phase index `k * j` is reduced modulo `n` before conversion, which
/// keeps the trigonometric arguments in `[0, 2 pi)`.
#[must_use]
pub fn dft(values: &[f64], bins: usize) -> Vec<(f64, f64)> {
    let n = values.len();
    (0..bins)
        .map(|k| {
            values
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(re, im), (j, &x)| {
                    let phase = TAU * to_f64((k * j) % n) / to_f64(n);
                    let (sin, cos) = phase.sin_cos();
                    (re + x * cos, im - x * sin)
                })
        })
        .collect()
}

/// Writes one `k,frequency,real,imaginary` record per bin.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_bins<W: Write>(mut writer: W, bins: &[Bin]) -> io::Result<()> {
    for bin in bins {
        writeln!(
            writer,
            "{},{},{},{}",
            bin.index, bin.frequency, bin.real, bin.imaginary
        )?;
    }
    writer.flush()
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}
