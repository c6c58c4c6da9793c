use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use pendulum_cli::{Error, commands, config::ConfigFile, spectrum::Series};
use tracing::{Level, error};

/// Simulate a damped, driven pendulum and analyze its trajectory.
#[derive(Parser, Debug)]
#[command(name = "pendulum", version, about)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate the configured model and write its trajectory.
    Simulate(SimulateArgs),

    /// Compute the discrete Fourier transform of a trajectory.
    Spectrum(SpectrumArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// TOML configuration file (default: the reference scenario).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Trajectory output file.
    #[arg(long, short, default_value = "points.csv")]
    output: PathBuf,

    /// Override the total simulated time.
    #[arg(long)]
    total_time: Option<f64>,

    /// Override the fixed step size.
    #[arg(long)]
    step_size: Option<f64>,

    /// Override the initial angle.
    #[arg(long, allow_hyphen_values = true)]
    theta0: Option<f64>,

    /// Override the initial angular velocity.
    #[arg(long, allow_hyphen_values = true)]
    omega0: Option<f64>,

    /// Override the warm-up threshold.
    #[arg(long, allow_hyphen_values = true)]
    warmup: Option<f64>,
}

#[derive(Args, Debug)]
struct SpectrumArgs {
    /// Trajectory file to read.
    #[arg(long, short, default_value = "points.csv")]
    input: PathBuf,

    /// Spectrum output file.
    #[arg(long, short, default_value = "fft.csv")]
    output: PathBuf,

    /// Trajectory column to transform.
    #[arg(long, value_enum, default_value_t = Series::Angle)]
    series: Series,

    /// Number of frequency bins (default: half the sample count plus one).
    #[arg(long)]
    bins: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(command: Command) -> Result<(), Error> {
    match command {
        Command::Simulate(args) => {
            let mut config = match &args.config {
                Some(path) => ConfigFile::load(path)?,
                None => ConfigFile::default(),
            };
            apply_overrides(&mut config, &args);
            commands::simulate(&config, &args.output)?;
        }
        Command::Spectrum(args) => {
            commands::spectrum(&args.input, &args.output, args.series, args.bins)?;
        }
    }
    Ok(())
}

fn apply_overrides(config: &mut ConfigFile, args: &SimulateArgs) {
    let run = &mut config.run;
    if let Some(total_time) = args.total_time {
        run.total_time = total_time;
    }
    if let Some(step_size) = args.step_size {
        run.step_size = step_size;
    }
    if let Some(theta) = args.theta0 {
        run.initial_theta = theta;
    }
    if let Some(omega) = args.omega0 {
        run.initial_omega = omega;
    }
    if let Some(warmup) = args.warmup {
        run.warmup = warmup;
    }
}

/// Formats an error with its full source chain.
fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
