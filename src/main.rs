use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, LevelFilter};

use cumd::{
    config::{Backend, RunConfig},
    driver,
};

/// Constant-energy molecular dynamics of FCC copper with per-atom energy reports
#[derive(Parser, Debug)]
#[command(name = "cumd", version, about)]
struct Cli {
    /// Crystal size and neighbor search strategy
    #[arg(long, value_enum, default_value_t = Backend::Accelerated)]
    backend: Backend,

    /// Initial temperature in K
    #[arg(long, default_value_t = 300.0)]
    temperature: f64,

    /// Timestep in fs
    #[arg(long, default_value_t = 5.0)]
    timestep: f64,

    /// Number of integration steps
    #[arg(long, default_value_t = 200)]
    steps: usize,

    /// Steps between energy reports
    #[arg(long, default_value_t = 10)]
    interval: usize,

    /// Extended-XYZ trajectory output
    #[arg(long, default_value = "cu.xyz")]
    trajectory: PathBuf,

    /// Do not write a trajectory
    #[arg(long)]
    no_trajectory: bool,

    /// Steps between trajectory frames
    #[arg(long, default_value_t = 10)]
    trajectory_interval: usize,

    /// Seed for the initial velocities
    #[arg(long)]
    seed: Option<u64>,

    /// Rescale initial velocities to the exact temperature
    #[arg(long)]
    force_temperature: bool,

    /// Remove centre-of-mass motion from the initial velocities
    #[arg(long)]
    zero_momentum: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            backend: cli.backend,
            temperature_k: cli.temperature,
            timestep_fs: cli.timestep,
            num_steps: cli.steps,
            report_interval: cli.interval,
            trajectory: (!cli.no_trajectory).then_some(cli.trajectory),
            trajectory_interval: cli.trajectory_interval,
            seed: cli.seed,
            force_temperature: cli.force_temperature,
            zero_momentum: cli.zero_momentum,
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = RunConfig::from(cli);
    match driver::run_md(&config, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
