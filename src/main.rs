//! Hemodyn - systemic circulation simulator
//!
//! Runs the lumped circulation model and prints the final-cycle blood
//! pressure.
//!
//! # Usage
//!
//! ```bash
//! hemodyn                                # reference scenario
//! hemodyn scenario.yaml --cycles 20      # file plus overrides
//! hemodyn --csv trajectory.csv --stability
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use hemodyn_core::{
    config::{self, ScenarioConfig},
    error::Result,
    metrics::CycleStatistics,
    report, solver::stability, PressureMetrics, Simulator, SimulatorConfig,
};
use tracing::{info, Level};

/// Systemic circulation simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file (YAML); the reference scenario is used when omitted
    #[arg(value_name = "SCENARIO_FILE")]
    scenario: Option<PathBuf>,

    /// Number of cardiac cycles to simulate
    #[arg(short = 'n', long)]
    cycles: Option<usize>,

    /// Heart rate in beats per minute
    #[arg(long)]
    heart_rate: Option<f64>,

    /// Integration step in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Export the full trajectory as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Export two cycles of the elastance waveform as CSV
    #[arg(long, value_name = "PATH")]
    elastance_csv: Option<PathBuf>,

    /// Abort when any state magnitude exceeds this value
    #[arg(long)]
    divergence_limit: Option<f64>,

    /// Report the peak forward-Euler amplification factor
    #[arg(long)]
    stability: bool,

    /// Print min / mean / max of every compartment over the last cycle
    #[arg(long)]
    table: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match (args.quiet, args.verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Load the scenario
    let mut scenario = match &args.scenario {
        Some(path) => config::parse_file(path)?,
        None => ScenarioConfig::default(),
    };

    // Command-line overrides
    if let Some(cycles) = args.cycles {
        scenario.cycles = cycles;
    }
    if let Some(heart_rate) = args.heart_rate {
        scenario.heart_rate = heart_rate;
    }
    if let Some(dt) = args.dt {
        scenario.dt = dt;
    }

    let (params, x0) = scenario.into_parts()?;

    let mut sim_config = SimulatorConfig::new().with_stability_tracking(args.stability);
    if let Some(limit) = args.divergence_limit {
        sim_config = sim_config.with_divergence_limit(limit);
    }

    // Simulate
    let simulator = Simulator::with_config(params, sim_config)?;
    let result = simulator.run(&x0)?;

    // Report
    let metrics = PressureMetrics::final_cycle(&result.trajectory)?;
    let mut stdout = io::stdout().lock();
    report::write_summary(&mut stdout, &metrics)?;

    if args.table {
        let stats = CycleStatistics::final_cycle(&result.trajectory)?;
        report::write_cycle_table(&mut stdout, &stats)?;
    }

    if let Some(peak) = result.peak_amplification {
        let stable = stability::is_non_amplifying(peak);
        info!(peak, stable, "peak step amplification factor");
    }

    if let Some(path) = &args.csv {
        report::write_to_path(path, |out| report::write_trajectory_csv(out, &result.trajectory))?;
        info!(path = %path.display(), "trajectory written");
    }

    if let Some(path) = &args.elastance_csv {
        report::write_to_path(path, |out| report::write_elastance_csv(out, &result.elastance, 2))?;
        info!(path = %path.display(), "elastance written");
    }

    Ok(())
}
