//! trana-nav mission runner.
//!
//! Loads a grid map, powers the agent on at the entrance, runs the full
//! search-and-rescue mission and writes one audit log per mission.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use trana_nav::{Actuator, AuditLog, GridWorld, Navigator, Result, TranaConfig, TranaError};

/// Autonomous grid search-and-rescue mission runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file to run (a directory of maps with --batch)
    map: PathBuf,

    /// Directory for audit logs (overrides config)
    log_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run every *.txt map in the given directory
    #[arg(long)]
    batch: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trana_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.log_dir));

    let outcome = if args.batch {
        run_batch(&args.map, &log_dir, &config)
    } else {
        run_mission(&args.map, &log_dir, &config)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<TranaConfig> {
    match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            TranaConfig::load(path)
        }
        None => TranaConfig::discover(),
    }
}

/// Run a single mission; returns whether it succeeded.
fn run_mission(map_path: &Path, log_dir: &Path, config: &TranaConfig) -> Result<bool> {
    info!("starting mission: {}", map_path.display());

    let world = GridWorld::load(map_path)?;
    info!(
        "grid {}x{}, entrance at {}",
        world.width(),
        world.height(),
        world.entrance()
    );

    let actuator = Actuator::power_on(world);
    let mut navigator = Navigator::new(actuator, config.exploration.max_iterations);
    let report = navigator.execute();

    info!(
        "stats: {} cells visited, {} cells known, {} moves; found={} collected={} complete={}",
        report.cells_visited,
        report.cells_known,
        report.moves,
        report.human_found,
        report.human_collected,
        report.mission_complete
    );

    let log_path = AuditLog::log_path(map_path, log_dir);
    let audit = navigator.into_actuator().into_audit();
    info!("command sequence: {}", audit.command_sequence());
    audit.save(&log_path)?;

    Ok(report.success)
}

/// Run every `*.txt` map in a directory, in sorted order.
fn run_batch(dir: &Path, log_dir: &Path, config: &TranaConfig) -> Result<bool> {
    let mut maps: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    maps.sort();

    if maps.is_empty() {
        return Err(TranaError::MapFormat(format!(
            "no .txt maps in {}",
            dir.display()
        )));
    }

    let mut succeeded = 0;
    for map in &maps {
        match run_mission(map, log_dir, config) {
            Ok(true) => succeeded += 1,
            Ok(false) => {}
            Err(e) => error!("{}: {e}", map.display()),
        }
    }
    info!(
        "batch result: {succeeded}/{} missions succeeded",
        maps.len()
    );
    Ok(succeeded == maps.len())
}
