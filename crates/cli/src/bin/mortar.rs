use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use mortar_calculator::config::load_ballistics;
use mortar_calculator::export::{report, table};
use mortar_calculator::fire_control::from_config;
use mortar_calculator::{BearingMode, FireControl, Point3, TrajectoryResult};
use tracing_subscriber::EnvFilter;

#[path = "mortar/coords.rs"]
mod coords;

/// Compute bearing, elevation, and time of flight for each charge.
#[derive(Parser, Debug)]
#[command(author, version, about = "Mortar firing-solution calculator")]
struct Cli {
    /// Launch point as "x, y, z"
    #[arg(long, value_parser = coords::parse_point, allow_hyphen_values = true)]
    launch: Point3,

    /// Target point as "x, y, z"
    #[arg(long, value_parser = coords::parse_point, allow_hyphen_values = true)]
    target: Point3,

    /// Charge index to solve for; repeat to select several (defaults to every charge)
    #[arg(long = "charge", short = 'c')]
    charges: Vec<u32>,

    /// Report only the primary bearing
    #[arg(long, default_value_t = false)]
    single_bearing: bool,

    /// Ballistic constants override (.toml, otherwise YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fire_control = match &cli.config {
        Some(path) => {
            let config = load_ballistics(path)
                .with_context(|| format!("loading ballistic constants from {}", path.display()))?;
            from_config(&config).context("validating ballistic constants")?
        }
        None => FireControl::default(),
    };
    let mode = if cli.single_bearing {
        BearingMode::Single
    } else {
        BearingMode::Dual
    };
    let fire_control = fire_control.with_bearing_mode(mode);

    let charges = fire_control.select(&cli.charges)?;
    let result = fire_control.solve_with(cli.launch, cli.target, &charges)?;
    tracing::info!(
        feasible = result.feasible().count(),
        requested = charges.len(),
        "firing solution computed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut out, &result)?,
        OutputFormat::Json => {
            let report = report::Report::new(cli.launch, cli.target, &result);
            report::write_json(&mut out, &report, true)?
        }
        OutputFormat::Csv => table::write_csv(&mut out, &result)?,
    }
    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_text(out: &mut dyn Write, result: &TrajectoryResult) -> io::Result<()> {
    match result.bearing_secondary_degrees {
        Some(secondary) => {
            writeln!(out, "Bearing 1: {:.2} degrees", result.bearing_primary_degrees)?;
            writeln!(out, "Bearing 2 (Opposite): {:.2} degrees", secondary)?;
        }
        None => writeln!(out, "Bearing: {:.2} degrees", result.bearing_primary_degrees)?,
    }
    writeln!(out, "Distance: {:.2} studs", result.horizontal_range)?;

    for solution in &result.solutions {
        let charge = solution.charge_index;
        match (solution.elevation_degrees, solution.time_of_flight_seconds) {
            (Some(elevation), Some(tof)) => {
                writeln!(out, "Elevation Angle for C{}: {:.2} degrees", charge, elevation)?;
                writeln!(out, "Time of Flight for C{}: {:.2} seconds", charge, tof)?;
            }
            _ => writeln!(
                out,
                "No feasible solution for C{} within angle limits.",
                charge
            )?,
        }
    }
    Ok(())
}
