use std::path::PathBuf;

use aerodynamics_simulation::*;
use anyhow::Result;
use clap::Parser;
use log::info;

/// Computes standard-atmosphere properties along an ascent trajectory and
/// writes them to a delimited report.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Ascent pattern input file (altitude;velocity pairs)
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Report output file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let trajectory = load_trajectory(&args.input)?;
    let model = AtmosphereModel::default();
    write_report(&args.output, &trajectory, &model)?;

    info!(
        "Computed aerodynamics for {} samples, report at {}",
        trajectory.len(),
        args.output.display()
    );

    Ok(())
}
