use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::atmosphere_system::atmosphere::AtmosphereModel;
use crate::constants::FIELD_DELIMITER;
use crate::errors::SimulationError;
use crate::trajectory_system::trajectory::Trajectory;
use crate::utils::timer::ScopeTimer;

pub const REPORT_HEADER: [&str; 6] = [
    "Altitude [m]",
    "Velocity [m/s]",
    "Temperature [K]",
    "Static Pressure [Pa]",
    "Static Density [kg/m^3]",
    "Dynamic Pressure [Pa]",
];

/// Evaluates the atmosphere model for every trajectory sample and writes the
/// report: one header row, then one data row per sample in input order. The
/// writer is flushed before returning so a successful result means the file
/// is complete on disk.
pub fn write_report(
    path: &Path,
    trajectory: &Trajectory,
    model: &AtmosphereModel,
) -> Result<(), SimulationError> {
    let _timer = ScopeTimer::new("printing csv");
    info!("Writing report to {}", path.display());

    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .from_path(path)?;

    writer.write_record(REPORT_HEADER)?;

    for sample in trajectory.samples() {
        writer.write_record(&[
            sample.altitude.to_string(),
            sample.velocity.to_string(),
            model.temperature(sample.altitude).to_string(),
            model.pressure(sample.altitude).to_string(),
            model.density(sample.altitude).to_string(),
            model
                .dynamic_pressure(sample.velocity, sample.altitude)
                .to_string(),
        ])?;
    }

    writer.flush()?;
    info!("{} rows written", trajectory.len());

    Ok(())
}
