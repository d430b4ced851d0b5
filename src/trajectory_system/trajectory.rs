use std::path::Path;

use csv::ReaderBuilder;
use log::{info, warn};

use crate::constants::FIELD_DELIMITER;
use crate::errors::SimulationError;
use crate::utils::timer::ScopeTimer;

/// One ascent trajectory point: how high and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub altitude: f64, // m
    pub velocity: f64, // m/s
}

/// Parsed ascent pattern. Altitudes and velocities are kept as the two
/// columns they came from; `samples` pairs them up, truncating to the shorter
/// column if the input was ragged.
#[derive(Debug, Default, Clone)]
pub struct Trajectory {
    altitudes: Vec<f64>,
    velocities: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.altitudes.len().min(self.velocities.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.altitudes
            .iter()
            .zip(self.velocities.iter())
            .map(|(&altitude, &velocity)| Sample { altitude, velocity })
    }
}

/// Reads an ascent pattern from a `;`-delimited file.
///
/// The file is treated as a flat token stream alternating altitude and
/// velocity, so pairs may span lines. Non-numeric tokens are reported and
/// read as 0 to keep the alternation in phase; empty tokens are ignored.
pub fn load_trajectory(path: &Path) -> Result<Trajectory, SimulationError> {
    let _timer = ScopeTimer::new("reading csv");
    info!("Reading ascent pattern from {}", path.display());

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let trajectory = read_token_stream(&mut reader)?;
    info!("{} samples parsed", trajectory.len());

    Ok(trajectory)
}

fn read_token_stream<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Trajectory, SimulationError> {
    let mut trajectory = Trajectory::default();
    let mut next_is_velocity = false;

    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }

            let value = match field.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!("Non-numeric token '{}' in ascent pattern, using 0", field);
                    0.0
                }
            };

            if next_is_velocity {
                trajectory.velocities.push(value);
            } else {
                trajectory.altitudes.push(value);
            }
            next_is_velocity = !next_is_velocity;
        }
    }

    if trajectory.altitudes.len() != trajectory.velocities.len() {
        warn!(
            "Unequal column lengths ({} altitudes, {} velocities), truncating to {}",
            trajectory.altitudes.len(),
            trajectory.velocities.len(),
            trajectory.len()
        );
    }

    Ok(trajectory)
}
