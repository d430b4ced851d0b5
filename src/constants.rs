// Physical Constants
pub const GRAVITY_SEA_LEVEL: f64 = 9.80665; // m/s²
pub const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.3144598; // J/(mol·K)
pub const SPECIFIC_GAS_CONSTANT_AIR: f64 = 287.058; // J/(kg·K)

// Sea Level Reference Conditions
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Atmospheric Model Parameters
pub const ATMOSPHERIC_LAYER_COUNT: usize = 7;

// File Conventions
pub const FIELD_DELIMITER: u8 = b';';
pub const DEFAULT_INPUT_FILE: &str = "ascend_pattern.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "aerodynamics.csv";
