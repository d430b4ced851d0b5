use crate::constants::{
    ATMOSPHERIC_LAYER_COUNT, GRAVITY_SEA_LEVEL, MOLAR_MASS_AIR, SPECIFIC_GAS_CONSTANT_AIR,
    UNIVERSAL_GAS_CONSTANT,
};
use log::warn;

/// One band of the standard atmosphere, described by the conditions at its
/// lower boundary and the temperature lapse rate inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericLayer {
    pub base_altitude: f64,    // m
    pub base_pressure: f64,    // Pa
    pub base_temperature: f64, // K
    pub lapse_rate: f64,       // K/m
}

/// International Standard Atmosphere evaluator.
///
/// Holds the seven-layer table (troposphere up to the mesosphere boundary at
/// 71 km) and evaluates pressure, temperature, density and dynamic pressure
/// at a given altitude. The table is immutable once constructed; every
/// evaluation recomputes from it, no state is shared between calls.
#[derive(Debug, Clone)]
pub struct AtmosphereModel {
    layers: [AtmosphericLayer; ATMOSPHERIC_LAYER_COUNT],
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        AtmosphereModel {
            layers: [
                // Troposphere (0 - 11 km)
                AtmosphericLayer {
                    base_altitude: 0.0,
                    base_pressure: 101_325.0,
                    base_temperature: 288.15,
                    lapse_rate: -0.0065,
                },
                // Tropopause (11 - 20 km), isothermal
                AtmosphericLayer {
                    base_altitude: 11_000.0,
                    base_pressure: 22_632.10,
                    base_temperature: 216.65,
                    lapse_rate: 0.0,
                },
                // Lower stratosphere (20 - 32 km)
                AtmosphericLayer {
                    base_altitude: 20_000.0,
                    base_pressure: 5_474.89,
                    base_temperature: 216.65,
                    lapse_rate: 0.001,
                },
                // Upper stratosphere (32 - 47 km)
                AtmosphericLayer {
                    base_altitude: 32_000.0,
                    base_pressure: 868.02,
                    base_temperature: 228.65,
                    lapse_rate: 0.0028,
                },
                // Stratopause (47 - 51 km), isothermal
                AtmosphericLayer {
                    base_altitude: 47_000.0,
                    base_pressure: 110.91,
                    base_temperature: 270.65,
                    lapse_rate: 0.0,
                },
                // Lower mesosphere (51 - 71 km)
                AtmosphericLayer {
                    base_altitude: 51_000.0,
                    base_pressure: 66.94,
                    base_temperature: 270.65,
                    lapse_rate: -0.0028,
                },
                // Upper mesosphere (71 km and above, open-ended)
                AtmosphericLayer {
                    base_altitude: 71_000.0,
                    base_pressure: 3.96,
                    base_temperature: 214.65,
                    lapse_rate: -0.002,
                },
            ],
        }
    }
}

impl AtmosphereModel {
    pub fn new(layers: [AtmosphericLayer; ATMOSPHERIC_LAYER_COUNT]) -> Self {
        AtmosphereModel { layers }
    }

    /// Static pressure in Pa at the given altitude, using the barometric
    /// formula of the layer the altitude falls in. Negative altitudes are
    /// reported and evaluate to 0.
    pub fn pressure(&self, altitude: f64) -> f64 {
        let Some(layer) = self.layer_at(altitude) else {
            return 0.0;
        };

        let height_above_base = altitude - layer.base_altitude;
        if layer.lapse_rate == 0.0 {
            // Isothermal layer: exponential pressure decay
            layer.base_pressure
                * (-(GRAVITY_SEA_LEVEL * MOLAR_MASS_AIR * height_above_base)
                    / (UNIVERSAL_GAS_CONSTANT * layer.base_temperature))
                    .exp()
        } else {
            let temperature_ratio = layer.base_temperature
                / (layer.base_temperature + layer.lapse_rate * height_above_base);
            layer.base_pressure
                * temperature_ratio.powf(
                    (GRAVITY_SEA_LEVEL * MOLAR_MASS_AIR)
                        / (UNIVERSAL_GAS_CONSTANT * layer.lapse_rate),
                )
        }
    }

    /// Static temperature in K at the given altitude, linear in each layer.
    /// Negative altitudes are reported and evaluate to 0.
    pub fn temperature(&self, altitude: f64) -> f64 {
        let Some(layer) = self.layer_at(altitude) else {
            return 0.0;
        };

        layer.base_temperature + layer.lapse_rate * (altitude - layer.base_altitude)
    }

    /// Static density in kg/m³, derived from pressure and temperature via the
    /// ideal gas law.
    pub fn density(&self, altitude: f64) -> f64 {
        let pressure = self.pressure(altitude);
        let temperature = self.temperature(altitude);

        if pressure > 0.0 && temperature > 0.0 {
            pressure / (SPECIFIC_GAS_CONSTANT_AIR * temperature)
        } else {
            0.0
        }
    }

    /// Dynamic pressure ½ρv² in Pa for the given velocity and altitude.
    pub fn dynamic_pressure(&self, velocity: f64, altitude: f64) -> f64 {
        self.density(altitude) * velocity.powi(2) / 2.0
    }

    // Layer boundaries are half-open on the lower bound: an altitude equal to
    // a base belongs to the layer beginning there. The topmost layer has no
    // upper cutoff.
    fn layer_at(&self, altitude: f64) -> Option<&AtmosphericLayer> {
        if altitude < self.layers[0].base_altitude {
            warn!("Altitude must be positive, got {} m", altitude);
            return None;
        }

        self.layers
            .iter()
            .rev()
            .find(|layer| altitude >= layer.base_altitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pressure_matches_table_at_layer_bases() {
        let model = AtmosphereModel::default();
        let expected = [
            (0.0, 101_325.0),
            (11_000.0, 22_632.10),
            (20_000.0, 5_474.89),
            (32_000.0, 868.02),
            (47_000.0, 110.91),
            (51_000.0, 66.94),
            (71_000.0, 3.96),
        ];

        for (altitude, base_pressure) in expected {
            assert_relative_eq!(model.pressure(altitude), base_pressure, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pressure_is_continuous_across_boundaries() {
        let model = AtmosphereModel::default();

        // Pressure just below a boundary, computed from the lower layer, must
        // agree with the tabulated base pressure of the upper layer.
        for boundary in [11_000.0, 20_000.0, 32_000.0, 47_000.0, 51_000.0, 71_000.0] {
            let below = model.pressure(boundary - 1e-3);
            let at = model.pressure(boundary);
            assert_relative_eq!(below, at, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_pressure_in_troposphere() {
        let model = AtmosphereModel::default();

        // ISA reference value at 5 km
        assert_relative_eq!(model.pressure(5_000.0), 54_020.0, max_relative = 1e-3);
    }

    #[test]
    fn test_temperature_profile() {
        let model = AtmosphereModel::default();

        assert_abs_diff_eq!(model.temperature(0.0), 288.15, epsilon = 1e-9);
        assert_abs_diff_eq!(model.temperature(5_000.0), 255.65, epsilon = 1e-9);
        assert_abs_diff_eq!(model.temperature(11_000.0), 216.65, epsilon = 1e-9);
        // Isothermal tropopause
        assert_abs_diff_eq!(model.temperature(15_000.0), 216.65, epsilon = 1e-9);
        // Positive lapse in the stratosphere
        assert_abs_diff_eq!(model.temperature(25_000.0), 221.65, epsilon = 1e-9);
        assert_abs_diff_eq!(model.temperature(32_000.0), 228.65, epsilon = 1e-9);
        // Open-ended top layer
        assert_abs_diff_eq!(model.temperature(80_000.0), 196.65, epsilon = 1e-9);
    }

    #[test]
    fn test_boundary_altitude_belongs_to_upper_layer() {
        let model = AtmosphereModel::default();

        // At exactly 11 km the tropopause formula applies: zero lapse, so the
        // pressure is exactly the tabulated base value.
        assert_abs_diff_eq!(model.pressure(11_000.0), 22_632.10, epsilon = 1e-9);
        assert_abs_diff_eq!(model.temperature(20_000.0), 216.65, epsilon = 1e-9);
    }

    #[test]
    fn test_density_follows_ideal_gas_law() {
        let model = AtmosphereModel::default();

        for altitude in [0.0, 1_000.0, 11_000.0, 25_000.0, 60_000.0, 90_000.0] {
            let expected = model.pressure(altitude)
                / (SPECIFIC_GAS_CONSTANT_AIR * model.temperature(altitude));
            assert_relative_eq!(model.density(altitude), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_density_at_sea_level() {
        let model = AtmosphereModel::default();

        assert_abs_diff_eq!(model.density(0.0), 1.225, epsilon = 1e-3);
    }

    #[test]
    fn test_dynamic_pressure() {
        let model = AtmosphereModel::default();

        assert_relative_eq!(
            model.dynamic_pressure(300.0, 11_000.0),
            16_376.0,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_zero_velocity_gives_zero_dynamic_pressure() {
        let model = AtmosphereModel::default();

        for altitude in [0.0, 11_000.0, 50_000.0, 100_000.0] {
            assert_abs_diff_eq!(model.dynamic_pressure(0.0, altitude), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_altitude_yields_sentinel_zero() {
        let model = AtmosphereModel::default();

        assert_eq!(model.pressure(-100.0), 0.0);
        assert_eq!(model.temperature(-100.0), 0.0);
        assert_eq!(model.density(-100.0), 0.0);
        assert_eq!(model.dynamic_pressure(250.0, -100.0), 0.0);
    }

    #[test]
    fn test_above_top_layer_extrapolates() {
        let model = AtmosphereModel::default();

        let pressure = model.pressure(85_000.0);
        assert!(pressure > 0.0 && pressure < 3.96);
        assert!(model.density(85_000.0) > 0.0);
    }
}
