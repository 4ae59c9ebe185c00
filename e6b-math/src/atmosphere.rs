//! Rule-of-thumb atmosphere used by the E6B altitude and airspeed windows.
//!
//! These are linear approximations of the ISA model,
//! accurate enough for the values read off the computer.

use crate::units::{Altitude, ISA_SEA_LEVEL_TEMPERATURE, Speed, Temp, TempDelta};


/// Constants of the simplified atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtmosphereModel {
    /// Standard temperature at sea level.
    pub isa_sea_level_temp:          Temp,
    /// Standard temperature drop per 1000 ft, in °C.
    pub lapse_per_thousand_feet:     f64,
    /// Density altitude change per °C of deviation from ISA, in ft.
    pub density_altitude_per_degree: f64,
    /// TAS gain per 1000 ft of density altitude.
    pub tas_linear_coefficient:      f64,
    /// Additional TAS gain per (1000 ft)² of density altitude.
    pub tas_quadratic_coefficient:   f64,
    /// True altitude change per 1000 ft above the station per °C of deviation from ISA, in ft.
    pub true_altitude_correction:    f64,
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self {
            isa_sea_level_temp:          ISA_SEA_LEVEL_TEMPERATURE,
            lapse_per_thousand_feet:     1.98,
            density_altitude_per_degree: 120.,
            tas_linear_coefficient:      0.012,
            tas_quadratic_coefficient:   0.0004,
            true_altitude_correction:    4.,
        }
    }
}

/// An atmosphere constant that cannot produce meaningful results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("atmosphere constant {name} must be {requirement}, got {value}")]
pub struct InvalidConstant {
    pub name:        &'static str,
    pub requirement: &'static str,
    pub value:       f64,
}

impl AtmosphereModel {
    /// Checks that every constant is finite and the scale factors are positive.
    pub fn validate(&self) -> Result<(), InvalidConstant> {
        let positive = [
            ("lapse_per_thousand_feet", self.lapse_per_thousand_feet),
            ("density_altitude_per_degree", self.density_altitude_per_degree),
            ("true_altitude_correction", self.true_altitude_correction),
        ];
        let non_negative = [
            ("tas_linear_coefficient", self.tas_linear_coefficient),
            ("tas_quadratic_coefficient", self.tas_quadratic_coefficient),
        ];

        if !self.isa_sea_level_temp.into_celsius().is_finite() {
            return Err(InvalidConstant {
                name:        "isa_sea_level_temp",
                requirement: "finite",
                value:       self.isa_sea_level_temp.into_celsius(),
            });
        }

        for (name, value) in positive {
            if !(value.is_finite() && value > 0.) {
                return Err(InvalidConstant { name, requirement: "finite and positive", value });
            }
        }

        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.) {
                return Err(InvalidConstant { name, requirement: "finite and non-negative", value });
            }
        }

        Ok(())
    }

    /// Standard temperature at the given pressure altitude.
    #[must_use]
    pub fn isa_temperature(&self, pressure_altitude: Altitude) -> Temp {
        self.isa_sea_level_temp - self.isa_lapse(pressure_altitude)
    }

    fn isa_lapse(&self, altitude: Altitude) -> TempDelta {
        TempDelta::from_celsius_degrees(altitude.into_thousand_feet() * self.lapse_per_thousand_feet)
    }

    /// Density altitude in whole feet.
    #[must_use]
    pub fn density_altitude(&self, pressure_altitude: Altitude, outside_air_temp: Temp) -> Altitude {
        let deviation = outside_air_temp - self.isa_temperature(pressure_altitude);
        let offset = Altitude::from_feet(
            deviation.into_celsius_degrees() * self.density_altitude_per_degree,
        );
        (pressure_altitude + offset).round()
    }

    /// True airspeed in whole knots for a calibrated airspeed flown at `density_altitude`.
    #[must_use]
    pub fn true_airspeed(&self, calibrated_airspeed: Speed, density_altitude: Altitude) -> Speed {
        let thousands = density_altitude.into_thousand_feet();
        let factor = 1.
            + thousands
                * (self.tas_linear_coefficient + thousands * self.tas_quadratic_coefficient);
        (calibrated_airspeed * factor).round()
    }

    /// Indicated altitude corrected for a non-standard temperature column above the station.
    ///
    /// `deviation` is the outside air temperature minus the ISA temperature.
    /// The result is not rounded.
    #[must_use]
    pub fn true_altitude(
        &self,
        indicated_altitude: Altitude,
        station_elevation: Altitude,
        deviation: TempDelta,
    ) -> Altitude {
        let column = (indicated_altitude - station_elevation).into_thousand_feet();
        indicated_altitude
            + Altitude::from_feet(
                column * deviation.into_celsius_degrees() * self.true_altitude_correction,
            )
    }
}
