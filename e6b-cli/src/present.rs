//! Plain text rendering for the terminal.

use std::fmt::{self, Write};

use e6b::format::n;
use e6b::params::{DensityAltitudeParams, WindProblemParams};
use e6b::{Catalog, Problem};
use math::convert::ConversionPair;
use math::{Altitude, RoundingPolicy, Temp};


/// Which parts of a problem are printed below the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    pub answer: bool,
    pub steps:  bool,
}

pub fn catalog(out: &mut impl Write, catalog: &Catalog) -> fmt::Result {
    for key in catalog.keys() {
        writeln!(out, "{:<18}{:<12}{}", key.name(), key.side().to_string(), key.level())?;
    }
    Ok(())
}

pub fn problem(
    out: &mut impl Write,
    number: usize,
    problem: &Problem,
    reveal: Reveal,
) -> fmt::Result {
    writeln!(out, "{number}. {}", problem.prompt)?;
    if reveal.answer {
        writeln!(out, "   Answer: {}", problem.answer)?;
    }
    if reveal.steps {
        for (index, step) in problem.steps.iter().enumerate() {
            writeln!(out, "   {}) {step}", index + 1)?;
        }
    }
    Ok(())
}

pub fn wind(out: &mut impl Write, params: &WindProblemParams) -> fmt::Result {
    let w = &params.triangle;
    writeln!(out, "{}: {} kt", w.along_track().name(), n(w.headwind.abs().into_knots()))?;
    writeln!(
        out,
        "crosswind: {} kt from the {}",
        n(w.crosswind.abs().into_knots()),
        w.crosswind_side().name()
    )?;
    writeln!(out, "effective airspeed: {} kt", n(w.effective_airspeed.into_knots()))?;
    writeln!(out, "wind correction angle: {}°", n(w.wind_correction_angle.into_degrees()))?;
    writeln!(out, "heading: {:03}°", w.heading.degrees())?;
    writeln!(out, "groundspeed: {} kt", n(w.groundspeed.into_knots()))
}

pub fn conversion(
    out: &mut impl Write,
    pair: &ConversionPair,
    rounding: RoundingPolicy,
) -> fmt::Result {
    writeln!(
        out,
        "{} {} = {} {unit} (about {} {unit})",
        n(pair.value),
        pair.unit,
        n(pair.converted),
        n(rounding.apply(pair.converted)),
        unit = pair.converted_unit,
    )
}

pub fn density_altitude(
    out: &mut impl Write,
    pressure_altitude: Altitude,
    outside_air_temp: Temp,
    density_altitude: Altitude,
) -> fmt::Result {
    writeln!(out, "pressure altitude: {} ft", n(pressure_altitude.into_feet()))?;
    writeln!(out, "outside air temperature: {} °C", n(outside_air_temp.into_celsius()))?;
    writeln!(out, "density altitude: {} ft", n(density_altitude.into_feet()))
}

pub fn true_airspeed(out: &mut impl Write, params: &DensityAltitudeParams) -> fmt::Result {
    writeln!(out, "calibrated airspeed: {} kt", n(params.calibrated_airspeed.into_knots()))?;
    writeln!(out, "true airspeed: {} kt", n(params.true_airspeed.into_knots()))
}
