//! Problems worked in the altitude windows, plus climb planning.

use math::RoundingPolicy;

use crate::Problem;
use crate::format::n;
use crate::params::{ClimbParams, DensityAltitudeParams, TrueAltitudeParams};


#[must_use]
pub fn density_altitude(params: &DensityAltitudeParams) -> Problem {
    let pressure_altitude = params.pressure_altitude;
    let oat = n(params.outside_air_temp.into_celsius());
    let density_altitude = params.density_altitude.round_to(1000.);

    Problem::new(
        format!(
            "Density altitude (nearest 1,000 ft): {} ft pressure altitude, {oat}°C outside air \
             temperature",
            n(pressure_altitude.into_feet())
        ),
        format!("Approximately {} ft density altitude", n(density_altitude.into_feet())),
        vec![
            format!(
                "In the bottom section of the True Airspeed window, line up {} (thousand feet) \
                 pressure altitude with {oat}°C",
                n(pressure_altitude.round_to(1000.).into_thousand_feet())
            ),
            format!(
                "In the top section, read {} (thousand feet) under the Density Altitude pointer",
                n(density_altitude.into_thousand_feet())
            ),
        ],
    )
}

#[must_use]
pub fn true_airspeed(params: &DensityAltitudeParams) -> Problem {
    let cas = n(params.calibrated_airspeed.into_knots());
    let tas = n(params.true_airspeed.into_knots());
    let oat = n(params.outside_air_temp.into_celsius());

    Problem::new(
        format!(
            "True airspeed (knots): {cas} kt calibrated airspeed, {} ft pressure altitude, \
             {oat}°C outside air temperature",
            n(params.pressure_altitude.into_feet())
        ),
        format!("{tas} kt true airspeed"),
        vec![
            format!(
                "In the True Airspeed window, line up {} (thousand feet) pressure altitude with \
                 {oat}°C",
                n(params.pressure_altitude.round_to(1000.).into_thousand_feet())
            ),
            format!("Find the calibrated airspeed {cas} kt on the inner scale of the main circle"),
            format!("Read the true airspeed {tas} kt on the outer scale above {cas}"),
        ],
    )
}

#[must_use]
pub fn true_altitude(params: &TrueAltitudeParams, rounding: RoundingPolicy) -> Problem {
    let station = n(params.station_elevation.into_feet());
    let indicated = n(params.indicated_altitude.into_feet());
    let height = n(params.height_above_station().into_feet());
    let oat = n(params.outside_air_temp.into_celsius());
    let true_altitude = n(params.true_altitude.into_feet());
    let true_height =
        n((params.true_altitude - params.station_elevation).approx(rounding).into_feet());

    Problem::new(
        format!(
            "True altitude: {indicated} ft indicated altitude, {oat}°C OAT, {} ft pressure \
             altitude, {station} ft MSL station elevation",
            n(params.pressure_altitude.into_feet())
        ),
        format!("{true_altitude} ft true altitude"),
        vec![
            format!(
                "Subtract {station} ft station elevation from {indicated} ft indicated altitude to \
                 get {height} ft indicated altitude above station"
            ),
            format!(
                "In the True Altitude window, line up {} (thousand feet) pressure altitude with \
                 {oat}°C",
                n(params.pressure_altitude.round_to(1000.).into_thousand_feet())
            ),
            format!("Find indicated altitude above station {height} ft on the main inner scale"),
            format!(
                "Read approximate true altitude above station {true_height} ft on the outer scale \
                 above {height}"
            ),
            format!(
                "Add {true_height} ft to the station elevation {station} ft to get the approximate \
                 true altitude, {true_altitude} ft"
            ),
        ],
    )
}

/// Climb gradient from a climb rate.
#[must_use]
pub fn climb_gradient(params: &ClimbParams) -> Problem {
    let gs = n(params.groundspeed.into_knots());
    let fpm = n(params.climb_rate.into_fpm());
    let gradient = n(params.gradient);

    Problem::new(
        format!("Climb gradient (ft/nm): {gs} kt groundspeed, {fpm} fpm climb rate"),
        format!("{gradient} ft/nm climb gradient"),
        vec![
            format!("Rotate until the groundspeed {gs} kt appears above the rate pointer (60)"),
            format!("Find the climb rate {fpm} fpm on the inner scale"),
            format!("Read the climb gradient {gradient} ft/nm on the outer scale above {fpm}"),
        ],
    )
}

/// Climb rate required for a climb gradient.
#[must_use]
pub fn climb_rate(params: &ClimbParams) -> Problem {
    let gs = n(params.groundspeed.into_knots());
    let fpm = n(params.climb_rate.into_fpm());
    let gradient = n(params.gradient);

    Problem::new(
        format!("Climb rate required (fpm): {gs} kt groundspeed, {gradient} ft/nm gradient"),
        format!("{fpm} fpm climb rate required"),
        vec![
            format!("Rotate until the groundspeed {gs} kt appears above the rate pointer (60)"),
            format!("Find the climb gradient {gradient} ft/nm on the outer scale"),
            format!("Read the climb rate {fpm} fpm on the inner scale below {gradient}"),
        ],
    )
}
