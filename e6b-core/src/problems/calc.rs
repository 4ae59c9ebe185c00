//! Time, speed, distance and fuel problems on the calculator side.
//!
//! All of these are solved by setting a rate against the rate pointer (60).

use crate::Problem;
use crate::format::{n, t};
use crate::params::{DistanceSpeedTimeParams, FuelParams};

#[cfg(test)]
mod tests;

#[must_use]
pub fn speed(params: &DistanceSpeedTimeParams) -> Problem {
    let (speed, time, distance) =
        (n(params.speed.into_knots()), t(params.time), n(params.distance.into_nm()));

    Problem::new(
        format!("Groundspeed (knots): travelled {distance} nm in {time}"),
        format!("{speed} kt groundspeed"),
        vec![
            format!("Find the distance {distance} nm on the outer scale"),
            format!("Rotate until the time {time} on the inner scale is underneath {distance}"),
            format!("Read the speed {speed} kt on the outer scale above the rate pointer (60)"),
        ],
    )
}

#[must_use]
pub fn time(params: &DistanceSpeedTimeParams) -> Problem {
    let (speed, time, distance) =
        (n(params.speed.into_knots()), t(params.time), n(params.distance.into_nm()));

    Problem::new(
        format!("Time enroute: travelling {distance} nm at {speed} kt"),
        format!("{time} enroute"),
        vec![
            format!(
                "Rotate until the airspeed {speed} kt appears on the outer scale above the rate \
                 pointer (60)"
            ),
            format!("Find the distance {distance} nm on the outer scale"),
            format!("Read the time {time} on the inner scale below {distance}"),
        ],
    )
}

#[must_use]
pub fn distance(params: &DistanceSpeedTimeParams) -> Problem {
    let (speed, time, distance) =
        (n(params.speed.into_knots()), t(params.time), n(params.distance.into_nm()));

    Problem::new(
        format!("Distance travelled: flying for {time} at {speed} kt"),
        format!("{distance} nm travelled"),
        vec![
            format!("Rotate until the speed {speed} kt appears above the rate pointer (60)"),
            format!("Find the time {time} on the inner scale"),
            format!("Read the distance {distance} nm on the outer scale above {time}"),
        ],
    )
}

#[must_use]
pub fn fuel_rate(params: &FuelParams) -> Problem {
    let (gph, endurance, fuel) =
        (n(params.burn_rate.into_gph()), t(params.endurance), n(params.fuel.into_us_gallons()));

    Problem::new(
        format!("Fuel-consumption rate (gph): used {fuel} gallons in {endurance}"),
        format!("Consuming {gph} gph"),
        vec![
            format!("Find {fuel} gallons on the outer scale"),
            format!("Rotate until the time {endurance} appears on the inner scale below {fuel}"),
            format!("Read the fuel consumption {gph} gph above the rate pointer (60)"),
        ],
    )
}

#[must_use]
pub fn fuel(params: &FuelParams) -> Problem {
    let (gph, endurance, fuel) =
        (n(params.burn_rate.into_gph()), t(params.endurance), n(params.fuel.into_us_gallons()));

    Problem::new(
        format!("Fuel required (gallons): flying for {endurance}, consuming {gph} gph"),
        format!("{fuel} gallons required"),
        vec![
            format!(
                "Rotate until the fuel consumption {gph} gph appears above the rate pointer (60)"
            ),
            format!("Find the endurance {endurance} on the inner scale"),
            format!("Read {fuel} gallons fuel required on the outer scale above {endurance}"),
        ],
    )
}

#[must_use]
pub fn endurance(params: &FuelParams) -> Problem {
    let (gph, endurance, fuel) =
        (n(params.burn_rate.into_gph()), t(params.endurance), n(params.fuel.into_us_gallons()));

    Problem::new(
        format!("Endurance: {fuel} gallons fuel onboard, consuming {gph} gph"),
        format!("{endurance} endurance"),
        vec![
            format!(
                "Rotate until the fuel consumption {gph} gph appears above the rate pointer (60)"
            ),
            format!("Find the fuel available {fuel} gallons on the outer scale"),
            format!("Read the endurance {endurance} on the inner scale below {fuel}"),
        ],
    )
}
