//! Wind side problems.

use math::Zero;

use crate::Problem;
use crate::format::{n, s};
use crate::params::{RunwayWindParams, WindProblemParams};

#[cfg(test)]
mod tests;

/// Heading to fly for a known course and wind.
#[must_use]
pub fn heading(params: &WindProblemParams) -> Problem {
    let w = &params.triangle;
    let side = w.crosswind_side();
    let (verb, preposition) = side.correction_words();
    let wca = w.wind_correction_angle.abs().into_degrees();

    Problem::new(
        format!(
            "Heading: {} kt true airspeed, course {}°, wind from {}° @ {} kt",
            n(w.true_airspeed.into_knots()),
            n(w.course.degrees()),
            n(w.wind_from.degrees()),
            n(w.wind_speed.into_knots()),
        ),
        format!("Fly heading {}°", n(w.heading.degrees())),
        vec![
            format!(
                "Set the wind direction {}° under the \"true index\" pointer",
                n(w.wind_from.degrees())
            ),
            format!(
                "Make a pencil mark for the wind speed {} kt straight up from the centre grommet",
                n(w.wind_speed.into_knots())
            ),
            format!(
                "Rotate to set the course {}° next to the \"true index\" pointer",
                n(w.course.degrees())
            ),
            format!(
                "Slide the card until the pencil mark is over the true airspeed {} kt",
                n(w.true_airspeed.into_knots())
            ),
            format!(
                "Read the wind-correction angle {}° to the {} under the pencil mark",
                n(wca),
                s(side.name())
            ),
            format!(
                "{verb} {}° {preposition} the course {}° to get the heading {}°",
                n(wca),
                n(w.course.degrees()),
                n(w.heading.degrees())
            ),
        ],
    )
}

/// Groundspeed for a known course and wind.
#[must_use]
pub fn groundspeed(params: &WindProblemParams) -> Problem {
    let w = &params.triangle;

    Problem::new(
        format!(
            "Groundspeed (kt): {} kt true airspeed, course {}°, wind from {}° @ {} kt",
            n(w.true_airspeed.into_knots()),
            n(w.course.degrees()),
            n(w.wind_from.degrees()),
            n(w.wind_speed.into_knots()),
        ),
        format!("{} kt groundspeed", n(w.groundspeed.into_knots())),
        vec![
            format!(
                "Rotate to set the wind direction {}° under the \"true index\" pointer",
                n(w.wind_from.degrees())
            ),
            format!(
                "Make a pencil mark for the wind speed {} kt straight up from the centre grommet",
                n(w.wind_speed.into_knots())
            ),
            format!(
                "Rotate to set the course {}° next to the \"true index\" pointer",
                n(w.course.degrees())
            ),
            format!(
                "Slide the card until the pencil mark is over the true airspeed {} kt",
                n(w.true_airspeed.into_knots())
            ),
            format!(
                "Read the groundspeed {} kt under the centre grommet",
                n(w.groundspeed.into_knots())
            ),
        ],
    )
}

/// Wind aloft worked backwards from the heading and groundspeed actually flown.
#[must_use]
pub fn wind_aloft(params: &WindProblemParams) -> Problem {
    let w = &params.triangle;
    let side = s(w.crosswind_side().name());
    let wca = w.wind_correction_angle.abs().into_degrees();

    Problem::new(
        format!(
            "Wind aloft: {} kt true airspeed, course {}°, heading {}°, {} kt groundspeed",
            n(w.true_airspeed.into_knots()),
            n(w.course.degrees()),
            n(w.heading.degrees()),
            n(w.groundspeed.into_knots()),
        ),
        format!("Wind from {}° @ {} kt", n(w.wind_from.degrees()), n(w.wind_speed.into_knots())),
        vec![
            format!(
                "Rotate to set the course {}° under the \"true index\" pointer",
                n(w.course.degrees())
            ),
            format!(
                "Slide the card until the centre grommet is over the groundspeed {} kt",
                n(w.groundspeed.into_knots())
            ),
            format!(
                "Compare the course {}° to the actual heading {}° to get a wind-correction angle \
                 of {}° to the {side}",
                n(w.course.degrees()),
                n(w.heading.degrees()),
                n(wca),
            ),
            format!(
                "Make a pencil mark where the {}° wind-correction angle on the {side} side crosses \
                 the {} kt true airspeed line",
                n(wca),
                n(w.true_airspeed.into_knots()),
            ),
            "Rotate so that the pencil mark is on the vertical line above the grommet".into(),
            format!(
                "The wind direction, {}°, is under the \"true index\" pointer",
                n(w.wind_from.degrees())
            ),
            format!(
                "The wind speed, {} kt, is the number of knots between the grommet and the pencil \
                 mark",
                n(w.wind_speed.into_knots())
            ),
        ],
    )
}

fn runway_wind_angle_step(params: &RunwayWindParams) -> [String; 2] {
    let angle = n(params.wind_angle.abs().into_degrees());
    [
        format!(
            "Compare the runway heading {}° and the wind direction {}° to get a wind angle of {angle}° \
             from the {} side of the runway",
            n(params.runway_heading().compass_degrees()),
            n(params.wind_from.degrees()),
            s(math::wind::CrosswindSide::of(params.crosswind).name()),
        ),
        format!(
            "Using the wind-component grid on the card part of the E6B, trace approximately a \
             {angle}° angle line until it intersects with a {} kt curve",
            n(params.wind_speed.into_knots()),
        ),
    ]
}

fn runway_prompt(kind: &str, params: &RunwayWindParams) -> String {
    format!(
        "{kind}: Runway {}, wind from {}° @ {} kt",
        params.runway,
        n(params.wind_from.degrees()),
        n(params.wind_speed.into_knots())
    )
}

/// Headwind component for a runway.
#[must_use]
pub fn runway_headwind(params: &RunwayWindParams) -> Problem {
    let along = math::wind::AlongTrackWind::of(params.headwind);
    let knots = n(params.headwind.abs().into_knots());
    let answer = if params.headwind.is_zero() {
        "No headwind".into()
    } else {
        format!("{knots} kt {}", s(along.name()))
    };

    let [compare, trace] = runway_wind_angle_step(params);
    Problem::new(
        runway_prompt("Headwind", params),
        answer,
        vec![
            compare,
            trace,
            format!(
                "Look directly left and read approximately {knots} kt on the \"Headwind component\" \
                 axis"
            ),
        ],
    )
}

/// Crosswind component for a runway.
#[must_use]
pub fn runway_crosswind(params: &RunwayWindParams) -> Problem {
    let side = math::wind::CrosswindSide::of(params.crosswind);
    let knots = n(params.crosswind.abs().into_knots());
    let answer = if params.crosswind.is_zero() {
        "No crosswind".into()
    } else {
        format!("{knots} kt crosswind from the {} side of the runway", s(side.name()))
    };

    let [compare, trace] = runway_wind_angle_step(params);
    Problem::new(
        runway_prompt("Crosswind", params),
        answer,
        vec![
            compare,
            trace,
            format!(
                "Look directly down and read approximately {knots} kt on the \"Crosswind \
                 component\" axis"
            ),
        ],
    )
}
