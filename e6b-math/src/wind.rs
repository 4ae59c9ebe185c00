//! Wind triangle solutions as worked on the wind side of the E6B.
//!
//! All components are rounded to whole knots and whole degrees,
//! which is the precision the E6B grid can be read to.

use crate::rounding::round_half_up;
use crate::units::{Angle, Heading, Speed, TurnDirection};

#[cfg(test)]
mod tests;

/// Wind component along the course.
///
/// Positive values are headwinds and negative values are tailwinds.
#[must_use]
pub fn headwind(course: Heading, wind_from: Heading, wind_speed: Speed) -> Speed {
    let cos = relative_wind(course, wind_from).cos();
    Speed::from_knots(round_half_up(wind_speed.into_knots() * cos))
}

/// Wind component across the course.
///
/// Positive values blow from the right and negative values from the left.
#[must_use]
pub fn crosswind(course: Heading, wind_from: Heading, wind_speed: Speed) -> Speed {
    let sin = relative_wind(course, wind_from).sin();
    Speed::from_knots(round_half_up(wind_speed.into_knots() * sin))
}

// Plain difference of the bearings; the trig functions take care of wrapping.
fn relative_wind(course: Heading, wind_from: Heading) -> Angle {
    Angle::from_degrees(wind_from.degrees() - course.degrees())
}

/// Cosine of the crab angle needed to cancel `crosswind` at `true_airspeed`.
fn crab_cosine(true_airspeed: Speed, crosswind: Speed) -> f64 {
    let tas = true_airspeed.into_knots();
    let xw = crosswind.into_knots();
    tas / (tas * tas + xw * xw).sqrt()
}

/// Airspeed left along the course after crabbing into `crosswind`.
#[must_use]
pub fn effective_airspeed(true_airspeed: Speed, crosswind: Speed) -> Speed {
    let cos = crab_cosine(true_airspeed, crosswind);
    Speed::from_knots(round_half_up(true_airspeed.into_knots() * cos))
}

/// Signed wind-correction angle in whole degrees.
///
/// The angle turns towards the side the wind blows from:
/// positive (right) for a crosswind from the right or no crosswind at all,
/// negative (left) for a crosswind from the left.
#[must_use]
pub fn wind_correction_angle(true_airspeed: Speed, crosswind: Speed) -> Angle {
    let magnitude = Angle::acos(crab_cosine(true_airspeed, crosswind)).round();
    magnitude * CrosswindSide::of(crosswind).correction_direction()
}

/// The side of the aircraft a crosswind blows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrosswindSide {
    Left,
    Right,
}

impl CrosswindSide {
    /// Classifies a signed crosswind component. No crosswind counts as from the right.
    #[must_use]
    pub fn of(crosswind: Speed) -> Self {
        if crosswind.is_negative() { Self::Left } else { Self::Right }
    }

    /// The direction to turn into the wind.
    #[must_use]
    pub fn correction_direction(self) -> TurnDirection {
        match self {
            Self::Left => TurnDirection::CounterClockwise,
            Self::Right => TurnDirection::Clockwise,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str { self.correction_direction().side_name() }

    /// How the correction angle is applied to the course, as `(verb, preposition)`.
    #[must_use]
    pub fn correction_words(self) -> (&'static str, &'static str) {
        match self {
            Self::Left => ("Subtract", "from"),
            Self::Right => ("Add", "to"),
        }
    }
}

/// Whether the wind component along the course slows or speeds the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlongTrackWind {
    Headwind,
    Tailwind,
}

impl AlongTrackWind {
    /// Classifies a signed headwind component. No wind counts as a headwind.
    #[must_use]
    pub fn of(headwind: Speed) -> Self {
        if headwind.is_negative() { Self::Tailwind } else { Self::Headwind }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Headwind => "headwind",
            Self::Tailwind => "tailwind",
        }
    }

    /// How the component is applied to the airspeed, as `(verb, preposition)`.
    #[must_use]
    pub fn correction_words(self) -> (&'static str, &'static str) {
        match self {
            Self::Headwind => ("Subtract", "from"),
            Self::Tailwind => ("Add", "to"),
        }
    }
}

/// A solved wind triangle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct WindTriangle {
    /// Desired track over the ground.
    pub course:                Heading,
    pub true_airspeed:         Speed,
    /// Direction the wind blows from.
    pub wind_from:             Heading,
    pub wind_speed:            Speed,
    /// Positive for a headwind, negative for a tailwind.
    pub headwind:              Speed,
    /// Positive from the right, negative from the left.
    pub crosswind:             Speed,
    /// Airspeed along the course while crabbing.
    pub effective_airspeed:    Speed,
    pub groundspeed:           Speed,
    /// Signed angle from the course to the heading.
    pub wind_correction_angle: Angle,
    pub heading:               Heading,
}

impl WindTriangle {
    /// Solves for heading and groundspeed given the course, airspeed and wind.
    ///
    /// The caller must ensure `true_airspeed` is positive.
    #[must_use]
    pub fn solve(
        course: Heading,
        true_airspeed: Speed,
        wind_from: Heading,
        wind_speed: Speed,
    ) -> Self {
        let headwind = headwind(course, wind_from, wind_speed);
        let crosswind = crosswind(course, wind_from, wind_speed);
        let effective_airspeed = effective_airspeed(true_airspeed, crosswind);
        let wind_correction_angle = wind_correction_angle(true_airspeed, crosswind);

        Self {
            course,
            true_airspeed,
            wind_from,
            wind_speed,
            headwind,
            crosswind,
            effective_airspeed,
            groundspeed: effective_airspeed - headwind,
            wind_correction_angle,
            heading: course + wind_correction_angle,
        }
    }

    #[must_use]
    pub fn crosswind_side(&self) -> CrosswindSide { CrosswindSide::of(self.crosswind) }

    #[must_use]
    pub fn along_track(&self) -> AlongTrackWind { AlongTrackWind::of(self.headwind) }
}
