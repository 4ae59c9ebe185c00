use std::{fmt, ops};

use num_traits::Zero;

use super::Angle;


/// An absolute directional bearing.
#[derive(Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Heading(
    Angle, // always 0 <= heading < 360
);

impl Heading {
    /// Heading north.
    pub const NORTH: Self = Self(Angle::new(0.));
    /// Heading east.
    pub const EAST: Self = Self(Angle::new(90.));
    /// Heading south.
    pub const SOUTH: Self = Self(Angle::new(180.));
    /// Heading west.
    pub const WEST: Self = Self(Angle::new(270.));

    /// Creates a heading from an absolute bearing in degrees.
    ///
    /// Any finite value is accepted and normalized into `0..360`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        // `+ 0.` turns a negative zero into a positive one.
        let normalized = degrees.rem_euclid(Angle::FULL.into_degrees()) + 0.;
        if normalized >= Angle::FULL.into_degrees() {
            // rem_euclid rounds tiny negative values up to exactly 360
            Self::NORTH
        } else {
            Self(Angle::from_degrees(normalized))
        }
    }

    /// Returns the heading in degrees in the range 0..360.
    #[must_use]
    pub fn degrees(self) -> f64 { self.0.into_degrees() }

    /// Returns the heading in degrees in the range `(0, 360]`,
    /// i.e. north reads as 360 like on a runway or a compass rose.
    #[must_use]
    pub fn compass_degrees(self) -> f64 {
        if self.0.is_zero() { Angle::FULL.into_degrees() } else { self.degrees() }
    }

    /// Returns the heading of runway `number`, where runway 36 points north.
    #[must_use]
    pub fn from_runway(number: u8) -> Self { Self::from_degrees(f64::from(number) * 10.) }

    /// Degrees to turn from `self` to `other` in the given direction.
    /// The output is always in the range [0, FULL) for `Clockwise`,
    /// or (-FULL, 0] for `CounterClockwise`.
    #[must_use]
    pub fn distance(self, other: Heading, dir: TurnDirection) -> Angle {
        let mut output = other.0 - self.0;
        match dir {
            TurnDirection::Clockwise => {
                if output.is_negative() {
                    output += Angle::FULL;
                }
            }
            TurnDirection::CounterClockwise => {
                if output.is_positive() {
                    output -= Angle::FULL;
                }
            }
        }

        output
    }

    /// Returns the signed angle closest to zero such that
    /// adding it to `self` returns `other`.
    #[must_use]
    pub fn closest_distance(self, other: Heading) -> Angle {
        self.distance(other, self.closer_direction_to(other))
    }

    /// Returns the closer direction to turn towards `other`.
    ///
    /// Exactly opposite headings resolve to `Clockwise`.
    #[must_use]
    pub fn closer_direction_to(self, other: Heading) -> TurnDirection {
        if self.distance(other, TurnDirection::Clockwise) <= Angle::STRAIGHT {
            TurnDirection::Clockwise
        } else {
            TurnDirection::CounterClockwise
        }
    }

}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heading").field("degrees", &self.degrees()).finish()
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self { Self::from_degrees(degrees) }
}

impl From<Heading> for f64 {
    fn from(heading: Heading) -> Self { heading.degrees() }
}

/// Returns the shortest bearing change such that
/// adding the return value to `other` yields `self`.
impl ops::Sub for Heading {
    type Output = Angle;
    fn sub(self, other: Self) -> Angle { other.closest_distance(self) }
}

impl ops::Add<Angle> for Heading {
    type Output = Self;
    /// Offsets `self` by `angle` clockwise.
    fn add(self, angle: Angle) -> Self { Self::from_degrees((self.0 + angle).into_degrees()) }
}

/// The direction for a heading change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TurnDirection {
    /// A left, counter-clockwise turn that decreases the heading.
    CounterClockwise,
    /// A right, clockwise turn that increases the heading.
    Clockwise,
}

impl TurnDirection {
    /// The side this turn goes towards, as a pilot would say it.
    #[must_use]
    pub fn side_name(self) -> &'static str {
        match self {
            Self::CounterClockwise => "left",
            Self::Clockwise => "right",
        }
    }
}

impl ops::Mul<TurnDirection> for Angle {
    type Output = Self;

    fn mul(self, dir: TurnDirection) -> Self {
        match dir {
            TurnDirection::CounterClockwise => -self,
            TurnDirection::Clockwise => self,
        }
    }
}
