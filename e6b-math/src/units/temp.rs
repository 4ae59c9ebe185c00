use std::marker::PhantomData;
use std::{fmt, ops};

use super::{DtZero, Quantity};

pub struct TempBase;

/// Difference in temperature.
///
/// Always in celsius degrees (which is equivalent to kelvins in terms of deltas).
pub type TempDelta = Quantity<TempBase, DtZero>;

impl TempDelta {
    #[must_use]
    pub const fn from_celsius_degrees(degrees: f64) -> Self { Self(degrees, PhantomData) }

    #[must_use]
    pub const fn into_celsius_degrees(self) -> f64 { self.0 }
}

impl fmt::Debug for TempDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempDelta").field("celsius", &self.0).finish()
    }
}

/// Absolute temperature value.
///
/// Internal representation is the difference from the freezing point of water,
/// so whole Celsius values stay exact.
#[derive(Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Temp(pub TempDelta);

/// Standard sea level temperature.
pub const ISA_SEA_LEVEL_TEMPERATURE: Temp = Temp::from_celsius(15.);

impl Temp {
    /// Creates an absolute temperature from a Celsius value.
    #[must_use]
    pub const fn from_celsius(celsius: f64) -> Self { Self(TempDelta::from_celsius_degrees(celsius)) }

    /// Converts an absolute temperature into a Celsius value.
    #[must_use]
    pub const fn into_celsius(self) -> f64 { self.0.0 }

    /// Rounds to the nearest whole degree Celsius.
    #[must_use]
    pub fn round(self) -> Self { Self(self.0.round()) }
}

impl fmt::Debug for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Temperature").field("celsius", &self.into_celsius()).finish()
    }
}

impl ops::Add<TempDelta> for Temp {
    type Output = Temp;

    fn add(self, rhs: TempDelta) -> Self::Output { Temp(self.0 + rhs) }
}

impl ops::Sub<TempDelta> for Temp {
    type Output = Temp;

    fn sub(self, rhs: TempDelta) -> Self::Output { Temp(self.0 - rhs) }
}

impl ops::Sub for Temp {
    type Output = TempDelta;

    fn sub(self, rhs: Self) -> Self::Output { self.0 - rhs.0 }
}
