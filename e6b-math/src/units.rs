use std::marker::PhantomData;
use std::time::Duration;
use std::{cmp, fmt, ops};

use crate::{RoundingPolicy, rounding};

mod display;
pub use display::{Dimension, Unit};
mod heading;
pub use heading::{Heading, TurnDirection};
mod temp;
pub use temp::{ISA_SEA_LEVEL_TEMPERATURE, Temp, TempDelta};

/// Converts nautical miles to statute miles.
pub const MILES_PER_NM: f64 = 1.15078;
/// Converts nautical miles to kilometers.
pub const KM_PER_NM: f64 = 1.852;
/// Converts meters to feet, as marked on the E6B conversion scale.
pub const FEET_PER_METER: f64 = 3.281;
/// Converts US gallons to litres.
pub const LITRES_PER_US_GALLON: f64 = 3.78541;
/// Converts kilograms to pounds.
pub const POUNDS_PER_KG: f64 = 2.205;
/// Weight of one US gallon of avgas at ISA sea level.
pub const AVGAS_POUNDS_PER_US_GALLON: f64 = 6.01;
/// Converts hours to minutes.
pub const MINUTES_PER_HOUR: f64 = 60.;

pub struct Quantity<Base, Dt>(pub f64, pub PhantomData<(Base, Dt)>);

impl<Base, Dt> Quantity<Base, Dt> {
    pub const ZERO: Self = Self(0., PhantomData);

    pub const fn new(value: f64) -> Self { Self(value, PhantomData) }

    #[must_use]
    pub fn is_positive(self) -> bool { self.0 > 0. }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    /// Rounds the raw value to the nearest integer, ties towards positive infinity.
    #[must_use]
    pub fn round(self) -> Self { Self(rounding::round_half_up(self.0), PhantomData) }

    /// Rounds the raw value to the nearest multiple of `step`.
    #[must_use]
    pub fn round_to(self, step: f64) -> Self { Self(rounding::round_to(self.0, step), PhantomData) }

    /// Rounds the raw value according to `policy`.
    #[must_use]
    pub fn approx(self, policy: RoundingPolicy) -> Self { Self(policy.apply(self.0), PhantomData) }
}

impl<Base, Dt> Default for Quantity<Base, Dt> {
    fn default() -> Self { Self::ZERO }
}

impl<Base, Dt> num_traits::Zero for Quantity<Base, Dt> {
    fn zero() -> Self { Self::ZERO }

    fn is_zero(&self) -> bool { self.0 == 0. }
}

impl<Base, Dt> Clone for Quantity<Base, Dt> {
    fn clone(&self) -> Self { *self }
}

impl<Base, Dt> Copy for Quantity<Base, Dt> {}

impl<Base, Dt> PartialEq for Quantity<Base, Dt> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<Base, Dt> PartialOrd for Quantity<Base, Dt> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<Base, Dt> ops::Add for Quantity<Base, Dt> {
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<Base, Dt> ops::AddAssign for Quantity<Base, Dt> {
    fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl<Base, Dt> ops::Sub for Quantity<Base, Dt> {
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<Base, Dt> ops::SubAssign for Quantity<Base, Dt> {
    fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl<Base, Dt> ops::Mul<f64> for Quantity<Base, Dt> {
    type Output = Self;

    fn mul(self, other: f64) -> Self { Self(self.0 * other, PhantomData) }
}

impl<Base, Dt> ops::Neg for Quantity<Base, Dt> {
    type Output = Self;

    fn neg(self) -> Self { Self(-self.0, PhantomData) }
}

/// Used as `Dt` in `Quantity` to indicate that the unit is not a rate of change.
pub struct DtZero;
/// Used as `Dt` in `Quantity` to indicate that the unit is the hourly rate of change of
/// `Quantity<Dt = Dt>`.
pub struct Ddt<Dt>(Dt);

pub type DtOne = Ddt<DtZero>;

fn duration_minutes(duration: Duration) -> f64 { duration.as_secs_f64() / 60. }

/// Rate per hour times elapsed time.
///
/// The rate is scaled to a per-minute rate before multiplying,
/// which keeps whole-minute durations exact for E6B-style arithmetic.
impl<Base, Dt> ops::Mul<Duration> for Quantity<Base, Ddt<Dt>> {
    type Output = Quantity<Base, Dt>;

    fn mul(self, other: Duration) -> Self::Output {
        Quantity(self.0 / MINUTES_PER_HOUR * duration_minutes(other), PhantomData)
    }
}

pub struct LengthBase;

/// A horizontal distance. Internal representation is in nautical miles.
pub type Length = Quantity<LengthBase, DtZero>;

/// A linear speed (rate of [length](Length) change). Internal representation is in knots.
pub type Speed = Quantity<LengthBase, DtOne>;

pub struct AltitudeBase;

/// A vertical distance. Internal representation is in feet.
pub type Altitude = Quantity<AltitudeBase, DtZero>;

/// A vertical speed. Internal representation is in feet per hour.
pub type ClimbRate = Quantity<AltitudeBase, DtOne>;

pub struct VolumeBase;

/// A fluid volume. Internal representation is in US gallons.
pub type Volume = Quantity<VolumeBase, DtZero>;

/// A fuel consumption rate. Internal representation is in US gallons per hour.
pub type FuelFlow = Quantity<VolumeBase, DtOne>;

pub struct AngleBase;

/// A relative angle. Internal representation is in degrees.
pub type Angle = Quantity<AngleBase, DtZero>;

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length").field("nm", &self.into_nm()).finish()
    }
}

impl fmt::Debug for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speed").field("knots", &self.into_knots()).finish()
    }
}

impl fmt::Debug for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Altitude").field("feet", &self.into_feet()).finish()
    }
}

impl fmt::Debug for ClimbRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClimbRate").field("fpm", &self.into_fpm()).finish()
    }
}

impl fmt::Debug for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Volume").field("us_gallons", &self.into_us_gallons()).finish()
    }
}

impl fmt::Debug for FuelFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuelFlow").field("gph", &self.into_gph()).finish()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle").field("degrees", &self.into_degrees()).finish()
    }
}

impl Length {
    #[must_use]
    pub const fn from_nm(nm: f64) -> Self { Self(nm, PhantomData) }

    #[must_use]
    pub const fn into_nm(self) -> f64 { self.0 }
}

impl Speed {
    #[must_use]
    pub const fn from_knots(knots: f64) -> Self { Self(knots, PhantomData) }

    #[must_use]
    pub const fn into_knots(self) -> f64 { self.0 }
}

impl Altitude {
    #[must_use]
    pub const fn from_feet(feet: f64) -> Self { Self(feet, PhantomData) }

    #[must_use]
    pub const fn into_feet(self) -> f64 { self.0 }

    /// Altitude in thousands of feet, as read off the E6B altitude scales.
    #[must_use]
    pub const fn into_thousand_feet(self) -> f64 { self.0 / 1000. }
}

impl ClimbRate {
    #[must_use]
    pub const fn from_fpm(fpm: f64) -> Self { Self(fpm * MINUTES_PER_HOUR, PhantomData) }

    #[must_use]
    pub const fn into_fpm(self) -> f64 { self.0 / MINUTES_PER_HOUR }

    /// Climb gradient in feet per nautical mile at the given groundspeed.
    #[must_use]
    pub fn gradient(self, groundspeed: Speed) -> f64 {
        self.into_fpm() * MINUTES_PER_HOUR / groundspeed.into_knots()
    }
}

impl Volume {
    #[must_use]
    pub const fn from_us_gallons(gallons: f64) -> Self { Self(gallons, PhantomData) }

    #[must_use]
    pub const fn into_us_gallons(self) -> f64 { self.0 }
}

impl FuelFlow {
    #[must_use]
    pub const fn from_gph(gph: f64) -> Self { Self(gph, PhantomData) }

    #[must_use]
    pub const fn into_gph(self) -> f64 { self.0 }
}

impl Angle {
    pub const STRAIGHT: Self = Self(180., PhantomData);
    pub const FULL: Self = Self(360., PhantomData);

    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self { Self(degrees, PhantomData) }

    #[must_use]
    pub const fn into_degrees(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_radians(radians: f64) -> Self { Self(radians.to_degrees(), PhantomData) }

    #[must_use]
    pub const fn into_radians(self) -> f64 { self.0.to_radians() }

    /// The angle whose cosine is `ratio`, in the range `0..=STRAIGHT`.
    #[must_use]
    pub fn acos(ratio: f64) -> Self { Self::from_radians(ratio.acos()) }

    #[must_use]
    pub fn sin(self) -> f64 { self.into_radians().sin() }

    #[must_use]
    pub fn cos(self) -> f64 { self.into_radians().cos() }
}

impl<Base, Dt> serde::Serialize for Quantity<Base, Dt> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, Base, Dt> serde::Deserialize<'de> for Quantity<Base, Dt> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}
