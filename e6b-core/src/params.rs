//! Typed parameter records for each problem family.
//!
//! Each record can be drawn at random with `generate`
//! or built from caller-supplied inputs with `new`,
//! which rejects values the generator would never produce.

use std::time::Duration;

use math::{
    Altitude, Angle, AtmosphereModel, ClimbRate, FuelFlow, Heading, Length, RoundingPolicy,
    Speed, Temp, TempDelta, Volume, WindTriangle, round_half_up, rounding,
};
use rand::Rng;

pub use crate::range::ParamError;
use crate::range::ParamRange;


fn minutes(minutes: f64) -> Duration { Duration::from_secs_f64(minutes * 60.) }

/// Inputs and solution of a wind-side problem.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct WindProblemParams {
    pub triangle: WindTriangle,
}

impl WindProblemParams {
    pub const COURSE: ParamRange = ParamRange::new("course", 0, 359);
    pub const TRUE_AIRSPEED: ParamRange = ParamRange::new("true_airspeed", 60, 250);
    pub const WIND_DIRECTION: ParamRange = ParamRange::new("wind_direction", 0, 350).with_step(10);
    pub const WIND_SPEED: ParamRange = ParamRange::new("wind_speed", 5, 40);
    /// Courses accepted from callers, where 360 reads as north.
    pub const COURSE_INPUT: ParamRange = ParamRange::new("course", 0, 360);
    /// Wind directions accepted from callers, to the whole degree.
    pub const WIND_DIRECTION_INPUT: ParamRange = ParamRange::new("wind_direction", 0, 360);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::solve(
            Self::COURSE.sample(rng),
            Self::TRUE_AIRSPEED.sample(rng),
            Self::WIND_DIRECTION.sample(rng),
            Self::WIND_SPEED.sample(rng),
        )
    }

    /// Course and wind directions in degrees true, speeds in knots.
    pub fn new(
        course: f64,
        true_airspeed: f64,
        wind_direction: f64,
        wind_speed: f64,
    ) -> Result<Self, ParamError> {
        Ok(Self::solve(
            Self::COURSE_INPUT.check(course)?,
            Self::TRUE_AIRSPEED.check(true_airspeed)?,
            Self::WIND_DIRECTION_INPUT.check(wind_direction)?,
            Self::WIND_SPEED.check(wind_speed)?,
        ))
    }

    fn solve(course: f64, true_airspeed: f64, wind_direction: f64, wind_speed: f64) -> Self {
        Self {
            triangle: WindTriangle::solve(
                Heading::from_degrees(course),
                Speed::from_knots(true_airspeed),
                Heading::from_degrees(wind_direction),
                Speed::from_knots(wind_speed),
            ),
        }
    }
}

/// Wind components for a takeoff or landing runway.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RunwayWindParams {
    /// Runway number, 1 to 36.
    pub runway:     u8,
    pub wind_from:  Heading,
    pub wind_speed: Speed,
    /// Signed angle from the runway heading to the wind, within ±90°.
    pub wind_angle: Angle,
    pub headwind:   Speed,
    pub crosswind:  Speed,
}

impl RunwayWindParams {
    pub const RUNWAY: ParamRange = ParamRange::new("runway", 1, 36);
    pub const WIND_ANGLE: ParamRange = ParamRange::new("wind_angle", -90, 90);
    pub const WIND_SPEED: ParamRange = ParamRange::new("wind_speed", 5, 29);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let runway = Self::RUNWAY.sample_raw(rng);
        let runway = u8::try_from(runway).unwrap_or(36);
        let course = Heading::from_runway(runway);
        let wind_from = course + Angle::from_degrees(Self::WIND_ANGLE.sample(rng));
        Self::solve(runway, wind_from, Speed::from_knots(Self::WIND_SPEED.sample(rng)))
    }

    /// The wind must be within 90° of the runway heading.
    pub fn new(runway: u8, wind_direction: f64, wind_speed: f64) -> Result<Self, ParamError> {
        Self::RUNWAY.check(f64::from(runway))?;
        let wind_speed = Self::WIND_SPEED.check(wind_speed)?;
        let wind_from = Heading::from_degrees(wind_direction);
        let wind_angle = wind_from - Heading::from_runway(runway);
        Self::WIND_ANGLE.check(wind_angle.into_degrees())?;
        Ok(Self::solve(runway, wind_from, Speed::from_knots(wind_speed)))
    }

    fn solve(runway: u8, wind_from: Heading, wind_speed: Speed) -> Self {
        let course = Heading::from_runway(runway);
        Self {
            runway,
            wind_from,
            wind_speed,
            wind_angle: wind_from - course,
            headwind: math::wind::headwind(course, wind_from, wind_speed),
            crosswind: math::wind::crosswind(course, wind_from, wind_speed),
        }
    }

    #[must_use]
    pub fn runway_heading(&self) -> Heading { Heading::from_runway(self.runway) }
}

/// A distance flown at a constant groundspeed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DistanceSpeedTimeParams {
    pub speed:    Speed,
    pub time:     Duration,
    /// Distance in whole nautical miles.
    pub distance: Length,
}

impl DistanceSpeedTimeParams {
    pub const SPEED: ParamRange = ParamRange::new("speed", 60, 299);
    pub const TIME: ParamRange = ParamRange::new("time", 5, 179);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::solve(Self::SPEED.sample(rng), Self::TIME.sample(rng))
    }

    /// Speed in knots, time in minutes.
    pub fn new(speed: f64, time: f64) -> Result<Self, ParamError> {
        Ok(Self::solve(Self::SPEED.check(speed)?, Self::TIME.check(time)?))
    }

    fn solve(speed: f64, time: f64) -> Self {
        let speed = Speed::from_knots(speed);
        let time = minutes(time);
        Self { speed, time, distance: (speed * time).round() }
    }
}

/// Fuel burnt at a constant rate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FuelParams {
    pub burn_rate: FuelFlow,
    pub endurance: Duration,
    /// Fuel in tenths of a gallon.
    pub fuel:      Volume,
}

impl FuelParams {
    pub const BURN_RATE: ParamRange = ParamRange::new("burn_rate", 50, 299).tenths();
    pub const ENDURANCE: ParamRange = ParamRange::new("endurance", 5, 179);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::solve(Self::BURN_RATE.sample(rng), Self::ENDURANCE.sample(rng))
    }

    /// Burn rate in gallons per hour, endurance in minutes.
    pub fn new(burn_rate: f64, endurance: f64) -> Result<Self, ParamError> {
        Ok(Self::solve(Self::BURN_RATE.check(burn_rate)?, Self::ENDURANCE.check(endurance)?))
    }

    fn solve(burn_rate: f64, endurance: f64) -> Self {
        let burn_rate = FuelFlow::from_gph(burn_rate);
        let endurance = minutes(endurance);
        let fuel = rounding::round_to_fraction((burn_rate * endurance).into_us_gallons(), 10.);
        Self { burn_rate, endurance, fuel: Volume::from_us_gallons(fuel) }
    }
}

/// Density altitude and the resulting true airspeed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DensityAltitudeParams {
    pub pressure_altitude:   Altitude,
    /// Outside air temperature in whole degrees.
    pub outside_air_temp:    Temp,
    pub density_altitude:    Altitude,
    pub calibrated_airspeed: Speed,
    pub true_airspeed:       Speed,
}

impl DensityAltitudeParams {
    pub const PRESSURE_ALTITUDE: ParamRange =
        ParamRange::new("pressure_altitude", 1000, 17_000).with_step(1000);
    /// Deviation of the generated temperature from ISA.
    pub const ISA_DEVIATION: ParamRange = ParamRange::new("isa_deviation", -20, 20);
    /// Pressure altitudes accepted from callers, to the whole foot.
    pub const PRESSURE_ALTITUDE_INPUT: ParamRange =
        ParamRange::new("pressure_altitude", 0, 20_000);
    /// Outside air temperatures accepted from callers, to a tenth of a degree.
    pub const OUTSIDE_AIR_TEMP: ParamRange =
        ParamRange::new("outside_air_temp", -600, 500).tenths();
    pub const CALIBRATED_AIRSPEED: ParamRange = ParamRange::new("calibrated_airspeed", 70, 249);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, model: &AtmosphereModel) -> Self {
        let pressure_altitude = Altitude::from_feet(Self::PRESSURE_ALTITUDE.sample(rng));
        let deviation = TempDelta::from_celsius_degrees(Self::ISA_DEVIATION.sample(rng));
        let oat = (model.isa_temperature(pressure_altitude) + deviation).round();
        let cas = Speed::from_knots(Self::CALIBRATED_AIRSPEED.sample(rng));
        Self::solve(pressure_altitude, oat, cas, model)
    }

    /// Pressure altitude in feet, temperature in °C, airspeed in knots.
    pub fn new(
        pressure_altitude: f64,
        outside_air_temp: f64,
        calibrated_airspeed: f64,
        model: &AtmosphereModel,
    ) -> Result<Self, ParamError> {
        Ok(Self::solve(
            Altitude::from_feet(Self::PRESSURE_ALTITUDE_INPUT.check(pressure_altitude)?),
            Temp::from_celsius(Self::OUTSIDE_AIR_TEMP.check(outside_air_temp)?),
            Speed::from_knots(Self::CALIBRATED_AIRSPEED.check(calibrated_airspeed)?),
            model,
        ))
    }

    fn solve(
        pressure_altitude: Altitude,
        outside_air_temp: Temp,
        calibrated_airspeed: Speed,
        model: &AtmosphereModel,
    ) -> Self {
        let density_altitude = model.density_altitude(pressure_altitude, outside_air_temp);
        Self {
            pressure_altitude,
            outside_air_temp,
            density_altitude,
            calibrated_airspeed,
            true_airspeed: model.true_airspeed(calibrated_airspeed, density_altitude),
        }
    }
}

/// Indicated altitude corrected for a non-standard temperature.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TrueAltitudeParams {
    pub station_elevation:  Altitude,
    pub indicated_altitude: Altitude,
    pub pressure_altitude:  Altitude,
    /// ISA temperature at the pressure altitude, rounded to whole degrees, plus the deviation.
    pub outside_air_temp:   Temp,
    pub isa_deviation:      TempDelta,
    /// Approximate true altitude.
    pub true_altitude:      Altitude,
}

impl TrueAltitudeParams {
    pub const STATION_ELEVATION: ParamRange =
        ParamRange::new("station_elevation", 0, 4900).with_step(100);
    /// Indicated altitude above the station, rounded up to 500 ft.
    pub const HEIGHT_ABOVE_STATION: ParamRange =
        ParamRange::new("height_above_station", 3000, 14_500).with_step(500);
    pub const INDICATED_ALTITUDE: ParamRange =
        ParamRange::new("indicated_altitude", 3000, 19_500).with_step(500);
    /// Difference between the pressure altitude and the indicated altitude.
    pub const PRESSURE_OFFSET: ParamRange =
        ParamRange::new("pressure_offset", -1000, 990).with_step(10);
    pub const ISA_DEVIATION: ParamRange = ParamRange::new("isa_deviation", -20, 20);

    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        model: &AtmosphereModel,
        rounding: RoundingPolicy,
    ) -> Self {
        let station = Self::STATION_ELEVATION.sample(rng);
        let indicated = (station / 500.).ceil() * 500. + Self::HEIGHT_ABOVE_STATION.sample(rng);
        let pressure = indicated + Self::PRESSURE_OFFSET.sample(rng);
        let deviation = Self::ISA_DEVIATION.sample(rng);
        Self::solve(station, indicated, pressure, deviation, model, rounding)
    }

    /// Altitudes in feet, deviation in °C from ISA at the pressure altitude.
    pub fn new(
        station_elevation: f64,
        indicated_altitude: f64,
        pressure_altitude: f64,
        isa_deviation: f64,
        model: &AtmosphereModel,
        rounding: RoundingPolicy,
    ) -> Result<Self, ParamError> {
        let station = Self::STATION_ELEVATION.check(station_elevation)?;
        let indicated = Self::INDICATED_ALTITUDE.check(indicated_altitude)?;
        if indicated <= station {
            return Err(ParamError::OutOfRange {
                name:  "indicated_altitude",
                value: indicated,
                range: format!("above the station elevation {station}"),
            });
        }
        Self::PRESSURE_OFFSET.check(pressure_altitude - indicated)?;
        let deviation = Self::ISA_DEVIATION.check(isa_deviation)?;
        Ok(Self::solve(station, indicated, pressure_altitude, deviation, model, rounding))
    }

    fn solve(
        station: f64,
        indicated: f64,
        pressure: f64,
        deviation: f64,
        model: &AtmosphereModel,
        rounding: RoundingPolicy,
    ) -> Self {
        let station_elevation = Altitude::from_feet(station);
        let indicated_altitude = Altitude::from_feet(indicated);
        let pressure_altitude = Altitude::from_feet(pressure);
        let isa_deviation = TempDelta::from_celsius_degrees(deviation);
        let isa = model.isa_temperature(pressure_altitude).round();
        let true_altitude = model
            .true_altitude(indicated_altitude, station_elevation, isa_deviation)
            .approx(rounding);

        Self {
            station_elevation,
            indicated_altitude,
            pressure_altitude,
            outside_air_temp: isa + isa_deviation,
            isa_deviation,
            true_altitude,
        }
    }

    #[must_use]
    pub fn height_above_station(&self) -> Altitude {
        self.indicated_altitude - self.station_elevation
    }
}

/// Climb rate needed to hold a climb gradient at a groundspeed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClimbParams {
    pub climb_rate:  ClimbRate,
    pub groundspeed: Speed,
    /// Climb gradient in whole feet per nautical mile.
    pub gradient:    f64,
}

impl ClimbParams {
    pub const CLIMB_RATE: ParamRange = ParamRange::new("climb_rate", 300, 1199);
    pub const GROUNDSPEED: ParamRange = ParamRange::new("groundspeed", 50, 149);

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::solve(Self::CLIMB_RATE.sample(rng), Self::GROUNDSPEED.sample(rng))
    }

    /// Climb rate in feet per minute, groundspeed in knots.
    pub fn new(climb_rate: f64, groundspeed: f64) -> Result<Self, ParamError> {
        Ok(Self::solve(Self::CLIMB_RATE.check(climb_rate)?, Self::GROUNDSPEED.check(groundspeed)?))
    }

    fn solve(fpm: f64, groundspeed: f64) -> Self {
        let climb_rate = ClimbRate::from_fpm(fpm);
        let groundspeed = Speed::from_knots(groundspeed);
        Self { climb_rate, groundspeed, gradient: round_half_up(climb_rate.gradient(groundspeed)) }
    }
}

/// Track error and correction by the 1-in-60 rule.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct OffCourseParams {
    pub distance_flown:      Length,
    pub distance_remaining:  Length,
    pub distance_off_course: Length,
    /// Approximate angle between the intended and the flown track.
    pub heading_error:       Angle,
    /// Approximate additional angle to converge on the destination.
    pub intercept_angle:     Angle,
}

impl OffCourseParams {
    pub const DISTANCE_FLOWN: ParamRange = ParamRange::new("distance_flown", 50, 199);
    pub const DISTANCE_REMAINING: ParamRange = ParamRange::new("distance_remaining", 50, 199);

    /// The distance off course is between 1/25 and 1/10 of the distance flown.
    #[must_use]
    pub fn distance_off_course_range(distance_flown: i32) -> ParamRange {
        ParamRange::new(
            "distance_off_course",
            (distance_flown + 12) / 25,
            (distance_flown + 5) / 10 - 1,
        )
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> Self {
        let flown = Self::DISTANCE_FLOWN.sample_raw(rng);
        let remaining = Self::DISTANCE_REMAINING.sample(rng);
        let off_course = Self::distance_off_course_range(flown).sample(rng);
        Self::solve(f64::from(flown), remaining, off_course, rounding)
    }

    /// Distances in whole nautical miles.
    pub fn new(
        distance_flown: f64,
        distance_remaining: f64,
        distance_off_course: f64,
        rounding: RoundingPolicy,
    ) -> Result<Self, ParamError> {
        let flown = Self::DISTANCE_FLOWN.check_raw(distance_flown)?;
        let remaining = Self::DISTANCE_REMAINING.check(distance_remaining)?;
        let off_course = Self::distance_off_course_range(flown).check(distance_off_course)?;
        Ok(Self::solve(f64::from(flown), remaining, off_course, rounding))
    }

    fn solve(flown: f64, remaining: f64, off_course: f64, rounding: RoundingPolicy) -> Self {
        Self {
            distance_flown:      Length::from_nm(flown),
            distance_remaining:  Length::from_nm(remaining),
            distance_off_course: Length::from_nm(off_course),
            heading_error:       Angle::from_degrees(off_course / flown * 60.).approx(rounding),
            intercept_angle:     Angle::from_degrees(off_course / remaining * 60.)
                .approx(rounding),
        }
    }

    #[must_use]
    pub fn total_correction(&self) -> Angle { self.heading_error + self.intercept_angle }
}
