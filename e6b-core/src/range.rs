//! Uniform sampling of problem parameters within documented ranges.

use std::fmt;

use math::{Between, round_half_up};
use rand::Rng;

use crate::format::n;


/// A rejected caller-supplied parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("{name} = {value} is not in the range {range}")]
    OutOfRange { name: &'static str, value: f64, range: String },
}

/// An inclusive range of evenly spaced values.
///
/// Values are drawn as integers in `min..=max` in multiples of `step` from `min`,
/// then divided by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRange {
    pub name:  &'static str,
    pub min:   i32,
    pub max:   i32,
    pub step:  i32,
    pub scale: i32,
}

impl ParamRange {
    #[must_use]
    pub const fn new(name: &'static str, min: i32, max: i32) -> Self {
        Self { name, min, max, step: 1, scale: 1 }
    }

    #[must_use]
    pub const fn with_step(self, step: i32) -> Self { Self { step, ..self } }

    /// Values are read in tenths, e.g. `50..=299` samples `5.0..=29.9`.
    #[must_use]
    pub const fn tenths(self) -> Self { Self { scale: 10, ..self } }

    /// Samples an unscaled value uniformly.
    ///
    /// An empty range always yields `min`.
    pub fn sample_raw<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.max <= self.min || self.step <= 0 {
            return self.min;
        }

        let steps = (self.max - self.min) / self.step;
        self.min + rng.random_range(0..=steps) * self.step
    }

    /// Samples a value uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let raw = self.sample_raw(rng);
        tracing::trace!(name = self.name, raw, "sampled parameter");
        self.value(raw)
    }

    #[must_use]
    pub fn value(&self, raw: i32) -> f64 { f64::from(raw) / f64::from(self.scale) }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let raw = value * f64::from(self.scale);
        let snapped = round_half_up(raw);
        value.is_finite()
            && (raw - snapped).abs() < 1e-6
            && snapped.between_inclusive(&f64::from(self.min), &f64::from(self.max))
            && (snapped - f64::from(self.min)) % f64::from(self.step) == 0.
    }

    /// Accepts `value` if it is one of the values this range samples.
    ///
    /// The returned value is snapped to the exact sampled representation.
    pub fn check(&self, value: f64) -> Result<f64, ParamError> {
        if self.contains(value) {
            Ok(round_half_up(value * f64::from(self.scale)) / f64::from(self.scale))
        } else {
            Err(self.rejection(value))
        }
    }

    /// Like [`check`](Self::check), but returns the unscaled integer.
    pub fn check_raw(&self, value: f64) -> Result<i32, ParamError> {
        if !self.contains(value) {
            return Err(self.rejection(value));
        }

        #[expect(clippy::cast_possible_truncation, reason = "contains() bounds the value to min..=max")]
        let raw = round_half_up(value * f64::from(self.scale)) as i32;
        Ok(raw)
    }

    fn rejection(&self, value: f64) -> ParamError {
        ParamError::OutOfRange { name: self.name, value, range: self.to_string() }
    }
}

impl fmt::Display for ParamRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", n(self.value(self.min)), n(self.value(self.max)))?;
        if self.step == 1 && self.scale == 1 {
            f.write_str(" in whole numbers")?;
        } else {
            write!(f, " in steps of {}", n(self.value(self.step)))?;
        }
        Ok(())
    }
}
