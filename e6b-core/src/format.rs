//! Text interpolation for problem prompts, answers and steps.
//!
//! Values are interpolated with [`format!`] through a [`Directive`],
//! which decides how the value is rendered.

use std::fmt::{self, Write as _};
use std::time::Duration;

use math::round_half_up;

#[cfg(test)]
mod tests;

/// How a value is rendered into problem text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive<'a> {
    /// A number with thousands separators and at most three fraction digits.
    Number(f64),
    /// Whole minutes, as "N minutes" below an hour or "H:MM" otherwise.
    Duration(Duration),
    /// A string inserted verbatim.
    Literal(&'a str),
}

/// Shorthand for [`Directive::Number`].
#[must_use]
pub fn n(value: f64) -> Directive<'static> { Directive::Number(value) }

/// Shorthand for [`Directive::Duration`].
#[must_use]
pub fn t(duration: Duration) -> Directive<'static> { Directive::Duration(duration) }

/// Shorthand for [`Directive::Literal`].
#[must_use]
pub fn s(literal: &str) -> Directive<'_> { Directive::Literal(literal) }

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Number(value) => write_number(f, value),
            Self::Duration(duration) => write_duration(f, duration),
            Self::Literal(literal) => f.write_str(literal),
        }
    }
}

const FRACTION_DIGITS: f64 = 1000.;

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return write!(f, "{value}");
    }

    // Ties round away from zero.
    let thousandths = round_half_up(value.abs() * FRACTION_DIGITS);
    let integer = (thousandths / FRACTION_DIGITS).floor();
    let fraction = thousandths - integer * FRACTION_DIGITS;

    if value.is_sign_negative() && thousandths > 0. {
        f.write_char('-')?;
    }

    let digits = format!("{integer:.0}");
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            f.write_char(',')?;
        }
        f.write_char(digit)?;
    }

    if fraction > 0. {
        let fraction = format!("{fraction:03.0}");
        write!(f, ".{}", fraction.trim_end_matches('0'))?;
    }

    Ok(())
}

fn write_duration(f: &mut fmt::Formatter<'_>, duration: Duration) -> fmt::Result {
    let minutes = duration.as_secs() / 60;
    if minutes < 60 {
        write!(f, "{minutes} minutes")
    } else {
        write!(f, "{}:{:02}", minutes / 60, minutes % 60)
    }
}
