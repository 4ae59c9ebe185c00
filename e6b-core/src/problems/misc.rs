//! Slide-rule arithmetic and avgas weight.

use math::convert::ConversionPair;
use math::{RoundingPolicy, Unit};
use rand::Rng;

use crate::Problem;
use crate::format::n;
use crate::range::ParamRange;

#[cfg(test)]
mod tests;

const FUEL_POUNDS: ParamRange = ParamRange::new("fuel_pounds", 30, 899);
const FACTOR: ParamRange = ParamRange::new("factor", 3, 98);
const DIVISOR: ParamRange = ParamRange::new("divisor", 3, 8);

/// Draws one of the miscellaneous problems.
pub fn random<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> Problem {
    match rng.random_range(0..3) {
        0 => {
            let pair = fuel_weight_pair(rng, rounding);
            fuel_weight(&if rng.random_bool(0.5) { pair.swap() } else { pair })
        }
        1 => multiplication(FACTOR.sample(rng), FACTOR.sample(rng), rounding),
        _ => division(DIVISOR.sample(rng), FACTOR.sample(rng)),
    }
}

/// Whole pounds of avgas and the approximate volume in tenths of a gallon.
pub fn fuel_weight_pair<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> ConversionPair {
    ConversionPair::avgas(FUEL_POUNDS.sample(rng))
        .read_with(|gallons| rounding.apply(gallons * 10.) / 10.)
}

/// Converts between avgas weight and volume, asking about `pair.unit`.
#[must_use]
pub fn fuel_weight(pair: &ConversionPair) -> Problem {
    let (from_gallons, gallons, pounds) = if pair.unit == Unit::UsGallons {
        (true, n(pair.value), n(pair.converted))
    } else {
        (false, n(pair.converted), n(pair.value))
    };
    let ratio = "Set the conversion ratio by placing the \"fuel lbs\" pointer on the outer scale \
                 (near 77) above the \"US gallons\" pointer on the inner scale (near 13)"
        .to_string();

    if from_gallons {
        Problem::new(
            format!("Weight in pounds: {gallons} US gallons of avgas at ISA sea level"),
            format!("{pounds} pounds"),
            vec![
                ratio,
                format!("Find {gallons} gallons on the inner scale"),
                format!("Read {pounds} pounds on the outer scale directly above {gallons}"),
            ],
        )
    } else {
        Problem::new(
            format!("Volume in US gallons: {pounds} pounds of avgas at ISA sea level"),
            format!("{gallons} US gallons"),
            vec![
                ratio,
                format!("Find {pounds} pounds on the outer scale"),
                format!("Read {gallons} gallons on the inner scale directly below {pounds}"),
            ],
        )
    }
}

/// Approximate product of two factors.
#[must_use]
pub fn multiplication(left: f64, right: f64, rounding: RoundingPolicy) -> Problem {
    let product = n(rounding.apply(left * right));

    Problem::new(
        format!("{} × {} =", n(left), n(right)),
        format!("(approximately) {product}"),
        vec![
            format!(
                "Rotate so that the units pointer (10) on the inner scale is below {} on the \
                 outer scale",
                n(left)
            ),
            format!("Find {} on the inner scale", n(right)),
            format!(
                "Read the approximate product {product} on the outer scale directly above {}",
                n(right)
            ),
        ],
    )
}

/// Division of `divisor × quotient` by `divisor`.
#[must_use]
pub fn division(divisor: f64, quotient: f64) -> Problem {
    let dividend = n(divisor * quotient);

    Problem::new(
        format!("{dividend} ÷ {} =", n(divisor)),
        n(quotient).to_string(),
        vec![
            format!("Find {dividend} on the outer scale"),
            format!(
                "Rotate so that {} appears on the inner scale directly below {dividend}",
                n(divisor)
            ),
            format!(
                "Read the approximate quotient {} on the outer scale directly above the units \
                 pointer (10)",
                n(quotient)
            ),
        ],
    )
}
