//! Unit conversion problems on the calculator side.
//!
//! Each problem is built from a [`ConversionPair`] whose `unit` is the unit asked about.
//! Both values are already rounded to what can be read off the scales.

use math::convert::ConversionPair;
use math::{RoundingPolicy, Unit, rounding};
use rand::Rng;

use crate::Problem;
use crate::format::{n, s};
use crate::range::ParamRange;

#[cfg(test)]
mod tests;

const CELSIUS: ParamRange = ParamRange::new("celsius", -40, 39);
const US_GALLONS: ParamRange = ParamRange::new("us_gallons", 30, 1499).tenths();
const NAUTICAL_MILES: ParamRange = ParamRange::new("nautical_miles", 10, 299);
const POUNDS: ParamRange = ParamRange::new("pounds", 10, 299);
const FEET: ParamRange = ParamRange::new("feet", 100, 7990).with_step(10);

const DISTANCE_UNITS: [Unit; 3] = [Unit::NauticalMiles, Unit::StatuteMiles, Unit::Kilometers];

/// Draws one of the conversion families and asks it in a random direction.
pub fn random<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> Problem {
    match rng.random_range(0..5) {
        0 => {
            let pair = temperature_pair(rng);
            temperature(&maybe_swap(rng, pair))
        }
        1 => {
            let pair = volume_pair(rng, rounding);
            volume(&maybe_swap(rng, pair))
        }
        2 => distance(&distance_pair(rng, rounding)),
        3 => {
            let pair = weight_pair(rng);
            weight(&maybe_swap(rng, pair))
        }
        _ => {
            let pair = length_pair(rng, rounding);
            length(&maybe_swap(rng, pair))
        }
    }
}

fn maybe_swap<R: Rng + ?Sized>(rng: &mut R, pair: ConversionPair) -> ConversionPair {
    if rng.random_bool(0.5) { pair.swap() } else { pair }
}

/// Converts a sampled value through the conversion table, then reads the result with `read`.
fn read_pair(
    value: f64,
    unit: Unit,
    converted_unit: Unit,
    read: impl FnOnce(f64) -> f64,
) -> ConversionPair {
    ConversionPair::new(value, unit, converted_unit)
        .expect("sampled values are finite and both units share a dimension")
        .read_with(read)
}

/// Whole degrees Celsius and the nearest whole degree Fahrenheit.
pub fn temperature_pair<R: Rng + ?Sized>(rng: &mut R) -> ConversionPair {
    read_pair(CELSIUS.sample(rng), Unit::Celsius, Unit::Fahrenheit, math::round_half_up)
}

/// Tenths of a US gallon and approximate litres.
pub fn volume_pair<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> ConversionPair {
    read_pair(US_GALLONS.sample(rng), Unit::UsGallons, Unit::Litres, |litres| {
        rounding.apply(litres)
    })
}

/// Two different distance units, both read approximately.
pub fn distance_pair<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> ConversionPair {
    let nm = NAUTICAL_MILES.sample(rng);
    let value_in = |unit| {
        read_pair(nm, Unit::NauticalMiles, unit, |value| {
            if unit == Unit::NauticalMiles { value } else { rounding.apply(value) }
        })
        .converted
    };

    let from = rng.random_range(0..DISTANCE_UNITS.len());
    let to = (from + rng.random_range(1..DISTANCE_UNITS.len())) % DISTANCE_UNITS.len();
    let (from, to) = (DISTANCE_UNITS[from], DISTANCE_UNITS[to]);
    ConversionPair { value: value_in(from), unit: from, converted: value_in(to), converted_unit: to }
}

/// Whole pounds and kilograms to the nearest half.
pub fn weight_pair<R: Rng + ?Sized>(rng: &mut R) -> ConversionPair {
    read_pair(POUNDS.sample(rng), Unit::Pounds, Unit::Kilograms, |kg| {
        rounding::round_to_fraction(kg, 2.)
    })
}

/// Tens of feet and approximate metres.
pub fn length_pair<R: Rng + ?Sized>(rng: &mut R, rounding: RoundingPolicy) -> ConversionPair {
    read_pair(FEET.sample(rng), Unit::Feet, Unit::Meters, |meters| rounding.apply(meters))
}

/// The pair read with `first` as the unit asked about.
fn oriented(pair: &ConversionPair, first: Unit) -> (bool, f64, f64) {
    if pair.unit == first {
        (true, pair.value, pair.converted)
    } else {
        (false, pair.converted, pair.value)
    }
}

#[must_use]
pub fn temperature(pair: &ConversionPair) -> Problem {
    let (from_celsius, celsius, fahrenheit) = oriented(pair, Unit::Celsius);
    let ratio = "Set the conversion ratio by placing 36 on the outer scale above 20 on the inner \
                 scale"
        .to_string();

    if from_celsius {
        Problem::new(
            format!("Convert {}°C to Fahrenheit", n(celsius)),
            format!("{}°F", n(fahrenheit)),
            vec![
                format!(
                    "If your E6B has a temperature scale, simply read {}°F adjacent to {}°C; \
                     otherwise …",
                    n(fahrenheit),
                    n(celsius)
                ),
                ratio,
                format!(
                    "Add 40 to {}°C to get {offset}, and find {offset} on the inner scale",
                    n(celsius),
                    offset = n(celsius + 40.)
                ),
                format!(
                    "Read {} on the outer scale above {}, and subtract 40 to get {}°F",
                    n(fahrenheit + 40.),
                    n(celsius + 40.),
                    n(fahrenheit)
                ),
            ],
        )
    } else {
        Problem::new(
            format!("Convert {}°F to Celsius", n(fahrenheit)),
            format!("{}°C", n(celsius)),
            vec![
                format!(
                    "If your E6B has a temperature scale, simply read {}°C adjacent to {}°F; \
                     otherwise …",
                    n(celsius),
                    n(fahrenheit)
                ),
                ratio,
                format!(
                    "Add 40 to {}°F to get {offset}, and find {offset} on the outer scale",
                    n(fahrenheit),
                    offset = n(fahrenheit + 40.)
                ),
                format!(
                    "Read {} on the inner scale below {}, and subtract 40 to get {}°C",
                    n(celsius + 40.),
                    n(fahrenheit + 40.),
                    n(celsius)
                ),
            ],
        )
    }
}

#[must_use]
pub fn volume(pair: &ConversionPair) -> Problem {
    let (from_gallons, gallons, litres) = oriented(pair, Unit::UsGallons);
    let (gallons, litres) = (n(gallons), n(litres));
    let ratio = "Set the conversion ratio by placing the \"US gal\" pointer on the outer scale \
                 (near 13) above the \"litres\" pointer on the inner scale (near 50)"
        .to_string();

    if from_gallons {
        Problem::new(
            format!("Convert {gallons} US gallon(s) to litres"),
            format!("{litres} litres"),
            vec![
                ratio,
                format!("Find the {gallons} gallons on the outer scale"),
                format!("Read {litres} litres on the inner scale directly below {gallons}"),
            ],
        )
    } else {
        Problem::new(
            format!("Convert {litres} litres to US gallons"),
            format!("{gallons} US gallons"),
            vec![
                ratio,
                format!("Find {litres} litres on the inner scale"),
                format!("Read {gallons} US gallons on the outer scale directly above {litres}"),
            ],
        )
    }
}

/// Any two of nautical miles, statute miles and kilometers.
#[must_use]
pub fn distance(pair: &ConversionPair) -> Problem {
    let (from, to) = (pair.unit, pair.converted_unit);
    let (value, converted) = (n(pair.value), n(pair.converted));

    Problem::new(
        format!("Convert {value} {} to {}", s(from.plural_name()), s(to.plural_name())),
        format!("{converted} {}", s(to.plural_name())),
        vec![
            format!(
                "Set the conversion ratio by placing the \"{}\" pointer on outer scale (near {}) \
                 above the \"{}\" pointer on the inner scale (near {})",
                s(from.plural_name()),
                s(from.scale_mark().unwrap_or_default()),
                s(to.plural_name()),
                s(to.scale_mark().unwrap_or_default()),
            ),
            format!("Find {value} {} on the outer scale", s(from.plural_name())),
            format!(
                "Read the {converted} {} on the inner scale directly below {value}",
                s(to.plural_name())
            ),
        ],
    )
}

#[must_use]
pub fn weight(pair: &ConversionPair) -> Problem {
    let (from_pounds, pounds, kg) = oriented(pair, Unit::Pounds);
    let (pounds, kg) = (n(pounds), n(kg));
    let ratio = "Set the conversion ratio by placing the kilograms pointer on the outer scale \
                 (near 17) above the pounds pointer on the inner scale (near 36)"
        .to_string();

    if from_pounds {
        Problem::new(
            format!("Convert {pounds} pounds to kilograms"),
            format!("{kg} kilograms"),
            vec![
                ratio,
                format!("Find {pounds} lb on the inner scale"),
                format!("Read {kg} kg on the outer scale directly above {pounds}"),
            ],
        )
    } else {
        Problem::new(
            format!("Convert {kg} kilograms to pounds"),
            format!("{pounds} pounds"),
            vec![
                ratio,
                format!("Find {kg} kg on the outer scale"),
                format!("Read {pounds} lb on the inner scale directly below {kg}"),
            ],
        )
    }
}

#[must_use]
pub fn length(pair: &ConversionPair) -> Problem {
    let (from_feet, feet, meters) = oriented(pair, Unit::Feet);
    let (feet, meters) = (n(feet), n(meters));
    let ratio = "Set the conversion ratio by placing the feet pointer on the outer scale (near 14) \
                 above the metres pointer on the inner scale (near 44)"
        .to_string();

    if from_feet {
        Problem::new(
            format!("Convert {feet} feet to metres"),
            format!("{meters} metres"),
            vec![
                ratio,
                format!("Find {feet} feet on the outer scale"),
                format!("Read approximately {meters} metres on the inner scale directly below {feet}"),
            ],
        )
    } else {
        Problem::new(
            format!("Convert {meters} metres to feet"),
            format!("{feet} feet"),
            vec![
                ratio,
                format!("Find {meters} metres on the inner scale"),
                format!("Read approximately {feet} ft on the outer scale directly above {meters}"),
            ],
        )
    }
}
