use math::convert::{ConversionPair, convert};
use math::{RoundingPolicy, Unit};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{
    distance, distance_pair, length, length_pair, random, temperature, temperature_pair, volume,
    volume_pair, weight, weight_pair,
};

fn pair(value: f64, unit: Unit, converted: f64, converted_unit: Unit) -> ConversionPair {
    ConversionPair { value, unit, converted, converted_unit }
}

#[test]
fn temperature_both_directions() {
    let celsius = pair(20., Unit::Celsius, 68., Unit::Fahrenheit);

    let problem = temperature(&celsius);
    assert_eq!(problem.prompt, "Convert 20°C to Fahrenheit");
    assert_eq!(problem.answer, "68°F");
    assert_eq!(problem.steps[2], "Add 40 to 20°C to get 60, and find 60 on the inner scale");
    assert_eq!(problem.steps[3], "Read 108 on the outer scale above 60, and subtract 40 to get 68°F");

    let problem = temperature(&celsius.swap());
    assert_eq!(problem.prompt, "Convert 68°F to Celsius");
    assert_eq!(problem.answer, "20°C");
    assert_eq!(problem.steps[2], "Add 40 to 68°F to get 108, and find 108 on the outer scale");
}

#[test]
fn volume_both_directions() {
    let gallons = pair(25.5, Unit::UsGallons, 97., Unit::Litres);

    let problem = volume(&gallons);
    assert_eq!(problem.prompt, "Convert 25.5 US gallon(s) to litres");
    assert_eq!(problem.answer, "97 litres");

    let problem = volume(&gallons.swap());
    assert_eq!(problem.prompt, "Convert 97 litres to US gallons");
    assert_eq!(problem.answer, "25.5 US gallons");
    assert_eq!(problem.steps[2], "Read 25.5 US gallons on the outer scale directly above 97");
}

#[test]
fn distance_uses_scale_marks() {
    let problem = distance(&pair(100., Unit::NauticalMiles, 190., Unit::Kilometers));
    assert_eq!(problem.prompt, "Convert 100 nautical miles to kilometers");
    assert_eq!(problem.answer, "190 kilometers");
    assert_eq!(
        problem.steps[0],
        "Set the conversion ratio by placing the \"nautical miles\" pointer on outer scale (near \
         66) above the \"kilometers\" pointer on the inner scale (near 12)"
    );
}

#[test]
fn weight_both_directions() {
    let pounds = pair(150., Unit::Pounds, 68., Unit::Kilograms);

    let problem = weight(&pounds);
    assert_eq!(problem.prompt, "Convert 150 pounds to kilograms");
    assert_eq!(problem.answer, "68 kilograms");
    assert_eq!(problem.steps[1], "Find 150 lb on the inner scale");

    let problem = weight(&pounds.swap());
    assert_eq!(problem.prompt, "Convert 68 kilograms to pounds");
    assert_eq!(problem.steps[1], "Find 68 kg on the outer scale");
}

#[test]
fn length_both_directions() {
    let feet = pair(3000., Unit::Feet, 910., Unit::Meters);
    assert_eq!(length(&feet).answer, "910 metres");
    assert_eq!(length(&feet.swap()).prompt, "Convert 910 metres to feet");
}

#[test]
fn generated_pairs_are_rounded() {
    let mut rng = SmallRng::seed_from_u64(8);
    for _ in 0..200 {
        let pair = temperature_pair(&mut rng);
        assert_eq!(pair.converted.fract(), 0.);

        let pair = volume_pair(&mut rng, RoundingPolicy::Nearest);
        assert_eq!(pair.converted.fract(), 0.);

        let pair = weight_pair(&mut rng);
        assert_eq!((pair.converted * 2.).fract(), 0.);

        let pair = length_pair(&mut rng, RoundingPolicy::Magnitude);
        assert_eq!(pair.value % 10., 0.);

        let pair = distance_pair(&mut rng, RoundingPolicy::Magnitude);
        assert_ne!(pair.unit, pair.converted_unit);
        assert_eq!(pair.unit.dimension(), pair.converted_unit.dimension());
    }
}

#[test]
fn random_conversion_is_complete() {
    let mut rng = SmallRng::seed_from_u64(21);
    for _ in 0..100 {
        let problem = random(&mut rng, RoundingPolicy::Magnitude);
        assert!(problem.is_complete(), "{problem:?}");
        assert!(problem.prompt.starts_with("Convert "));
    }
}

#[test]
fn random_conversion_covers_every_direction() {
    let mut rng = SmallRng::seed_from_u64(3);
    let prompts: Vec<_> =
        (0..600).map(|_| random(&mut rng, RoundingPolicy::Magnitude).prompt).collect();

    for expected in [
        "°C to Fahrenheit",
        "°F to Celsius",
        "US gallon(s) to litres",
        "litres to US gallons",
        "nautical miles to statute miles",
        "nautical miles to kilometers",
        "statute miles to nautical miles",
        "statute miles to kilometers",
        "kilometers to nautical miles",
        "kilometers to statute miles",
        "pounds to kilograms",
        "kilograms to pounds",
        "feet to metres",
        "metres to feet",
    ] {
        assert!(prompts.iter().any(|prompt| prompt.contains(expected)), "{expected}");
    }
}

#[test]
fn generated_pairs_follow_conversion_table() {
    let mut rng = SmallRng::seed_from_u64(12);
    for _ in 0..100 {
        let pair = volume_pair(&mut rng, RoundingPolicy::Nearest);
        let litres = convert(pair.value, Unit::UsGallons, Unit::Litres).unwrap();
        assert_eq!(pair.converted, math::round_half_up(litres), "{pair:?}");

        let pair = temperature_pair(&mut rng);
        let fahrenheit = convert(pair.value, Unit::Celsius, Unit::Fahrenheit).unwrap();
        assert_eq!(pair.converted, math::round_half_up(fahrenheit), "{pair:?}");
    }
}
