use math::convert::ConversionPair;
use math::{RoundingPolicy, Unit};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{division, fuel_weight, fuel_weight_pair, multiplication, random};

#[test]
fn fuel_weight_both_directions() {
    let pair = ConversionPair {
        value:          300.,
        unit:           Unit::Pounds,
        converted:      50.,
        converted_unit: Unit::UsGallons,
    };

    let problem = fuel_weight(&pair);
    assert_eq!(problem.prompt, "Volume in US gallons: 300 pounds of avgas at ISA sea level");
    assert_eq!(problem.answer, "50 US gallons");

    let problem = fuel_weight(&pair.swap());
    assert_eq!(problem.prompt, "Weight in pounds: 50 US gallons of avgas at ISA sea level");
    assert_eq!(problem.answer, "300 pounds");
    assert_eq!(problem.steps[2], "Read 300 pounds on the outer scale directly above 50");
}

#[test]
fn fuel_weight_pair_reads_tenths() {
    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..100 {
        let pair = fuel_weight_pair(&mut rng, RoundingPolicy::Nearest);
        let gallons = pair.value / 6.01;
        assert!((pair.converted - gallons).abs() <= 0.05 + 1e-9, "{pair:?}");
    }
}

#[test]
fn multiplication_is_approximate() {
    let problem = multiplication(47., 53., RoundingPolicy::Magnitude);
    assert_eq!(problem.prompt, "47 × 53 =");
    assert_eq!(problem.answer, "(approximately) 2,500");

    let problem = multiplication(47., 53., RoundingPolicy::Nearest);
    assert_eq!(problem.answer, "(approximately) 2,491");
}

#[test]
fn division_is_exact() {
    let problem = division(7., 42.);
    assert_eq!(problem.prompt, "294 ÷ 7 =");
    assert_eq!(problem.answer, "42");
    assert_eq!(problem.steps[1], "Rotate so that 7 appears on the inner scale directly below 294");
}

#[test]
fn random_misc_is_complete() {
    let mut rng = SmallRng::seed_from_u64(13);
    for _ in 0..60 {
        assert!(random(&mut rng, RoundingPolicy::Magnitude).is_complete());
    }
}

#[test]
fn random_misc_covers_every_problem() {
    let mut rng = SmallRng::seed_from_u64(30);
    let prompts: Vec<_> =
        (0..300).map(|_| random(&mut rng, RoundingPolicy::Magnitude).prompt).collect();

    assert!(prompts.iter().any(|prompt| prompt.starts_with("Weight in pounds: ")));
    assert!(prompts.iter().any(|prompt| prompt.starts_with("Volume in US gallons: ")));
    assert!(prompts.iter().any(|prompt| prompt.contains(" × ")));
    assert!(prompts.iter().any(|prompt| prompt.contains(" ÷ ")));
}
