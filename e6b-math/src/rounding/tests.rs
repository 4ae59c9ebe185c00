use super::{RoundingPolicy, round_half_up, round_to, round_to_fraction};

#[test]
fn half_up_ties() {
    assert_eq!(round_half_up(2.5), 3.);
    assert_eq!(round_half_up(-2.5), -2.);
    assert_eq!(round_half_up(-2.6), -3.);
    assert_eq!(round_half_up(118.37), 118.);
}

#[test]
fn half_up_never_negative_zero() {
    assert_eq!(round_half_up(-0.2).to_bits(), 0f64.to_bits());
    assert_eq!(round_half_up(-1e-15).to_bits(), 0f64.to_bits());
}

#[test]
fn fixed_steps() {
    assert_eq!(round_to(4_499., 1000.), 4000.);
    assert_eq!(round_to(4_500., 1000.), 5000.);
    assert_eq!(round_to_fraction(45.35, 2.), 45.5);
    assert_eq!(round_to_fraction(2.04, 10.), 2.);
    assert_eq!(round_to_fraction(2.06, 10.), 2.1);
}

#[test]
fn magnitude_policy() {
    let policy = RoundingPolicy::Magnitude;
    assert_eq!(policy.apply(12_499.), 12_000.);
    assert_eq!(policy.apply(10_000.), 10_000.);
    assert_eq!(policy.apply(3_785.41), 3_800.);
    assert_eq!(policy.apply(378.541), 380.);
    assert_eq!(policy.apply(100.4), 100.);
    assert_eq!(policy.apply(37.8541), 38.);
    assert_eq!(policy.apply(-37.5), -37.);
}

#[test]
fn nearest_policy() {
    assert_eq!(RoundingPolicy::Nearest.apply(12_499.), 12_499.);
    assert_eq!(RoundingPolicy::Nearest.apply(378.541), 379.);
}

#[test]
fn magnitude_is_default() {
    assert_eq!(RoundingPolicy::default(), RoundingPolicy::Magnitude);
}
