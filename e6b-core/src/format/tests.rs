use std::time::Duration;

use super::{Directive, n, s, t};

fn minutes(minutes: u64) -> Duration { Duration::from_secs(minutes * 60) }

#[test]
fn number_grouping() {
    assert_eq!(n(0.).to_string(), "0");
    assert_eq!(n(999.).to_string(), "999");
    assert_eq!(n(1000.).to_string(), "1,000");
    assert_eq!(n(12_500.).to_string(), "12,500");
    assert_eq!(n(1_234_567.).to_string(), "1,234,567");
}

#[test]
fn number_fraction_digits() {
    assert_eq!(n(18.5).to_string(), "18.5");
    assert_eq!(n(0.25).to_string(), "0.25");
    assert_eq!(n(3.785_41).to_string(), "3.785");
    assert_eq!(n(2.999_9).to_string(), "3");
    assert_eq!(n(1_499.9).to_string(), "1,499.9");
}

#[test]
fn number_sign() {
    assert_eq!(n(-4.).to_string(), "-4");
    assert_eq!(n(-1_250.5).to_string(), "-1,250.5");
    assert_eq!(n(-0.).to_string(), "0");
    assert_eq!(n(-0.0001).to_string(), "0");
}

#[test]
fn duration_short_and_long() {
    assert_eq!(t(minutes(5)).to_string(), "5 minutes");
    assert_eq!(t(minutes(59)).to_string(), "59 minutes");
    assert_eq!(t(minutes(60)).to_string(), "1:00");
    assert_eq!(t(minutes(127)).to_string(), "2:07");
    assert_eq!(t(minutes(179)).to_string(), "2:59");
}

#[test]
fn literal_verbatim() {
    assert_eq!(s("left").to_string(), "left");
    assert_eq!(format!("{} {}", Directive::Number(20.), s("kt")), "20 kt");
}
