use super::{
    AlongTrackWind, CrosswindSide, WindTriangle, crosswind, effective_airspeed, headwind,
    wind_correction_angle,
};
use crate::units::{Angle, Heading, Speed};

fn knots(knots: f64) -> Speed { Speed::from_knots(knots) }

fn heading(degrees: f64) -> Heading { Heading::from_degrees(degrees) }

#[test]
fn wind_on_the_nose() {
    for course in (0..360).step_by(7) {
        let course = heading(f64::from(course));
        let solved = WindTriangle::solve(course, knots(120.), course, knots(25.));
        assert_eq!(solved.headwind, knots(25.), "{course:?}");
        assert_eq!(solved.crosswind, knots(0.), "{course:?}");
        assert_eq!(solved.wind_correction_angle, Angle::ZERO, "{course:?}");
        assert_eq!(solved.heading, course, "{course:?}");
        assert_eq!(solved.groundspeed, knots(95.), "{course:?}");
    }
}

#[test]
fn wind_on_the_tail() {
    for course in (0..360).step_by(11) {
        let course = heading(f64::from(course));
        let wind_from = course + Angle::STRAIGHT;
        assert_eq!(headwind(course, wind_from, knots(18.)), knots(-18.), "{course:?}");
        assert_eq!(crosswind(course, wind_from, knots(18.)), knots(0.), "{course:?}");
    }
}

#[test]
fn no_crosswind_needs_no_correction() {
    for tas in [60., 97., 120., 250.] {
        assert_eq!(wind_correction_angle(knots(tas), knots(0.)), Angle::ZERO);
        assert_eq!(effective_airspeed(knots(tas), knots(0.)), knots(tas));
    }
}

#[test]
fn crosswind_from_the_right() {
    let solved = WindTriangle::solve(Heading::NORTH, knots(120.), Heading::EAST, knots(20.));
    assert_eq!(solved.headwind, knots(0.));
    assert_eq!(solved.crosswind, knots(20.));
    assert_eq!(solved.crosswind_side(), CrosswindSide::Right);
    assert_eq!(solved.effective_airspeed, knots(118.));
    assert_eq!(solved.wind_correction_angle, Angle::from_degrees(9.));
    assert_eq!(solved.heading, heading(9.));
    assert_eq!(solved.groundspeed, knots(118.));
}

#[test]
fn crosswind_from_the_left_wraps_heading() {
    let solved = WindTriangle::solve(heading(5.), knots(120.), heading(275.), knots(20.));
    assert_eq!(solved.crosswind, knots(-20.));
    assert_eq!(solved.crosswind_side(), CrosswindSide::Left);
    assert_eq!(solved.wind_correction_angle, Angle::from_degrees(-9.));
    assert_eq!(solved.heading, heading(356.));
}

#[test]
fn quartering_tailwind() {
    // 135 degrees off the course: cos = -0.7071, sin = 0.7071
    let solved = WindTriangle::solve(Heading::NORTH, knots(100.), heading(135.), knots(30.));
    assert_eq!(solved.headwind, knots(-21.));
    assert_eq!(solved.along_track(), AlongTrackWind::Tailwind);
    assert_eq!(solved.crosswind, knots(21.));
    // 100 / sqrt(100^2 + 21^2) = 0.97864, acos = 11.86 degrees
    assert_eq!(solved.wind_correction_angle, Angle::from_degrees(12.));
    assert_eq!(solved.effective_airspeed, knots(98.));
    assert_eq!(solved.groundspeed, knots(119.));
}

#[test]
fn groundspeed_and_heading_invariants() {
    for course in (0..360).step_by(13) {
        for wind_from in (0..360).step_by(40) {
            let solved = WindTriangle::solve(
                heading(f64::from(course)),
                knots(140.),
                heading(f64::from(wind_from)),
                knots(35.),
            );
            assert_eq!(solved.groundspeed, solved.effective_airspeed - solved.headwind);
            let expected = (f64::from(course) + solved.wind_correction_angle.into_degrees() + 360.)
                % 360.;
            assert_eq!(solved.heading.degrees(), expected);
        }
    }
}

#[test]
fn correction_words() {
    assert_eq!(CrosswindSide::Left.correction_words(), ("Subtract", "from"));
    assert_eq!(CrosswindSide::Right.name(), "right");
    assert_eq!(AlongTrackWind::of(knots(0.)), AlongTrackWind::Headwind);
    assert_eq!(AlongTrackWind::Tailwind.correction_words(), ("Add", "to"));
}
