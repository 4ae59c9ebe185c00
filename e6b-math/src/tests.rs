use crate::{Between, Length, Speed, Zero};

#[test]
fn between_inclusive_bounds() {
    assert!(5.0.between_inclusive(&5., &10.));
    assert!(10.0.between_inclusive(&5., &10.));
    assert!(!10.5.between_inclusive(&5., &10.));
    let (min, max) = (Speed::from_knots(60.), Speed::from_knots(250.));
    assert!(Speed::from_knots(60.).between_inclusive(&min, &max));
    assert!(!Length::from_nm(-1.).between_inclusive(&Length::ZERO, &Length::from_nm(1.)));
}

#[test]
fn zero_quantities() {
    assert!(Speed::from_knots(0.).is_zero());
    assert!(Speed::from_knots(-0.).is_zero());
    assert!(!Length::from_nm(0.1).is_zero());
    assert_eq!(Speed::zero(), Speed::ZERO);
}
