use math::RoundingPolicy;

use super::{destination_correction, heading_error};
use crate::params::OffCourseParams;

fn drift() -> OffCourseParams {
    OffCourseParams::new(150., 100., 10., RoundingPolicy::Magnitude).unwrap()
}

#[test]
fn heading_error_problem_text() {
    let problem = heading_error(&drift());
    assert_eq!(problem.prompt, "Heading error (degrees): 10 nm off course after flying 150 nm");
    assert_eq!(problem.answer, "4° off course");
    assert_eq!(problem.steps.len(), 3);
}

#[test]
fn destination_correction_problem_text() {
    let problem = destination_correction(&drift());
    assert_eq!(
        problem.prompt,
        "Heading correction to destination: 10 nm off course after flying 150 nm, 100 nm remaining"
    );
    assert_eq!(
        problem.answer,
        "Correction to intercept: 10° (4° heading error and 6° additional intercept angle)"
    );
    assert_eq!(problem.steps.len(), 6);
    assert_eq!(
        problem.steps[5],
        "Add 4° heading error and 6° intercept angle to get the total heading correction to \
         destination 10°"
    );
}
