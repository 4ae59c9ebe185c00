//! Off-course corrections by the 1-in-60 rule.

use crate::Problem;
use crate::format::n;
use crate::params::OffCourseParams;

#[cfg(test)]
mod tests;

fn heading_error_steps(params: &OffCourseParams) -> Vec<String> {
    let off_course = n(params.distance_off_course.into_nm());
    vec![
        format!("Find the distance off course {off_course} nm on the outer scale"),
        format!(
            "Rotate until the distance flown {} nm appears on the inner scale below {off_course}",
            n(params.distance_flown.into_nm())
        ),
        format!(
            "Read the heading error {}° above the rate pointer (60)",
            n(params.heading_error.into_degrees())
        ),
    ]
}

/// Track error after drifting off course.
#[must_use]
pub fn heading_error(params: &OffCourseParams) -> Problem {
    Problem::new(
        format!(
            "Heading error (degrees): {} nm off course after flying {} nm",
            n(params.distance_off_course.into_nm()),
            n(params.distance_flown.into_nm())
        ),
        format!("{}° off course", n(params.heading_error.into_degrees())),
        heading_error_steps(params),
    )
}

/// Total correction to fly directly to the destination.
#[must_use]
pub fn destination_correction(params: &OffCourseParams) -> Problem {
    let off_course = n(params.distance_off_course.into_nm());
    let heading_error = n(params.heading_error.into_degrees());
    let intercept = n(params.intercept_angle.into_degrees());
    let total = n(params.total_correction().into_degrees());

    let mut steps = heading_error_steps(params);
    steps.extend([
        format!(
            "Rotate again until the distance remaining {} nm appears on the inner scale below \
             {off_course}",
            n(params.distance_remaining.into_nm())
        ),
        format!("Read the intercept angle {intercept}° above the rate pointer (60)"),
        format!(
            "Add {heading_error}° heading error and {intercept}° intercept angle to get the total \
             heading correction to destination {total}°"
        ),
    ]);

    Problem::new(
        format!(
            "Heading correction to destination: {off_course} nm off course after flying {} nm, {} \
             nm remaining",
            n(params.distance_flown.into_nm()),
            n(params.distance_remaining.into_nm())
        ),
        format!(
            "Correction to intercept: {total}° ({heading_error}° heading error and {intercept}° \
             additional intercept angle)"
        ),
        steps,
    )
}
