use super::{groundspeed, heading, runway_crosswind, runway_headwind, wind_aloft};
use crate::params::{RunwayWindParams, WindProblemParams};

fn east_wind() -> WindProblemParams { WindProblemParams::new(0., 120., 90., 20.).unwrap() }

#[test]
fn heading_problem_text() {
    let problem = heading(&east_wind());
    assert_eq!(problem.prompt, "Heading: 120 kt true airspeed, course 0°, wind from 90° @ 20 kt");
    assert_eq!(problem.answer, "Fly heading 9°");
    assert_eq!(problem.steps.len(), 6);
    assert_eq!(
        problem.steps[4],
        "Read the wind-correction angle 9° to the right under the pencil mark"
    );
    assert_eq!(problem.steps[5], "Add 9° to the course 0° to get the heading 9°");
}

#[test]
fn heading_problem_left_correction() {
    let params = WindProblemParams::new(5., 120., 270., 20.).unwrap();
    let problem = heading(&params);
    assert_eq!(problem.answer, "Fly heading 356°");
    assert_eq!(problem.steps[5], "Subtract 9° from the course 5° to get the heading 356°");
}

#[test]
fn groundspeed_problem_text() {
    let problem = groundspeed(&east_wind());
    assert_eq!(
        problem.prompt,
        "Groundspeed (kt): 120 kt true airspeed, course 0°, wind from 90° @ 20 kt"
    );
    assert_eq!(problem.answer, "118 kt groundspeed");
    assert_eq!(problem.steps.last().unwrap(), "Read the groundspeed 118 kt under the centre grommet");
}

#[test]
fn wind_aloft_problem_text() {
    let problem = wind_aloft(&east_wind());
    assert_eq!(
        problem.prompt,
        "Wind aloft: 120 kt true airspeed, course 0°, heading 9°, 118 kt groundspeed"
    );
    assert_eq!(problem.answer, "Wind from 90° @ 20 kt");
    assert_eq!(
        problem.steps[2],
        "Compare the course 0° to the actual heading 9° to get a wind-correction angle of 9° to \
         the right"
    );
    assert_eq!(problem.steps.len(), 7);
}

#[test]
fn runway_headwind_problem_text() {
    let params = RunwayWindParams::new(9, 130., 15.).unwrap();
    let problem = runway_headwind(&params);
    assert_eq!(problem.prompt, "Headwind: Runway 9, wind from 130° @ 15 kt");
    assert_eq!(problem.answer, "11 kt headwind");
    assert_eq!(
        problem.steps[0],
        "Compare the runway heading 90° and the wind direction 130° to get a wind angle of 40° \
         from the right side of the runway"
    );
    assert!(problem.steps[2].contains("11 kt"));
}

#[test]
fn runway_crosswind_problem_text() {
    let params = RunwayWindParams::new(36, 330., 20.).unwrap();
    let problem = runway_crosswind(&params);
    assert_eq!(problem.prompt, "Crosswind: Runway 36, wind from 330° @ 20 kt");
    assert_eq!(problem.answer, "10 kt crosswind from the left side of the runway");
    assert!(problem.steps[0].starts_with("Compare the runway heading 360°"));
}

#[test]
fn runway_wind_straight_down_the_runway() {
    let params = RunwayWindParams::new(27, 270., 12.).unwrap();
    assert_eq!(runway_crosswind(&params).answer, "No crosswind");
    assert_eq!(runway_headwind(&params).answer, "12 kt headwind");

    let params = RunwayWindParams::new(18, 270., 12.).unwrap();
    assert_eq!(runway_headwind(&params).answer, "No headwind");
    assert_eq!(runway_crosswind(&params).answer, "12 kt crosswind from the right side of the runway");
}
