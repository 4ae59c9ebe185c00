use super::{distance, endurance, fuel, fuel_rate, speed, time};
use crate::params::{DistanceSpeedTimeParams, FuelParams};

fn trip() -> DistanceSpeedTimeParams { DistanceSpeedTimeParams::new(120., 95.).unwrap() }

fn burn() -> FuelParams { FuelParams::new(12.3, 45.).unwrap() }

#[test]
fn speed_problem_text() {
    let problem = speed(&trip());
    assert_eq!(problem.prompt, "Groundspeed (knots): travelled 190 nm in 1:35");
    assert_eq!(problem.answer, "120 kt groundspeed");
    assert_eq!(problem.steps[1], "Rotate until the time 1:35 on the inner scale is underneath 190");
}

#[test]
fn time_problem_text() {
    let problem = time(&trip());
    assert_eq!(problem.prompt, "Time enroute: travelling 190 nm at 120 kt");
    assert_eq!(problem.answer, "1:35 enroute");
}

#[test]
fn distance_problem_text() {
    let problem = distance(&DistanceSpeedTimeParams::new(90., 45.).unwrap());
    assert_eq!(problem.prompt, "Distance travelled: flying for 45 minutes at 90 kt");
    // 67.5 nm rounds up
    assert_eq!(problem.answer, "68 nm travelled");
    assert_eq!(problem.steps[2], "Read the distance 68 nm on the outer scale above 45 minutes");
}

#[test]
fn fuel_rate_problem_text() {
    let problem = fuel_rate(&burn());
    assert_eq!(problem.prompt, "Fuel-consumption rate (gph): used 9.2 gallons in 45 minutes");
    assert_eq!(problem.answer, "Consuming 12.3 gph");
}

#[test]
fn fuel_problem_text() {
    let problem = fuel(&burn());
    assert_eq!(problem.prompt, "Fuel required (gallons): flying for 45 minutes, consuming 12.3 gph");
    assert_eq!(problem.answer, "9.2 gallons required");
    assert_eq!(problem.steps.len(), 3);
}

#[test]
fn endurance_problem_text() {
    let problem = endurance(&FuelParams::new(8., 150.).unwrap());
    assert_eq!(problem.prompt, "Endurance: 20 gallons fuel onboard, consuming 8 gph");
    assert_eq!(problem.answer, "2:30 endurance");
}
