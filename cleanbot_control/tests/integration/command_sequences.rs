//! Integration test: multi-command sequences against the simulation driver.
//!
//! Validates the status string of every step while sensor readings change
//! between commands.

use cleanbot_common::hal::config::HalConfig;
use cleanbot_common::hal::types::{MotorEngagement, RotationDirection, SignalRole};
use cleanbot_control::state::{CleaningSystemManager, Heading, RobotState};
use cleanbot_control::{CleaningRobot, RobotError, StatusReport};
use cleanbot_hal::SimulationDriver;

fn robot_with(config: &HalConfig) -> CleaningRobot<SimulationDriver> {
    let driver = SimulationDriver::with_config(config).unwrap();
    let mut robot = CleaningRobot::new(Box::new(driver), CleaningSystemManager::default());
    robot.initialize();
    robot
}

fn run(robot: &mut CleaningRobot<SimulationDriver>, tokens: &str) -> Vec<String> {
    tokens
        .split_whitespace()
        .map(|t| match robot.execute_token(t) {
            Ok(report) => report.to_string(),
            Err(e) => format!("error: {e}"),
        })
        .collect()
}

#[test]
fn drive_turn_and_hit_obstacle() {
    let mut robot = robot_with(&HalConfig::default());

    assert_eq!(run(&mut robot, "f f r"), vec!["(0,1,N)", "(0,2,N)", "(0,2,E)"]);

    robot.hal_mut().set_obstacle(true);
    assert_eq!(run(&mut robot, "f"), vec!["(0,2,E)(1,2)"]);

    robot.hal_mut().set_obstacle(false);
    assert_eq!(run(&mut robot, "l f"), vec!["(0,2,W)", "(0,3,W)"]);

    assert_eq!(
        robot.hal().engagements(),
        &[
            MotorEngagement::Wheel,
            MotorEngagement::Wheel,
            MotorEngagement::Rotation(RotationDirection::Right),
            MotorEngagement::Rotation(RotationDirection::Left),
            MotorEngagement::Wheel,
        ]
    );
}

#[test]
fn draining_battery_stops_the_robot() {
    let mut config = HalConfig::default();
    config.simulation.initial_charge = 14;
    config.simulation.drain_per_motion = 2;
    let mut robot = robot_with(&config);

    // 14 -> 12 -> 10: the third command sees 10% and is refused.
    assert_eq!(run(&mut robot, "f f f l"), vec![
        "(0,1,N)",
        "(0,2,N)",
        "!(0,2,N)",
        "!(0,2,N)",
    ]);
    assert!(robot.hal().output(SignalRole::RechargeLed));
    assert!(!robot.hal().output(SignalRole::CleaningSystem));
    assert_eq!(robot.hal().engagements().len(), 2);
}

#[test]
fn invalid_tokens_are_reported_and_skipped() {
    let mut robot = robot_with(&HalConfig::default());
    assert_eq!(run(&mut robot, "f b f"), vec![
        "(0,1,N)",
        "error: Invalid command: b",
        "(0,2,N)",
    ]);
}

#[test]
fn boxed_trait_object_robot() {
    let driver: Box<dyn cleanbot_common::hal::driver::RobotHal> =
        Box::new(SimulationDriver::with_config(&HalConfig::default()).unwrap());
    let mut robot: CleaningRobot = CleaningRobot::new(driver, CleaningSystemManager::default());

    assert_eq!(robot.status(), Err(RobotError::NotInitialized));
    robot.initialize();
    assert_eq!(
        robot.execute_token("r").unwrap(),
        StatusReport::Position(RobotState::new(0, 0, Heading::East))
    );
}
