//! Integration test: startup from a configuration file.
//!
//! Validates: TOML file → `load_config` → registry driver → initialized robot
//! with the power outputs set from the configured charge.

use std::io::Write;

use cleanbot_common::config::{ConfigError, LogLevel};
use cleanbot_common::hal::driver::RobotHal;
use cleanbot_control::config::load_config;
use cleanbot_control::state::{CleaningSystemManager, PowerIndicatorState};
use cleanbot_control::CleaningRobot;
use cleanbot_hal::DriverRegistry;
use tempfile::NamedTempFile;

const ROBOT_TOML: &str = r#"
[shared]
service_name = "cleanbot-it"
log_level = "debug"

[robot]
low_battery_threshold = 20

[hal]
driver = "simulation"

[hal.simulation]
initial_charge = 18
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn startup_from_config_file() {
    let file = write_config(ROBOT_TOML);
    let config = load_config(file.path()).expect("config should load");

    assert_eq!(config.shared.service_name, "cleanbot-it");
    assert_eq!(config.shared.log_level, LogLevel::Debug);

    let mut hal = DriverRegistry::with_builtin()
        .create_driver(&config.hal.driver)
        .unwrap();
    hal.init(&config.hal).unwrap();

    let mut robot = CleaningRobot::new(
        hal,
        CleaningSystemManager::new(config.robot.low_battery_threshold),
    );
    robot.initialize();

    // 18% is above the default threshold but below the configured one.
    assert_eq!(
        robot.manage_cleaning_system().unwrap(),
        PowerIndicatorState::RECHARGING
    );
    assert_eq!(robot.execute_token("f").unwrap().to_string(), "!(0,0,N)");

    robot.shutdown().unwrap();
}

#[test]
fn invalid_config_file_rejected() {
    let file = write_config("[hal.simulation]\ninitial_charge = 140\n");
    assert!(matches!(
        load_config(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn missing_config_file() {
    assert!(matches!(
        load_config(std::path::Path::new("/nonexistent/cleanbot.toml")),
        Err(ConfigError::FileNotFound)
    ));
}
