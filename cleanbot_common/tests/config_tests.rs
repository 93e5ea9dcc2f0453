//! HAL config loading tests.
//!
//! Tests for loading `[hal]`-shaped files through `ConfigLoader`: defaults,
//! partial pin tables, unknown field rejection and pin conflicts.

use cleanbot_common::config::{ConfigError, ConfigLoader};
use cleanbot_common::hal::config::HalConfig;
use cleanbot_common::hal::driver::HalError;
use cleanbot_common::hal::types::SignalRole;
use std::fs;
use tempfile::TempDir;

fn write_hal_toml(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("hal.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_hal_file() {
    let dir = TempDir::new().unwrap();
    let path = write_hal_toml(
        &dir,
        r#"
driver = "simulation"
actuator_settle_ms = 1000

[pins]
recharge_led = 12
cleaning_system = 13
infrared = 15
water_level = 11
wheel_pwm = 16
wheel_in2 = 18
wheel_in1 = 22
rotation_in1 = 29
rotation_in2 = 31
rotation_pwm = 32
standby = 33

[simulation]
initial_charge = 55
obstacle = false
water_sufficient = true
drain_per_motion = 1
"#,
    );

    let config = HalConfig::load(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.settle_duration(), std::time::Duration::from_secs(1));
    assert_eq!(config.pins.pin(SignalRole::WheelIn1), 22);
    assert_eq!(config.simulation.initial_charge, 55);
    assert_eq!(config.simulation.drain_per_motion, 1);
}

#[test]
fn test_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_hal_toml(&dir, "driver = \"simulation\"\nsettle = 5\n");
    assert!(matches!(
        HalConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_wrong_type_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_hal_toml(&dir, "[simulation]\ninitial_charge = \"full\"\n");
    assert!(matches!(
        HalConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_pin_conflict_detected_on_validate() {
    let dir = TempDir::new().unwrap();
    let path = write_hal_toml(&dir, "[pins]\ninfrared = 13\n");

    let config = HalConfig::load(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, HalError::ConfigError(ref msg) if msg.contains("cleaning_system")));
}
