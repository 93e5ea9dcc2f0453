//! HAL driver integration tests.
//!
//! Creates drivers through the registry, the way the binary does, and drives
//! them only through the `RobotHal` trait object.

use cleanbot_common::prelude::*;
use cleanbot_hal::DriverRegistry;

fn boxed_simulation(toml: &str) -> Box<dyn RobotHal> {
    let config = HalConfig::from_toml(toml).expect("parse hal config");
    let mut driver = DriverRegistry::with_builtin()
        .create_driver(&config.driver)
        .expect("create driver");
    driver.init(&config).expect("init driver");
    driver
}

#[test]
fn test_registry_creates_uninitialized_simulation() {
    let mut driver = DriverRegistry::with_builtin()
        .create_driver("simulation")
        .unwrap();
    assert_eq!(driver.name(), "simulation");
    assert!(!driver.version().is_empty());
    assert!(matches!(
        driver.obstacle_detected(),
        Err(HalError::SensorUnavailable(_))
    ));
}

#[test]
fn test_toml_configured_sensors() {
    let mut driver = boxed_simulation(
        r#"
driver = "simulation"

[simulation]
initial_charge = 9
obstacle = true
water_sufficient = false
"#,
    );

    assert_eq!(driver.charge_left(), Ok(9));
    assert_eq!(driver.obstacle_detected(), Ok(true));
    assert_eq!(driver.water_sufficient(), Ok(false));
}

#[test]
fn test_trait_object_actuators_and_shutdown() {
    let mut driver = boxed_simulation("");

    driver.set_cleaning_system(true).unwrap();
    driver.set_recharge_led(false).unwrap();
    driver.drive_forward().unwrap();
    driver.rotate(RotationDirection::Left).unwrap();
    driver.shutdown().unwrap();

    // After shutdown the driver refuses further engagements.
    assert!(matches!(
        driver.drive_forward(),
        Err(HalError::ActuatorFault(_))
    ));
}

#[test]
fn test_unknown_driver_name() {
    let config = HalConfig::from_toml("driver = \"ethercat\"").unwrap();
    let result = DriverRegistry::with_builtin().create_driver(&config.driver);
    assert!(matches!(result, Err(HalError::DriverNotFound(_))));
}
