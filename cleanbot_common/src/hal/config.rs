//! HAL configuration types.
//!
//! - `HalConfig` - The `[hal]` section: driver selection and actuator timing
//! - `PinMap` - Physical pin number of every [`SignalRole`]
//! - `SimulationConfig` - Initial sensor readings for the simulation driver

use crate::hal::consts::{
    DEFAULT_DRIVER, MAX_CHARGE_PERCENT, PHYSICAL_SETTLE_DURATION, PIN_AIN1, PIN_AIN2,
    PIN_BIN1, PIN_BIN2, PIN_CLEANING_SYSTEM, PIN_INFRARED, PIN_PWMA, PIN_PWMB,
    PIN_RECHARGE_LED, PIN_STBY, PIN_WATER_LEVEL,
};
use crate::hal::driver::HalError;
use crate::hal::types::SignalRole;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

fn default_charge() -> u8 {
    MAX_CHARGE_PERCENT
}

fn default_true() -> bool {
    true
}

/// The `[hal]` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HalConfig {
    /// Driver name looked up in the driver registry.
    #[serde(default = "default_driver")]
    pub driver: String,

    /// Blocking settle time of each motor engagement, in milliseconds.
    /// Zero skips the wait entirely (simulation and tests).
    #[serde(default)]
    pub actuator_settle_ms: u64,

    /// Pin assignment.
    #[serde(default)]
    pub pins: PinMap,

    /// Simulation driver settings (ignored by other drivers).
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            actuator_settle_ms: 0,
            pins: PinMap::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl HalConfig {
    /// Configuration for a physical deployment: default wiring and a full
    /// mechanical settle time on every engagement.
    pub fn physical(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            actuator_settle_ms: PHYSICAL_SETTLE_DURATION.as_millis() as u64,
            ..Self::default()
        }
    }

    /// Settle time as a `Duration`.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.actuator_settle_ms)
    }

    /// Validate the HAL configuration.
    ///
    /// # Validation Rules
    /// 1. `driver` is not empty
    /// 2. Every pin in `pins` is distinct
    /// 3. `simulation.initial_charge` <= 100
    pub fn validate(&self) -> Result<(), HalError> {
        if self.driver.is_empty() {
            return Err(HalError::ConfigError("driver cannot be empty".to_string()));
        }
        self.pins.validate()?;
        if self.simulation.initial_charge > MAX_CHARGE_PERCENT {
            return Err(HalError::ConfigError(format!(
                "simulation.initial_charge {} exceeds {}",
                self.simulation.initial_charge, MAX_CHARGE_PERCENT
            )));
        }
        Ok(())
    }
}

/// Physical pin number of every signal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinMap {
    /// Recharge indicator LED.
    pub recharge_led: u8,
    /// Cleaning system enable.
    pub cleaning_system: u8,
    /// Infrared obstacle sensor.
    pub infrared: u8,
    /// Water level switch.
    pub water_level: u8,
    /// Wheel motor PWM enable.
    pub wheel_pwm: u8,
    /// Wheel motor drive input 1.
    pub wheel_in1: u8,
    /// Wheel motor drive input 2.
    pub wheel_in2: u8,
    /// Rotation motor drive input 1.
    pub rotation_in1: u8,
    /// Rotation motor drive input 2.
    pub rotation_in2: u8,
    /// Rotation motor PWM enable.
    pub rotation_pwm: u8,
    /// Shared standby disable.
    pub standby: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            recharge_led: PIN_RECHARGE_LED,
            cleaning_system: PIN_CLEANING_SYSTEM,
            infrared: PIN_INFRARED,
            water_level: PIN_WATER_LEVEL,
            wheel_pwm: PIN_PWMA,
            wheel_in1: PIN_AIN1,
            wheel_in2: PIN_AIN2,
            rotation_in1: PIN_BIN1,
            rotation_in2: PIN_BIN2,
            rotation_pwm: PIN_PWMB,
            standby: PIN_STBY,
        }
    }
}

impl PinMap {
    /// Pin assigned to `role`.
    pub const fn pin(&self, role: SignalRole) -> u8 {
        match role {
            SignalRole::RechargeLed => self.recharge_led,
            SignalRole::CleaningSystem => self.cleaning_system,
            SignalRole::Infrared => self.infrared,
            SignalRole::WaterLevel => self.water_level,
            SignalRole::WheelPwm => self.wheel_pwm,
            SignalRole::WheelIn1 => self.wheel_in1,
            SignalRole::WheelIn2 => self.wheel_in2,
            SignalRole::RotationIn1 => self.rotation_in1,
            SignalRole::RotationIn2 => self.rotation_in2,
            SignalRole::RotationPwm => self.rotation_pwm,
            SignalRole::Standby => self.standby,
        }
    }

    /// Reject maps where two roles share a pin.
    pub fn validate(&self) -> Result<(), HalError> {
        let mut seen: HashMap<u8, SignalRole> = HashMap::new();
        for role in SignalRole::ALL {
            let pin = self.pin(role);
            if let Some(other) = seen.insert(pin, role) {
                return Err(HalError::ConfigError(format!(
                    "pin {pin} assigned to both {other} and {role}"
                )));
            }
        }
        Ok(())
    }
}

/// Initial readings of the simulated sensors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Battery charge at startup, percent.
    #[serde(default = "default_charge")]
    pub initial_charge: u8,

    /// Whether the infrared sensor starts blocked.
    #[serde(default)]
    pub obstacle: bool,

    /// Whether the water tank starts sufficiently filled.
    #[serde(default = "default_true")]
    pub water_sufficient: bool,

    /// Charge lost per motor engagement, percent.
    #[serde(default)]
    pub drain_per_motion: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_charge: default_charge(),
            obstacle: false,
            water_sufficient: true,
            drain_per_motion: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_simulation_without_settle() {
        let config = HalConfig::default();
        assert_eq!(config.driver, "simulation");
        assert_eq!(config.settle_duration(), Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn physical_config_settles_for_one_second() {
        let config = HalConfig::physical("gpio");
        assert_eq!(config.settle_duration(), Duration::from_secs(1));
        assert_eq!(config.driver, "gpio");
    }

    #[test]
    fn default_pins_follow_board_wiring() {
        let pins = PinMap::default();
        assert_eq!(pins.pin(SignalRole::RechargeLed), 12);
        assert_eq!(pins.pin(SignalRole::CleaningSystem), 13);
        assert_eq!(pins.pin(SignalRole::Infrared), 15);
        assert_eq!(pins.pin(SignalRole::Standby), 33);
        assert!(pins.validate().is_ok());
    }

    #[test]
    fn duplicate_pin_rejected() {
        let pins = PinMap {
            wheel_pwm: PIN_PWMB,
            ..PinMap::default()
        };
        let err = pins.validate().unwrap_err();
        assert!(err.to_string().contains("pin 32"));
    }

    #[test]
    fn overcharged_simulation_rejected() {
        let mut config = HalConfig::default();
        config.simulation.initial_charge = 101;
        assert!(matches!(config.validate(), Err(HalError::ConfigError(_))));
    }

    #[test]
    fn partial_pin_table_keeps_defaults() {
        let config: HalConfig = toml::from_str(
            r#"
actuator_settle_ms = 250

[pins]
infrared = 7
"#,
        )
        .unwrap();
        assert_eq!(config.pins.infrared, 7);
        assert_eq!(config.pins.recharge_led, PIN_RECHARGE_LED);
        assert_eq!(config.settle_duration(), Duration::from_millis(250));
    }

    #[test]
    fn unknown_pin_rejected() {
        let result: Result<HalConfig, _> = toml::from_str("[pins]\npwmc = 40\n");
        assert!(result.is_err());
    }
}
