//! HAL capability traits and error types.
//!
//! This module defines:
//! - One capability trait per signal group (`BatteryMonitor`, `ObstacleSensor`,
//!   `WaterLevelSensor`, `PowerIndicators`, `MotionActuator`)
//! - `RobotHal` - The full driver interface: every capability plus lifecycle
//! - `HalError` enum - Error types for HAL operations
//! - `DriverFactory` type alias - Factory function type

use crate::hal::config::HalConfig;
use crate::hal::types::RotationDirection;
use thiserror::Error;

/// Error types for HAL operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HalError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A sensor could not be read
    #[error("Sensor unavailable: {0}")]
    SensorUnavailable(String),

    /// An actuator did not complete its engagement
    #[error("Actuator fault: {0}")]
    ActuatorFault(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn RobotHal>;

// ─── Capabilities ───────────────────────────────────────────────────

/// Battery gauge.
pub trait BatteryMonitor {
    /// Remaining charge in percent, `0..=100`.
    fn charge_left(&mut self) -> Result<u8, HalError>;
}

/// Infrared proximity sensor facing the heading direction.
pub trait ObstacleSensor {
    /// `true` when something blocks the cell ahead.
    fn obstacle_detected(&mut self) -> Result<bool, HalError>;
}

/// Water tank level switch.
pub trait WaterLevelSensor {
    /// `true` when the tank holds enough water to clean.
    fn water_sufficient(&mut self) -> Result<bool, HalError>;
}

/// The two binary power outputs.
pub trait PowerIndicators {
    /// Drive the cleaning-system enable line.
    fn set_cleaning_system(&mut self, on: bool) -> Result<(), HalError>;

    /// Drive the recharge LED line.
    fn set_recharge_led(&mut self, on: bool) -> Result<(), HalError>;
}

/// Wheel and rotation motors.
///
/// Both operations block for the driver's settle duration and return once the
/// motor has been stopped again.
pub trait MotionActuator {
    /// Move one grid cell forward.
    fn drive_forward(&mut self) -> Result<(), HalError>;

    /// Rotate in place.
    fn rotate(&mut self, direction: RotationDirection) -> Result<(), HalError>;
}

// ─── Driver ─────────────────────────────────────────────────────────

/// Trait defining the interface for HAL drivers.
///
/// The robot holds one boxed `RobotHal` and talks to each signal group through
/// the capability supertraits.
///
/// # Lifecycle
///
/// 1. `init()` - Called once before the first command
/// 2. capability calls - One command at a time, from a single thread
/// 3. `shutdown()` - Called when the process is stopping
pub trait RobotHal:
    BatteryMonitor + ObstacleSensor + WaterLevelSensor + PowerIndicators + MotionActuator + Send
{
    /// Returns the driver's unique identifier (e.g., "simulation").
    fn name(&self) -> &'static str;

    /// Returns the driver's semantic version.
    fn version(&self) -> &'static str;

    /// Initialize the driver with the HAL configuration.
    ///
    /// # Errors
    /// Return `HalError::InitFailed` or `HalError::ConfigError` if the driver
    /// cannot be brought up.
    fn init(&mut self, config: &HalConfig) -> Result<(), HalError>;

    /// Graceful shutdown: stop motors and release outputs.
    fn shutdown(&mut self) -> Result<(), HalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hal_error_display() {
        let err = HalError::SensorUnavailable("battery gauge".to_string());
        assert!(err.to_string().contains("battery gauge"));

        let err = HalError::DriverNotFound("gpio".to_string());
        assert_eq!(err.to_string(), "Driver not found: gpio");
    }
}
