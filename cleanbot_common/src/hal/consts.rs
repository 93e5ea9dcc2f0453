//! HAL constants.
//!
//! Default board wiring (physical pin numbering) and timing values shared by
//! every driver.

use std::time::Duration;

/// Canonical HAL service name (used for logging).
pub const HAL_SERVICE_NAME: &str = "hal";

/// Driver selected when neither config nor CLI names one.
pub const DEFAULT_DRIVER: &str = "simulation";

/// Charge (percent) at or below which the robot refuses to move.
pub const LOW_BATTERY_THRESHOLD_PERCENT: u8 = 10;

/// Upper bound of a battery reading.
pub const MAX_CHARGE_PERCENT: u8 = 100;

/// Mechanical settle time of one motor engagement on real hardware.
pub const PHYSICAL_SETTLE_DURATION: Duration = Duration::from_secs(1);

// ─── Default pin map ────────────────────────────────────────────────

/// Recharge indicator LED (output).
pub const PIN_RECHARGE_LED: u8 = 12;
/// Cleaning system enable (output).
pub const PIN_CLEANING_SYSTEM: u8 = 13;
/// Infrared obstacle sensor (input).
pub const PIN_INFRARED: u8 = 15;
/// Water level switch (input).
pub const PIN_WATER_LEVEL: u8 = 11;

/// Wheel motor PWM enable.
pub const PIN_PWMA: u8 = 16;
/// Wheel motor drive input 2.
pub const PIN_AIN2: u8 = 18;
/// Wheel motor drive input 1.
pub const PIN_AIN1: u8 = 22;

/// Rotation motor drive input 1.
pub const PIN_BIN1: u8 = 29;
/// Rotation motor drive input 2.
pub const PIN_BIN2: u8 = 31;
/// Rotation motor PWM enable.
pub const PIN_PWMB: u8 = 32;
/// Motor driver standby disable, shared by both motors.
pub const PIN_STBY: u8 = 33;
