//! Prelude module for common re-exports.
//!
//! ```rust
//! use cleanbot_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};
pub use crate::hal::config::{HalConfig, PinMap, SimulationConfig};

// ─── Capabilities ───────────────────────────────────────────────────
pub use crate::hal::driver::{
    BatteryMonitor, DriverFactory, HalError, MotionActuator, ObstacleSensor, PowerIndicators,
    RobotHal, WaterLevelSensor,
};
pub use crate::hal::types::{MotorEngagement, RotationDirection, SignalRole};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::hal::consts::{LOW_BATTERY_THRESHOLD_PERCENT, PHYSICAL_SETTLE_DURATION};
