//! Robot configuration (`cleanbot.toml`).
//!
//! ```toml
//! [shared]
//! service_name = "cleanbot-sim-01"
//! log_level = "info"
//!
//! [robot]
//! low_battery_threshold = 10
//!
//! [hal]
//! driver = "simulation"
//! actuator_settle_ms = 0
//! ```
//!
//! Every section is optional; missing values take their defaults.

use cleanbot_common::config::{ConfigError, ConfigLoader, SharedConfig};
use cleanbot_common::hal::config::HalConfig;
use cleanbot_common::hal::consts::{LOW_BATTERY_THRESHOLD_PERCENT, MAX_CHARGE_PERCENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

fn default_threshold() -> u8 {
    LOW_BATTERY_THRESHOLD_PERCENT
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotConfig {
    /// Service name and log level.
    #[serde(default)]
    pub shared: SharedConfig,

    /// Decision thresholds.
    #[serde(default)]
    pub robot: RobotSettings,

    /// Driver selection and wiring.
    #[serde(default)]
    pub hal: HalConfig,
}

/// The `[robot]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotSettings {
    /// Charge (percent) at or below which commands are refused.
    #[serde(default = "default_threshold")]
    pub low_battery_threshold: u8,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            low_battery_threshold: default_threshold(),
        }
    }
}

impl RobotConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.robot.low_battery_threshold > MAX_CHARGE_PERCENT {
            return Err(ConfigError::ValidationError(format!(
                "robot.low_battery_threshold {} exceeds {}",
                self.robot.low_battery_threshold, MAX_CHARGE_PERCENT
            )));
        }

        self.hal
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<RobotConfig, ConfigError> {
    let config = RobotConfig::load(path)?;
    config.validate()?;
    info!(
        "Loaded config for '{}' from {} (driver '{}')",
        config.shared.service_name,
        path.display(),
        config.hal.driver
    );
    Ok(config)
}
