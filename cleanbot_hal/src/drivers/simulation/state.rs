//! Battery model for the simulation driver.

use cleanbot_common::hal::config::SimulationConfig;
use cleanbot_common::hal::consts::MAX_CHARGE_PERCENT;
use tracing::debug;

/// Simulated battery gauge with optional per-motion discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedBattery {
    charge: u8,
    drain_per_motion: u8,
}

impl SimulatedBattery {
    /// Battery at `charge` percent (clamped to 100) that never drains.
    pub fn new(charge: u8) -> Self {
        Self {
            charge: charge.min(MAX_CHARGE_PERCENT),
            drain_per_motion: 0,
        }
    }

    /// Battery set up from the `[hal.simulation]` section.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            drain_per_motion: config.drain_per_motion,
            ..Self::new(config.initial_charge)
        }
    }

    /// Current charge, percent.
    pub fn charge(&self) -> u8 {
        self.charge
    }

    /// Override the charge (clamped to 100).
    pub fn set_charge(&mut self, charge: u8) {
        self.charge = charge.min(MAX_CHARGE_PERCENT);
    }

    /// Apply the discharge of one motor engagement.
    pub fn drain(&mut self) {
        if self.drain_per_motion == 0 {
            return;
        }
        self.charge = self.charge.saturating_sub(self.drain_per_motion);
        debug!("Simulated battery drained to {}%", self.charge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_is_clamped() {
        let mut battery = SimulatedBattery::new(150);
        assert_eq!(battery.charge(), 100);
        battery.set_charge(255);
        assert_eq!(battery.charge(), 100);
    }

    #[test]
    fn drain_saturates_at_zero() {
        let config = SimulationConfig {
            initial_charge: 12,
            drain_per_motion: 5,
            ..SimulationConfig::default()
        };
        let mut battery = SimulatedBattery::from_config(&config);
        battery.drain();
        assert_eq!(battery.charge(), 7);
        battery.drain();
        battery.drain();
        assert_eq!(battery.charge(), 0);
    }

    #[test]
    fn default_battery_never_drains() {
        let mut battery = SimulatedBattery::new(40);
        battery.drain();
        assert_eq!(battery.charge(), 40);
    }
}
