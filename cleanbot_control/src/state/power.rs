//! Cleaning-system / recharge-indicator derivation.
//!
//! The two power outputs are a pure function of the battery reading at
//! evaluation time: above the threshold the cleaning system runs, at or below
//! it the recharge LED is lit. Exactly one of them is on once evaluated.

use cleanbot_common::hal::consts::LOW_BATTERY_THRESHOLD_PERCENT;
use cleanbot_common::hal::driver::{HalError, PowerIndicators};
use serde::Serialize;
use tracing::debug;

/// State of the two power outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PowerIndicatorState {
    /// Cleaning system enabled.
    pub cleaning_system_on: bool,
    /// Recharge LED lit.
    pub recharge_led_on: bool,
}

impl PowerIndicatorState {
    /// Charge sufficient: cleaning on, LED off.
    pub const CLEANING: Self = Self {
        cleaning_system_on: true,
        recharge_led_on: false,
    };

    /// Charge low: cleaning off, LED on.
    pub const RECHARGING: Self = Self {
        cleaning_system_on: false,
        recharge_led_on: true,
    };
}

/// Derives and drives the power outputs from the battery level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningSystemManager {
    threshold: u8,
}

impl CleaningSystemManager {
    /// Manager with a custom low-battery threshold (percent, inclusive).
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Low-battery threshold, percent.
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// `true` when `charge` is at or below the threshold.
    pub const fn is_low(&self, charge: u8) -> bool {
        charge <= self.threshold
    }

    /// Pure derivation of the indicator state.
    pub const fn evaluate(&self, charge: u8) -> PowerIndicatorState {
        if self.is_low(charge) {
            PowerIndicatorState::RECHARGING
        } else {
            PowerIndicatorState::CLEANING
        }
    }

    /// Drive both outputs to `state`.
    pub fn apply<P>(&self, state: PowerIndicatorState, outputs: &mut P) -> Result<(), HalError>
    where
        P: PowerIndicators + ?Sized,
    {
        outputs.set_cleaning_system(state.cleaning_system_on)?;
        outputs.set_recharge_led(state.recharge_led_on)?;
        Ok(())
    }

    /// Evaluate `charge` and drive the outputs accordingly.
    ///
    /// Idempotent: repeating the call re-asserts the same two signals.
    pub fn manage<P>(&self, charge: u8, outputs: &mut P) -> Result<PowerIndicatorState, HalError>
    where
        P: PowerIndicators + ?Sized,
    {
        let state = self.evaluate(charge);
        debug!(
            "Charge {}% (threshold {}%): cleaning {}, recharge LED {}",
            charge,
            self.threshold,
            if state.cleaning_system_on { "on" } else { "off" },
            if state.recharge_led_on { "on" } else { "off" }
        );
        self.apply(state, outputs)?;
        Ok(state)
    }
}

impl Default for CleaningSystemManager {
    fn default() -> Self {
        Self::new(LOW_BATTERY_THRESHOLD_PERCENT)
    }
}
