//! Digital line emulation for the simulation driver.
//!
//! The `SignalBank` manages:
//! - Current level of every [`SignalRole`] (inputs and outputs)
//! - An ordered log of output writes, so tests can check exact pin sequences

use cleanbot_common::hal::config::PinMap;
use cleanbot_common::hal::types::SignalRole;
use std::collections::HashMap;
use tracing::trace;

/// One output write as it would appear on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalWrite {
    /// Functional line
    pub role: SignalRole,
    /// Physical pin number
    pub pin: u8,
    /// Level written
    pub level: bool,
}

/// In-memory digital line levels.
#[derive(Debug, Clone)]
pub struct SignalBank {
    pins: PinMap,
    levels: HashMap<SignalRole, bool>,
    writes: Vec<SignalWrite>,
}

impl SignalBank {
    /// Create a bank with every line low.
    pub fn new(pins: &PinMap) -> Self {
        Self {
            pins: pins.clone(),
            levels: SignalRole::ALL.into_iter().map(|role| (role, false)).collect(),
            writes: Vec::new(),
        }
    }

    /// Drive an output line and record the write.
    pub fn write(&mut self, role: SignalRole, level: bool) {
        debug_assert!(!role.is_input(), "{role} is an input line");
        let pin = self.pins.pin(role);
        trace!("DO[{}] {} <- {}", pin, role, if level { "HIGH" } else { "LOW" });
        self.levels.insert(role, level);
        self.writes.push(SignalWrite { role, pin, level });
    }

    /// Current level of any line.
    pub fn level(&self, role: SignalRole) -> bool {
        self.levels.get(&role).copied().unwrap_or(false)
    }

    /// Force an input line (what the physical sensor would report).
    pub fn set_input(&mut self, role: SignalRole, level: bool) {
        debug_assert!(role.is_input(), "{role} is an output line");
        trace!("DI[{}] {} = {}", self.pins.pin(role), role, level);
        self.levels.insert(role, level);
    }

    /// Output writes since creation or the last [`clear_writes`](Self::clear_writes).
    pub fn writes(&self) -> &[SignalWrite] {
        &self.writes
    }

    /// Forget recorded writes; levels are kept.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Drive every output line low.
    pub fn release_outputs(&mut self) {
        for role in SignalRole::ALL.into_iter().filter(|r| !r.is_input()) {
            if self.level(role) {
                self.write(role, false);
            }
        }
    }
}
