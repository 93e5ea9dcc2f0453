//! The command executor.
//!
//! `CleaningRobot` owns the pose and the last evaluated power-indicator state
//! and holds the injected HAL driver. It is single-threaded: every mutating
//! operation takes `&mut self`, and the only blocking point is the actuator
//! engagement inside [`CleaningRobot::execute`].
//!
//! # Decision order
//!
//! ```text
//!   execute(cmd)
//!       │
//!       ├─ charge_left() <= threshold ──► cleaning off, LED on ──► "!(x,y,H)"
//!       │
//!       ├─ obstacle_detected() ─────────► no motion ─────────────► "(x,y,H)(ox,oy)"
//!       │
//!       └─ engage motor, update pose ────────────────────────────► "(x,y,H)"
//! ```

use crate::command::Command;
use crate::error::RobotError;
use crate::state::{CleaningSystemManager, Heading, PowerIndicatorState, RobotState};
use crate::status::StatusReport;
use cleanbot_common::hal::driver::{
    BatteryMonitor, MotionActuator, ObstacleSensor, RobotHal, WaterLevelSensor,
};
use cleanbot_common::hal::types::RotationDirection;
use tracing::{debug, info, warn};

/// Cleaning robot driven one command at a time.
///
/// `H` defaults to `dyn RobotHal` for drivers created through the registry;
/// tests use a concrete driver type to keep access to its inspection methods.
pub struct CleaningRobot<H: RobotHal + ?Sized = dyn RobotHal> {
    /// `None` until `initialize()`.
    state: Option<RobotState>,
    /// `None` until the first power evaluation.
    indicators: Option<PowerIndicatorState>,
    power: CleaningSystemManager,
    hal: Box<H>,
}

impl<H: RobotHal + ?Sized> CleaningRobot<H> {
    /// Create an uninitialized robot around an initialized driver.
    pub fn new(hal: Box<H>, power: CleaningSystemManager) -> Self {
        Self {
            state: None,
            indicators: None,
            power,
            hal,
        }
    }

    /// Place the robot at the origin facing north.
    ///
    /// Overwrites any previous pose.
    pub fn initialize(&mut self) {
        self.state = Some(RobotState::ORIGIN);
        info!("Robot initialized at {}", RobotState::ORIGIN);
    }

    /// Current pose, `None` before `initialize()`.
    pub fn state(&self) -> Option<RobotState> {
        self.state
    }

    /// Status string `(x,y,H)`.
    ///
    /// # Errors
    /// `RobotError::NotInitialized` before `initialize()`.
    pub fn status(&self) -> Result<String, RobotError> {
        self.pose().map(|state| state.to_string())
    }

    /// Last evaluated power-indicator state.
    pub fn indicators(&self) -> Option<PowerIndicatorState> {
        self.indicators
    }

    /// Power manager in use.
    pub fn power_manager(&self) -> &CleaningSystemManager {
        &self.power
    }

    /// Injected driver.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Injected driver, mutably (e.g. to change simulated readings).
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Read the battery and drive the cleaning system / recharge LED.
    pub fn manage_cleaning_system(&mut self) -> Result<PowerIndicatorState, RobotError> {
        let charge = self.hal.charge_left()?;
        let state = self.power.manage(charge, &mut *self.hal)?;
        self.indicators = Some(state);
        Ok(state)
    }

    /// Whether the infrared sensor reports an obstacle ahead.
    pub fn obstacle_found(&mut self) -> Result<bool, RobotError> {
        Ok(self.hal.obstacle_detected()?)
    }

    /// Parse `token` and execute it.
    ///
    /// Invalid tokens fail before any sensor is read.
    pub fn execute_token(&mut self, token: &str) -> Result<StatusReport, RobotError> {
        let command: Command = token.parse()?;
        self.execute(command)
    }

    /// Execute one command.
    ///
    /// Battery and obstacle refusals are returned as `Ok` reports; the pose is
    /// only changed after the actuator engagement has completed.
    pub fn execute(&mut self, command: Command) -> Result<StatusReport, RobotError> {
        let state = self.pose()?;

        let charge = self.hal.charge_left()?;
        if self.power.is_low(charge) {
            self.power
                .apply(PowerIndicatorState::RECHARGING, &mut *self.hal)?;
            self.indicators = Some(PowerIndicatorState::RECHARGING);
            warn!(
                "Command '{}' refused: battery at {}% (threshold {}%)",
                command,
                charge,
                self.power.threshold()
            );
            return Ok(StatusReport::BatteryLow(state));
        }

        if self.hal.obstacle_detected()? {
            let cell = state.cell_ahead();
            warn!(
                "Command '{}' refused: obstacle at ({},{})",
                command, cell.0, cell.1
            );
            return Ok(StatusReport::Obstacle { state, cell });
        }

        let next = match command {
            Command::Forward => {
                self.hal.drive_forward()?;
                state.stepped_forward()
            }
            Command::TurnLeft => {
                self.hal.rotate(RotationDirection::Left)?;
                state.facing(Heading::West)
            }
            Command::TurnRight => {
                self.hal.rotate(RotationDirection::Right)?;
                state.facing(Heading::East)
            }
        };

        self.state = Some(next);
        debug!("Command '{}': {} -> {}", command, state, next);
        Ok(StatusReport::Position(next))
    }

    /// Report the water level without moving.
    ///
    /// Not part of the `execute` gate sequence: returns `?(x,y,H)` when the
    /// tank is low and `(x,y,H)` otherwise.
    pub fn check_water_level(&mut self) -> Result<StatusReport, RobotError> {
        let state = self.pose()?;
        if self.hal.water_sufficient()? {
            Ok(StatusReport::Position(state))
        } else {
            warn!("Water level insufficient at {}", state);
            Ok(StatusReport::WaterLow(state))
        }
    }

    /// Shut the driver down. The pose is kept.
    pub fn shutdown(&mut self) -> Result<(), RobotError> {
        info!("Shutting down HAL driver '{}'", self.hal.name());
        self.hal.shutdown()?;
        Ok(())
    }

    fn pose(&self) -> Result<RobotState, RobotError> {
        self.state.ok_or(RobotError::NotInitialized)
    }
}
