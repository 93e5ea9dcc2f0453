//! Error types for command execution.

use cleanbot_common::hal::driver::HalError;
use thiserror::Error;

/// Errors returned by [`CleaningRobot`](crate::robot::CleaningRobot).
///
/// Battery and obstacle refusals are not errors; they are
/// [`StatusReport`](crate::status::StatusReport) variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    /// Unrecognized command token.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// State queried or commanded before `initialize()`.
    #[error("Robot not initialized: call initialize() first")]
    NotInitialized,

    /// A sensor or actuator failed.
    #[error(transparent)]
    Hal(#[from] HalError),
}
