//! Status reports and their string encoding.
//!
//! | Form | Meaning |
//! |---|---|
//! | `(x,y,H)` | command accepted (or plain status) |
//! | `!(x,y,H)` | battery low, command refused |
//! | `(x,y,H)(ox,oy)` | obstacle ahead, command refused |
//! | `?(x,y,H)` | water insufficient |

use crate::state::RobotState;
use core::fmt;

/// Outcome of one command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusReport {
    /// Current pose after an accepted command.
    Position(RobotState),
    /// Battery at or below threshold; pose unchanged.
    BatteryLow(RobotState),
    /// Obstacle detected; pose unchanged.
    Obstacle {
        /// Pose of the robot.
        state: RobotState,
        /// Cell the robot would have entered.
        cell: (i64, i64),
    },
    /// Water tank below the required level.
    WaterLow(RobotState),
}

impl StatusReport {
    /// Pose carried by the report.
    pub const fn state(&self) -> RobotState {
        match *self {
            Self::Position(state)
            | Self::BatteryLow(state)
            | Self::WaterLow(state)
            | Self::Obstacle { state, .. } => state,
        }
    }

    /// `true` unless the report is a plain position.
    pub const fn is_refusal(&self) -> bool {
        !matches!(self, Self::Position(_))
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(state) => write!(f, "{state}"),
            Self::BatteryLow(state) => write!(f, "!{state}"),
            Self::Obstacle {
                state,
                cell: (x, y),
            } => write!(f, "{state}({x},{y})"),
            Self::WaterLow(state) => write!(f, "?{state}"),
        }
    }
}
