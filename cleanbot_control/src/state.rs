//! Robot state root.
//!
//! Pose on the grid and the derived power-indicator state.

pub mod power;
pub mod robot;

pub use power::{CleaningSystemManager, PowerIndicatorState};
pub use robot::{Heading, RobotState};
