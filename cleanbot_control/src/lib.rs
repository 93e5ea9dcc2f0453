//! # cleanbot Control Library
//!
//! Command-execution core of a cleaning robot moving on an integer grid.
//! Every issued command passes three gates in order:
//!
//! 1. **Battery gate**: charge at or below the threshold refuses the command
//!    (`!(x,y,H)`) and switches the recharge LED on.
//! 2. **Obstacle gate**: a blocked infrared sensor refuses the command and
//!    reports the projected obstacle cell (`(x,y,H)(ox,oy)`).
//! 3. **Dispatch**: one actuator engagement, then the state update
//!    (`(x,y,H)`).
//!
//! Hardware is reached only through the capability traits in
//! `cleanbot_common::hal::driver`; see [`robot::CleaningRobot`].

pub mod command;
pub mod config;
pub mod error;
pub mod robot;
pub mod state;
pub mod status;

pub use crate::command::Command;
pub use crate::error::RobotError;
pub use crate::robot::CleaningRobot;
pub use crate::status::StatusReport;
