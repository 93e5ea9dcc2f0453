//! Hardware abstraction layer: capability traits, errors, configuration.
//!
//! Drivers implementing [`driver::RobotHal`] live in the `cleanbot_hal` crate.

pub mod config;
pub mod consts;
pub mod driver;
pub mod types;
