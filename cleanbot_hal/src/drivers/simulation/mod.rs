//! Simulation driver module.
//!
//! Emulates the robot board in memory: digital lines live in a
//! [`SignalBank`], the battery gauge in a [`SimulatedBattery`]. Used for
//! development and as the deterministic fake in tests.

mod driver;
mod io;
mod state;

pub use driver::SimulationDriver;
pub use io::{SignalBank, SignalWrite};
pub use state::SimulatedBattery;

use cleanbot_common::hal::driver::RobotHal;

/// Registry name of the simulation driver.
pub const DRIVER_NAME: &str = "simulation";

/// Factory function to create a simulation driver instance.
pub fn create_driver() -> Box<dyn RobotHal> {
    Box::new(SimulationDriver::new())
}
