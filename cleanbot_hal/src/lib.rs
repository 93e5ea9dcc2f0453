//! # cleanbot HAL Library
//!
//! Hardware abstraction layer with a pluggable driver architecture.
//! Drivers implement the `RobotHal` trait defined in `cleanbot_common::hal::driver`.
//!
//! # Module Structure
//!
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - HAL driver implementations
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    cleanbot_hal                              │
//! │  ┌─────────────────────┐        ┌──────────────────────────┐ │
//! │  │  DriverRegistry     │───────►│  Box<dyn RobotHal>       │ │
//! │  │  name → factory     │        │  battery / infrared /    │ │
//! │  └─────────────────────┘        │  water / power / motors  │ │
//! │                                 └────────────┬─────────────┘ │
//! │                                              ▼               │
//! │                                 ┌──────────────────────────┐ │
//! │                                 │  SimulationDriver        │ │
//! │                                 │  (SignalBank + battery)  │ │
//! │                                 └──────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]

pub mod driver_registry;
pub mod drivers;

pub use crate::driver_registry::DriverRegistry;
pub use crate::drivers::simulation::SimulationDriver;
