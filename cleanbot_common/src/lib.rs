//! cleanbot Common Library
//!
//! This crate provides the hardware capability traits, shared constants and
//! configuration loading utilities for all cleanbot workspace crates.
//!
//! # Module Structure
//!
//! - [`hal`] - Capability traits, HAL errors, pin map and driver configuration
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use cleanbot_common::prelude::*;
//! use cleanbot_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod hal;
pub mod prelude;
