//! Integration tests for the cleanbot control library.
//!
//! These tests exercise the executor together with the registry-created
//! simulation driver and configuration loading, the way the binary wires them.

mod integration;
