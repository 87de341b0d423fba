//! Common test utilities for iotsim contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory plus helpers to run the CLI
//! - Fixtures: Reusable configs and derivation helpers

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
