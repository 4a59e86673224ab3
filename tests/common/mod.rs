//! Common test utilities for portalmap CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the binary
//! - Fixtures: Reusable input documents
//!
//! Each test crate uses a different subset of these helpers.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
