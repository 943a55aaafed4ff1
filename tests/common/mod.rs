//! Common test utilities for fpsync contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated home directory plus a resolver wired to it
//! - Assertion macros: `assert_error_kinds!`, `assert_items!`
//! - Fixtures: Reusable configuration files

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
