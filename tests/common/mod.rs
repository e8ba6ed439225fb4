//! Common test utilities for Opener CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp project and home directories
//! - Fixtures: Reusable catalog and config content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
