//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the comparator with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definitions
//! - `factory` - Creates the catalog and comparator (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{catalog_path, create_catalog, create_comparator, load_action_table};
