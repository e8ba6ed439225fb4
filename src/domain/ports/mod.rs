//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod action_catalog;
pub mod group_registry;

pub use action_catalog::{ActionCatalog, CATCH_ALL_ACTION_NAME, OLD_ACTION_NAME};
pub use group_registry::GroupRegistry;
