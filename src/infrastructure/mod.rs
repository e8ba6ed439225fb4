//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - Action data sheet (TOML) backed catalog
//! - `groups` - Group registry over configured groups

pub mod catalog;
pub mod groups;

pub use catalog::{ActionRecord, ActionTable, UnnamedCatalog};
pub use groups::GroupTable;
