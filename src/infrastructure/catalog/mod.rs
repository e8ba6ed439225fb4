//! Action catalog implementations

mod action_table;
mod unnamed;

pub use action_table::{ActionRecord, ActionTable};
pub use unnamed::UnnamedCatalog;
