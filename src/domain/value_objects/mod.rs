//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod action_id;
mod config_warning;
mod job;

pub use action_id::{parse_action_list, parse_recorded_list, ActionId, RawActionId};
pub use config_warning::ConfigWarning;
pub use job::Job;
