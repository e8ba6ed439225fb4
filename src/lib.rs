//! Opener - opener authoring and rotation review
//!
//! A player records a reference opener (the ordered actions of a job's
//! early-fight rotation). Opener compares a recorded sequence of actions
//! against it and explains what went wrong: wrong actions, skipped or extra
//! actions that shifted the rotation, and recordings that ran short or long.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Feedback, GroupOfActions, LoadedActions, MessageType};
pub use domain::ports::{ActionCatalog, GroupRegistry, CATCH_ALL_ACTION_NAME, OLD_ACTION_NAME};
pub use domain::services::{ComparisonReport, OpenerComparator, Shift};
pub use domain::value_objects::{
    parse_action_list, parse_recorded_list, ActionId, Job, RawActionId,
};
pub use error::{OpenerError, OpenerResult};
pub use infrastructure::{ActionTable, GroupTable, UnnamedCatalog};
