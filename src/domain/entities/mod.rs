//! Domain Entities
//!
//! - `Feedback` - ordered outcome of one comparison
//! - `GroupOfActions` - interchangeable actions for one opener slot
//! - `LoadedActions` - the opener being edited, with wrong-position flags

mod feedback;
mod group;
mod loaded_actions;

pub use feedback::{Feedback, Message, MessageType};
pub use group::GroupOfActions;
pub use loaded_actions::LoadedActions;
