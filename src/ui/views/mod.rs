pub mod compare;
pub mod groups;
pub mod search;
