//! Terminal and NDJSON rendering for the `opener` binary.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
