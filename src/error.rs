//! Error types for Opener
//!
//! Comparison results are never errors: mismatches and shifts are recorded in
//! the feedback log. These variants cover loading configuration and action
//! data, and parsing user input.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Opener operations
pub type OpenerResult<T> = Result<T, OpenerError>;

/// Main error type for Opener operations
#[derive(Error, Debug)]
pub enum OpenerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Action data sheet could not be parsed
    #[error("invalid action catalog in {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// The same action id appears twice in one data sheet
    #[error("duplicate action id {id} in {file}\n  → Fix: Remove one of the [[actions]] entries with id = {id}")]
    DuplicateAction { id: u32, file: PathBuf },

    /// Action data sheet not found
    #[error("action catalog not found: {path}\n  → Fix: Pass --catalog <path> or set [catalog] path in opener.toml")]
    CatalogNotFound { path: PathBuf },

    /// Text that is not an action identifier
    #[error("invalid action id '{value}' - expected an integer, or '*' for catch-all")]
    InvalidActionId { value: String },

    /// Catch-all or group marker where a performed action is required
    #[error("recorded actions must be concrete action ids, got '{value}'")]
    MarkerInRecording { value: String },
}
