//! Error types for `cmdfm-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.
//!
//! The first group of variants is produced by the filesystem layer
//! ([`crate::fs::FileOperationPort`]); the second group by the command
//! framework and dispatcher.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// A path that must be absent already exists.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The zip writer reported an error.
    #[error("archive error: {0}")]
    Archive(String),

    /// Missing or malformed arguments, or a failed pre-execution check.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The filesystem call behind a command failed while executing.
    #[error("{operation} failed: {source}")]
    OperationFailed {
        /// Short label of the operation (e.g. `"copy"`).
        operation: String,
        /// The underlying error.
        #[source]
        source: Box<CoreError>,
    },

    /// No command is registered under the given name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `undo` was requested while the history is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The most recent command could not be reversed; it stays in the history.
    #[error("undo of {command} failed: {reason}")]
    UndoFailed {
        /// Name of the command whose undo failed.
        command: String,
        /// Human-readable cause.
        reason: String,
    },

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Wraps `self` as the cause of a failed `operation`.
    pub fn during(self, operation: &str) -> Self {
        CoreError::OperationFailed {
            operation: operation.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns `true` for errors the user caused by supplying bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}

/// Convenience alias used throughout `cmdfm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
