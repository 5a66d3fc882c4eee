//! Error type for seace-admin.
//!
//! The selector and shell cannot fail. Everything here comes from the
//! surrounding layers: config files, the terminal, JSON output, logging.

use std::path::PathBuf;

/// Unified error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal or filesystem I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file missing or malformed.
    #[error("Config error: {} - {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Snapshot serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Convenience Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
