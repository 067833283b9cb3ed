//! Error types for folio-term.

use std::io;

/// Errors produced by the folio-term interpreter and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The dispatched name is not in the command table.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `cd` target does not name a registered directory.
    #[error("cd: {0}: no such directory")]
    NoSuchDirectory(String),

    /// `ls` target is not a listable path (nested, unknown, or bare outside root).
    #[error("ls: {0}: invalid path")]
    InvalidPath(String),

    /// A command failed for a reason other than path resolution.
    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Net(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
