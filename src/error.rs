//! Error types for permtree
//!
//! Uses `thiserror` for library errors. The tree engine itself is infallible;
//! errors only arise at the edges (payload loading, forms, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for permtree operations
pub type PermtreeResult<T> = Result<T, PermtreeError>;

/// Main error type for permtree operations
#[derive(Error, Debug)]
pub enum PermtreeError {
    /// Two nodes in one forest share a key
    #[error("duplicate node key '{key}' (first seen under '{first_title}', again under '{second_title}')")]
    DuplicateKey {
        key: String,
        first_title: String,
        second_title: String,
    },

    /// A node has an empty key
    #[error("node '{title}' has an empty key - every node needs a unique key")]
    EmptyKey { title: String },

    /// An action referenced a key that is not in the forest
    #[error("no node with key '{key}'")]
    UnknownKey { key: String },

    /// Menu or staff payload could not be decoded
    #[error("invalid payload in {file}: {message}")]
    InvalidPayload { file: PathBuf, message: String },

    /// A menu or staff form failed validation
    #[error("invalid {form} form: {message}")]
    InvalidForm { form: &'static str, message: String },

    /// Action string could not be parsed (expected `kind:key`)
    #[error("invalid action '{input}' - expected one of expand:KEY, check:KEY, select:KEY, delete:KEY")]
    InvalidAction { input: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
