//! Error types for godot-mcp
//!
//! Process-level failures: configuration, log setup, file access. Failures
//! talking to the Godot editor are modelled separately by the server crate.

use std::path::PathBuf;

/// Main error type for process-level operations
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    // === IO Errors ===

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Configuration Errors ===

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for {name}: {message}")]
    ConfigInvalid { name: &'static str, message: String },

    // === Internal Errors ===

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an error for a single invalid setting
    pub fn invalid(name: &'static str, msg: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            name,
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
