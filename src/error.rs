//! Error types for libscout operations.
//!
//! This module defines [`LibscoutError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probing never fails: absent headers, libraries and commands are `None`
//!   values that feed the provider predicates
//! - Use `LibscoutError` for failures that stop a run (config, selection)
//! - Use `anyhow::Error` (via `LibscoutError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for libscout operations.
#[derive(Debug, Error)]
pub enum LibscoutError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Neither a working library nor an installable provider exists.
    #[error("No provider can supply {library}: {message}")]
    NoProviderAvailable { library: String, message: String },

    /// Standard input closed before a valid choice was read.
    #[error("Selection aborted: {message}")]
    SelectionAborted { message: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for libscout operations.
pub type Result<T> = std::result::Result<T, LibscoutError>;
