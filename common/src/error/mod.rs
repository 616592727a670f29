//! Error types for the bank API
//!
//! This module provides the error type shared by every crate in the workspace.
//! Data sources and the orchestration service return these errors; the HTTP
//! gateway maps each variant onto a status code.

use std::fmt::Display;
use thiserror::Error;

/// Bank API error type
#[derive(Debug, Error)]
pub enum Error {
    /// No bank with the given account number exists
    #[error("Bank not found: {0}")]
    BankNotFound(String),

    /// A bank with the given account number already exists
    #[error("Bank already exists: {0}")]
    BankAlreadyExists(String),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Operation not supported by the configured data source
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Error talking to a remote banks API
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Payload from a remote banks API could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::BankNotFound(msg) => Error::BankNotFound(format!("{}: {}", context, msg)),
                Error::BankAlreadyExists(msg) => Error::BankAlreadyExists(format!("{}: {}", context, msg)),
                Error::ValidationError(msg) => Error::ValidationError(format!("{}: {}", context, msg)),
                Error::Unsupported(msg) => Error::Unsupported(format!("{}: {}", context, msg)),
                Error::Network(msg) => Error::Network(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
            }
        })
    }
}
