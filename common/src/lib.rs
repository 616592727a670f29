//! Common types and utilities for the bank API
//!
//! This library contains the shared bank model and the error type used by the
//! data sources, the orchestration service and the HTTP gateway.

pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use model::bank::Bank;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
