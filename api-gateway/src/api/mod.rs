//! API handlers
//!
//! Each handler follows the same pattern:
//! - Extract state and parameters using Axum extractors
//! - Call the bank service
//! - Map the result or the error onto an HTTP response

pub mod bank;
pub mod health;
