//! Bank model

use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Bank record
///
/// The serialized field names are part of the external API contract and must
/// not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Bank {
    /// Unique account number, immutable once created
    #[serde(rename = "account_number")]
    pub account_number: String,
    /// Trust score (no enforced range)
    #[serde(rename = "trust")]
    pub trust: f64,
    /// Default transaction fee
    #[serde(rename = "default_transaction_fee")]
    pub transaction_fee: i32,
}

impl Bank {
    /// Create a new bank record
    pub fn new(account_number: impl Into<String>, trust: f64, transaction_fee: i32) -> Self {
        Self {
            account_number: account_number.into(),
            trust,
            transaction_fee,
        }
    }

    /// Whether the account number is usable as a key
    pub fn has_valid_account_number(&self) -> bool {
        !self.account_number.trim().is_empty()
    }

    /// Replace every attribute except the account number
    pub fn apply(&mut self, update: Bank) {
        self.trust = update.trust;
        self.transaction_fee = update.transaction_fee;
    }
}
