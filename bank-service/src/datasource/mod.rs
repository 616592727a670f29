//! Data sources for bank records

mod mock;
mod network;

use async_trait::async_trait;
use common::error::Result;
use common::model::bank::Bank;

pub use mock::InMemoryBankDataSource;
pub use network::{NetworkBankDataSource, DEFAULT_BANKS_URL};

/// Bank data source trait defining the interface for bank storage backends
#[async_trait]
pub trait BankDataSource: Send + Sync {
    /// Short name of the backend, used in logs and the health endpoint
    fn name(&self) -> &str;

    /// Get all known banks
    async fn retrieve_banks(&self) -> Result<Vec<Bank>>;

    /// Get a bank by account number
    async fn retrieve_bank(&self, account_number: &str) -> Result<Bank>;

    /// Store a new bank, failing if the account number is taken
    async fn create_bank(&self, bank: Bank) -> Result<Bank>;

    /// Replace an existing bank, failing if the account number is unknown
    async fn update_bank(&self, bank: Bank) -> Result<Bank>;

    /// Remove a bank, failing if the account number is unknown
    async fn delete_bank(&self, account_number: &str) -> Result<()>;
}
