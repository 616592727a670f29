//! In-memory data source

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::bank::Bank;
use tokio::sync::RwLock;
use tracing::debug;

use super::BankDataSource;

/// In-memory data source for bank records
///
/// Each operation holds the lock for its whole check-then-act sequence, so
/// concurrent writers on the same account number see exactly one outcome.
pub struct InMemoryBankDataSource {
    /// Banks in insertion order
    banks: RwLock<Vec<Bank>>,
}

impl InMemoryBankDataSource {
    /// Create an empty data source
    pub fn new() -> Self {
        Self::with_banks(Vec::new())
    }

    /// Create a data source holding the given banks
    pub fn with_banks(banks: Vec<Bank>) -> Self {
        Self {
            banks: RwLock::new(banks),
        }
    }

    /// Create a data source seeded with the fixture banks
    #[allow(clippy::approx_constant)]
    pub fn with_mock_data() -> Self {
        Self::with_banks(vec![
            Bank::new("1234", 3.14, 17),
            Bank::new("1010", 17.0, 0),
            Bank::new("5678", 0.0, 100),
        ])
    }

    /// Number of stored banks
    pub async fn len(&self) -> usize {
        self.banks.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.banks.read().await.is_empty()
    }
}

impl Default for InMemoryBankDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BankDataSource for InMemoryBankDataSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn retrieve_banks(&self) -> Result<Vec<Bank>> {
        Ok(self.banks.read().await.clone())
    }

    async fn retrieve_bank(&self, account_number: &str) -> Result<Bank> {
        self.banks
            .read()
            .await
            .iter()
            .find(|b| b.account_number == account_number)
            .cloned()
            .ok_or_else(|| Error::BankNotFound(format!("Could not find a bank with account number {}", account_number)))
    }

    async fn create_bank(&self, bank: Bank) -> Result<Bank> {
        let mut banks = self.banks.write().await;

        if banks.iter().any(|b| b.account_number == bank.account_number) {
            return Err(Error::BankAlreadyExists(format!(
                "Bank with account number {} already exists",
                bank.account_number
            )));
        }

        debug!("Storing bank {}", bank.account_number);
        banks.push(bank.clone());
        Ok(bank)
    }

    async fn update_bank(&self, bank: Bank) -> Result<Bank> {
        let mut banks = self.banks.write().await;

        let current = banks
            .iter_mut()
            .find(|b| b.account_number == bank.account_number)
            .ok_or_else(|| Error::BankNotFound(format!("Could not find a bank with account number {}", bank.account_number)))?;

        current.apply(bank);
        Ok(current.clone())
    }

    async fn delete_bank(&self, account_number: &str) -> Result<()> {
        let mut banks = self.banks.write().await;

        let index = banks
            .iter()
            .position(|b| b.account_number == account_number)
            .ok_or_else(|| Error::BankNotFound(format!("Could not find a bank with account number {}", account_number)))?;

        debug!("Removing bank {}", account_number);
        banks.remove(index);
        Ok(())
    }
}
