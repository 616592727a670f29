//! Bank service implementation

use std::sync::Arc;

use common::error::{Error, ErrorExt, Result};
use common::model::bank::Bank;
use tracing::{debug, info};

use crate::config::{BankServiceConfig, DataSourceKind};
use crate::datasource::{BankDataSource, InMemoryBankDataSource, NetworkBankDataSource};

/// Bank service delegating every operation to its data source
pub struct BankService {
    /// Data source for bank records
    data_source: Arc<dyn BankDataSource>,
}

/// Data source type
pub enum DataSourceType {
    /// In-memory data source seeded with fixture data
    Mock,
    /// Remote data source, optionally pointed at a custom endpoint
    Network(Option<String>),
}

impl BankService {
    /// Create a new bank service backed by fixture data
    pub fn new() -> Self {
        Self {
            data_source: Arc::new(InMemoryBankDataSource::with_mock_data()),
        }
    }

    /// Create a bank service around an existing data source
    pub fn from_data_source(data_source: Arc<dyn BankDataSource>) -> Self {
        Self { data_source }
    }

    /// Create a new bank service with a specific data source type
    pub fn with_data_source(source_type: DataSourceType) -> Result<Self> {
        let data_source: Arc<dyn BankDataSource> = match source_type {
            DataSourceType::Mock => Arc::new(InMemoryBankDataSource::with_mock_data()),
            DataSourceType::Network(base_url) => {
                let defaults = BankServiceConfig::default();
                let base_url = base_url.unwrap_or_else(|| defaults.banks_url.clone());
                Arc::new(NetworkBankDataSource::new(base_url, defaults.timeout())?)
            }
        };

        Ok(Self { data_source })
    }

    /// Create a new bank service with a configuration
    pub fn with_config(config: &BankServiceConfig) -> Result<Self> {
        let data_source: Arc<dyn BankDataSource> = match config.data_source {
            DataSourceKind::Mock => Arc::new(InMemoryBankDataSource::with_mock_data()),
            DataSourceKind::Network => {
                info!("Using banks API at {} (timeout {}s)", config.banks_url, config.timeout_secs);
                Arc::new(NetworkBankDataSource::new(config.banks_url.clone(), config.timeout())?)
            }
        };

        Ok(Self { data_source })
    }

    /// Name of the configured data source
    pub fn data_source_name(&self) -> &str {
        self.data_source.name()
    }

    /// Get all banks
    pub async fn get_banks(&self) -> Result<Vec<Bank>> {
        debug!("Listing banks from {} data source", self.data_source.name());
        self.data_source.retrieve_banks().await
    }

    /// Get a bank by account number
    pub async fn get_bank(&self, account_number: &str) -> Result<Bank> {
        debug!("Getting bank {}", account_number);
        self.data_source.retrieve_bank(account_number).await
    }

    /// Add a new bank
    pub async fn add_bank(&self, bank: Bank) -> Result<Bank> {
        if !bank.has_valid_account_number() {
            return Err(Error::ValidationError("Account number must not be empty".to_string()));
        }

        info!("Creating bank {}", bank.account_number);
        let account_number = bank.account_number.clone();
        self.data_source.create_bank(bank).await
            .with_context(|| format!("Failed to create bank {}", account_number))
    }

    /// Replace the attributes of an existing bank
    pub async fn update_bank(&self, bank: Bank) -> Result<Bank> {
        info!("Updating bank {}", bank.account_number);
        let account_number = bank.account_number.clone();
        self.data_source.update_bank(bank).await
            .with_context(|| format!("Failed to update bank {}", account_number))
    }

    /// Delete a bank by account number
    pub async fn delete_bank(&self, account_number: &str) -> Result<()> {
        info!("Deleting bank {}", account_number);
        self.data_source.delete_bank(account_number).await
            .with_context(|| format!("Failed to delete bank {}", account_number))
    }
}

impl Default for BankService {
    fn default() -> Self {
        Self::new()
    }
}
