//! Remote data source backed by a third-party banks API
//!
//! Only listing is implemented. The remote API is treated as read-only, so the
//! other operations report [`Error::Unsupported`].

use std::time::Duration;

use async_trait::async_trait;
use common::error::{Error, Result};
use common::model::bank::Bank;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::BankDataSource;

/// Default endpoint of the remote banks API
pub const DEFAULT_BANKS_URL: &str = "http://54.193.31.159/banks";

/// List envelope returned by the remote API
#[derive(Debug, Deserialize)]
struct BankList {
    #[serde(default)]
    results: Option<Vec<Bank>>,
}

/// Data source that reads banks from a remote HTTP API
pub struct NetworkBankDataSource {
    client: Client,
    base_url: String,
}

impl NetworkBankDataSource {
    /// Create a data source for the given endpoint
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ConfigurationError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint this source reads from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Network(format!("Request to {} timed out", self.base_url))
        } else if error.is_connect() {
            Error::Network(format!("Unable to connect to {}", self.base_url))
        } else {
            Error::Network(error.to_string())
        }
    }

    fn unsupported(&self, operation: &str) -> Error {
        Error::Unsupported(format!("{} is not available for the network data source", operation))
    }
}

#[async_trait]
impl BankDataSource for NetworkBankDataSource {
    fn name(&self) -> &str {
        "network"
    }

    async fn retrieve_banks(&self) -> Result<Vec<Bank>> {
        debug!("Fetching banks from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            warn!("Banks API at {} answered {}", self.base_url, response.status());
            return Err(Error::Network("Could not fetch banks from the network".to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;
        let body: BankList = serde_json::from_slice(&bytes)?;

        body.results
            .ok_or_else(|| Error::Network("Could not fetch banks from the network".to_string()))
    }

    async fn retrieve_bank(&self, _account_number: &str) -> Result<Bank> {
        Err(self.unsupported("retrieve_bank"))
    }

    async fn create_bank(&self, _bank: Bank) -> Result<Bank> {
        Err(self.unsupported("create_bank"))
    }

    async fn update_bank(&self, _bank: Bank) -> Result<Bank> {
        Err(self.unsupported("update_bank"))
    }

    async fn delete_bank(&self, _account_number: &str) -> Result<()> {
        Err(self.unsupported("delete_bank"))
    }
}
