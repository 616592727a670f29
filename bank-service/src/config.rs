//! Configuration for the bank service

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use common::error::{Error, Result};

use crate::datasource::DEFAULT_BANKS_URL;

/// Default timeout for calls to the remote banks API
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which data source backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// In-memory fixture data
    #[default]
    Mock,
    /// Remote banks API
    Network,
}

impl FromStr for DataSourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "memory" | "in-memory" => Ok(Self::Mock),
            "network" | "remote" => Ok(Self::Network),
            other => Err(Error::ConfigurationError(format!("Unknown data source: {}", other))),
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mock => write!(f, "mock"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// Configuration for the bank service
#[derive(Debug, Clone)]
pub struct BankServiceConfig {
    /// Data source backing the service
    pub data_source: DataSourceKind,
    /// Endpoint of the remote banks API
    pub banks_url: String,
    /// Timeout for remote calls, in seconds
    pub timeout_secs: u64,
}

impl Default for BankServiceConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceKind::Mock,
            banks_url: DEFAULT_BANKS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BankServiceConfig {
    /// Create a new configuration using environment variables
    ///
    /// Reads `BANK_DATA_SOURCE`, `BANKS_API_URL` and `BANKS_API_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let data_source = match env::var("BANK_DATA_SOURCE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.data_source,
        };

        let timeout_secs = match env::var("BANKS_API_TIMEOUT_SECS") {
            Ok(value) => value.parse().map_err(|_| {
                Error::ConfigurationError(format!("BANKS_API_TIMEOUT_SECS must be a number, got {}", value))
            })?,
            Err(_) => defaults.timeout_secs,
        };

        Ok(Self {
            data_source,
            banks_url: env::var("BANKS_API_URL").unwrap_or(defaults.banks_url),
            timeout_secs,
        })
    }

    /// Create a new configuration with custom values
    pub fn new(data_source: DataSourceKind, banks_url: String, timeout_secs: u64) -> Self {
        Self {
            data_source,
            banks_url,
            timeout_secs,
        }
    }

    /// Timeout for remote calls
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
