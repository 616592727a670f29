//! Application configuration

use std::env;

use bank_service::BankServiceConfig;
use common::error::Result;

/// Default listening address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening address
    pub addr: String,
    /// Log at debug level
    pub debug: bool,
    /// Bank service configuration
    pub bank_service: BankServiceConfig,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    ///
    /// `BIND_ADDR` wins over `PORT`; `DEBUG=1` turns on debug logging.
    pub fn from_env() -> Result<Self> {
        let addr = match (env::var("BIND_ADDR"), env::var("PORT")) {
            (Ok(addr), _) => addr,
            (Err(_), Ok(port)) => format!("127.0.0.1:{}", port),
            _ => DEFAULT_ADDR.to_string(),
        };

        Ok(Self {
            addr,
            debug: env::var("DEBUG").map(|v| v == "1" || v == "true").unwrap_or(false),
            bank_service: BankServiceConfig::from_env()?,
        })
    }
}
