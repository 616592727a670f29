//! Bank service for managing bank records over a pluggable data source

pub mod service;
pub mod datasource;
pub mod config;

pub use service::BankService;
pub use service::DataSourceType;
pub use datasource::{BankDataSource, InMemoryBankDataSource, NetworkBankDataSource};
pub use config::{BankServiceConfig, DataSourceKind};
