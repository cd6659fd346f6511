//! TRON chain access: client trait, HTTP implementation, and the
//! concurrent resource fetcher.
//!
//! The client is constructed once in `main` and passed to the service
//! explicitly, so tests substitute their own implementation.

pub mod error;
pub mod fetcher;
pub mod models;
pub mod tron;

use async_trait::async_trait;

pub use error::ChainError;
pub use fetcher::fetch_resources;
pub use models::{AccountRecord, AccountResource, AccountResourceInfo};
pub use tron::TronHttpClient;

use crate::domain::address;

/// Remote TRON API used by the ingestion workflow.
#[async_trait]
pub trait ChainClient: Send + Sync + std::fmt::Debug {
    /// Returns `true` if `address` is syntactically valid for the chain.
    fn is_address(&self, address: &str) -> bool {
        address::is_valid_address(address)
    }

    /// Fetches the account record.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] on transport, API or decode failure, or if
    /// the account does not exist.
    async fn get_account(&self, address: &str) -> Result<AccountRecord, ChainError>;

    /// Fetches the remaining bandwidth.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] on transport, API or decode failure.
    async fn get_bandwidth(&self, address: &str) -> Result<Option<i64>, ChainError>;
}
