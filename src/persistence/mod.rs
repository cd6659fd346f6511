//! Persistence layer: append-only account snapshot history.
//!
//! [`SnapshotStore`] is the seam between the service and storage. The
//! PostgreSQL implementation uses `sqlx::PgPool`; the in-memory one backs
//! local runs with persistence disabled and the test suite.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemorySnapshotStore;
pub use models::AccountSnapshot;
pub use postgres::PostgresSnapshotStore;

use crate::domain::NewSnapshot;
use crate::error::GatewayError;

/// Storage for account snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync + std::fmt::Debug {
    /// Inserts one snapshot atomically and returns the generated id(s).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] if the insert or commit
    /// fails. No row survives a failed call.
    async fn insert(&self, snapshot: &NewSnapshot) -> Result<Vec<i64>, GatewayError>;

    /// Returns the latest snapshot of each address, ordered by that
    /// snapshot's id ascending and paginated over addresses.
    ///
    /// `page` is 1-indexed. A page past the end is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn latest_per_address(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError>;
}

/// Row offset of a 1-indexed page.
#[must_use]
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}
