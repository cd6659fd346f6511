//! Account service: ingestion of resource snapshots and history queries.

use std::sync::Arc;

use chrono::Utc;

use crate::chain::{ChainClient, fetch_resources};
use crate::domain::{IngestFailure, IngestOutcome, NewSnapshot};
use crate::error::GatewayError;
use crate::persistence::{AccountSnapshot, SnapshotStore};

/// Orchestration layer for account snapshots.
///
/// Stateless coordinator: owns the chain client and the store, both
/// injected at construction. Ingestion follows the pattern: validate →
/// fetch (two concurrent calls) → normalize → write. Each stage either
/// proceeds or stops with a single [`IngestFailure`].
#[derive(Debug, Clone)]
pub struct AccountService {
    client: Arc<dyn ChainClient>,
    store: Arc<dyn SnapshotStore>,
}

impl AccountService {
    /// Creates a new `AccountService`.
    #[must_use]
    pub fn new(client: Arc<dyn ChainClient>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { client, store }
    }

    /// Fetches the current resources of `address` and stores a snapshot.
    ///
    /// Never fails: every expected failure is reported through
    /// [`IngestOutcome::Rejected`], and no row is written in that case.
    pub async fn create_account_info(&self, address: &str) -> IngestOutcome {
        match self.ingest(address).await {
            Ok(id) => {
                tracing::info!(address, id, "account snapshot stored");
                IngestOutcome::Created { id }
            }
            Err(failure) => {
                tracing::warn!(address, stage = failure.stage(), error = ?failure, "account snapshot rejected");
                IngestOutcome::Rejected(failure)
            }
        }
    }

    async fn ingest(&self, address: &str) -> Result<i64, IngestFailure> {
        if !self.client.is_address(address) {
            return Err(IngestFailure::InvalidAddress {
                address: address.to_string(),
            });
        }

        let reading = fetch_resources(self.client.as_ref(), address)
            .await
            .map_err(|e| IngestFailure::FetchFailed {
                reason: e.to_string(),
            })?;

        let snapshot = NewSnapshot::from_reading(address, reading, Utc::now())?;

        let ids = self
            .store
            .insert(&snapshot)
            .await
            .map_err(|e| IngestFailure::WriteFailed {
                reason: e.to_string(),
            })?;

        ids.first().copied().ok_or(IngestFailure::NotInserted)
    }

    /// Returns one page of the latest snapshot per address.
    ///
    /// `page` and `page_size` are expected to be validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store fails.
    pub async fn get_accounts_info(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError> {
        let rows = self.store.latest_per_address(page, page_size).await?;
        tracing::debug!(page, page_size, returned = rows.len(), "listed account snapshots");
        Ok(rows)
    }
}
