//! In-process snapshot store with the same semantics as the PostgreSQL one.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::AccountSnapshot;
use super::{SnapshotStore, page_offset};
use crate::domain::NewSnapshot;
use crate::error::GatewayError;

/// Append-only store kept in memory. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    rows: RwLock<Vec<AccountSnapshot>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Returns a copy of every stored row in insertion order.
    pub async fn rows(&self) -> Vec<AccountSnapshot> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn insert(&self, snapshot: &NewSnapshot) -> Result<Vec<i64>, GatewayError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |row| row.id.saturating_add(1));
        rows.push(AccountSnapshot::from_new(id, snapshot));
        Ok(vec![id])
    }

    async fn latest_per_address(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError> {
        let rows = self.rows.read().await;

        let mut latest: HashMap<&str, &AccountSnapshot> = HashMap::new();
        for row in rows.iter() {
            latest
                .entry(row.address.as_str())
                .and_modify(|current| {
                    if row.id > current.id {
                        *current = row;
                    }
                })
                .or_insert(row);
        }

        let mut selected: Vec<&AccountSnapshot> = latest.into_values().collect();
        selected.sort_by_key(|row| row.id);

        let offset = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
        Ok(selected
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }
}
