//! Test doubles for the chain client and the snapshot store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::chain::{AccountRecord, AccountResource, ChainClient, ChainError};
use crate::domain::NewSnapshot;
use crate::domain::address::{ADDRESS_LEN, ADDRESS_PREFIX, encode_base58check};
use crate::error::GatewayError;
use crate::persistence::{AccountSnapshot, InMemorySnapshotStore, SnapshotStore};

/// Builds a valid base58check address from a one-byte seed.
pub fn sample_address(seed: u8) -> String {
    let mut payload = vec![ADDRESS_PREFIX];
    payload.extend(std::iter::repeat_n(seed, ADDRESS_LEN - 1));
    encode_base58check(&payload)
}

/// Chain client answering every address with the same scripted values.
#[derive(Debug)]
pub struct ScriptedChainClient {
    account: Result<AccountRecord, String>,
    bandwidth: Result<Option<i64>, String>,
    account_calls: AtomicUsize,
    bandwidth_calls: AtomicUsize,
}

impl ScriptedChainClient {
    /// Answers with the given energy, balance and bandwidth.
    pub fn with_resources(
        energy: Option<i64>,
        balance: Option<i64>,
        bandwidth: Option<i64>,
    ) -> Self {
        let account = AccountRecord {
            address: None,
            balance,
            account_resource: Some(AccountResource {
                energy_window_size: energy,
            }),
        };
        Self {
            account: Ok(account),
            bandwidth: Ok(bandwidth),
            account_calls: AtomicUsize::new(0),
            bandwidth_calls: AtomicUsize::new(0),
        }
    }

    /// Makes `get_account` fail with an API error.
    pub fn failing_account(mut self, message: &str) -> Self {
        self.account = Err(message.to_string());
        self
    }

    /// Makes `get_bandwidth` fail with an API error.
    pub fn failing_bandwidth(mut self, message: &str) -> Self {
        self.bandwidth = Err(message.to_string());
        self
    }

    /// Number of `get_account` calls so far.
    pub fn account_calls(&self) -> usize {
        self.account_calls.load(Ordering::SeqCst)
    }

    /// Number of `get_bandwidth` calls so far.
    pub fn bandwidth_calls(&self) -> usize {
        self.bandwidth_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for ScriptedChainClient {
    async fn get_account(&self, _address: &str) -> Result<AccountRecord, ChainError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        self.account.clone().map_err(ChainError::Api)
    }

    async fn get_bandwidth(&self, _address: &str) -> Result<Option<i64>, ChainError> {
        self.bandwidth_calls.fetch_add(1, Ordering::SeqCst);
        self.bandwidth.clone().map_err(ChainError::Api)
    }
}

/// Store whose inserts fail (or return no ids) and whose reads fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    silent_inserts: bool,
    insert_calls: AtomicUsize,
}

impl FailingStore {
    /// Every call returns a persistence error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts succeed but return no ids.
    pub fn returning_no_ids() -> Self {
        Self {
            silent_inserts: true,
            ..Self::default()
        }
    }

    /// Number of `insert` calls so far.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStore for FailingStore {
    async fn insert(&self, _snapshot: &NewSnapshot) -> Result<Vec<i64>, GatewayError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.silent_inserts {
            return Ok(Vec::new());
        }
        Err(GatewayError::PersistenceError("connection refused".to_string()))
    }

    async fn latest_per_address(
        &self,
        _page: u32,
        _page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError> {
        Err(GatewayError::PersistenceError("connection refused".to_string()))
    }
}

/// Chain client whose two calls each wait on a shared two-party barrier.
///
/// A fetch only completes if both calls are in flight at the same time.
#[derive(Debug)]
pub struct RendezvousChainClient {
    barrier: Barrier,
    inner: ScriptedChainClient,
}

impl RendezvousChainClient {
    /// Answers like [`ScriptedChainClient::with_resources`] once both
    /// calls have arrived.
    pub fn with_resources(
        energy: Option<i64>,
        balance: Option<i64>,
        bandwidth: Option<i64>,
    ) -> Self {
        Self {
            barrier: Barrier::new(2),
            inner: ScriptedChainClient::with_resources(energy, balance, bandwidth),
        }
    }
}

#[async_trait]
impl ChainClient for RendezvousChainClient {
    async fn get_account(&self, address: &str) -> Result<AccountRecord, ChainError> {
        self.barrier.wait().await;
        self.inner.get_account(address).await
    }

    async fn get_bandwidth(&self, address: &str) -> Result<Option<i64>, ChainError> {
        self.barrier.wait().await;
        self.inner.get_bandwidth(address).await
    }
}

/// Store that rejects every insert but serves reads from an in-memory store.
#[derive(Debug, Default)]
pub struct WriteRejectingStore {
    inner: InMemorySnapshotStore,
}

impl WriteRejectingStore {
    /// Creates a store with no rows.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for WriteRejectingStore {
    async fn insert(&self, _snapshot: &NewSnapshot) -> Result<Vec<i64>, GatewayError> {
        Err(GatewayError::PersistenceError("commit failed".to_string()))
    }

    async fn latest_per_address(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError> {
        self.inner.latest_per_address(page, page_size).await
    }
}
