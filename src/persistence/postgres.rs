//! PostgreSQL implementation of the snapshot store.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use super::models::AccountSnapshot;
use super::{SnapshotStore, page_offset};
use crate::config::GatewayConfig;
use crate::domain::NewSnapshot;
use crate::error::GatewayError;

/// Latest row per address: group ids by address, page over the groups by
/// their max id, then load those rows.
const LATEST_PER_ADDRESS: &str = "\
    SELECT id, address, bandwidth, trx_balance, energy, created_at FROM accounts \
    WHERE id IN ( \
        SELECT MAX(id) AS m_id FROM accounts GROUP BY address \
        ORDER BY m_id LIMIT $1 OFFSET $2 \
    ) \
    ORDER BY id";

/// PostgreSQL-backed snapshot store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresSnapshotStore {
    pool: PgPool,
}

impl PostgresSnapshotStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from the gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the URL is invalid or
    /// the database is unreachable.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut options = PgConnectOptions::from_str(&config.database_url)
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        if !config.database_log_statements {
            options = options.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations in `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), GatewayError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }

    /// Returns the inner connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SnapshotStore for PostgresSnapshotStore {
    async fn insert(&self, snapshot: &NewSnapshot) -> Result<Vec<i64>, GatewayError> {
        // Dropping the transaction on an error path rolls it back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        let ids = sqlx::query_scalar::<_, i64>(
            "INSERT INTO accounts (address, bandwidth, trx_balance, energy, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&snapshot.address)
        .bind(&snapshot.bandwidth)
        .bind(&snapshot.trx_balance)
        .bind(&snapshot.energy)
        .bind(snapshot.created_at)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(ids)
    }

    async fn latest_per_address(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AccountSnapshot>, GatewayError> {
        let offset = i64::try_from(page_offset(page, page_size)).unwrap_or(i64::MAX);

        sqlx::query_as::<_, AccountSnapshot>(LATEST_PER_ADDRESS)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }
}
