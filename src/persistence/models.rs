//! Database model for account snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::NewSnapshot;

/// A row of the `accounts` table.
///
/// Resource columns are text and nullable in the schema; the gateway always
/// writes them, with `bandwidth` possibly holding the null token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AccountSnapshot {
    /// Auto-increment row ID. The latest row per address has the highest id.
    pub id: i64,
    /// TRON account address.
    pub address: String,
    /// String-encoded bandwidth.
    pub bandwidth: Option<String>,
    /// String-encoded balance in sun.
    pub trx_balance: Option<String>,
    /// String-encoded energy.
    pub energy: Option<String>,
    /// Observation timestamp set by the service.
    pub created_at: DateTime<Utc>,
}

impl AccountSnapshot {
    /// Materializes an inserted snapshot with its assigned id.
    #[must_use]
    pub fn from_new(id: i64, snapshot: &NewSnapshot) -> Self {
        Self {
            id,
            address: snapshot.address.clone(),
            bandwidth: Some(snapshot.bandwidth.clone()),
            trx_balance: Some(snapshot.trx_balance.clone()),
            energy: Some(snapshot.energy.clone()),
            created_at: snapshot.created_at,
        }
    }
}
