//! Resource readings and their normalization into persistable snapshots.

use std::fmt;

use chrono::{DateTime, Utc};

use super::ingest::IngestFailure;

/// Token written in place of a missing resource value.
///
/// Only `bandwidth` can reach the store as this token: a missing energy or
/// balance blocks the write entirely.
pub const NULL_TOKEN: &str = "None";

/// Raw resource values fetched from the chain for one address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceReading {
    /// Energy window size from the account resource record.
    pub energy: Option<i64>,
    /// Native balance in sun.
    pub balance: Option<i64>,
    /// Remaining free plus staked bandwidth.
    pub bandwidth: Option<i64>,
}

/// A snapshot ready to be inserted as a new `accounts` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnapshot {
    /// Account address as submitted by the caller.
    pub address: String,
    /// String-encoded energy.
    pub energy: String,
    /// String-encoded balance.
    pub trx_balance: String,
    /// String-encoded bandwidth, or [`NULL_TOKEN`].
    pub bandwidth: String,
    /// Observation time, taken from the service clock.
    pub created_at: DateTime<Utc>,
}

impl NewSnapshot {
    /// Builds a snapshot from a reading.
    ///
    /// # Errors
    ///
    /// Returns [`IngestFailure::IncompleteData`] if energy or balance is
    /// missing. Bandwidth is not checked.
    pub fn from_reading(
        address: &str,
        reading: ResourceReading,
        created_at: DateTime<Utc>,
    ) -> Result<Self, IngestFailure> {
        let (Some(energy), Some(balance)) = (reading.energy, reading.balance) else {
            return Err(IngestFailure::IncompleteData {
                energy: reading.energy,
                balance: reading.balance,
            });
        };

        Ok(Self {
            address: address.to_string(),
            energy: energy.to_string(),
            trx_balance: balance.to_string(),
            bandwidth: StoredAmount(reading.bandwidth).to_string(),
            created_at,
        })
    }
}

/// Display adapter rendering `None` as [`NULL_TOKEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredAmount(pub Option<i64>);

impl StoredAmount {
    /// Wraps a borrowed optional amount.
    #[must_use]
    pub const fn of(value: &Option<i64>) -> Self {
        Self(*value)
    }
}

impl fmt::Display for StoredAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(NULL_TOKEN),
        }
    }
}

/// Parses a stored string amount back into an integer.
///
/// SQL `NULL`, [`NULL_TOKEN`] and anything that is not an integer map to
/// `None`.
#[must_use]
pub fn parse_stored_amount(value: Option<&str>) -> Option<i64> {
    value
        .filter(|v| *v != NULL_TOKEN)
        .and_then(|v| v.trim().parse().ok())
}
