//! Typed outcome of a single account ingestion.
//!
//! The HTTP contract is textual (an empty string means success), so the
//! [`IngestOutcome::message`] rendering is only used at the API edge.

use super::snapshot::StoredAmount;

/// Reason an ingestion did not produce a row.
///
/// Stages are mutually exclusive: at most one failure fires per call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestFailure {
    /// The address failed format validation; nothing was fetched.
    #[error("address {address} is invalid")]
    InvalidAddress {
        /// The rejected address.
        address: String,
    },

    /// One of the remote chain calls failed; nothing was written.
    #[error("failed to fetch account data from TRON: {reason}")]
    FetchFailed {
        /// Chain client error text.
        reason: String,
    },

    /// The chain returned no energy or no balance; nothing was written.
    #[error(
        "TRON returned invalid values for energy: {} and balance: {}",
        StoredAmount::of(.energy),
        StoredAmount::of(.balance)
    )]
    IncompleteData {
        /// Observed energy.
        energy: Option<i64>,
        /// Observed balance.
        balance: Option<i64>,
    },

    /// The insert or commit failed.
    #[error("failed to write account data to the database")]
    WriteFailed {
        /// Store error text, logged but not shown to the caller.
        reason: String,
    },

    /// The insert completed without returning a row id.
    #[error("account data was not inserted into the database")]
    NotInserted,
}

impl IngestFailure {
    /// Short machine-readable stage name, used as a log field.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::InvalidAddress { .. } => "invalid_address",
            Self::FetchFailed { .. } => "fetch_error",
            Self::IncompleteData { .. } => "data_invalid",
            Self::WriteFailed { .. } | Self::NotInserted => "write_error",
        }
    }
}

/// Result of `create_account_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A row was written with the given id.
    Created {
        /// Store-assigned row id.
        id: i64,
    },
    /// No row was written.
    Rejected(IngestFailure),
}

impl IngestOutcome {
    /// Returns `true` if a row was written.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// Diagnostics collected for this outcome (empty on success).
    #[must_use]
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::Created { .. } => Vec::new(),
            Self::Rejected(failure) => vec![failure.to_string()],
        }
    }

    /// Renders the diagnostics joined with `"; "`. Empty on success.
    #[must_use]
    pub fn message(&self) -> String {
        self.diagnostics().join("; ")
    }
}
