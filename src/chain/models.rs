//! Response shapes of the TRON full-node HTTP API.
//!
//! Only the fields the gateway reads are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// Body of `wallet/getaccount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountRecord {
    /// Account address as echoed by the node.
    #[serde(default)]
    pub address: Option<String>,
    /// Native balance in sun. Absent for zero-balance accounts.
    #[serde(default)]
    pub balance: Option<i64>,
    /// Energy-related resource sub-record.
    #[serde(default)]
    pub account_resource: Option<AccountResource>,
}

impl AccountRecord {
    /// Energy window size, `None` if absent at any nesting level.
    #[must_use]
    pub fn energy(&self) -> Option<i64> {
        self.account_resource
            .as_ref()
            .and_then(|resource| resource.energy_window_size)
    }
}

/// `account_resource` sub-record of [`AccountRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountResource {
    /// Energy recovery window size.
    #[serde(default)]
    pub energy_window_size: Option<i64>,
}

/// Body of `wallet/getaccountresource`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountResourceInfo {
    /// Daily free bandwidth allowance.
    #[serde(default, rename = "freeNetLimit")]
    pub free_net_limit: i64,
    /// Free bandwidth consumed.
    #[serde(default, rename = "freeNetUsed")]
    pub free_net_used: i64,
    /// Bandwidth obtained by staking.
    #[serde(default, rename = "NetLimit")]
    pub net_limit: i64,
    /// Staked bandwidth consumed.
    #[serde(default, rename = "NetUsed")]
    pub net_used: i64,
}

impl AccountResourceInfo {
    /// Remaining free plus staked bandwidth.
    #[must_use]
    pub const fn bandwidth(&self) -> i64 {
        let free = self.free_net_limit.saturating_sub(self.free_net_used);
        let staked = self.net_limit.saturating_sub(self.net_used);
        free.saturating_add(staked)
    }
}
