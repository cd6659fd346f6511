//! Account snapshot DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::snapshot::parse_stored_amount;
use crate::error::GatewayError;
use crate::persistence::AccountSnapshot;

/// Largest accepted `page_size`.
pub const MAX_PAGE_SIZE: u32 = 300;

/// Request body for `POST /create_account_info`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAccountInfoRequest {
    /// TRON account address (base58check `T...` or hex `41...`).
    #[serde(alias = "acc_addr")]
    pub address: String,
}

/// One entry of the `GET /get_accounts_info` response.
///
/// Resource values are stored as text; a value that was not available at
/// observation time is rendered as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountInfoDto {
    /// TRON account address.
    pub address: String,
    /// Remaining bandwidth.
    pub bandwidth: Option<i64>,
    /// Balance in sun.
    pub trx_balance: Option<i64>,
    /// Energy window size.
    pub energy: Option<i64>,
    /// Observation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<AccountSnapshot> for AccountInfoDto {
    fn from(row: AccountSnapshot) -> Self {
        Self {
            bandwidth: parse_stored_amount(row.bandwidth.as_deref()),
            trx_balance: parse_stored_amount(row.trx_balance.as_deref()),
            energy: parse_stored_amount(row.energy.as_deref()),
            address: row.address,
            created_at: row.created_at,
        }
    }
}

/// Pagination query parameters for `GET /get_accounts_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    #[param(minimum = 1, default = 1)]
    pub page: u32,
    /// Addresses per page, at most 300. Defaults to 20.
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 300, default = 20)]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    /// Checks `page > 0` and `0 < page_size <= 300`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if either bound is violated.
    pub fn validated(self) -> Result<Self, GatewayError> {
        if self.page == 0 {
            return Err(GatewayError::InvalidRequest(
                "page must be greater than 0".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(GatewayError::InvalidRequest(format!(
                "page_size must be in 1..={MAX_PAGE_SIZE}"
            )));
        }
        Ok(self)
    }
}
