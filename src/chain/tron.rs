//! `reqwest`-based client for the TRON full-node HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use super::models::{AccountRecord, AccountResourceInfo};
use super::{ChainClient, ChainError};
use crate::domain::address;

/// Header carrying the TronGrid API key.
pub const API_KEY_HEADER: &str = "tron-pro-api-key";

const GET_ACCOUNT: &str = "wallet/getaccount";
const GET_ACCOUNT_RESOURCE: &str = "wallet/getaccountresource";

/// HTTP client for a TRON full node (e.g. `https://nile.trongrid.io`).
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct TronHttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl TronHttpClient {
    /// Builds a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Api`] if the API key is not a valid header
    /// value, or [`ChainError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ChainError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ChainError::Api(format!("invalid api key: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post(&self, endpoint: &str, address: &str) -> Result<Value, ChainError> {
        let visible = address::to_base58check(address)
            .ok_or_else(|| ChainError::InvalidAddress(address.to_string()))?;

        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "address": visible, "visible": true }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("Error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(ChainError::Api(message));
        }

        tracing::debug!(endpoint, address = %visible, "tron api call succeeded");
        Ok(body)
    }
}

#[async_trait]
impl ChainClient for TronHttpClient {
    async fn get_account(&self, address: &str) -> Result<AccountRecord, ChainError> {
        let body = self.post(GET_ACCOUNT, address).await?;
        decode_account(address, body)
    }

    async fn get_bandwidth(&self, address: &str) -> Result<Option<i64>, ChainError> {
        let body = self.post(GET_ACCOUNT_RESOURCE, address).await?;
        let info: AccountResourceInfo = serde_json::from_value(body)?;
        Ok(Some(info.bandwidth()))
    }
}

/// Decodes a `getaccount` body. The node answers `{}` for unknown accounts.
fn decode_account(address: &str, body: Value) -> Result<AccountRecord, ChainError> {
    if body.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(ChainError::AccountNotFound(address.to_string()));
    }
    Ok(serde_json::from_value(body)?)
}
