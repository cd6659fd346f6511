//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AccountService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Account service for ingestion and listing.
    pub account_service: Arc<AccountService>,
}
