//! Account snapshot handlers: ingest and list.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{AccountInfoDto, CreateAccountInfoRequest, PaginationParams};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /create_account_info` — Fetch an account's resources and store a
/// snapshot.
///
/// Always answers 200. The body is a JSON string: empty on success,
/// otherwise the diagnostic explaining why no snapshot was stored.
#[utoipa::path(
    post,
    path = "/api/v1/create_account_info",
    tag = "Accounts",
    summary = "Snapshot an account",
    description = "Validates the address, reads energy, balance and bandwidth from TRON and stores a new snapshot. Returns an empty string on success or a diagnostic message.",
    request_body = CreateAccountInfoRequest,
    responses(
        (status = 200, description = "Empty on success, diagnostic otherwise", body = String),
        (status = 422, description = "Malformed request body"),
    )
)]
pub async fn create_account_info(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountInfoRequest>,
) -> impl IntoResponse {
    let outcome = state
        .account_service
        .create_account_info(&req.address)
        .await;
    Json(outcome.message())
}

/// `GET /get_accounts_info` — Latest snapshot per address, paginated over
/// addresses.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on malformed or out-of-range
/// pagination and [`GatewayError::PersistenceError`] if the store fails.
#[utoipa::path(
    get,
    path = "/api/v1/get_accounts_info",
    tag = "Accounts",
    summary = "List latest account snapshots",
    description = "Returns the most recent snapshot of each address, ordered by snapshot id and paginated over addresses.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Latest snapshot per address", body = Vec<AccountInfoDto>),
        (status = 422, description = "Invalid pagination", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_accounts_info(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Query(params) = params.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let params = params.validated()?;
    let rows = state
        .account_service
        .get_accounts_info(params.page, params.page_size)
        .await?;

    let data: Vec<AccountInfoDto> = rows.into_iter().map(AccountInfoDto::from).collect();
    Ok(Json(data))
}

/// Account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create_account_info", post(create_account_info))
        .route("/get_accounts_info", get(get_accounts_info))
}
