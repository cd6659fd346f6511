//! OpenAPI document for the REST API.

use axum::Router;
use utoipa::OpenApi;

use crate::api::dto::{AccountInfoDto, CreateAccountInfoRequest};
use crate::api::handlers::{account, system};
use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the generated OpenAPI JSON.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "tron-accounts-gateway",
        description = "Snapshots of TRON account resources"
    ),
    paths(
        account::create_account_info,
        account::get_accounts_info,
        system::health_handler,
    ),
    components(schemas(
        CreateAccountInfoRequest,
        AccountInfoDto,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Accounts", description = "Account resource snapshots"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON, with Swagger UI at `/swagger-ui`.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()))
}

/// Serves the OpenAPI JSON.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
