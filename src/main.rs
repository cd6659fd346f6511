//! tron-accounts-gateway server entry point.
//!
//! Starts the Axum HTTP server with the account snapshot endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tron_accounts_gateway::api;
use tron_accounts_gateway::app_state::AppState;
use tron_accounts_gateway::chain::{ChainClient, TronHttpClient};
use tron_accounts_gateway::config::GatewayConfig;
use tron_accounts_gateway::error::GatewayError;
use tron_accounts_gateway::persistence::{
    InMemorySnapshotStore, PostgresSnapshotStore, SnapshotStore,
};
use tron_accounts_gateway::service::AccountService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, tron = %config.tron_api_url, "starting tron-accounts-gateway");

    // Chain client
    let client = TronHttpClient::new(
        &config.tron_api_url,
        config.tron_api_key.as_deref(),
        Duration::from_secs(config.tron_request_timeout_secs),
    )?;
    let client: Arc<dyn ChainClient> = Arc::new(client);

    // Snapshot store
    let store = build_store(&config).await?;

    // Build application state
    let app_state = AppState {
        account_service: Arc::new(AccountService::new(client, store)),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Installs the global subscriber. `LOG_FORMAT=json` selects JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_store(config: &GatewayConfig) -> Result<Arc<dyn SnapshotStore>, GatewayError> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled, snapshots are kept in memory only");
        return Ok(Arc::new(InMemorySnapshotStore::new()));
    }

    let store = PostgresSnapshotStore::connect(config).await?;
    if config.database_run_migrations {
        store.migrate().await?;
        tracing::info!("database migrations applied");
    }
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
