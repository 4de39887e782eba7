pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core_state::CoreState;
use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Server error: {0}")]
    Server(#[from] api::ServerError),
    #[error("Signal handler error: {0}")]
    Signal(#[from] std::io::Error),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Prepare the store, serve the API, and block until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(CoreState::initialize(&config.db_path)?);
    let mut server = api::start_server(core, config.bind_addr, &config.api_prefix).await?;
    tracing::info!(
        addr = %server.session.server_addr,
        prefix = %config.api_prefix,
        "Listening"
    );

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    server.wait().await?;
    Ok(())
}
