//! # devicetermd — deviceterm daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Open the inventory `SQLite` database and run migrations
//! - Construct the device repository (adapter) and the terminal service
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use deviceterm_adapter_http_axum::state::AppState;
use deviceterm_adapter_storage_sqlite_sqlx::{self as storage, SqliteDeviceRepository};
use deviceterm_app::services::terminal_service::TerminalService;
use deviceterm_domain::plugin::PLUGIN;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    tracing::info!(
        plugin = PLUGIN.name,
        version = PLUGIN.version,
        terminal = %config.terminal.origin(),
        ssh_port = %config.terminal.ssh_port,
        "starting {}",
        PLUGIN.verbose_name
    );

    // Inventory
    let db = storage::Config {
        database_url: config.database_url().to_string(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;
    let device_repo = SqliteDeviceRepository::new(db.pool().clone());

    // Services
    let terminal_service = TerminalService::new(device_repo, config.terminal.clone());

    // HTTP
    let state = AppState::new(terminal_service, config.plugin.base_path.as_str());
    let app = deviceterm_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        "listening on http://{bind_addr}, terminal pages under /{}/",
        config.plugin.base_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
