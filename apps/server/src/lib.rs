//! # Tally Server
//!
//! JSON API over the commission report and the inventory ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Server                                     │
//! │                                                                         │
//! │  main()                                                                 │
//! │    │                                                                    │
//! │    ├── init_tracing()          RUST_LOG or "info,tally=debug"           │
//! │    ├── ServerConfig::load()    defaults < server.toml < TALLY_*         │
//! │    ├── AppState::open()        loads movement history once              │
//! │    └── serve()                 axum, graceful shutdown on Ctrl-C/TERM   │
//! │                                                                         │
//! │  Client ───► :5555 ───► Router ───► handlers ───► tally-store          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use tally_store::DataStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::state::AppState;

/// Initializes the tracing subscriber.
///
/// Log level comes from `RUST_LOG`, defaulting to info with debug output
/// for the tally crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Loads configuration and runs the server until a shutdown signal.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load(None)?;
    info!(
        addr = %config.bind_address(),
        data_dir = %config.data.dir.display(),
        "Configuration loaded"
    );

    let state = AppState::open(DataStore::new(config.store_config())).await;
    serve(&config, state).await
}

/// Binds the listener and serves the API.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;

    info!(addr = %bind_addr, "Tally server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
