//! Contact Book Server - Main entry point.

use anyhow::Result;
use contact_book_server::{AppState, Config, ContactStore, SqliteContactStore, SqliteStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Opening contact store at {}", config.db_path.display());
    let store = SqliteStore::open(&config.db_path)?;
    let store = Arc::new(SqliteContactStore::new(store)) as Arc<dyn ContactStore>;

    let state = AppState::new(store);

    info!("Starting contact book server on {}", config.bind_addr);
    contact_book_server::run_server(config.bind_addr, state).await?;

    info!("Contact book server shutdown complete");
    Ok(())
}
