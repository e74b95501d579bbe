//! HTTP server: state, routing, and serving.
//!
//! The store handle and the flash channel are constructed at process start
//! and injected into handlers through [`AppState`]; nothing here is global.

pub mod handlers;
pub mod session;
pub mod views;

pub use session::Session;

use crate::flash::FlashStore;
use crate::store::ContactStore;
use anyhow::Result;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub flash: FlashStore,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            flash: FlashStore::new(),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/contact", get(handlers::contact_list))
        .route("/contact", post(handlers::create_contact))
        .route("/contact", put(handlers::update_contact))
        .route("/contact", delete(handlers::delete_contact))
        .route("/contact/add", get(handlers::add_form))
        .route("/contact/edit/{name}", get(handlers::edit_form))
        .route("/contact/search", post(handlers::search_contact))
        .route("/contact/{name}", get(handlers::contact_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application until a shutdown signal arrives.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term =
            signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown signal received");
}
