//! Roombook HTTP Server Binary
//!
//! This is the main entry point for the booking REST API server. It builds
//! the in-memory store, sets up the HTTP router, and starts serving requests.
//! The store lives for the lifetime of the process and starts empty; there is
//! no persistence across restarts.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3001)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roombook::http::{create_router, AppState};
use roombook::store::LocalStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Roombook HTTP Server");

    // The store is an explicit object handed to the router state; no globals.
    let store = Arc::new(LocalStore::new()) as Arc<dyn roombook::store::BookingRepository>;
    let state = AppState::new(store);

    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3001);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
