//! Shelf Server - serves the book catalog consumed by the library view
//!
//! Reads `SHELF_CATALOG_PATH` once at startup, listens on `SHELF_BIND_ADDR`
//! and stops cleanly on Ctrl-C.

use anyhow::{Context, Result};
use shelf_server::{bind_addr, routes, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = bind_addr(std::env::var("SHELF_BIND_ADDR").ok().as_deref())?;
    let state = AppState::new().await?;
    let books = state.catalog.len();
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(books, "Serving catalog at http://{}/books.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
