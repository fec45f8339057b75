//! Server binary: env config, tracing, in-memory store, router, serve.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use warehouse_api::{config, router, AppState, MemoryStore, TableNames};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warehouse_api=info".parse()?))
        .init();

    let state = AppState::new(Arc::new(MemoryStore::new()), TableNames::from_env());
    let app = router(state);

    let listener = TcpListener::bind(config::bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
