//! Cinema API server: reads settings, opens the store, verifies connectivity, serves `/bioskop`.
//!
//! Run from repo root: `cargo run -p bioskop-server`

use bioskop_api::{app, connect_pool, AppState, CinemaService, CinemaStore, MemoryCinemaStore, PgCinemaStore, Settings, StoreKind};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bioskop_api=info,bioskop_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let store: Arc<dyn CinemaStore> = match settings.store {
        StoreKind::Postgres => {
            let pool = connect_pool(&settings.database).await?;
            Arc::new(PgCinemaStore::new(pool, &settings.table))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on restart");
            Arc::new(MemoryCinemaStore::new())
        }
    };
    store.ping().await?;
    tracing::info!(table = %settings.table, "store connection verified");

    let state = AppState::new(CinemaService::new(store));
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
