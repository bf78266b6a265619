mod board;
mod config;
mod db;
mod errors;
mod extract;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::models::job::JobCatalog;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryKeyValueStore, JobStore, SqliteKeyValueStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Load listings
    let catalog = match &config.jobs_seed_path {
        Some(path) => JobCatalog::from_json_file(path)?,
        None => JobCatalog::default(),
    };
    info!("Loaded {} job listings", catalog.len());

    // Initialize saved jobs / alerts store
    let store = match &config.database_url {
        Some(url) => JobStore::new(Arc::new(SqliteKeyValueStore::new(create_pool(url).await?))),
        None => {
            warn!("DATABASE_URL not set; saved jobs and alerts will not survive a restart");
            JobStore::new(Arc::new(InMemoryKeyValueStore::new()))
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
