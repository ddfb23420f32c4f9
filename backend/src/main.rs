//! Cafe Stock Ledger - Backend Server

use std::{net::SocketAddr, sync::Arc};

use cafe_stock::{
    config::{Config, StorageBackend},
    create_app, AppState, MemoryStockStore, PgStockStore, StockStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_stock=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    let catalog = config.catalog()?;

    tracing::info!("Starting Cafe Stock Ledger Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        categories = catalog.categories().len(),
        outlets = catalog.outlets().len(),
        "Catalog loaded"
    );

    let store: Arc<dyn StockStore> = match config.storage.backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pg = PgStockStore::connect(&config.database).await?;
            tracing::info!("Database connection established");

            if config.database.run_migrations {
                tracing::info!("Running database migrations...");
                pg.migrate().await?;
                tracing::info!("Migrations completed");
            }
            Arc::new(pg)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; readings are lost on shutdown");
            Arc::new(MemoryStockStore::new())
        }
    };

    let state = AppState::new(store, catalog, config.ledger.duplicate_policy);
    tracing::info!(duplicate_policy = state.ledger.policy().as_str(), "Ledger ready");
    let app = create_app(state);

    // Start server
    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(ip, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
