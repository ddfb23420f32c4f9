//! Cafe Stock Ledger - Backend
//!
//! Records opening and closing stock readings per outlet and item, and
//! serves daily, outlet and item reports over closing stock.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::Catalog;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::{LedgerService, ReportingService};
pub use store::{DuplicatePolicy, MemoryStockStore, PgStockStore, StockStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn StockStore>,
    pub ledger: LedgerService,
    pub reports: ReportingService,
}

impl AppState {
    /// Wire the services around one store and one catalog
    pub fn new(store: Arc<dyn StockStore>, catalog: Catalog, policy: DuplicatePolicy) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            ledger: LedgerService::new(store.clone(), catalog.clone(), policy),
            reports: ReportingService::new(store.clone()),
            catalog,
            store,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Cafe Stock Ledger API v1.0"
}
