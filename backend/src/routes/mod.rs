//! Route definitions for the Cafe Stock Ledger

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog lookups for entry forms
        .nest("/catalog", catalog_routes())
        // Opening and closing stock entry
        .nest("/stock", stock_routes())
        // Closing stock reports
        .nest("/reports", report_routes())
}

/// Catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:category/items", get(handlers::list_category_items))
        .route("/outlets", get(handlers::list_outlets))
}

/// Stock entry routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/opening", post(handlers::record_opening))
        .route("/closing", post(handlers::record_closing))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", get(handlers::get_daily_report))
        .route("/outlet", get(handlers::get_outlet_report))
        .route("/item", get(handlers::get_item_report))
}
