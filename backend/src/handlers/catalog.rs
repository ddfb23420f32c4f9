//! HTTP handlers for catalog lookups

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::AppState;

/// List categories in catalog order
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().into_iter().map(String::from).collect())
}

/// List the items of one category
pub async fn list_category_items(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let items = state.catalog.items_for(&category)?;
    Ok(Json(items.to_vec()))
}

/// List cafe outlets
pub async fn list_outlets(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.outlets().to_vec())
}
