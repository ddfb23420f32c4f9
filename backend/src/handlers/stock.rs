//! HTTP handlers for opening and closing stock entry

use axum::{extract::State, http::StatusCode, Json};
use shared::Reading;

use crate::error::AppResult;
use crate::AppState;

/// Record an opening stock reading
pub async fn record_opening(
    State(state): State<AppState>,
    Json(reading): Json<Reading>,
) -> AppResult<(StatusCode, Json<Reading>)> {
    state.ledger.record_opening(reading.clone()).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

/// Record a closing stock (daily inventory) reading
pub async fn record_closing(
    State(state): State<AppState>,
    Json(reading): Json<Reading>,
) -> AppResult<(StatusCode, Json<Reading>)> {
    state.ledger.record_closing(reading.clone()).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}
