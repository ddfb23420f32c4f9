//! Reporting handlers for closing stock reports and CSV export

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::CsvRow;
use crate::services::reporting::ReportingService;
use crate::AppState;

/// Response body format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Deserialize)]
pub struct DailyReportQuery {
    pub date: NaiveDate,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Deserialize)]
pub struct OutletReportQuery {
    pub outlet: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Deserialize)]
pub struct ItemReportQuery {
    pub item: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Render rows as JSON, or as a CSV attachment when `format=csv`
fn render<T: CsvRow>(rows: Vec<T>, format: ReportFormat, filename: &str) -> AppResult<Response> {
    match format {
        ReportFormat::Csv => {
            let csv = ReportingService::export_to_csv(&rows)?;
            let disposition = format!("attachment; filename=\"{}\"", filename);
            Ok((
                [(header::CONTENT_TYPE, "text/csv".to_string()), (header::CONTENT_DISPOSITION, disposition)],
                csv,
            )
                .into_response())
        }
        ReportFormat::Json => Ok(Json(rows).into_response()),
    }
}

/// Get the daily closing stock report
pub async fn get_daily_report(
    State(state): State<AppState>,
    Query(query): Query<DailyReportQuery>,
) -> AppResult<Response> {
    let rows = state.reports.daily_report(query.date).await?;
    render(rows, query.format, &format!("daily_stock_{}.csv", query.date))
}

/// Get the closing stock report of one outlet
pub async fn get_outlet_report(
    State(state): State<AppState>,
    Query(query): Query<OutletReportQuery>,
) -> AppResult<Response> {
    let rows = state
        .reports
        .outlet_report(&query.outlet, query.start_date, query.end_date)
        .await?;
    render(rows, query.format, "outlet_stock.csv")
}

/// Get the closing stock report of one item
pub async fn get_item_report(
    State(state): State<AppState>,
    Query(query): Query<ItemReportQuery>,
) -> AppResult<Response> {
    let rows = state
        .reports
        .item_report(&query.item, query.start_date, query.end_date)
        .await?;
    render(rows, query.format, "item_stock.csv")
}
