//! Database models for the Cafe Stock Ledger
//!
//! Re-exports models from the shared crate and adds the report row shapes

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

pub use shared::models::*;

/// A report row that can be exported as CSV
pub trait CsvRow: Serialize {
    /// Column names, in field order
    const HEADERS: &'static [&'static str];
}

/// Row of the daily report: every closing reading of one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DailyStockRow {
    pub cafe_outlet: String,
    pub category: String,
    pub item_name: String,
    pub closing_stock: Decimal,
    pub stock_date: NaiveDate,
}

/// Row of the outlet report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct OutletStockRow {
    pub stock_date: NaiveDate,
    pub category: String,
    pub item_name: String,
    pub closing_stock: Decimal,
}

/// Row of the item report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ItemStockRow {
    pub stock_date: NaiveDate,
    pub cafe_outlet: String,
    pub closing_stock: Decimal,
}

impl CsvRow for DailyStockRow {
    const HEADERS: &'static [&'static str] =
        &["cafe_outlet", "category", "item_name", "closing_stock", "stock_date"];
}

impl CsvRow for OutletStockRow {
    const HEADERS: &'static [&'static str] = &["stock_date", "category", "item_name", "closing_stock"];
}

impl CsvRow for ItemStockRow {
    const HEADERS: &'static [&'static str] = &["stock_date", "cafe_outlet", "closing_stock"];
}
