//! Persistence backends for stock readings
//!
//! The ledger and reporting services talk to storage only through
//! [`StockStore`]. Two backends exist: PostgreSQL for deployments and an
//! in-process store for tests and local runs.

mod memory;
mod postgres;

pub use memory::MemoryStockStore;
pub use postgres::PgStockStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{DateRange, Reading, StockKind};

use crate::error::AppResult;
use crate::models::{DailyStockRow, ItemStockRow, OutletStockRow};

/// What a write does when its (date, outlet, category, item) key already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Insert another row; both readings persist
    #[default]
    Append,
    /// Fail with `DuplicateReading` and write nothing
    Reject,
    /// Delete the existing rows for the key and insert the new one
    Replace,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Append => "append",
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Replace => "replace",
        }
    }
}

/// Storage contract shared by every backend.
///
/// Each call is one unit of work: a write is committed before it returns
/// and a failed write leaves the tables as they were.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Short name used in logs and the health probe
    fn backend_tag(&self) -> &'static str;

    /// Check that the backend can serve requests
    async fn ping(&self) -> AppResult<()>;

    /// Persist a reading in the table for `kind`, honoring `policy`
    async fn insert(&self, kind: StockKind, reading: &Reading, policy: DuplicatePolicy) -> AppResult<()>;

    /// Closing readings for one date, ordered by outlet, category, item
    async fn closing_on(&self, date: NaiveDate) -> AppResult<Vec<DailyStockRow>>;

    /// Closing readings of one outlet within `range`, newest first
    async fn closing_for_outlet(&self, outlet: &str, range: DateRange) -> AppResult<Vec<OutletStockRow>>;

    /// Closing readings of one item within `range`, newest first
    async fn closing_for_item(&self, item_name: &str, range: DateRange) -> AppResult<Vec<ItemStockRow>>;
}
