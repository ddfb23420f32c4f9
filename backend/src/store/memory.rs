//! In-process stock store
//!
//! Mirrors the PostgreSQL backend's ordering and duplicate handling. Each
//! write holds the table lock for its whole duration, so it is applied
//! entirely or not at all.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DateRange, Reading, StockKind};
use tokio::sync::RwLock;

use super::{DuplicatePolicy, StockStore};
use crate::error::{AppError, AppResult};
use crate::models::{DailyStockRow, ItemStockRow, OutletStockRow};

/// Stock store holding both tables in memory
#[derive(Default)]
pub struct MemoryStockStore {
    tables: RwLock<HashMap<StockKind, Vec<Reading>>>,
    unavailable: AtomicBool,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the connection were lost
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// All readings of one kind in insertion order
    pub async fn readings(&self, kind: StockKind) -> Vec<Reading> {
        self.tables.read().await.get(&kind).cloned().unwrap_or_default()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StorageError(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    async fn closing_where<F>(&self, keep: F) -> Vec<Reading>
    where
        F: Fn(&Reading) -> bool,
    {
        self.tables
            .read()
            .await
            .get(&StockKind::Closing)
            .map(|rows| rows.iter().filter(|&r| keep(r)).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_available()
    }

    async fn insert(&self, kind: StockKind, reading: &Reading, policy: DuplicatePolicy) -> AppResult<()> {
        self.check_available()?;

        let mut tables = self.tables.write().await;
        let table = tables.entry(kind).or_default();

        match policy {
            DuplicatePolicy::Append => {}
            DuplicatePolicy::Reject => {
                if table.iter().any(|r| r.key() == reading.key()) {
                    return Err(AppError::DuplicateReading {
                        kind,
                        key: reading.key().to_string(),
                    });
                }
            }
            DuplicatePolicy::Replace => {
                table.retain(|r| r.key() != reading.key());
            }
        }

        table.push(reading.clone());
        Ok(())
    }

    async fn closing_on(&self, date: NaiveDate) -> AppResult<Vec<DailyStockRow>> {
        self.check_available()?;

        let mut rows: Vec<DailyStockRow> = self
            .closing_where(|r| r.stock_date == date)
            .await
            .into_iter()
            .map(|r| DailyStockRow {
                cafe_outlet: r.cafe_outlet,
                category: r.category,
                item_name: r.item_name,
                closing_stock: r.quantity,
                stock_date: r.stock_date,
            })
            .collect();

        rows.sort_by(|a, b| {
            (&a.cafe_outlet, &a.category, &a.item_name).cmp(&(&b.cafe_outlet, &b.category, &b.item_name))
        });
        Ok(rows)
    }

    async fn closing_for_outlet(&self, outlet: &str, range: DateRange) -> AppResult<Vec<OutletStockRow>> {
        self.check_available()?;

        let mut rows: Vec<OutletStockRow> = self
            .closing_where(|r| r.cafe_outlet == outlet && range.contains(r.stock_date))
            .await
            .into_iter()
            .map(|r| OutletStockRow {
                stock_date: r.stock_date,
                category: r.category,
                item_name: r.item_name,
                closing_stock: r.quantity,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.stock_date
                .cmp(&a.stock_date)
                .then_with(|| (&a.category, &a.item_name).cmp(&(&b.category, &b.item_name)))
        });
        Ok(rows)
    }

    async fn closing_for_item(&self, item_name: &str, range: DateRange) -> AppResult<Vec<ItemStockRow>> {
        self.check_available()?;

        let mut rows: Vec<ItemStockRow> = self
            .closing_where(|r| r.item_name == item_name && range.contains(r.stock_date))
            .await
            .into_iter()
            .map(|r| ItemStockRow {
                stock_date: r.stock_date,
                cafe_outlet: r.cafe_outlet,
                closing_stock: r.quantity,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.stock_date
                .cmp(&a.stock_date)
                .then_with(|| a.cafe_outlet.cmp(&b.cafe_outlet))
        });
        Ok(rows)
    }
}
