//! Reporting service for closing stock
//! Provides the daily, outlet and item reports and their CSV export

use std::sync::Arc;

use chrono::NaiveDate;
use shared::DateRange;

use crate::error::{AppError, AppResult};
use crate::models::{CsvRow, DailyStockRow, ItemStockRow, OutletStockRow};
use crate::store::StockStore;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: Arc<dyn StockStore>,
}

impl ReportingService {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self { store }
    }

    /// Every closing reading of `date`, ordered by outlet, category and item
    pub async fn daily_report(&self, date: NaiveDate) -> AppResult<Vec<DailyStockRow>> {
        let rows = self.store.closing_on(date).await?;
        tracing::debug!(%date, rows = rows.len(), "Daily report");
        Ok(rows)
    }

    /// Closing readings of one outlet between `start` and `end` inclusive,
    /// newest first. An inverted range yields no rows.
    pub async fn outlet_report(
        &self,
        outlet: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<OutletStockRow>> {
        let range = DateRange::new(start, end);
        if range.is_inverted() {
            return Ok(Vec::new());
        }
        let rows = self.store.closing_for_outlet(outlet, range).await?;
        tracing::debug!(outlet, %start, %end, rows = rows.len(), "Outlet report");
        Ok(rows)
    }

    /// Closing readings of one item across all outlets between `start` and
    /// `end` inclusive, newest first. An inverted range yields no rows.
    pub async fn item_report(
        &self,
        item_name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ItemStockRow>> {
        let range = DateRange::new(start, end);
        if range.is_inverted() {
            return Ok(Vec::new());
        }
        let rows = self.store.closing_for_item(item_name, range).await?;
        tracing::debug!(item_name, %start, %end, rows = rows.len(), "Item report");
        Ok(rows)
    }

    /// Export report data as CSV. The header row is written even when
    /// there are no rows.
    pub fn export_to_csv<T: CsvRow>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(vec![]);
        wtr.write_record(T::HEADERS)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
