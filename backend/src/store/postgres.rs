//! PostgreSQL stock store
//!
//! Table and column names come from [`StockKind`], never from callers, so
//! they are spliced into the SQL text while every value is bound.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DateRange, Reading, StockKind};
use sqlx::{postgres::PgPoolOptions, PgConnection, PgPool};

use super::{DuplicatePolicy, StockStore};
use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use crate::models::{DailyStockRow, ItemStockRow, OutletStockRow};

/// Stock store backed by a shared PostgreSQL pool
#[derive(Clone)]
pub struct PgStockStore {
    db: PgPool,
}

impl PgStockStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Open the connection pool described by `config`
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;
        Ok(Self::new(db))
    }

    /// Create the stock tables if they do not exist yet
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .map_err(|e| AppError::StorageError(e.into()))
    }

    async fn key_exists(conn: &mut PgConnection, kind: StockKind, reading: &Reading) -> AppResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} \
             WHERE stock_date = $1 AND cafeoutlet = $2 AND category = $3 AND item_name = $4)",
            kind.table()
        );
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(reading.stock_date)
            .bind(&reading.cafe_outlet)
            .bind(&reading.category)
            .bind(&reading.item_name)
            .fetch_one(conn)
            .await?;
        Ok(exists)
    }

    async fn delete_key(conn: &mut PgConnection, kind: StockKind, reading: &Reading) -> AppResult<u64> {
        let sql = format!(
            "DELETE FROM {} \
             WHERE stock_date = $1 AND cafeoutlet = $2 AND category = $3 AND item_name = $4",
            kind.table()
        );
        let result = sqlx::query(&sql)
            .bind(reading.stock_date)
            .bind(&reading.cafe_outlet)
            .bind(&reading.category)
            .bind(&reading.item_name)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    async fn insert(&self, kind: StockKind, reading: &Reading, policy: DuplicatePolicy) -> AppResult<()> {
        // Dropping `tx` without commit rolls the write back.
        let mut tx = self.db.begin().await?;

        match policy {
            DuplicatePolicy::Append => {}
            DuplicatePolicy::Reject => {
                if Self::key_exists(&mut *tx, kind, reading).await? {
                    tx.rollback().await?;
                    return Err(AppError::DuplicateReading {
                        kind,
                        key: reading.key().to_string(),
                    });
                }
            }
            DuplicatePolicy::Replace => {
                let removed = Self::delete_key(&mut *tx, kind, reading).await?;
                if removed > 0 {
                    tracing::debug!(%kind, key = %reading.key(), removed, "Replacing existing readings");
                }
            }
        }

        let sql = format!(
            "INSERT INTO {} (stock_date, category, item_name, {}, cafeoutlet) \
             VALUES ($1, $2, $3, $4, $5)",
            kind.table(),
            kind.quantity_column()
        );
        sqlx::query(&sql)
            .bind(reading.stock_date)
            .bind(&reading.category)
            .bind(&reading.item_name)
            .bind(reading.quantity)
            .bind(&reading.cafe_outlet)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // Text keys sort with the "C" collation, i.e. byte order, like the memory store
    async fn closing_on(&self, date: NaiveDate) -> AppResult<Vec<DailyStockRow>> {
        let rows = sqlx::query_as::<_, DailyStockRow>(
            r#"
            SELECT cafeoutlet AS cafe_outlet, category, item_name, closing_stock, stock_date
            FROM daily_inventory
            WHERE stock_date = $1
            ORDER BY cafeoutlet COLLATE "C", category COLLATE "C", item_name COLLATE "C"
            "#,
        )
        .bind(date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn closing_for_outlet(&self, outlet: &str, range: DateRange) -> AppResult<Vec<OutletStockRow>> {
        let rows = sqlx::query_as::<_, OutletStockRow>(
            r#"
            SELECT stock_date, category, item_name, closing_stock
            FROM daily_inventory
            WHERE cafeoutlet = $1 AND stock_date BETWEEN $2 AND $3
            ORDER BY stock_date DESC, category COLLATE "C", item_name COLLATE "C"
            "#,
        )
        .bind(outlet)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn closing_for_item(&self, item_name: &str, range: DateRange) -> AppResult<Vec<ItemStockRow>> {
        let rows = sqlx::query_as::<_, ItemStockRow>(
            r#"
            SELECT stock_date, cafeoutlet AS cafe_outlet, closing_stock
            FROM daily_inventory
            WHERE item_name = $1 AND stock_date BETWEEN $2 AND $3
            ORDER BY stock_date DESC, cafeoutlet COLLATE "C"
            "#,
        )
        .bind(item_name)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}
