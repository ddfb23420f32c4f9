//! Stock reading models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two kinds of stock reading, each persisted in its own table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockKind {
    /// Reading taken at the start of a period
    Opening,
    /// Reading taken at the end of a period (daily inventory)
    Closing,
}

impl StockKind {
    /// Table holding readings of this kind
    pub fn table(&self) -> &'static str {
        match self {
            StockKind::Opening => "opening_stock",
            StockKind::Closing => "daily_inventory",
        }
    }

    /// Name of the quantity column in [`StockKind::table`]
    pub fn quantity_column(&self) -> &'static str {
        match self {
            StockKind::Opening => "opening_stock",
            StockKind::Closing => "closing_stock",
        }
    }
}

impl std::fmt::Display for StockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockKind::Opening => write!(f, "opening"),
            StockKind::Closing => write!(f, "closing"),
        }
    }
}

/// One quantity observation for a date, outlet, category and item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reading {
    pub stock_date: NaiveDate,
    pub cafe_outlet: String,
    pub category: String,
    pub item_name: String,
    /// Opening or closing stock level, never negative
    pub quantity: Decimal,
}

impl Reading {
    pub fn new(
        stock_date: NaiveDate,
        cafe_outlet: impl Into<String>,
        category: impl Into<String>,
        item_name: impl Into<String>,
        quantity: Decimal,
    ) -> Self {
        Self {
            stock_date,
            cafe_outlet: cafe_outlet.into(),
            category: category.into(),
            item_name: item_name.into(),
            quantity,
        }
    }

    /// Natural key of the reading: (date, outlet, category, item)
    pub fn key(&self) -> ReadingKey<'_> {
        ReadingKey {
            stock_date: self.stock_date,
            cafe_outlet: &self.cafe_outlet,
            category: &self.category,
            item_name: &self.item_name,
        }
    }
}

/// Borrowed natural key of a [`Reading`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadingKey<'a> {
    pub stock_date: NaiveDate,
    pub cafe_outlet: &'a str,
    pub category: &'a str,
    pub item_name: &'a str,
}

impl std::fmt::Display for ReadingKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.stock_date, self.cafe_outlet, self.category, self.item_name
        )
    }
}
