//! HTTP handlers for the Cafe Stock Ledger API

pub mod catalog;
pub mod health;
pub mod reporting;
pub mod stock;

pub use catalog::{list_categories, list_category_items, list_outlets};
pub use health::health_check;
pub use reporting::{get_daily_report, get_item_report, get_outlet_report};
pub use stock::{record_closing, record_opening};
