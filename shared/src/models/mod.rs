//! Domain models for the Cafe Stock Ledger

mod catalog;
mod stock;

pub use catalog::*;
pub use stock::*;
