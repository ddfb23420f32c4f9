//! Business logic services for the Cafe Stock Ledger

pub mod ledger;
pub mod reporting;

pub use ledger::LedgerService;
pub use reporting::ReportingService;
