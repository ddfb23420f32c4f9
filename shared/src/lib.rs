//! Shared types and models for the Cafe Stock Ledger
//!
//! This crate contains the catalog, reading models and validation rules
//! shared between the storage backends, the reporting layer and the HTTP API.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
