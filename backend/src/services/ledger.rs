//! Ledger service: the write path for opening and closing stock readings

use std::sync::Arc;

use shared::{validate_reading, Catalog, Reading, StockKind};

use crate::error::AppResult;
use crate::store::{DuplicatePolicy, StockStore};

/// Validates readings against the catalog and hands them to the store
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn StockStore>,
    catalog: Arc<Catalog>,
    policy: DuplicatePolicy,
}

impl LedgerService {
    /// Create a new LedgerService instance
    pub fn new(store: Arc<dyn StockStore>, catalog: Arc<Catalog>, policy: DuplicatePolicy) -> Self {
        Self {
            store,
            catalog,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Record an opening stock reading
    pub async fn record_opening(&self, reading: Reading) -> AppResult<()> {
        self.record(StockKind::Opening, reading).await
    }

    /// Record a closing stock reading
    pub async fn record_closing(&self, reading: Reading) -> AppResult<()> {
        self.record(StockKind::Closing, reading).await
    }

    /// Validate and persist one reading.
    ///
    /// Nothing reaches the store unless the category, item, outlet and
    /// quantity all pass validation. The store commits the reading before
    /// this returns.
    pub async fn record(&self, kind: StockKind, reading: Reading) -> AppResult<()> {
        if let Err(violation) = validate_reading(&self.catalog, &reading) {
            tracing::warn!(%kind, field = violation.field(), "Rejected reading: {}", violation);
            return Err(violation.into());
        }

        self.store.insert(kind, &reading, self.policy).await?;

        tracing::info!(
            %kind,
            key = %reading.key(),
            quantity = %reading.quantity,
            policy = self.policy.as_str(),
            backend = self.store.backend_tag(),
            "Stock reading saved"
        );
        Ok(())
    }
}
