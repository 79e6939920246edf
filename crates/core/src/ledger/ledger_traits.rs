use async_trait::async_trait;

use super::ledger_model::{Bank, Category, Revenue, Transaction, TransactionFilters};
use crate::errors::Result;
use crate::window::WindowSpec;

/// Query contract of the ledger store.
///
/// Implementations return complete (not paginated) result sets scoped to the
/// requested window and convert backend failures into
/// [`crate::errors::LedgerError`].
#[async_trait]
pub trait LedgerAccessorTrait: Send + Sync {
    async fn fetch_transactions(
        &self,
        window: &WindowSpec,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>>;

    async fn fetch_revenues(&self, window: &WindowSpec) -> Result<Vec<Revenue>>;

    async fn fetch_categories(&self, active_only: bool) -> Result<Vec<Category>>;

    async fn fetch_banks(&self, active_only: bool) -> Result<Vec<Bank>>;
}
