use async_trait::async_trait;

use super::budget_model::MonthBudget;
use crate::errors::Result;
use crate::window::YearMonth;

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Budget vs actual for every active category of `month`.
    async fn get_month_budget(&self, month: YearMonth) -> Result<MonthBudget>;
}
