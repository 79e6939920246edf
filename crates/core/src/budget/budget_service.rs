use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::budget_evaluator::evaluate_with_threshold;
use super::budget_model::MonthBudget;
use super::budget_traits::BudgetServiceTrait;
use crate::aggregation::aggregate_by_category;
use crate::config::EngineConfig;
use crate::errors::Result;
use crate::ledger::{LedgerAccessorTrait, TransactionFilters};
use crate::window::{WindowSpec, YearMonth};

pub struct BudgetService {
    ledger: Arc<dyn LedgerAccessorTrait>,
    warning_threshold: Decimal,
}

impl BudgetService {
    pub fn new(ledger: Arc<dyn LedgerAccessorTrait>, config: &EngineConfig) -> Self {
        Self {
            ledger,
            warning_threshold: config.warning_threshold,
        }
    }

    pub fn with_warning_threshold(mut self, warning_threshold: Decimal) -> Self {
        self.warning_threshold = warning_threshold;
        self
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn get_month_budget(&self, month: YearMonth) -> Result<MonthBudget> {
        let window = WindowSpec::month(month);
        let filters = TransactionFilters::default();

        let (categories, transactions) = futures::try_join!(
            self.ledger.fetch_categories(true),
            self.ledger.fetch_transactions(&window, &filters)
        )?;
        debug!(
            "Evaluating budget for {}: {} categories, {} transactions",
            month,
            categories.len(),
            transactions.len()
        );

        let spent = aggregate_by_category(&transactions);
        let report = evaluate_with_threshold(&categories, &spent, self.warning_threshold);

        Ok(MonthBudget { month, report })
    }
}
