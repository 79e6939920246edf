use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::ExpenseType;
use crate::money::Money;
use crate::window::YearMonth;

/// Budget tier of a row or of the whole month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    /// No target set
    Unbudgeted,
    OnTrack,
    /// Above the warning threshold but not over the target
    Warning,
    Over,
}

/// One category's spending against its target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    pub category_id: String,
    pub category_name: String,
    pub category_color: String,
    pub category_icon: Option<String>,
    pub expense_type: ExpenseType,
    pub expected_amount: Option<Money>,
    pub spent: Money,
    pub has_budget: bool,
    /// `spent / expected`, unclamped; zero when unbudgeted
    pub raw_utilization: Decimal,
    /// `raw_utilization` clamped to 1 for progress bars
    pub utilization: Decimal,
    pub is_over: bool,
    pub is_warning: bool,
    /// `expected - spent`, negative when over; `None` when unbudgeted
    pub remaining: Option<Money>,
    pub status: BudgetStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    /// Sorted by `spent`, highest first
    pub rows: Vec<BudgetRow>,
    pub total_budget: Money,
    pub total_spent: Money,
    /// `None` when no row carries a budget
    pub overall_utilization: Option<Decimal>,
    pub overall_status: BudgetStatus,
    pub over_budget_count: usize,
}

impl BudgetReport {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_budget: Money::ZERO,
            total_spent: Money::ZERO,
            overall_utilization: None,
            overall_status: BudgetStatus::Unbudgeted,
            over_budget_count: 0,
        }
    }

    pub fn budgeted_rows(&self) -> impl Iterator<Item = &BudgetRow> {
        self.rows.iter().filter(|row| row.has_budget)
    }
}

/// Budget report of one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBudget {
    pub month: YearMonth,
    #[serde(flatten)]
    pub report: BudgetReport,
}
