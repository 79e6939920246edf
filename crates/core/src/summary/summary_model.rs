use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::RevenueType;
use crate::money::Money;
use crate::window::YearMonth;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTypeTotal {
    pub revenue_type: RevenueType,
    pub label: String,
    pub total: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTotal {
    pub bank_id: String,
    pub name: String,
    pub color: String,
    pub total: Money,
}

/// Dashboard headline figures for one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: YearMonth,
    pub total_revenues: Money,
    pub total_expenses: Money,
    /// `total_revenues - total_expenses`
    pub balance: Money,
    /// Highest first
    pub revenue_by_type: Vec<RevenueTypeTotal>,
    /// Highest first
    pub expenses_by_bank: Vec<BankTotal>,
    /// Percent change vs the previous month; `None` when that month is zero
    pub revenue_change_pct: Option<Decimal>,
    pub expense_change_pct: Option<Decimal>,
}

/// A bank account with its running balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankBalance {
    pub bank_id: String,
    pub name: String,
    pub color: String,
    pub initial_balance: Money,
    /// `initial_balance + revenues - expenses` booked to this bank
    pub current_balance: Money,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankBalances {
    /// Same order as the banks passed in
    pub banks: Vec<BankBalance>,
    pub total_balance: Money,
}
