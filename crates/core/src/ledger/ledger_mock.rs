//! In-memory ledger shared by the service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::{
    Bank, BankType, Category, ExpenseType, LedgerAccessorTrait, Revenue, RevenueType, Transaction,
    TransactionFilters,
};
use crate::errors::{LedgerError, Result};
use crate::money::Money;
use crate::window::WindowSpec;

#[derive(Default)]
pub(crate) struct MockLedger {
    pub transactions: Vec<Transaction>,
    pub revenues: Vec<Revenue>,
    pub categories: Vec<Category>,
    pub banks: Vec<Bank>,
    /// Window starts for which fetches fail
    pub failing_windows: Vec<NaiveDate>,
    pub fail_categories: bool,
    pub transaction_calls: Mutex<Vec<WindowSpec>>,
}

impl MockLedger {
    fn check_window(&self, window: &WindowSpec) -> Result<()> {
        if self.failing_windows.contains(&window.start()) {
            return Err(LedgerError::Unavailable(format!("window {}", window.start())).into());
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerAccessorTrait for MockLedger {
    async fn fetch_transactions(
        &self,
        window: &WindowSpec,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        self.check_window(window)?;
        self.transaction_calls.lock().unwrap().push(*window);
        Ok(self
            .transactions
            .iter()
            .filter(|t| window.contains(t.timestamp) && filters.matches(t))
            .cloned()
            .collect())
    }

    async fn fetch_revenues(&self, window: &WindowSpec) -> Result<Vec<Revenue>> {
        self.check_window(window)?;
        Ok(self
            .revenues
            .iter()
            .filter(|r| window.contains(r.timestamp))
            .cloned()
            .collect())
    }

    async fn fetch_categories(&self, active_only: bool) -> Result<Vec<Category>> {
        if self.fail_categories {
            return Err(LedgerError::QueryFailed("categories".to_string()).into());
        }
        Ok(self
            .categories
            .iter()
            .filter(|c| !active_only || c.active)
            .cloned()
            .collect())
    }

    async fn fetch_banks(&self, active_only: bool) -> Result<Vec<Bank>> {
        Ok(self
            .banks
            .iter()
            .filter(|b| !active_only || b.active)
            .cloned()
            .collect())
    }
}

pub(crate) fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub(crate) fn category(id: &str, expected: Option<Money>) -> Category {
    Category {
        id: id.to_string(),
        name: format!("Category {}", id),
        expense_type: ExpenseType::Variable,
        expected_amount: expected,
        color: "#10B981".to_string(),
        icon: None,
        active: true,
    }
}

pub(crate) fn transaction(
    id: &str,
    category_id: &str,
    amount: Money,
    timestamp: NaiveDateTime,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        category_id: category_id.to_string(),
        bank_id: "nubank".to_string(),
        amount,
        timestamp,
        installments_total: 1,
        installment_index: 1,
        description: None,
        recurring: false,
    }
}

pub(crate) fn revenue(
    id: &str,
    revenue_type: RevenueType,
    amount: Money,
    timestamp: NaiveDateTime,
) -> Revenue {
    Revenue {
        id: id.to_string(),
        bank_id: "nubank".to_string(),
        amount,
        revenue_type,
        timestamp,
        description: None,
        recurring: false,
    }
}

pub(crate) fn bank(id: &str, name: &str) -> Bank {
    Bank {
        id: id.to_string(),
        name: name.to_string(),
        bank_type: BankType::Checking,
        initial_balance: Money::ZERO,
        color: "#8B5CF6".to_string(),
        icon: None,
        active: true,
    }
}
