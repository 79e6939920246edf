use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::summary_model::{BankBalance, BankBalances, BankTotal, MonthSummary, RevenueTypeTotal};
use crate::aggregation::{
    aggregate_by_bank, aggregate_revenue_by_bank, aggregate_revenue_by_type, total,
};
use crate::constants::{UNCATEGORIZED_COLOR, UNCATEGORIZED_LABEL};
use crate::errors::Result;
use crate::ledger::{Bank, LedgerAccessorTrait, Revenue, Transaction, TransactionFilters};
use crate::money::Money;
use crate::window::{WindowSpec, YearMonth};

#[async_trait]
pub trait MonthSummaryServiceTrait: Send + Sync {
    async fn get_month_summary(&self, month: YearMonth) -> Result<MonthSummary>;

    /// Balances of the active banks with every record up to the end of `month`.
    async fn get_bank_balances(&self, month: YearMonth) -> Result<BankBalances>;
}

pub struct MonthSummaryService {
    ledger: Arc<dyn LedgerAccessorTrait>,
}

impl MonthSummaryService {
    pub fn new(ledger: Arc<dyn LedgerAccessorTrait>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl MonthSummaryServiceTrait for MonthSummaryService {
    async fn get_month_summary(&self, month: YearMonth) -> Result<MonthSummary> {
        let current = WindowSpec::month(month);
        let previous = WindowSpec::month(month.pred());
        let filters = TransactionFilters::default();

        let (transactions, revenues, prev_transactions, prev_revenues, banks) = futures::try_join!(
            self.ledger.fetch_transactions(&current, &filters),
            self.ledger.fetch_revenues(&current),
            self.ledger.fetch_transactions(&previous, &filters),
            self.ledger.fetch_revenues(&previous),
            self.ledger.fetch_banks(false)
        )?;
        debug!(
            "Summarizing {}: {} transactions, {} revenues",
            month,
            transactions.len(),
            revenues.len()
        );

        Ok(summarize(
            month,
            &transactions,
            &revenues,
            &prev_transactions,
            &prev_revenues,
            &banks,
        ))
    }

    async fn get_bank_balances(&self, month: YearMonth) -> Result<BankBalances> {
        let window = WindowSpec::new(NaiveDate::MIN, month.last_day())?;
        let filters = TransactionFilters::default();

        let (banks, transactions, revenues) = futures::try_join!(
            self.ledger.fetch_banks(true),
            self.ledger.fetch_transactions(&window, &filters),
            self.ledger.fetch_revenues(&window)
        )?;
        debug!(
            "Balancing {} banks through {}: {} transactions, {} revenues",
            banks.len(),
            month,
            transactions.len(),
            revenues.len()
        );

        Ok(bank_balances(&banks, &transactions, &revenues))
    }
}

/// Running balance per bank. Records booked to banks not in `banks` are
/// left out.
pub fn bank_balances(
    banks: &[Bank],
    transactions: &[Transaction],
    revenues: &[Revenue],
) -> BankBalances {
    let expenses = aggregate_by_bank(transactions);
    let incomes = aggregate_revenue_by_bank(revenues);

    let balances: Vec<BankBalance> = banks
        .iter()
        .map(|bank| {
            let income = incomes.get(&bank.id).copied().unwrap_or(Money::ZERO);
            let spent = expenses.get(&bank.id).copied().unwrap_or(Money::ZERO);
            BankBalance {
                bank_id: bank.id.clone(),
                name: bank.name.clone(),
                color: bank.color.clone(),
                initial_balance: bank.initial_balance,
                current_balance: bank.initial_balance + income - spent,
            }
        })
        .collect();
    let total_balance = balances.iter().map(|b| b.current_balance).sum();

    BankBalances {
        banks: balances,
        total_balance,
    }
}

/// Builds the summary from already fetched records.
pub fn summarize(
    month: YearMonth,
    transactions: &[Transaction],
    revenues: &[Revenue],
    prev_transactions: &[Transaction],
    prev_revenues: &[Revenue],
    banks: &[Bank],
) -> MonthSummary {
    let total_revenues = total(revenues);
    let total_expenses = total(transactions);

    let mut revenue_by_type: Vec<RevenueTypeTotal> = aggregate_revenue_by_type(revenues)
        .into_iter()
        .map(|(revenue_type, amount)| RevenueTypeTotal {
            revenue_type,
            label: revenue_type.label().to_string(),
            total: amount,
        })
        .collect();
    revenue_by_type.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.revenue_type.cmp(&b.revenue_type))
    });

    let banks_by_id: HashMap<&str, &Bank> = banks.iter().map(|b| (b.id.as_str(), b)).collect();
    let mut expenses_by_bank: Vec<BankTotal> = aggregate_by_bank(transactions)
        .into_iter()
        .map(|(bank_id, amount)| {
            let (name, color) = match banks_by_id.get(bank_id.as_str()) {
                Some(bank) => (bank.name.clone(), bank.color.clone()),
                None => (
                    UNCATEGORIZED_LABEL.to_string(),
                    UNCATEGORIZED_COLOR.to_string(),
                ),
            };
            BankTotal {
                bank_id,
                name,
                color,
                total: amount,
            }
        })
        .collect();
    expenses_by_bank.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.bank_id.cmp(&b.bank_id)));

    MonthSummary {
        month,
        total_revenues,
        total_expenses,
        balance: total_revenues - total_expenses,
        revenue_by_type,
        expenses_by_bank,
        revenue_change_pct: change_pct(total_revenues, total(prev_revenues)),
        expense_change_pct: change_pct(total_expenses, total(prev_transactions)),
    }
}

fn change_pct(current: Money, previous: Money) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some((current - previous).ratio(previous) * Decimal::ONE_HUNDRED)
}
