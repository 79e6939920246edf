use std::collections::HashMap;
use std::hash::Hash;

use crate::ledger::{Revenue, RevenueType, Transaction};
use crate::money::Money;

/// A ledger record carrying an amount.
pub trait Amounted {
    fn amount(&self) -> Money;
}

impl Amounted for Transaction {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl Amounted for Revenue {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl<T: Amounted + ?Sized> Amounted for &T {
    fn amount(&self) -> Money {
        (**self).amount()
    }
}

/// Sums `records` grouped by `key_fn`.
///
/// Only keys that occur in the input appear in the result; an empty input
/// gives an empty map. Sums are exact integer cents, so the result does not
/// depend on record order.
pub fn aggregate<R, K, F>(records: &[R], key_fn: F) -> HashMap<K, Money>
where
    R: Amounted,
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut totals: HashMap<K, Money> = HashMap::new();
    for record in records {
        *totals.entry(key_fn(record)).or_insert(Money::ZERO) += record.amount();
    }
    totals
}

pub fn total<R: Amounted>(records: &[R]) -> Money {
    records.iter().map(Amounted::amount).sum()
}

/// Expense totals keyed by category id.
pub fn aggregate_by_category(transactions: &[Transaction]) -> HashMap<String, Money> {
    aggregate(transactions, |t| t.category_id.clone())
}

/// Expense totals keyed by bank id.
pub fn aggregate_by_bank(transactions: &[Transaction]) -> HashMap<String, Money> {
    aggregate(transactions, |t| t.bank_id.clone())
}

/// Revenue totals keyed by the receiving bank id.
pub fn aggregate_revenue_by_bank(revenues: &[Revenue]) -> HashMap<String, Money> {
    aggregate(revenues, |r| r.bank_id.clone())
}

pub fn aggregate_revenue_by_type(revenues: &[Revenue]) -> HashMap<RevenueType, Money> {
    aggregate(revenues, |r| r.revenue_type)
}
