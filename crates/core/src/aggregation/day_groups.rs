use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::Transaction;
use crate::money::Money;

/// Transactions of one calendar day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub total: Money,
}

/// Groups transactions by day, newest day first. Inside a day the input
/// order is kept.
pub fn group_by_day(transactions: &[Transaction]) -> Vec<DayGroup> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<DayGroup> = Vec::new();

    for transaction in transactions {
        let date = transaction.timestamp.date();
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DayGroup {
                date,
                transactions: Vec::new(),
                total: Money::ZERO,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.total += transaction.amount;
        group.transactions.push(transaction.clone());
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
