//! Ledger records and the accessor contract of the external ledger store.

mod ledger_model;
mod ledger_traits;

#[cfg(test)]
pub(crate) mod ledger_mock;

pub use ledger_model::{
    Bank, BankType, Category, ExpenseType, Revenue, RevenueType, Transaction, TransactionFilters,
};
pub use ledger_traits::LedgerAccessorTrait;
