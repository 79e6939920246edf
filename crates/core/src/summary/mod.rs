//! Month-level dashboard figures.

mod summary_model;
mod summary_service;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{BankBalance, BankBalances, BankTotal, MonthSummary, RevenueTypeTotal};
pub use summary_service::{bank_balances, summarize, MonthSummaryService, MonthSummaryServiceTrait};
