//! Budget utilization per category and for the whole month.

mod budget_evaluator;
mod budget_model;
mod budget_service;
mod budget_traits;

#[cfg(test)]
mod budget_service_tests;

pub use budget_evaluator::{evaluate, evaluate_with_threshold};
pub use budget_model::{BudgetReport, BudgetRow, BudgetStatus, MonthBudget};
pub use budget_service::BudgetService;
pub use budget_traits::BudgetServiceTrait;
