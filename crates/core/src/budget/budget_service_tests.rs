use super::*;
use crate::config::EngineConfig;
use crate::errors::{Error, LedgerError};
use crate::ledger::ledger_mock::{at, category, transaction, MockLedger};
use crate::money::Money;
use crate::window::YearMonth;
use std::sync::Arc;

fn june() -> YearMonth {
    YearMonth::new(2024, 6).unwrap()
}

fn ledger() -> MockLedger {
    let mut inactive = category("old", Some(Money::from_units(50)));
    inactive.active = false;

    MockLedger {
        categories: vec![
            category("food", Some(Money::from_units(1000))),
            category("rent", Some(Money::from_units(2000))),
            inactive,
        ],
        transactions: vec![
            transaction("t1", "food", Money::from_units(700), at(2024, 6, 2)),
            transaction("t2", "food", Money::from_units(500), at(2024, 6, 20)),
            transaction("t3", "rent", Money::from_units(2000), at(2024, 6, 5)),
            // previous month, outside the window
            transaction("t4", "food", Money::from_units(900), at(2024, 5, 31)),
            transaction("t5", "old", Money::from_units(10), at(2024, 6, 7)),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_month_budget_uses_only_the_month_window() {
    let service = BudgetService::new(Arc::new(ledger()), &EngineConfig::default());
    let budget = service.get_month_budget(june()).await.unwrap();

    assert_eq!(budget.month, june());
    let report = &budget.report;
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].category_id, "rent");
    assert_eq!(report.rows[0].status, BudgetStatus::Warning);
    assert_eq!(report.rows[1].category_id, "food");
    assert_eq!(report.rows[1].spent, Money::from_units(1200));
    assert_eq!(report.rows[1].status, BudgetStatus::Over);
    assert_eq!(report.over_budget_count, 1);
    assert_eq!(report.total_spent, Money::from_units(3200));
}

#[tokio::test]
async fn test_month_budget_custom_threshold() {
    let mut mock = ledger();
    mock.transactions.retain(|t| t.id == "t1");
    let service = BudgetService::new(Arc::new(mock), &EngineConfig::default())
        .with_warning_threshold(rust_decimal::Decimal::ONE);

    let budget = service.get_month_budget(june()).await.unwrap();
    let food = budget
        .report
        .rows
        .iter()
        .find(|r| r.category_id == "food")
        .unwrap();
    assert_eq!(food.status, BudgetStatus::OnTrack);
}

#[tokio::test]
async fn test_month_budget_reads_threshold_from_config() {
    let mut mock = ledger();
    mock.transactions.retain(|t| t.id == "t1");
    let mock = Arc::new(mock);

    // 700 of 1000 spent: on track at 0.70, warning at 0.5
    let default_budget = BudgetService::new(mock.clone(), &EngineConfig::default())
        .get_month_budget(june())
        .await
        .unwrap();
    assert_eq!(default_budget.report.rows[0].status, BudgetStatus::OnTrack);

    let config = EngineConfig {
        warning_threshold: rust_decimal_macros::dec!(0.5),
        ..EngineConfig::default()
    };
    let strict_budget = BudgetService::new(mock, &config)
        .get_month_budget(june())
        .await
        .unwrap();
    let food = &strict_budget.report.rows[0];
    assert_eq!(food.category_id, "food");
    assert_eq!(food.status, BudgetStatus::Warning);
}

#[tokio::test]
async fn test_month_budget_propagates_fetch_failure() {
    let mut mock = ledger();
    mock.fail_categories = true;
    let service = BudgetService::new(Arc::new(mock), &EngineConfig::default());

    let err = service.get_month_budget(june()).await.unwrap_err();
    assert!(matches!(err, Error::Ledger(LedgerError::QueryFailed(_))));
}
