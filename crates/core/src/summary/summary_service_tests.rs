use super::*;
use crate::errors::Error;
use crate::ledger::ledger_mock::{at, bank, revenue, transaction, MockLedger};
use crate::ledger::RevenueType;
use crate::money::Money;
use crate::window::YearMonth;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn june() -> YearMonth {
    YearMonth::new(2024, 6).unwrap()
}

fn ledger() -> MockLedger {
    let mut card = transaction("t3", "fun", Money::from_units(500), at(2024, 6, 12));
    card.bank_id = "itau".to_string();

    MockLedger {
        banks: vec![bank("nubank", "Nubank"), bank("itau", "Itaú")],
        transactions: vec![
            transaction("t1", "food", Money::from_units(1000), at(2024, 6, 2)),
            transaction("t2", "rent", Money::from_units(1500), at(2024, 6, 5)),
            card,
            transaction("p1", "food", Money::from_units(2000), at(2024, 5, 20)),
        ],
        revenues: vec![
            revenue("r1", RevenueType::Salary, Money::from_units(6000), at(2024, 6, 5)),
            revenue("r2", RevenueType::Freelance, Money::from_units(1500), at(2024, 6, 18)),
            revenue("r3", RevenueType::Rent, Money::from_units(1500), at(2024, 6, 19)),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_month_summary_figures() {
    let service = MonthSummaryService::new(Arc::new(ledger()));
    let summary = service.get_month_summary(june()).await.unwrap();

    assert_eq!(summary.total_revenues, Money::from_units(9000));
    assert_eq!(summary.total_expenses, Money::from_units(3000));
    assert_eq!(summary.balance, Money::from_units(6000));

    let types: Vec<RevenueType> = summary
        .revenue_by_type
        .iter()
        .map(|r| r.revenue_type)
        .collect();
    assert_eq!(
        types,
        vec![RevenueType::Salary, RevenueType::Freelance, RevenueType::Rent]
    );
    assert_eq!(summary.revenue_by_type[0].label, "Salário");

    assert_eq!(summary.expenses_by_bank.len(), 2);
    assert_eq!(summary.expenses_by_bank[0].name, "Nubank");
    assert_eq!(summary.expenses_by_bank[0].total, Money::from_units(2500));
    assert_eq!(summary.expenses_by_bank[1].name, "Itaú");

    assert_eq!(summary.expense_change_pct, Some(dec!(50)));
    assert_eq!(summary.revenue_change_pct, None);
}

#[tokio::test]
async fn test_empty_month_is_zeroed() {
    let service = MonthSummaryService::new(Arc::new(MockLedger::default()));
    let summary = service.get_month_summary(june()).await.unwrap();

    assert_eq!(summary.balance, Money::ZERO);
    assert!(summary.revenue_by_type.is_empty());
    assert!(summary.expenses_by_bank.is_empty());
    assert_eq!(summary.expense_change_pct, None);
}

#[tokio::test]
async fn test_previous_month_failure_fails_summary() {
    let mut mock = ledger();
    mock.failing_windows = vec![NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()];
    let service = MonthSummaryService::new(Arc::new(mock));

    let err = service.get_month_summary(june()).await.unwrap_err();
    assert!(matches!(err, Error::Ledger(_)));
}

#[test]
fn test_unknown_bank_falls_back() {
    let t = transaction("t1", "food", Money::from_units(10), at(2024, 6, 2));
    let summary = summarize(june(), &[t], &[], &[], &[], &[]);
    assert_eq!(summary.expenses_by_bank[0].name, "Outros");
}

fn ledger_with_opening_balances() -> MockLedger {
    let mut mock = ledger();
    mock.banks[0].initial_balance = Money::from_units(1000);
    mock.banks[1].initial_balance = Money::from_units(200);

    let mut closed = bank("inter", "Inter");
    closed.active = false;
    closed.initial_balance = Money::from_units(50);
    mock.banks.push(closed);
    mock
}

#[tokio::test]
async fn test_bank_balances_accumulate_all_history() {
    let service = MonthSummaryService::new(Arc::new(ledger_with_opening_balances()));
    let balances = service.get_bank_balances(june()).await.unwrap();

    assert_eq!(balances.banks.len(), 2);
    let nubank = &balances.banks[0];
    assert_eq!(nubank.bank_id, "nubank");
    assert_eq!(nubank.initial_balance, Money::from_units(1000));
    // 1000 + 9000 revenues - (2000 in May + 2500 in June)
    assert_eq!(nubank.current_balance, Money::from_units(5500));
    let itau = &balances.banks[1];
    assert_eq!(itau.name, "Itaú");
    assert_eq!(itau.current_balance, Money::from_units(-300));
    assert_eq!(balances.total_balance, Money::from_units(5200));
}

#[tokio::test]
async fn test_bank_balances_stop_at_month_end() {
    let service = MonthSummaryService::new(Arc::new(ledger_with_opening_balances()));
    let may = YearMonth::new(2024, 5).unwrap();
    let balances = service.get_bank_balances(may).await.unwrap();

    assert_eq!(balances.banks[0].current_balance, Money::from_units(-1000));
    assert_eq!(balances.banks[1].current_balance, Money::from_units(200));
    assert_eq!(balances.total_balance, Money::from_units(-800));
}

#[test]
fn test_bank_balances_ignore_unknown_banks() {
    let mut stray = transaction("t9", "food", Money::from_units(70), at(2024, 6, 2));
    stray.bank_id = "ghost".to_string();
    let mut opening = bank("nubank", "Nubank");
    opening.initial_balance = Money::from_cents(1050);

    let balances = bank_balances(
        &[opening],
        &[stray],
        &[revenue("r1", RevenueType::Salary, Money::from_units(10), at(2024, 6, 1))],
    );
    assert_eq!(balances.banks[0].current_balance, Money::from_cents(2050));
    assert_eq!(balances.total_balance, Money::from_cents(2050));

    assert_eq!(bank_balances(&[], &[], &[]), BankBalances::default());
}
