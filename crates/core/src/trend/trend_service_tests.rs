use super::*;
use crate::config::EngineConfig;
use crate::errors::{Error, LedgerError};
use crate::ledger::ledger_mock::{at, revenue, transaction, MockLedger};
use crate::ledger::RevenueType;
use crate::money::Money;
use crate::window::{MonthLabelLocale, WindowSpec, YearMonth};
use chrono::NaiveDate;
use std::sync::Arc;

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn ledger() -> MockLedger {
    MockLedger {
        transactions: vec![
            transaction("t1", "food", Money::from_units(300), at(2024, 1, 15)),
            transaction("t2", "food", Money::from_units(200), at(2024, 6, 1)),
            transaction("t3", "rent", Money::from_units(1000), at(2024, 6, 30)),
            transaction("t4", "rent", Money::from_units(999), at(2023, 12, 31)),
        ],
        revenues: vec![
            revenue("r1", RevenueType::Salary, Money::from_units(5000), at(2024, 6, 5)),
            revenue("r2", RevenueType::Salary, Money::from_units(5000), at(2024, 3, 5)),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_six_month_trend_ending_in_june() {
    let mock = Arc::new(ledger());
    let service = TrendService::new(mock.clone(), &EngineConfig::default());

    let series = service.build_trend(ym(2024, 6), 6).await.unwrap();

    let periods: Vec<YearMonth> = series.points.iter().map(|p| p.period).collect();
    assert_eq!(periods, ym(2024, 6).trailing(6));
    assert_eq!(periods.first(), Some(&ym(2024, 1)));

    let labels: Vec<&str> = series.points.iter().map(|p| p.period_label.as_str()).collect();
    assert_eq!(labels, vec!["jan", "fev", "mar", "abr", "mai", "jun"]);

    assert_eq!(series.points[0].expense_total, Money::from_units(300));
    assert_eq!(series.points[2].revenue_total, Money::from_units(5000));
    assert_eq!(series.points[5].expense_total, Money::from_units(1200));
    assert_eq!(series.points[5].net, Money::from_units(3800));
    assert_eq!(series.current_balance, Money::from_units(3800));
    assert_eq!(series.total_expenses(), Money::from_units(1500));

    let mut windows: Vec<WindowSpec> = mock.transaction_calls.lock().unwrap().clone();
    windows.sort_by_key(|w| w.start());
    assert_eq!(windows.len(), 6);
    assert!(WindowSpec::is_contiguous(&windows));
}

#[tokio::test]
async fn test_trend_crosses_year_boundary() {
    let service = TrendService::new(Arc::new(ledger()), &EngineConfig::default());
    let series = service.build_trend(ym(2024, 1), 2).await.unwrap();

    assert_eq!(series.points[0].period, ym(2023, 12));
    assert_eq!(series.points[0].period_label, "dez");
    assert_eq!(series.points[0].expense_total, Money::from_units(999));
}

#[tokio::test]
async fn test_zero_months_is_empty() {
    let service = TrendService::new(Arc::new(ledger()), &EngineConfig::default());
    let series = service.build_trend(ym(2024, 6), 0).await.unwrap();
    assert!(series.is_empty());
    assert_eq!(series.current_balance, Money::ZERO);
}

#[tokio::test]
async fn test_recent_trend_uses_configured_months_and_locale() {
    let config = EngineConfig {
        trend_months: 3,
        locale: MonthLabelLocale::En,
        ..EngineConfig::default()
    };
    let service = TrendService::new(Arc::new(ledger()), &config);
    let series = service.build_recent_trend(ym(2024, 6)).await.unwrap();

    let labels: Vec<&str> = series.points.iter().map(|p| p.period_label.as_str()).collect();
    assert_eq!(labels, vec!["Apr", "May", "Jun"]);
}

#[tokio::test]
async fn test_any_month_failure_fails_the_whole_trend() {
    let mut mock = ledger();
    mock.failing_windows = vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()];
    let service = TrendService::new(Arc::new(mock), &EngineConfig::default());

    let err = service.build_trend(ym(2024, 6), 6).await.unwrap_err();
    assert!(matches!(err, Error::Ledger(LedgerError::Unavailable(_))));
}

#[test]
fn test_build_points_is_pure() {
    let months = vec![(ym(2024, 6), MonthRecords::default())];
    let first = build_trend_points(&months, MonthLabelLocale::PtBr);
    let second = build_trend_points(&months, MonthLabelLocale::PtBr);
    assert_eq!(first, second);
    assert_eq!(first.points[0].net, Money::ZERO);
}
