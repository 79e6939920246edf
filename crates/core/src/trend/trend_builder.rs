use crate::aggregation::total;
use crate::ledger::{Revenue, Transaction};
use crate::money::Money;
use crate::window::{MonthLabelLocale, YearMonth};

use super::trend_model::{TrendPoint, TrendSeries};

/// Raw records fetched for one month of a trend.
#[derive(Clone, Debug, Default)]
pub struct MonthRecords {
    pub transactions: Vec<Transaction>,
    pub revenues: Vec<Revenue>,
}

/// Builds the series from per-month records, which must be given oldest
/// first.
pub fn build_trend_points(
    months: &[(YearMonth, MonthRecords)],
    locale: MonthLabelLocale,
) -> TrendSeries {
    let points: Vec<TrendPoint> = months
        .iter()
        .map(|(period, records)| {
            let revenue_total = total(&records.revenues);
            let expense_total = total(&records.transactions);
            TrendPoint {
                period: *period,
                period_label: locale.short_month(*period).to_string(),
                revenue_total,
                expense_total,
                net: revenue_total - expense_total,
            }
        })
        .collect();

    let current_balance = points.last().map_or(Money::ZERO, |p| p.net);
    TrendSeries {
        points,
        current_balance,
    }
}
