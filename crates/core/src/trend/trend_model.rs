use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::window::YearMonth;

/// Revenue and expense totals of one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: YearMonth,
    /// Short month name for chart axes, e.g. `jan`
    pub period_label: String,
    pub revenue_total: Money,
    pub expense_total: Money,
    pub net: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    /// Oldest month first
    pub points: Vec<TrendPoint>,
    /// Net of the most recent month
    pub current_balance: Money,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_revenue(&self) -> Money {
        self.points.iter().map(|p| p.revenue_total).sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.points.iter().map(|p| p.expense_total).sum()
    }
}
