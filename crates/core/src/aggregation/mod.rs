//! Grouped sums over ledger records.

mod aggregator;
mod day_groups;

pub use aggregator::{
    aggregate, aggregate_by_bank, aggregate_by_category, aggregate_revenue_by_bank,
    aggregate_revenue_by_type, total, Amounted,
};
pub use day_groups::{group_by_day, DayGroup};
