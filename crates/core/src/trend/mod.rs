//! Multi-month revenue/expense series.

mod trend_builder;
mod trend_model;
mod trend_service;

#[cfg(test)]
mod trend_service_tests;

pub use trend_builder::{build_trend_points, MonthRecords};
pub use trend_model::{TrendPoint, TrendSeries};
pub use trend_service::{TrendService, TrendServiceTrait};
