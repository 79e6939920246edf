use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, error};

use super::trend_builder::{build_trend_points, MonthRecords};
use super::trend_model::TrendSeries;
use crate::config::EngineConfig;
use crate::errors::Result;
use crate::ledger::{LedgerAccessorTrait, TransactionFilters};
use crate::window::{MonthLabelLocale, WindowSpec, YearMonth};

#[async_trait]
pub trait TrendServiceTrait: Send + Sync {
    /// Monthly totals for the `month_count` months ending at `anchor`.
    async fn build_trend(&self, anchor: YearMonth, month_count: u32) -> Result<TrendSeries>;

    /// Same as `build_trend` with the configured number of months.
    async fn build_recent_trend(&self, anchor: YearMonth) -> Result<TrendSeries>;
}

pub struct TrendService {
    ledger: Arc<dyn LedgerAccessorTrait>,
    locale: MonthLabelLocale,
    default_months: u32,
}

impl TrendService {
    pub fn new(ledger: Arc<dyn LedgerAccessorTrait>, config: &EngineConfig) -> Self {
        Self {
            ledger,
            locale: config.locale,
            default_months: config.trend_months,
        }
    }

    async fn fetch_month(&self, month: YearMonth) -> Result<(YearMonth, MonthRecords)> {
        let window = WindowSpec::month(month);
        let filters = TransactionFilters::default();
        let (transactions, revenues) = futures::try_join!(
            self.ledger.fetch_transactions(&window, &filters),
            self.ledger.fetch_revenues(&window)
        )?;
        Ok((
            month,
            MonthRecords {
                transactions,
                revenues,
            },
        ))
    }
}

#[async_trait]
impl TrendServiceTrait for TrendService {
    async fn build_trend(&self, anchor: YearMonth, month_count: u32) -> Result<TrendSeries> {
        let months = anchor.trailing(month_count);
        debug!(
            "Building {}-month trend ending at {}",
            months.len(),
            anchor
        );

        // try_join_all keeps input order, so the series stays chronological.
        let fetched = try_join_all(months.into_iter().map(|m| self.fetch_month(m)))
            .await
            .map_err(|e| {
                error!("Trend fetch ending at {} failed: {}", anchor, e);
                e
            })?;

        Ok(build_trend_points(&fetched, self.locale))
    }

    async fn build_recent_trend(&self, anchor: YearMonth) -> Result<TrendSeries> {
        self.build_trend(anchor, self.default_months).await
    }
}
