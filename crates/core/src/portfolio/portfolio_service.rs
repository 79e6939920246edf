use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use hearth_market_data::QuoteFeed;
use log::{debug, error, warn};

use super::portfolio_model::{Holding, PortfolioValuation};
use super::valuator::valuate;
use crate::errors::Result;

#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Values `holdings` against one batched quote request.
    async fn valuate_holdings(&self, holdings: &[Holding]) -> Result<PortfolioValuation>;
}

pub struct PortfolioService {
    quote_feed: Arc<dyn QuoteFeed>,
}

impl PortfolioService {
    pub fn new(quote_feed: Arc<dyn QuoteFeed>) -> Self {
        Self { quote_feed }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn valuate_holdings(&self, holdings: &[Holding]) -> Result<PortfolioValuation> {
        if holdings.is_empty() {
            return Ok(PortfolioValuation::from_positions(Vec::new()));
        }

        let mut seen = HashSet::new();
        let tickers: Vec<String> = holdings
            .iter()
            .filter(|h| seen.insert(h.ticker.as_str()))
            .map(|h| h.ticker.clone())
            .collect();

        debug!(
            "Fetching {} quotes from {} for {} holdings",
            tickers.len(),
            self.quote_feed.id(),
            holdings.len()
        );
        let quotes = self.quote_feed.fetch_quotes(&tickers).await.map_err(|e| {
            error!("Quote fetch from {} failed: {}", self.quote_feed.id(), e);
            e
        })?;

        let positions = valuate(holdings, &quotes);
        let missing: Vec<&str> = positions
            .iter()
            .filter(|p| p.quote_missing)
            .map(|p| p.ticker.as_str())
            .collect();
        if !missing.is_empty() {
            warn!(
                "No quote for {} ticker(s), valuing at cost: {}",
                missing.len(),
                missing.join(", ")
            );
        }

        Ok(PortfolioValuation::from_positions(positions))
    }
}
