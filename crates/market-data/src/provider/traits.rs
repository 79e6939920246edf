//! Quote feed trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for quote feeds.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use hearth_market_data::{MarketDataError, Quote, QuoteFeed};
///
/// struct FixedFeed(Vec<Quote>);
///
/// #[async_trait]
/// impl QuoteFeed for FixedFeed {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, MarketDataError> {
///         Ok(self.0.iter().filter(|q| tickers.contains(&q.symbol)).cloned().collect())
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    /// Unique identifier for this feed, used for logging and error context.
    fn id(&self) -> &'static str;

    /// Fetch the latest quotes for all `tickers` in a single request.
    ///
    /// # Returns
    ///
    /// Only the subset of tickers the feed has data for; unknown tickers are
    /// silently omitted. An `Err` means the whole call failed (outage,
    /// rate limit, malformed payload).
    async fn fetch_quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, MarketDataError>;
}
