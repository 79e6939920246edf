//! Hearth Market Data Crate
//!
//! This crate provides the quote feed used by the portfolio valuator:
//! - A provider-agnostic [`QuoteFeed`] trait with a single batched call
//! - The [`Quote`] model returned by every feed
//! - A BRAPI-backed HTTP provider ([`BrapiProvider`]), which also serves
//!   price history, exchange rates and the SELIC and IPCA rates
//! - Environment-driven provider configuration ([`BrapiConfig`])
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | PortfolioService | --> |    QuoteFeed     |  (trait object, injected)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  BrapiProvider   |  (GET /quote/T1,T2,...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Vec<Quote>    |  (only known tickers)
//!                          +------------------+
//! ```
//!
//! A feed returns only the subset of tickers it has data for. Missing tickers
//! are not an error; a failure of the whole call is.

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use config::BrapiConfig;
pub use errors::{MarketDataError, RetryClass};
pub use models::{CurrencyRate, HistoricalPrice, HistoryInterval, HistoryRange, Quote};
pub use provider::brapi::BrapiProvider;
pub use provider::QuoteFeed;

/// Result alias for market data operations.
pub type Result<T> = std::result::Result<T, MarketDataError>;
