//! Market data models
//!
//! - `quote` - Quote data returned by every feed
//! - `history` - Price candles and the range/interval of a history request
//! - `currency` - Exchange rates for currency pairs

mod currency;
mod history;
mod quote;

pub use currency::CurrencyRate;
pub use history::{HistoricalPrice, HistoryInterval, HistoryRange};
pub use quote::Quote;
