use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time market observation for one ticker.
///
/// Quotes are never cached by the engine; every valuation cycle fetches a
/// fresh batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker exactly as delivered by the feed (case-sensitive)
    pub symbol: String,

    /// Last traded price
    pub price: Decimal,

    /// Change versus previous close, in percent (1.5 means +1.5%)
    pub change_percent: Decimal,

    /// Short display name reported by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Quote currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Quote {
    /// Create a quote with only the fields the valuator needs.
    pub fn new(symbol: impl Into<String>, price: Decimal, change_percent: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change_percent,
            short_name: None,
            currency: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }
}
