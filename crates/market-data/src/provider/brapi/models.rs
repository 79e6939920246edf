//! BRAPI API response structures.

use serde::Deserialize;

/// Response from the /quote/{tickers} endpoint
#[derive(Debug, Deserialize)]
pub(super) struct QuoteResponse {
    #[serde(default)]
    pub results: Vec<QuoteResult>,
}

/// One entry of `results`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QuoteResult {
    pub symbol: String,
    #[serde(default)]
    pub short_name: Option<String>,
    /// Missing for delisted or suspended tickers
    #[serde(default)]
    pub regular_market_price: Option<serde_json::Number>,
    #[serde(default)]
    pub regular_market_change_percent: Option<serde_json::Number>,
    #[serde(default)]
    pub currency: Option<String>,
    // Note: regularMarketChange, regularMarketVolume and logourl exist but are not mapped
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Numeric field that BRAPI sends either as a JSON number or as a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

/// Candle date: unix seconds on current payloads, an ISO string on older ones
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum DateValue {
    Epoch(i64),
    Text(String),
}

/// Response from /quote/{ticker}?range=..&interval=..
#[derive(Debug, Deserialize)]
pub(super) struct HistoryResponse {
    #[serde(default)]
    pub results: Vec<HistoryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HistoryResult {
    pub symbol: String,
    #[serde(default)]
    pub historical_data_price: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HistoryEntry {
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub open: Option<NumberOrText>,
    #[serde(default)]
    pub high: Option<NumberOrText>,
    #[serde(default)]
    pub low: Option<NumberOrText>,
    #[serde(default)]
    pub close: Option<NumberOrText>,
    #[serde(default)]
    pub volume: Option<NumberOrText>,
    #[serde(default)]
    pub adjusted_close: Option<NumberOrText>,
}

/// Response from /v2/currency
#[derive(Debug, Deserialize)]
pub(super) struct CurrencyResponse {
    #[serde(default)]
    pub currency: Vec<CurrencyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CurrencyEntry {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(default, alias = "ask")]
    pub ask_price: Option<NumberOrText>,
    #[serde(default, alias = "bid")]
    pub bid_price: Option<NumberOrText>,
    #[serde(default, alias = "pctChange")]
    pub percentage_change: Option<NumberOrText>,
}

/// Response from /v2/prime-rate
#[derive(Debug, Deserialize)]
pub(super) struct PrimeRateResponse {
    #[serde(default, rename = "prime-rate", alias = "prime_rate")]
    pub prime_rate: Vec<RateEntry>,
}

/// Response from /v2/inflation
#[derive(Debug, Deserialize)]
pub(super) struct InflationResponse {
    #[serde(default)]
    pub inflation: Vec<RateEntry>,
}

/// Latest entry first
#[derive(Debug, Deserialize)]
pub(super) struct RateEntry {
    #[serde(default, alias = "annualRate")]
    pub value: Option<NumberOrText>,
}
