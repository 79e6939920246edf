//! BRAPI market data provider implementation.
//!
//! Fetches Brazilian (B3) equities, FIIs, ETFs and BDRs through the
//! /quote/{tickers} endpoint. All tickers of a valuation cycle go out in one
//! comma-separated request. The same client also reads price history,
//! exchange rates (/v2/currency) and the SELIC and IPCA rates
//! (/v2/prime-rate, /v2/inflation).
//!
//! API documentation: https://brapi.dev/docs

mod models;

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::BrapiConfig;
use crate::errors::MarketDataError;
use crate::models::{CurrencyRate, HistoricalPrice, HistoryInterval, HistoryRange, Quote};
use crate::provider::QuoteFeed;

use models::{
    CurrencyResponse, DateValue, ErrorResponse, HistoryResponse, InflationResponse,
    NumberOrText, PrimeRateResponse, QuoteResponse, RateEntry,
};

const PROVIDER_ID: &str = "BRAPI";

/// BRAPI quote provider.
pub struct BrapiProvider {
    client: Client,
    config: BrapiConfig,
}

impl BrapiProvider {
    /// Create a new provider from an explicit configuration.
    pub fn new(config: BrapiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create a provider configured from the environment.
    pub fn from_env() -> Result<Self, MarketDataError> {
        Ok(Self::new(BrapiConfig::from_env()?))
    }

    fn quote_url(&self, tickers: &[String]) -> String {
        format!("{}/quote/{}", self.config.base_url, tickers.join(","))
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Price candles for one ticker, oldest first.
    ///
    /// An unknown ticker yields an empty list. Candles without a date or a
    /// close price are skipped.
    pub async fn fetch_history(
        &self,
        ticker: &str,
        range: HistoryRange,
        interval: HistoryInterval,
    ) -> Result<Vec<HistoricalPrice>, MarketDataError> {
        let url = self.quote_url(&[ticker.to_string()]);
        let params = [
            ("range", range.as_str()),
            ("interval", interval.as_str()),
            ("fundamental", "false"),
            ("dividends", "false"),
        ];

        let (status, body) = self.fetch(&url, &params).await?;
        if is_unknown_ticker(status, &body) {
            return Ok(Vec::new());
        }
        check_status(status)?;

        let prices = parse_history_response(&body)?;
        debug!(
            "BRAPI: fetched {} candles for {} ({}, {})",
            prices.len(),
            ticker,
            range.as_str(),
            interval.as_str()
        );
        Ok(prices)
    }

    /// Exchange rates for pairs such as `USD-BRL`.
    pub async fn fetch_currency(
        &self,
        pairs: &[String],
    ) -> Result<Vec<CurrencyRate>, MarketDataError> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let currency = pairs.join(",");
        let url = self.endpoint_url("/v2/currency");
        let (status, body) = self.fetch(&url, &[("currency", currency.as_str())]).await?;
        check_status(status)?;
        parse_currency_response(&body)
    }

    /// Current annual SELIC rate in percent; zero when BRAPI has none.
    pub async fn fetch_selic(&self) -> Result<Decimal, MarketDataError> {
        let url = self.endpoint_url("/v2/prime-rate");
        let (status, body) = self.fetch(&url, &[("country", "brazil")]).await?;
        check_status(status)?;
        parse_prime_rate_response(&body)
    }

    /// Latest IPCA inflation in percent; zero when BRAPI has none.
    pub async fn fetch_ipca(&self) -> Result<Decimal, MarketDataError> {
        let url = self.endpoint_url("/v2/inflation");
        let (status, body) = self.fetch(&url, &[("country", "brazil")]).await?;
        check_status(status)?;
        parse_inflation_response(&body)
    }

    async fn fetch(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<(StatusCode, String), MarketDataError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.query(&[("token", token.as_str())]);
        }
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl QuoteFeed for BrapiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        if tickers.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.quote_url(tickers);
        debug!("BRAPI request: {} tickers", tickers.len());

        let (status, body) = self.fetch(&url, &[]).await?;
        interpret_response(status, &body)
    }
}

/// Maps an HTTP status and body to the feed contract.
fn interpret_response(status: StatusCode, body: &str) -> Result<Vec<Quote>, MarketDataError> {
    // Unknown tickers are omitted from the result, never an error.
    if is_unknown_ticker(status, body) {
        return Ok(Vec::new());
    }
    check_status(status)?;
    parse_quote_response(body)
}

/// BRAPI answers 404 with an error body when none of the tickers is known.
fn is_unknown_ticker(status: StatusCode, body: &str) -> bool {
    if status != StatusCode::NOT_FOUND {
        return false;
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if err.error => {
            warn!(
                "BRAPI: no data for requested tickers: {}",
                err.message.unwrap_or_default()
            );
            true
        }
        _ => false,
    }
}

fn check_status(status: StatusCode) -> Result<(), MarketDataError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        });
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: "Invalid or missing API token".to_string(),
        });
    }

    if !status.is_success() {
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("HTTP {}", status.as_u16()),
        });
    }

    Ok(())
}

/// Parses a /quote response body into quotes.
///
/// Entries without a market price are dropped, like tickers the provider
/// does not know.
fn parse_quote_response(body: &str) -> Result<Vec<Quote>, MarketDataError> {
    let response: QuoteResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::InvalidResponse(format!("BRAPI quote payload: {}", e)))?;

    let mut quotes = Vec::with_capacity(response.results.len());
    for result in response.results {
        let price = match result.regular_market_price.as_ref().and_then(number_to_decimal) {
            Some(price) => price,
            None => {
                warn!("BRAPI: {} returned without a market price, skipping", result.symbol);
                continue;
            }
        };
        let change_percent = result
            .regular_market_change_percent
            .as_ref()
            .and_then(number_to_decimal)
            .unwrap_or(Decimal::ZERO);

        quotes.push(Quote {
            symbol: result.symbol,
            price,
            change_percent,
            short_name: result.short_name,
            currency: result.currency,
        });
    }

    Ok(quotes)
}

/// Candles of the first result, sorted by date ascending.
fn parse_history_response(body: &str) -> Result<Vec<HistoricalPrice>, MarketDataError> {
    let response: HistoryResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::InvalidResponse(format!("BRAPI history payload: {}", e)))?;

    let Some(result) = response.results.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut prices = Vec::with_capacity(result.historical_data_price.len());
    for (i, entry) in result.historical_data_price.into_iter().enumerate() {
        let date = match entry.date.as_ref().and_then(parse_candle_date) {
            Some(date) => date,
            None => {
                warn!("BRAPI: invalid date in {} candle {}, skipping", result.symbol, i);
                continue;
            }
        };
        let close = match entry.close.as_ref().and_then(flex_to_decimal) {
            Some(close) => close,
            None => {
                warn!("BRAPI: {} candle {} has no close price, skipping", result.symbol, i);
                continue;
            }
        };

        prices.push(HistoricalPrice {
            date,
            open: entry.open.as_ref().and_then(flex_to_decimal),
            high: entry.high.as_ref().and_then(flex_to_decimal),
            low: entry.low.as_ref().and_then(flex_to_decimal),
            close,
            volume: entry.volume.as_ref().and_then(flex_to_decimal),
            adjusted_close: entry.adjusted_close.as_ref().and_then(flex_to_decimal),
        });
    }

    prices.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(prices)
}

fn parse_currency_response(body: &str) -> Result<Vec<CurrencyRate>, MarketDataError> {
    let response: CurrencyResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::InvalidResponse(format!("BRAPI currency payload: {}", e)))?;

    let mut rates = Vec::with_capacity(response.currency.len());
    for entry in response.currency {
        let ask = match entry.ask_price.as_ref().and_then(flex_to_decimal) {
            Some(ask) => ask,
            None => {
                warn!(
                    "BRAPI: {}-{} returned without an ask price, skipping",
                    entry.from_currency, entry.to_currency
                );
                continue;
            }
        };

        rates.push(CurrencyRate {
            bid: entry.bid_price.as_ref().and_then(flex_to_decimal).unwrap_or(ask),
            change_percent: entry
                .percentage_change
                .as_ref()
                .and_then(flex_to_decimal)
                .unwrap_or(Decimal::ZERO),
            from_currency: entry.from_currency,
            to_currency: entry.to_currency,
            ask,
        });
    }

    Ok(rates)
}

fn parse_prime_rate_response(body: &str) -> Result<Decimal, MarketDataError> {
    let response: PrimeRateResponse = serde_json::from_str(body).map_err(|e| {
        MarketDataError::InvalidResponse(format!("BRAPI prime-rate payload: {}", e))
    })?;
    Ok(latest_rate(&response.prime_rate))
}

fn parse_inflation_response(body: &str) -> Result<Decimal, MarketDataError> {
    let response: InflationResponse = serde_json::from_str(body).map_err(|e| {
        MarketDataError::InvalidResponse(format!("BRAPI inflation payload: {}", e))
    })?;
    Ok(latest_rate(&response.inflation))
}

fn latest_rate(entries: &[RateEntry]) -> Decimal {
    entries
        .first()
        .and_then(|entry| entry.value.as_ref())
        .and_then(flex_to_decimal)
        .unwrap_or(Decimal::ZERO)
}

fn parse_candle_date(value: &DateValue) -> Option<DateTime<Utc>> {
    match value {
        DateValue::Epoch(seconds) => Utc.timestamp_opt(*seconds, 0).single(),
        DateValue::Text(text) => DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }),
    }
}

// Goes through the number's shortest text form, so `38.47` stays `38.47`.
// Deserializing straight into `Decimal` would use the `serde-float` path and
// carry the f64 binary error into the price.
fn number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    text_to_decimal(&n.to_string())
}

fn flex_to_decimal(value: &NumberOrText) -> Option<Decimal> {
    match value {
        NumberOrText::Number(n) => number_to_decimal(n),
        NumberOrText::Text(text) => text_to_decimal(text.trim()),
    }
}

fn text_to_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
