//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all quote feed operations
//! - [`RetryClass`]: Classification telling callers whether a retry could help

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching quotes.
///
/// Any of these fails the whole batched call. A ticker that the provider
/// simply does not know is NOT an error; it is omitted from the result.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-success status, bad token, ...).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered but the payload could not be understood.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider configuration is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// The engine itself never retries; the classification only lets the
    /// caller decide what to tell the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "BRAPI".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::Config("missing base url".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => {
                RetryClass::WithBackoff
            }
            Self::ProviderError { .. } | Self::InvalidResponse(_) | Self::Config(_) => {
                RetryClass::Never
            }
        }
    }
}
