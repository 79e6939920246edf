//! Core error types for the Hearth engine.
//!
//! Only the fetch stage can fail. Computation functions are pure and return
//! plain values; empty inputs, zero budgets and missing quotes are resolved
//! by explicit zero-guards and fallbacks, never by errors.

use hearth_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A ledger accessor call failed (storage or transport).
    #[error("Ledger query failed: {0}")]
    Ledger(#[from] LedgerError),

    /// The quote feed call failed as a whole.
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for ledger accessor implementations.
///
/// Accessors convert their backend errors (SQL, HTTP, ...) into these
/// string-carrying variants so the engine stays backend-agnostic.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A query reached the backend and failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The backend could not be reached at all.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    /// Short human-readable message for the boundary that displays errors.
    pub fn user_message(&self) -> String {
        match self {
            Error::Ledger(LedgerError::Unavailable(_)) => {
                "Sem conexão com os dados financeiros. Tente novamente.".to_string()
            }
            Error::Ledger(LedgerError::QueryFailed(_)) => {
                "Erro ao carregar os dados financeiros.".to_string()
            }
            Error::MarketData(e) if e.retry_class().is_transient() => {
                "Cotações indisponíveis no momento. Tente novamente em instantes.".to_string()
            }
            Error::MarketData(_) => "Erro ao buscar cotações.".to_string(),
            Error::Validation(msg) => format!("Dados inválidos: {}", msg),
            Error::Unexpected(_) => "Erro inesperado.".to_string(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
