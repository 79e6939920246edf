//! Hearth Core - Financial rollup and portfolio valuation engine.
//!
//! This crate turns raw ledger records (expense transactions, revenues,
//! budget targets, investment holdings) into the derived figures a finance
//! dashboard displays: monthly totals, budget utilization, category
//! rankings, multi-month trends and live portfolio gain/loss.
//!
//! Storage and transport are external. The engine only depends on the
//! [`ledger::LedgerAccessorTrait`] contract and on a
//! [`hearth_market_data::QuoteFeed`], both injected at construction.
//! All computation functions are pure; only the fetch stage can fail.

pub mod aggregation;
pub mod budget;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod portfolio;
pub mod ranking;
pub mod refresh;
pub mod summary;
pub mod trend;
pub mod utils;
pub mod window;

pub use config::EngineConfig;
pub use money::Money;
pub use window::{MonthLabelLocale, WindowSpec, YearMonth};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
