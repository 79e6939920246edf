//! Quote feed abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteFeed` trait that all providers implement
//! - The BRAPI provider used in production
//!
//! Feeds are passed explicitly to the services that need them
//! (`Arc<dyn QuoteFeed>`), so tests can substitute a double.

mod traits;

pub mod brapi;

pub use traits::QuoteFeed;
