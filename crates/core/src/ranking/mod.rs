//! Top-K category ranking with percentage shares.

mod ranker;
mod ranking_model;
mod ranking_service;


pub use ranker::rank;
pub use ranking_model::{CategorySpending, RankedCategory};
pub use ranking_service::{CategoryRankingService, CategoryRankingServiceTrait};
