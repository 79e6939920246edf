//! Holdings valued against live quotes.

mod portfolio_model;
mod portfolio_service;
mod valuator;


pub use portfolio_model::{Holding, PortfolioSummary, PortfolioValuation, PositionView};
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use valuator::valuate;
