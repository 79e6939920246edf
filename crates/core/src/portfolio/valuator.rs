use std::collections::HashMap;

use hearth_market_data::Quote;
use rust_decimal::Decimal;

use super::portfolio_model::{percent_of, saturating_mul, saturating_sub, Holding, PositionView};

/// Values every holding against `quotes`.
///
/// Quotes match by exact, case-sensitive `symbol == ticker`; with duplicate
/// symbols the first one wins. Holdings without a quote fall back to their
/// average cost. Output order follows `holdings`.
pub fn valuate(holdings: &[Holding], quotes: &[Quote]) -> Vec<PositionView> {
    let mut by_symbol: HashMap<&str, &Quote> = HashMap::with_capacity(quotes.len());
    for quote in quotes {
        by_symbol.entry(quote.symbol.as_str()).or_insert(quote);
    }

    holdings
        .iter()
        .map(|holding| value_position(holding, by_symbol.get(holding.ticker.as_str()).copied()))
        .collect()
}

fn value_position(holding: &Holding, quote: Option<&Quote>) -> PositionView {
    let current_price = quote.map_or(holding.average_cost, |q| q.price);
    let total_invested = holding.total_invested();
    let current_value = saturating_mul(holding.quantity, current_price);
    let gain_loss = saturating_sub(current_value, total_invested);

    let name = quote
        .and_then(|q| q.short_name.clone())
        .or_else(|| holding.name.clone())
        .unwrap_or_else(|| holding.ticker.clone());

    PositionView {
        ticker: holding.ticker.clone(),
        name,
        quantity: holding.quantity,
        average_cost: holding.average_cost,
        current_price,
        total_invested,
        current_value,
        gain_loss,
        gain_loss_pct: percent_of(gain_loss, total_invested),
        daily_change_pct: quote.map_or(Decimal::ZERO, |q| q.change_percent),
        quote_missing: quote.is_none(),
    }
}
