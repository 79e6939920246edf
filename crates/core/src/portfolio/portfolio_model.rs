use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An investment position as recorded by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, quantity: Decimal, average_cost: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            average_cost,
            name: None,
        }
    }

    pub fn total_invested(&self) -> Decimal {
        saturating_mul(self.quantity, self.average_cost)
    }
}

/// A holding valued against the latest quote.
///
/// When no quote was returned for the ticker the position is valued at
/// cost: `current_price == average_cost`, zero gain and zero daily change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    /// Percent of `total_invested`, e.g. `20` for +20%
    pub gain_loss_pct: Decimal,
    pub daily_change_pct: Decimal,
    pub quote_missing: bool,
}

/// Portfolio-wide totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_pct: Decimal,
    pub positions_count: usize,
    pub missing_quotes_count: usize,
}

impl PortfolioSummary {
    pub fn from_positions(positions: &[PositionView]) -> Self {
        let total_invested = positions
            .iter()
            .fold(Decimal::ZERO, |acc, p| saturating_add(acc, p.total_invested));
        let current_value = positions
            .iter()
            .fold(Decimal::ZERO, |acc, p| saturating_add(acc, p.current_value));
        let gain_loss = saturating_sub(current_value, total_invested);

        Self {
            total_invested,
            current_value,
            gain_loss,
            gain_loss_pct: percent_of(gain_loss, total_invested),
            positions_count: positions.len(),
            missing_quotes_count: positions.iter().filter(|p| p.quote_missing).count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub positions: Vec<PositionView>,
    pub summary: PortfolioSummary,
}

impl PortfolioValuation {
    pub fn from_positions(positions: Vec<PositionView>) -> Self {
        let summary = PortfolioSummary::from_positions(&positions);
        Self { positions, summary }
    }
}

/// `part / whole * 100`; zero when `whole` is zero. Saturates instead of
/// overflowing.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    let negative = part.is_sign_negative() != whole.is_sign_negative() && !part.is_zero();
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| saturated(negative))
}

/// `a * b`, saturating at the `Decimal` bounds.
pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    let negative = a.is_sign_negative() != b.is_sign_negative();
    a.checked_mul(b).unwrap_or_else(|| saturated(negative))
}

/// `a - b`, saturating at the `Decimal` bounds.
pub(crate) fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturated(b.is_sign_positive()))
}

/// `a + b`, saturating at the `Decimal` bounds.
pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative()))
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
