use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One slot of a category ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCategory {
    pub category_id: String,
    pub value: Money,
    /// Fraction of the ranked total, in `[0, 1]`
    pub share: Decimal,
}

/// A ranked category decorated for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub value: Money,
    pub share: Decimal,
}
