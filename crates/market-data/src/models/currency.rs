use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate for a currency pair such as `USD-BRL`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    pub from_currency: String,
    pub to_currency: String,
    /// Selling price, in `to_currency` per unit of `from_currency`
    pub ask: Decimal,
    pub bid: Decimal,
    /// Daily change in percent
    pub change_percent: Decimal,
}
