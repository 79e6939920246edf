//! pt-BR display formatting. Rounding to cents happens here and nowhere
//! else.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::money::Money;
use crate::window::{MonthLabelLocale, YearMonth};

const CURRENCY_PREFIX: &str = "R$";

/// Divisors and pt-BR suffixes for the compact notation.
const COMPACT_SCALES: [(i64, &str); 5] = [
    (1, ""),
    (1_000, "mil"),
    (1_000_000, "mi"),
    (1_000_000_000, "bi"),
    (1_000_000_000_000, "tri"),
];

/// Formats `value` as Brazilian reais, e.g. `R$ 1.234,56` or `-R$ 10,00`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_display(value);
    let body = format!("{} {}", CURRENCY_PREFIX, group_digits(rounded.abs()));
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Short currency text for chart axes and tiles: at most one fraction digit
/// and a magnitude suffix, e.g. `R$ 999,5`, `R$ 1,2 mil`, `R$ 3,5 mi`,
/// `-R$ 2 bi`.
pub fn format_brl_compact(value: Decimal) -> String {
    let magnitude = value.abs();
    let last = COMPACT_SCALES.len() - 1;

    let mut body = String::new();
    for (i, (divisor, suffix)) in COMPACT_SCALES.iter().enumerate() {
        let scaled = (magnitude / Decimal::from(*divisor))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        // 999,96 mil rounds up to 1 mi
        if scaled >= Decimal::ONE_THOUSAND && i < last {
            continue;
        }
        body = if suffix.is_empty() {
            format!("{} {}", CURRENCY_PREFIX, compact_digits(scaled))
        } else {
            format!("{} {} {}", CURRENCY_PREFIX, compact_digits(scaled), suffix)
        };
        if value.is_sign_negative() && !scaled.is_zero() {
            body.insert(0, '-');
        }
        break;
    }
    body
}

pub fn format_money(value: Money) -> String {
    format_brl(value.to_decimal())
}

/// Formats a percentage given in percent units (`12.345` is 12.35%).
/// Non-zero values always carry a sign: `+12,35%`, `-3,10%`, `0,00%`.
pub fn format_pct(value: Decimal) -> String {
    let rounded = round_display(value);
    let digits = group_digits(rounded.abs());
    if rounded.is_zero() {
        format!("{}%", digits)
    } else if rounded.is_sign_negative() {
        format!("-{}%", digits)
    } else {
        format!("+{}%", digits)
    }
}

/// Signed currency text plus a gain flag for coloring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainLossDisplay {
    pub text: String,
    pub is_gain: bool,
}

/// Zero counts as a gain.
pub fn format_gain_loss(value: Decimal) -> GainLossDisplay {
    let is_gain = !value.is_sign_negative() || round_display(value).is_zero();
    let text = format_brl(value.abs());
    GainLossDisplay {
        text: if is_gain {
            format!("+{}", text)
        } else {
            format!("-{}", text)
        },
        is_gain,
    }
}

/// Header of a day group: `Hoje`, `Ontem`, or `5 de jun`.
pub fn format_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Hoje".to_string();
    }
    if today.pred_opt() == Some(date) {
        return "Ontem".to_string();
    }
    format!(
        "{} de {}",
        date.day(),
        MonthLabelLocale::PtBr.short_month(YearMonth::from_date(date))
    )
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `1234567.8` -> `1.234.567,80`. Expects a non-negative value.
fn group_digits(value: Decimal) -> String {
    let fixed = format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{},{}", group_thousands(int_part), frac_part)
}

/// `1.5` -> `1,5`, `12.0` -> `12`. Expects a non-negative value.
fn compact_digits(value: Decimal) -> String {
    let text = value.normalize().to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{},{}", group_thousands(int_part), frac_part),
        None => group_thousands(&text),
    }
}

fn group_thousands(int_part: &str) -> String {
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
