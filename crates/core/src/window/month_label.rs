use serde::{Deserialize, Serialize};

use super::YearMonth;

const PT_BR_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Locale used for short month labels on trend charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthLabelLocale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl MonthLabelLocale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Some(Self::PtBr),
            "en" | "en-us" | "en_us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }

    pub fn short_month(self, month: YearMonth) -> &'static str {
        let index = (month.month() - 1) as usize;
        match self {
            Self::PtBr => PT_BR_SHORT[index],
            Self::En => EN_SHORT[index],
        }
    }
}
