use std::str::FromStr;

use rust_decimal::Decimal;

use crate::constants::{BUDGET_WARNING_THRESHOLD, DEFAULT_TOP_CATEGORIES, DEFAULT_TREND_MONTHS};
use crate::errors::{Error, Result};
use crate::window::MonthLabelLocale;

/// Tunables of the rollup engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Rows kept by the category ranking
    pub top_categories: usize,
    /// Months in the default trend series
    pub trend_months: u32,
    /// Raw utilization above which a budget row is flagged as warning
    pub warning_threshold: Decimal,
    pub locale: MonthLabelLocale,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_categories: DEFAULT_TOP_CATEGORIES,
            trend_months: DEFAULT_TREND_MONTHS,
            warning_threshold: BUDGET_WARNING_THRESHOLD,
            locale: MonthLabelLocale::default(),
        }
    }
}

impl EngineConfig {
    /// Reads the configuration from the process environment (and a `.env`
    /// file when present).
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HEARTH_TOP_CATEGORIES` | `8` |
    /// | `HEARTH_TREND_MONTHS` | `6` |
    /// | `HEARTH_BUDGET_WARNING_THRESHOLD` | `0.70` |
    /// | `HEARTH_LOCALE` | `pt-BR` |
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let top_categories =
            parse_or("HEARTH_TOP_CATEGORIES", &lookup, defaults.top_categories)?;
        let trend_months = parse_or("HEARTH_TREND_MONTHS", &lookup, defaults.trend_months)?;

        let warning_threshold = parse_or(
            "HEARTH_BUDGET_WARNING_THRESHOLD",
            &lookup,
            defaults.warning_threshold,
        )?;
        if warning_threshold.is_sign_negative() || warning_threshold > Decimal::ONE {
            return Err(Error::Validation(format!(
                "HEARTH_BUDGET_WARNING_THRESHOLD must be between 0 and 1, got {}",
                warning_threshold
            )));
        }

        let locale = match lookup("HEARTH_LOCALE") {
            Some(tag) => MonthLabelLocale::from_tag(&tag).ok_or_else(|| {
                Error::Validation(format!("unsupported HEARTH_LOCALE '{}'", tag))
            })?,
            None => defaults.locale,
        };

        Ok(Self {
            top_categories,
            trend_months,
            warning_threshold,
            locale,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| Error::Validation(format!("invalid value for {}: '{}'", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.top_categories, 8);
        assert_eq!(config.trend_months, 6);
        assert_eq!(config.warning_threshold, dec!(0.70));
        assert_eq!(config.locale, MonthLabelLocale::PtBr);
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("HEARTH_TOP_CATEGORIES", "5"),
            ("HEARTH_TREND_MONTHS", "12"),
            ("HEARTH_BUDGET_WARNING_THRESHOLD", "0.8"),
            ("HEARTH_LOCALE", "en"),
        ]))
        .unwrap();
        assert_eq!(config.top_categories, 5);
        assert_eq!(config.trend_months, 12);
        assert_eq!(config.warning_threshold, dec!(0.8));
        assert_eq!(config.locale, MonthLabelLocale::En);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(EngineConfig::from_lookup(lookup_from(&[("HEARTH_TREND_MONTHS", "six")])).is_err());
        assert!(
            EngineConfig::from_lookup(lookup_from(&[("HEARTH_BUDGET_WARNING_THRESHOLD", "1.5")]))
                .is_err()
        );
        assert!(EngineConfig::from_lookup(lookup_from(&[("HEARTH_LOCALE", "xx")])).is_err());
    }
}
