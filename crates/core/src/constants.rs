use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minor units per currency unit (cents)
pub const MINOR_UNITS_SCALE: u32 = 2;

/// Number of categories kept by the category ranking
pub const DEFAULT_TOP_CATEGORIES: usize = 8;

/// Number of months in the default trend series
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Raw utilization above which a budget row enters the warning tier
pub const BUDGET_WARNING_THRESHOLD: Decimal = dec!(0.70);

/// Label used when a transaction references an unknown category
pub const UNCATEGORIZED_LABEL: &str = "Outros";

pub const UNCATEGORIZED_COLOR: &str = "#6B7280";

pub const UNCATEGORIZED_ICON: &str = "📦";
