pub mod format;

pub use format::{
    format_brl, format_brl_compact, format_day_label, format_gain_loss, format_money, format_pct,
    GainLossDisplay,
};
