//! Time windows used to scope aggregation.
//!
//! Calendar months are the common case; multi-month windows are unions of
//! contiguous months.

mod month_label;
mod window_model;

pub use month_label::MonthLabelLocale;
pub use window_model::{WindowSpec, YearMonth};
