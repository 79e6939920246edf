use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, Result};

/// A calendar month, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(format!("month out of range: {}", month)));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(Error::Validation(format!("year out of range: {}", year)));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Shifts by `months` (negative goes back in time).
    pub fn offset(self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn pred(self) -> Self {
        self.offset(-1)
    }

    pub fn succ(self) -> Self {
        self.offset(1)
    }

    /// `count` consecutive months ending at `self`, oldest first.
    pub fn trailing(self, count: u32) -> Vec<YearMonth> {
        (0..count as i32)
            .rev()
            .map(|back| self.offset(-back))
            .collect()
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        self.succ()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| Error::Validation(format!("expected YYYY-MM, got '{}'", s)))?;
        let year: i32 = year
            .parse()
            .map_err(|_| Error::Validation(format!("invalid year in '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| Error::Validation(format!("invalid month in '{}'", s)))?;
        YearMonth::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Aggregation period: from `start` 00:00 through the whole of `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    start: NaiveDate,
    end: NaiveDate,
}

impl WindowSpec {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::Validation(format!(
                "window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The full calendar month.
    pub fn month(month: YearMonth) -> Self {
        Self {
            start: month.first_day(),
            end: month.last_day(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// First instant inside the window.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last representable instant inside the window (end-of-day of `end`).
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.end.and_time(end_of_day())
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let date = timestamp.date();
        date >= self.start && date <= self.end
    }

    /// True when `next` starts the day after `self` ends.
    pub fn is_followed_by(&self, next: &WindowSpec) -> bool {
        self.end.succ_opt() == Some(next.start)
    }

    /// Windows sorted, non-overlapping and without gaps.
    pub fn is_contiguous(windows: &[WindowSpec]) -> bool {
        windows.windows(2).all(|pair| pair[0].is_followed_by(&pair[1]))
    }

    /// Single window covering contiguous `windows`; `None` if they are
    /// empty, overlap or leave a gap.
    pub fn union_contiguous(windows: &[WindowSpec]) -> Option<WindowSpec> {
        let first = windows.first()?;
        let last = windows.last()?;
        if !Self::is_contiguous(windows) {
            return None;
        }
        Some(WindowSpec {
            start: first.start,
            end: last.end,
        })
    }

    /// Union of the `count` calendar months ending at `anchor`.
    pub fn trailing_months(anchor: YearMonth, count: u32) -> Option<WindowSpec> {
        let windows: Vec<WindowSpec> = anchor
            .trailing(count)
            .into_iter()
            .map(WindowSpec::month)
            .collect();
        Self::union_contiguous(&windows)
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}
