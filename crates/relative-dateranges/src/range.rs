//! The inclusive date range returned by every resolver.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive `(start, end)` pair of calendar dates with `start <= end`.
///
/// Dates serialize as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeFields")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct RangeFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RangeFields> for DateRange {
    type Error = String;

    fn try_from(fields: RangeFields) -> Result<Self, Self::Error> {
        Self::new(fields.start, fields.end)
            .ok_or_else(|| format!("end {} is before start {}", fields.end, fields.start))
    }
}

impl DateRange {
    /// Build a range, or `None` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A single-day range.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn into_tuple(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }
}

impl From<DateRange> for (NaiveDate, NaiveDate) {
    fn from(range: DateRange) -> Self {
        range.into_tuple()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
