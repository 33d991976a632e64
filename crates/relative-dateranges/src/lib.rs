//! # relative-dateranges
//!
//! Resolve relative date-range keywords into concrete, inclusive calendar
//! date ranges.
//!
//! Keywords come from a fixed grammar: `today`, `tomorrow`, `yesterday`,
//! `{this,next,previous}_{day,week,month,year}` and the counted forms
//! `{this,next,previous}_<n>_{days,weeks,months,years}` with `n >= 1`.
//! Every range is computed from a reference date with plain calendar
//! arithmetic; there is no timezone handling and no I/O.
//!
//! ## Modules
//!
//! - [`registry`]: Ordered keyword table and the first-match dispatcher
//! - [`resolver`]: Calendar-arithmetic rules for each keyword family
//! - [`calendar`]: Week start, month advance, and year boundary helpers
//! - [`range`]: The inclusive [`DateRange`] value type
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use relative_dateranges::resolve_range;
//!
//! let tuesday = NaiveDate::from_ymd_opt(2014, 3, 18).unwrap();
//! let range = resolve_range("this_week", Some(tuesday)).unwrap();
//! assert_eq!(range.to_string(), "2014-03-16..2014-03-22");
//! ```

pub mod calendar;
pub mod error;
pub mod range;
pub mod registry;
pub mod resolver;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub use calendar::WeekStartDay;
pub use error::{RangeError, Result};
pub use range::DateRange;
pub use registry::{standard_registry, Capture, Matcher, PatternEntry, Registry};

/// Options for [`resolve_range_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Which day starts the week for the week families. Defaults to Sunday.
    pub week_start: WeekStartDay,
}

/// Resolve a keyword into an inclusive date range with Sunday-start weeks.
///
/// # Arguments
///
/// * `input`: A keyword such as `"today"`, `"next_week"` or `"previous_3_months"`
/// * `reference`: The anchor date. `None` uses today's date from the system
///   clock's local calendar, with no timezone conversion.
///
/// # Errors
///
/// Returns [`RangeError::Parse`] if the input is not a known keyword,
/// [`RangeError::InvalidCount`] if a counted keyword uses `n = 0`, or
/// [`RangeError::OutOfRange`] if the range cannot be represented.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use relative_dateranges::resolve_range;
///
/// let reference = NaiveDate::from_ymd_opt(2014, 12, 31).unwrap();
/// let range = resolve_range("next_month", Some(reference)).unwrap();
/// assert_eq!(range.start().to_string(), "2015-01-01");
/// assert_eq!(range.end().to_string(), "2015-01-31");
/// ```
pub fn resolve_range(input: &str, reference: Option<NaiveDate>) -> Result<DateRange> {
    resolve_range_with_options(input, reference, &ResolveOptions::default())
}

/// Resolve a keyword into an inclusive date range with options.
///
/// # Errors
///
/// Same as [`resolve_range`].
pub fn resolve_range_with_options(
    input: &str,
    reference: Option<NaiveDate>,
    options: &ResolveOptions,
) -> Result<DateRange> {
    let reference = reference.unwrap_or_else(|| {
        let today = Local::now().date_naive();
        tracing::trace!(%today, "no reference date given, using system date");
        today
    });
    standard_registry().resolve(input, reference, options)
}

/// Parse a `YYYY-MM-DD` date, the interop form used for reference dates.
///
/// # Errors
///
/// Returns [`RangeError::InvalidDate`] if the string is not a valid calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RangeError::InvalidDate(format!("'{s}': {e}")))
}
