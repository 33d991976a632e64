//! Calendar-arithmetic rules, one function per keyword family and direction.
//!
//! Every resolver shares the [`Resolver`] signature: the reference date, the
//! count `n` (1 for literal keywords such as `next_month`), and the week-start
//! convention. A resolver returns `None` when the arithmetic leaves chrono's
//! supported calendar or when `n` is zero, since both would otherwise yield an
//! invalid or inverted range.
//!
//! | family | `this_` | `next_` | `previous_` |
//! |---|---|---|---|
//! | days   | today and the following n-1 days | the n days after today | the n days before today |
//! | weeks  | this week and the following n-1 | the n weeks after this one | the n weeks before this one |
//! | months | this month and the following n-1 | the n months after this one | the n months before this one |
//! | years  | this year and the following n-1 | the n years after this one | the n years before this one |

use chrono::NaiveDate;

use crate::calendar::{
    add_months, end_of_year, first_of_month, shift_days, start_of_week, start_of_year,
    WeekStartDay,
};
use crate::range::DateRange;

/// Signature shared by every rule in the pattern registry.
pub type Resolver = fn(NaiveDate, u32, WeekStartDay) -> Option<DateRange>;

// ── days ────────────────────────────────────────────────────────────────────

pub fn this_days(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(d, shift_days(d, i64::from(n) - 1)?)
}

pub fn next_days(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(shift_days(d, 1)?, shift_days(d, i64::from(n))?)
}

pub fn previous_days(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(shift_days(d, -i64::from(n))?, shift_days(d, -1)?)
}

// ── weeks ───────────────────────────────────────────────────────────────────

pub fn this_weeks(d: NaiveDate, n: u32, ws: WeekStartDay) -> Option<DateRange> {
    let start = start_of_week(d, ws)?;
    DateRange::new(start, shift_days(start, 7 * i64::from(n) - 1)?)
}

pub fn next_weeks(d: NaiveDate, n: u32, ws: WeekStartDay) -> Option<DateRange> {
    let start = shift_days(start_of_week(d, ws)?, 7)?;
    DateRange::new(start, shift_days(start, 7 * i64::from(n) - 1)?)
}

pub fn previous_weeks(d: NaiveDate, n: u32, ws: WeekStartDay) -> Option<DateRange> {
    let this_start = start_of_week(d, ws)?;
    DateRange::new(
        shift_days(this_start, -7 * i64::from(n))?,
        shift_days(this_start, -1)?,
    )
}

// ── months ──────────────────────────────────────────────────────────────────

pub fn this_months(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    let start = first_of_month(d)?;
    DateRange::new(start, add_months(start, i64::from(n))?.pred_opt()?)
}

pub fn next_months(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    let this_start = first_of_month(d)?;
    DateRange::new(
        add_months(this_start, 1)?,
        add_months(this_start, i64::from(n) + 1)?.pred_opt()?,
    )
}

pub fn previous_months(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    let this_start = first_of_month(d)?;
    DateRange::new(
        add_months(this_start, -i64::from(n))?,
        this_start.pred_opt()?,
    )
}

// ── years ───────────────────────────────────────────────────────────────────

pub fn this_years(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(start_of_year(d, 0)?, end_of_year(d, i64::from(n) - 1)?)
}

pub fn next_years(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(start_of_year(d, 1)?, end_of_year(d, i64::from(n))?)
}

pub fn previous_years(d: NaiveDate, n: u32, _ws: WeekStartDay) -> Option<DateRange> {
    DateRange::new(start_of_year(d, -i64::from(n))?, end_of_year(d, -1)?)
}
