//! Calendar helpers shared by the resolvers.
//!
//! Every helper returns `Option` so that arithmetic at the edges of chrono's
//! supported range surfaces as `None` instead of a panic. Month and year
//! boundaries are always derived from the first day of the following period,
//! never from hardcoded day counts, so leap years fall out naturally.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for the week families (`this_week`, `next_2_weeks`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// US/Canada convention (Sunday = day 0 of the week).
    #[default]
    Sunday,
    /// ISO 8601 standard (Monday = day 0 of the week).
    Monday,
}

/// How many days `weekday` is from the week-start day.
pub fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> Option<NaiveDate> {
    shift_days(date, -days_from_week_start(date.weekday(), week_start))
}

/// Move `date` by a signed number of days.
pub fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Advance the month of `date` by `delta` months and return the first of that month.
///
/// Uses floor division so negative deltas roll back across year boundaries:
/// `(2014-01, -1)` lands on `2013-12`, not on month 0.
pub fn add_months(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let month0 = i64::from(date.month0()).checked_add(delta)?;
    let month = month0.rem_euclid(12) + 1;
    let year = i64::from(date.year()).checked_add(month0.div_euclid(12))?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month as u32, 1)
}

/// Last day of the month containing `date`: first day of the next month minus one.
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    add_months(date, 1)?.pred_opt()
}

/// January 1 of `date`'s year shifted by `delta` years.
pub fn start_of_year(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let year = i64::from(date.year()).checked_add(delta)?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)
}

/// December 31 of `date`'s year shifted by `delta` years.
pub fn end_of_year(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let year = i64::from(date.year()).checked_add(delta)?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 12, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_sunday() {
        // 2014-03-18 is a Tuesday
        assert_eq!(
            start_of_week(date(2014, 3, 18), WeekStartDay::Sunday),
            Some(date(2014, 3, 16))
        );
        // A Sunday is its own week start
        assert_eq!(
            start_of_week(date(2014, 3, 16), WeekStartDay::Sunday),
            Some(date(2014, 3, 16))
        );
        // Saturday is the last day of the week
        assert_eq!(
            start_of_week(date(2014, 3, 22), WeekStartDay::Sunday),
            Some(date(2014, 3, 16))
        );
    }

    #[test]
    fn test_start_of_week_monday() {
        assert_eq!(
            start_of_week(date(2014, 3, 18), WeekStartDay::Monday),
            Some(date(2014, 3, 17))
        );
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(
            start_of_week(date(2014, 3, 16), WeekStartDay::Monday),
            Some(date(2014, 3, 10))
        );
    }

    #[test]
    fn test_add_months_forward_across_year() {
        assert_eq!(add_months(date(2014, 12, 1), 1), Some(date(2015, 1, 1)));
        assert_eq!(add_months(date(2014, 3, 1), 37), Some(date(2017, 4, 1)));
    }

    #[test]
    fn test_add_months_backward_uses_floor_division() {
        assert_eq!(add_months(date(2014, 1, 1), -1), Some(date(2013, 12, 1)));
        assert_eq!(add_months(date(2014, 1, 1), -12), Some(date(2013, 1, 1)));
        assert_eq!(add_months(date(2014, 1, 1), -13), Some(date(2012, 12, 1)));
    }

    #[test]
    fn test_add_months_ignores_day_of_month() {
        assert_eq!(add_months(date(2014, 1, 31), 1), Some(date(2014, 2, 1)));
    }

    #[test]
    fn test_last_of_month_leap_years() {
        assert_eq!(last_of_month(date(2024, 2, 10)), Some(date(2024, 2, 29)));
        assert_eq!(last_of_month(date(2023, 2, 10)), Some(date(2023, 2, 28)));
        assert_eq!(last_of_month(date(1900, 2, 1)), Some(date(1900, 2, 28)));
        assert_eq!(last_of_month(date(2000, 2, 1)), Some(date(2000, 2, 29)));
        assert_eq!(last_of_month(date(2014, 12, 12)), Some(date(2014, 12, 31)));
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(start_of_year(date(2014, 3, 18), 0), Some(date(2014, 1, 1)));
        assert_eq!(end_of_year(date(2014, 3, 18), 2), Some(date(2016, 12, 31)));
        assert_eq!(start_of_year(date(2014, 3, 18), -1), Some(date(2013, 1, 1)));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(shift_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
        assert_eq!(end_of_year(date(2014, 1, 1), i64::MAX), None);
    }

    #[test]
    fn test_week_start_serde_lowercase() {
        let json = serde_json::to_string(&WeekStartDay::Monday).unwrap();
        assert_eq!(json, "\"monday\"");
        let parsed: WeekStartDay = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(parsed, WeekStartDay::Sunday);
    }
}
