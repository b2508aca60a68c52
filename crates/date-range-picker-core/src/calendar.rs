use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::PickerError;

/// Column headers for a Sunday-first calendar grid.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday index of a date with Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Returns the calendar cells for the month containing `month`.
///
/// The sequence starts on the Sunday on or before the 1st (so index 0 always
/// sits in the Sunday column) and ends on the last day of the month. Leading
/// cells belong to the previous month; there is no trailing pad.
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    let first = month.with_day(1).unwrap_or(month);
    let pad = u64::from(weekday_index(first));

    let leading = (1..=pad)
        .rev()
        .filter_map(|n| first.checked_sub_days(Days::new(n)));
    let in_month = first
        .iter_days()
        .take_while(|d| d.year() == first.year() && d.month() == first.month());

    leading.chain(in_month).collect()
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .count() as u32
}

/// Shift a date by a signed number of months. The day of month is kept,
/// clamped to the end of the target month. Returns `None` when the result
/// is outside chrono's representable range.
pub fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Absolute number of days between two instants, rounding any partial day up.
pub fn date_difference(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let ms = (b - a).num_milliseconds().unsigned_abs();
    ms.div_ceil(MS_PER_DAY) as i64
}

/// Whole days between two calendar dates.
pub fn date_span(a: NaiveDate, b: NaiveDate) -> i64 {
    date_difference(a.and_time(NaiveTime::MIN), b.and_time(NaiveTime::MIN))
}

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Parse a `YYYY-MM` string into the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate, PickerError> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| PickerError::InvalidMonth(s.to_string()))
}
