use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::calendar::weekday_index;
use crate::config::{Mode, PickerConfig};

/// Why a day cannot be picked in advanced mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// Before the past-date cutoff.
    PastDate,
    /// Falls on one of the excluded weekdays.
    ExcludedWeekday(Weekday),
    /// Outside `[start, start + max_date_range]` once a start is chosen.
    OutsideRange,
}

impl std::fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisabledReason::PastDate => f.write_str("date is in the past"),
            DisabledReason::ExcludedWeekday(wd) => write!(f, "{wd} is excluded"),
            DisabledReason::OutsideRange => f.write_str("outside the allowed range"),
        }
    }
}

/// Evaluate the advanced-mode rules for `day`, returning the first one that
/// disables it. Basic mode never disables a day.
///
/// The past-date cutoff is `now - 1 day` compared against the start of `day`,
/// so during the day every earlier date is blocked and today stays open. At
/// exactly midnight yesterday is still selectable.
pub fn disabled_reason(
    config: &PickerConfig,
    start: Option<NaiveDate>,
    now: NaiveDateTime,
    day: NaiveDate,
) -> Option<DisabledReason> {
    if config.mode == Mode::Basic {
        return None;
    }

    if config.disable_past_dates && is_before_cutoff(day, now) {
        return Some(DisabledReason::PastDate);
    }

    if config.exclude_days.contains(weekday_index(day)) {
        return Some(DisabledReason::ExcludedWeekday(day.weekday()));
    }

    if let Some(start) = start {
        if !within_window(day, start, config.max_date_range) {
            return Some(DisabledReason::OutsideRange);
        }
    }

    None
}

fn is_before_cutoff(day: NaiveDate, now: NaiveDateTime) -> bool {
    match now.checked_sub_days(Days::new(1)) {
        Some(cutoff) => day.and_time(NaiveTime::MIN) < cutoff,
        None => false,
    }
}

fn within_window(day: NaiveDate, start: NaiveDate, max_days: u32) -> bool {
    if day < start {
        return false;
    }
    match start.checked_add_days(Days::new(u64::from(max_days))) {
        Some(limit) => day <= limit,
        None => true,
    }
}
