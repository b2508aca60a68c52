use std::fmt::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PickerError;

/// Selection mode. Basic mode applies no validity rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
}

impl FromStr for Mode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Mode::Basic),
            "advanced" => Ok(Mode::Advanced),
            _ => Err(PickerError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => f.write_str("basic"),
            Mode::Advanced => f.write_str("advanced"),
        }
    }
}

/// Set of weekday indices (Sunday = 0 .. Saturday = 6) barred in advanced mode.
///
/// Parsed from a comma-separated string such as `"0,6"`. Entries that are not
/// a weekday index are dropped and never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ExcludedWeekdays {
    mask: u8,
}

impl ExcludedWeekdays {
    pub const NONE: Self = Self { mask: 0 };

    pub fn parse(s: &str) -> Self {
        let mut mask = 0u8;
        for entry in s.split(',').map(str::trim) {
            if entry.is_empty() {
                continue;
            }
            match entry.parse::<u8>() {
                Ok(idx) if idx < 7 => mask |= 1 << idx,
                _ => warn!("ignoring invalid excluded weekday entry {entry:?}"),
            }
        }
        Self { mask }
    }

    pub fn contains(&self, weekday_index: u8) -> bool {
        weekday_index < 7 && self.mask & (1 << weekday_index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7u8).filter(|i| self.contains(*i))
    }
}

impl Default for ExcludedWeekdays {
    /// Sunday and Saturday.
    fn default() -> Self {
        Self::parse("0,6")
    }
}

impl From<String> for ExcludedWeekdays {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ExcludedWeekdays> for String {
    fn from(days: ExcludedWeekdays) -> Self {
        days.to_string()
    }
}

impl fmt::Display for ExcludedWeekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for idx in self.indices() {
            if !first {
                f.write_char(',')?;
            }
            write!(f, "{idx}")?;
            first = false;
        }
        Ok(())
    }
}

/// A strftime pattern used to render dates, validated up front so that
/// formatting a date can never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    /// US-style `month/day/year` without zero padding, e.g. `6/1/2024`.
    pub const US: &'static str = "%-m/%-d/%Y";

    pub fn new(pattern: impl Into<String>) -> Result<Self, PickerError> {
        let pattern = pattern.into();
        let mut probe = String::new();
        if write!(probe, "{}", NaiveDate::default().format(&pattern)).is_err() {
            return Err(PickerError::InvalidDateFormat(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(Self::US.to_string())
    }
}

impl TryFrom<String> for DateFormat {
    type Error = PickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DateFormat> for String {
    fn from(f: DateFormat) -> Self {
        f.0
    }
}

/// Host-supplied picker options. Read-only to the selection logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub mode: Mode,
    /// Maximum span in days between start and end (advanced mode).
    pub max_date_range: u32,
    pub exclude_days: ExcludedWeekdays,
    pub disable_past_dates: bool,
    pub date_format: DateFormat,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Basic,
            max_date_range: 30,
            exclude_days: ExcludedWeekdays::default(),
            disable_past_dates: false,
            date_format: DateFormat::default(),
        }
    }
}

impl PickerConfig {
    /// Advanced-mode defaults.
    pub fn advanced() -> Self {
        Self {
            mode: Mode::Advanced,
            ..Self::default()
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
