//! Localized calendar date picker engine.
//!
//! The crate computes the month grid a date picker shows (padded to whole
//! weeks and aligned to the locale's first day of week), classifies every
//! day in it, and drives the open/closed interaction state of the picker.
//! Rendering is left to the host: [`CalendarController::render`] returns
//! plain view snapshots carrying the text and accessibility attributes a
//! front end needs.

mod config;
mod consts;
mod controller;
mod day;
mod format;
mod locale;
mod month;
mod range;
mod types;
mod view;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use controller::{
    CalendarController, Event, Key, OutsidePointerHost, PickerState, PointerTarget, Response,
};
pub use day::{Bounds, DayDescriptor, classify};
pub use format::format_date;
pub use locale::{DayNameStyle, LocaleProfile, UiTexts, resolve};
pub use month::ViewMonth;
pub use range::{DateRange, Days, compute_range, enumerate_days};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use view::{DayCell, FieldView, GridView, HeaderView, PickerView, SelectOption};

use derive_more::Display;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use types::{civil_from_days, days_from_civil};

/// A concrete calendar day (year, month, day-of-month) with no time of day.
///
/// Equality and ordering are calendar-day equality and chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid weekday index: {_0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[display(
        fmt = "Year {} cannot be displayed (must be {}-{})",
        "_0",
        MIN_VIEW_YEAR,
        MAX_VIEW_YEAR
    )]
    YearOutsideView(u16),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// 1970-01-01, used when the system clock cannot be read.
    pub const UNIX_EPOCH: Self = Self {
        year: Year::saturating(1970),
        month: Month::JANUARY,
        day: Day::FIRST,
    };

    /// Creates a date from its components, validating each against the
    /// Gregorian calendar.
    ///
    /// # Errors
    /// Returns the first invalid component as a [`DateError`].
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from already validated year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// The current date in UTC according to the system clock.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let days = i64::try_from(secs / 86_400).unwrap_or(0);
        Self::from_days_since_epoch(days).unwrap_or(Self::UNIX_EPOCH)
    }

    /// The date `days` days after 1970-01-01 (negative values go back).
    /// Returns `None` outside the supported years.
    pub fn from_days_since_epoch(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(days)?;
        Self::new(year, month, day).ok()
    }

    /// Days elapsed since 1970-01-01.
    pub const fn days_since_epoch(self) -> i64 {
        days_from_civil(self.year.get(), self.month.get(), self.day.get())
    }

    pub const fn year(self) -> Year {
        self.year
    }

    pub const fn month(self) -> Month {
        self.month
    }

    pub const fn day(self) -> Day {
        self.day
    }

    pub const fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday.
        let index = (self.days_since_epoch() + 4).rem_euclid(DAYS_PER_WEEK as i64);
        Weekday::from_index(index as u8)
    }

    /// The following calendar day, or `None` after 9999-12-31.
    pub fn succ(self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day < days_in_month(year, month) {
            return Self::new(year, month, day + 1).ok();
        }
        if month == DECEMBER {
            if year >= MAX_YEAR {
                return None;
            }
            return Self::new(year + 1, JANUARY, MIN_DAY).ok();
        }
        Self::new(year, month + 1, MIN_DAY).ok()
    }

    /// The preceding calendar day, or `None` before 0001-01-01.
    pub fn pred(self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day > MIN_DAY {
            return Self::new(year, month, day - 1).ok();
        }
        if month == JANUARY {
            if year <= MIN_YEAR {
                return None;
            }
            return Self::new(year - 1, DECEMBER, days_in_month(year - 1, DECEMBER)).ok();
        }
        Self::new(year, month - 1, days_in_month(year, month - 1)).ok()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

/// Strict ISO 8601 `YYYY-MM-DD`, used for configuration and serde; this is
/// not a free-text input parser.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year = Self::parse_component::<u16>(year)?;
        let month = Self::parse_component::<u8>(month)?;
        let day = Self::parse_component::<u8>(day)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
