use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_WEEK, FEBRUARY, GREGORIAN_CYCLE, LEAP_FEBRUARY_LENGTH, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_LENGTHS,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Builds a year from a value already known to be in range, saturating
    /// at the supported limits otherwise.
    pub(crate) const fn saturating(value: u16) -> Self {
        let clamped = if value < MIN_YEAR {
            MIN_YEAR
        } else if value > MAX_YEAR {
            MAX_YEAR
        } else {
            value
        };
        match NonZeroU16::new(clamped) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU16::MIN),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether February of this year has 29 days
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January, the first month of the year
    pub const JANUARY: Self = Self::saturating(1);
    /// December, the last month of the year
    pub const DECEMBER: Self = Self::saturating(MAX_MONTH);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn saturating(value: u8) -> Self {
        let clamped = if value > MAX_MONTH { MAX_MONTH } else { value };
        match NonZeroU8::new(clamped) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position, suitable for indexing month-name tables
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).map(Self::saturating)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month
    pub const FIRST: Self = Self::saturating(MIN_DAY);

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month,
            day: value,
            year,
        };
        if month == 0 || month > MAX_MONTH {
            return Err(invalid);
        }
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn saturating(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        NonZeroU8::new(value).map(Self).ok_or(DateError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Wraps any index into the week (`7` is Sunday again).
    pub const fn from_index(index: u8) -> Self {
        match index % DAYS_PER_WEEK {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The weekday that closes a row beginning on `first`.
    pub const fn last_of_week(first: Self) -> Self {
        Self::from_index(first.index() + DAYS_PER_WEEK - 1)
    }

    /// The seven weekdays in display order, starting at `first`.
    pub fn week_starting(first: Self) -> [Self; DAYS_PER_WEEK as usize] {
        let mut days = [first; DAYS_PER_WEEK as usize];
        let mut current = first;
        for slot in &mut days {
            *slot = current;
            current = current.succ();
        }
        days
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= DAYS_PER_WEEK {
            return Err(DateError::InvalidWeekday(value));
        }
        Ok(Self::from_index(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        LEAP_FEBRUARY_LENGTH
    } else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
pub(crate) const fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]. Returns `None` for years outside `u16`.
pub(crate) fn civil_from_days(days: i64) -> Option<(u16, u8, u8)> {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    Some((
        u16::try_from(year).ok()?,
        u8::try_from(month).ok()?,
        u8::try_from(day).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2024).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_saturating() {
        assert_eq!(Year::saturating(0).get(), MIN_YEAR);
        assert_eq!(Year::saturating(12000).get(), MAX_YEAR);
        assert_eq!(Year::saturating(2024).get(), 2024);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let rejected: Result<Year, _> = serde_json::from_str("0");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_index_and_all() {
        assert_eq!(Month::JANUARY.index(), 0);
        assert_eq!(Month::DECEMBER.index(), 11);
        let all: Vec<u8> = Month::all().map(Month::get).collect();
        assert_eq!(all, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_day_new_respects_month_length() {
        for (year, month, last) in [(2023, 2, 28), (2024, 2, 29), (2024, 4, 30), (2024, 12, 31)] {
            assert!(Day::new(last, year, month).is_ok(), "{year}-{month}-{last}");
            assert!(Day::new(last + 1, year, month).is_err(), "{year}-{month}-{}", last + 1);
        }
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(DateError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(Day::new(0, 2024, 1).is_err());
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_weekday_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(8), Weekday::Monday);
    }

    #[test]
    fn test_weekday_try_from_rejects_out_of_range() {
        assert_eq!(Weekday::try_from(1).unwrap(), Weekday::Monday);
        assert!(matches!(
            Weekday::try_from(7),
            Err(DateError::InvalidWeekday(7))
        ));
    }

    #[test]
    fn test_last_of_week() {
        assert_eq!(Weekday::last_of_week(Weekday::Sunday), Weekday::Saturday);
        assert_eq!(Weekday::last_of_week(Weekday::Monday), Weekday::Sunday);
        assert_eq!(Weekday::last_of_week(Weekday::Saturday), Weekday::Friday);
    }

    #[test]
    fn test_week_starting_rotates() {
        let week = Weekday::week_starting(Weekday::Monday);
        assert_eq!(week[0], Weekday::Monday);
        assert_eq!(week[6], Weekday::Sunday);

        let week = Weekday::week_starting(Weekday::Sunday);
        assert_eq!(week[0], Weekday::Sunday);
        assert_eq!(week[6], Weekday::Saturday);
    }

    #[test]
    fn test_leap_rule() {
        let leap: Vec<u16> =
            (1896..=1912).chain(1996..=2004).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leap, [1896, 1904, 1908, 1912, 1996, 2000, 2004]);
        assert!(Year::new(2400).unwrap().is_leap());
        assert!(!Year::new(2100).unwrap().is_leap());
    }

    #[test]
    fn test_month_lengths_sum_to_year() {
        let common: u16 = (1..=12).map(|m| u16::from(days_in_month(2023, m))).sum();
        let leap: u16 = (1..=12).map(|m| u16::from(days_in_month(2024, m))).sum();
        assert_eq!((common, leap), (365, 366));
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_civil_day_numbers() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(0), Some((1970, 1, 1)));
        assert_eq!(civil_from_days(11_017), Some((2000, 3, 1)));
        assert_eq!(civil_from_days(days_from_civil(2024, 2, 29)), Some((2024, 2, 29)));
    }
}
