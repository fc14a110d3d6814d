//! The month cursor a picker grid is showing.

use crate::consts::{DECEMBER, JANUARY, MAX_VIEW_YEAR, MIN_VIEW_YEAR, YEAR_OPTIONS_SPAN};
use crate::types::{Day, Month, Year, days_in_month};
use crate::{CalendarDate, DateError};
use derive_more::Display;

/// A (year, month) pair: the month displayed by the grid.
///
/// A view month has no day component; it always stands for the first of its
/// month. Its year stays within `MIN_VIEW_YEAR..=MAX_VIEW_YEAR` so that the
/// padding days around any displayable month are themselves valid dates.
/// Navigation saturates at those limits instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct ViewMonth {
    year: Year,
    month: Month,
}

impl ViewMonth {
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside 1..=12 and
    /// `DateError::YearOutsideView` for a year the grid cannot display.
    pub fn new(year: u16, month: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        if !(MIN_VIEW_YEAR..=MAX_VIEW_YEAR).contains(&year) {
            return Err(DateError::YearOutsideView(year));
        }
        Ok(Self {
            year: Year::new(year)?,
            month,
        })
    }

    /// The month containing `date`. Dates in the first or last supported
    /// year clamp to the nearest displayable month.
    pub const fn containing(date: CalendarDate) -> Self {
        Self::clamped(date.year().get(), date.month())
    }

    const fn clamped(year: u16, month: Month) -> Self {
        if year < MIN_VIEW_YEAR {
            Self {
                year: Year::saturating(MIN_VIEW_YEAR),
                month: Month::JANUARY,
            }
        } else if year > MAX_VIEW_YEAR {
            Self {
                year: Year::saturating(MAX_VIEW_YEAR),
                month: Month::DECEMBER,
            }
        } else {
            Self {
                year: Year::saturating(year),
                month,
            }
        }
    }

    pub const fn year(self) -> Year {
        self.year
    }

    pub const fn month(self) -> Month {
        self.month
    }

    pub const fn first_day(self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: Day::FIRST,
        }
    }

    pub const fn last_day(self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: Day::saturating(days_in_month(self.year.get(), self.month.get())),
        }
    }

    /// Whether `date` falls in this month of this year.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// One month back, rolling into December of the previous year.
    pub const fn prev(self) -> Self {
        let (year, month) = (self.year.get(), self.month.get());
        if month == JANUARY {
            if year <= MIN_VIEW_YEAR {
                return self;
            }
            Self::clamped(year - 1, Month::DECEMBER)
        } else {
            Self::clamped(year, Month::saturating(month - 1))
        }
    }

    /// One month forward, rolling into January of the next year.
    pub const fn next(self) -> Self {
        let (year, month) = (self.year.get(), self.month.get());
        if month == DECEMBER {
            if year >= MAX_VIEW_YEAR {
                return self;
            }
            Self::clamped(year + 1, Month::JANUARY)
        } else {
            Self::clamped(year, Month::saturating(month + 1))
        }
    }

    /// Same year, different month.
    pub const fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    /// Same month, different year. The year is clamped to the displayable
    /// years; the month is never changed.
    pub const fn with_year(self, year: Year) -> Self {
        let year = year.get();
        let year = if year < MIN_VIEW_YEAR {
            MIN_VIEW_YEAR
        } else if year > MAX_VIEW_YEAR {
            MAX_VIEW_YEAR
        } else {
            year
        };
        Self {
            year: Year::saturating(year),
            ..self
        }
    }

    /// Years offered by the year dropdown: up to ten either side of this
    /// view's year, fewer near the displayable limits.
    pub fn year_options(self) -> impl Iterator<Item = Year> {
        let center = self.year.get();
        let first = center.saturating_sub(YEAR_OPTIONS_SPAN).max(MIN_VIEW_YEAR);
        let last = center.saturating_add(YEAR_OPTIONS_SPAN).min(MAX_VIEW_YEAR);
        (first..=last).map(Year::saturating)
    }
}

impl From<CalendarDate> for ViewMonth {
    fn from(date: CalendarDate) -> Self {
        Self::containing(date)
    }
}
