use std::iter::FusedIterator;

use derive_more::Display;

use crate::{CalendarDate, DAYS_PER_WEEK, ViewMonth, Weekday};

/// The inclusive span of days a month grid displays.
///
/// Produced by [`compute_range`]: `start` falls on the first day of the
/// week, `end` on the last, and the span is always a whole number of weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Expands `view` to whole weeks beginning on `first_day_of_week`.
///
/// Walks back one day at a time from the first of the month until the
/// week start is reached, and forward from the last of the month until the
/// week end is reached, so month lengths, leap years and year rollovers are
/// handled by plain day stepping.
pub fn compute_range(view: ViewMonth, first_day_of_week: Weekday) -> DateRange {
    let last_day_of_week = Weekday::last_of_week(first_day_of_week);

    let mut start = view.first_day();
    while start.weekday() != first_day_of_week {
        // View years keep a year of headroom, so stepping never runs out.
        let Some(prev) = start.pred() else { break };
        start = prev;
    }

    let mut end = view.last_day();
    while end.weekday() != last_day_of_week {
        let Some(next) = end.succ() else { break };
        end = next;
    }

    DateRange { start, end }
}

/// Every day of `range` in ascending order.
pub const fn enumerate_days(range: DateRange) -> Days {
    range.days()
}

impl DateRange {
    /// Returns the first displayed day
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last displayed day
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Checks if the range contains a given date (both ends inclusive)
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub const fn len_days(&self) -> usize {
        (self.end.days_since_epoch() - self.start.days_since_epoch() + 1) as usize
    }

    /// Number of week rows the range spans.
    pub const fn weeks(&self) -> usize {
        self.len_days() / DAYS_PER_WEEK as usize
    }

    /// A fresh iterator over the range; calling this again restarts it.
    pub const fn days(&self) -> Days {
        Days {
            next:      Some(self.start),
            end:       self.end,
            remaining: self.len_days(),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next:      Option<CalendarDate>,
    end:       CalendarDate,
    remaining: usize,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end { current.succ() } else { None };
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
