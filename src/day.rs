use crate::{CalendarDate, ViewMonth};

/// Optional inclusive limits on which days may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    pub const fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    /// A day equal to either bound is allowed.
    pub fn allows(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

/// How one grid day should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayDescriptor {
    pub date:             CalendarDate,
    pub is_selected:      bool,
    pub is_today:         bool,
    pub in_current_month: bool,
    pub is_disabled:      bool,
}

/// Classifies `day` against the view month, selection, today's date and
/// the disabled policy (`picker_disabled` or outside `bounds`).
///
/// Pure: the same inputs always give the same descriptor.
pub fn classify(
    day: CalendarDate,
    view: ViewMonth,
    selected: Option<CalendarDate>,
    today: CalendarDate,
    picker_disabled: bool,
    bounds: &Bounds,
) -> DayDescriptor {
    DayDescriptor {
        date:             day,
        is_selected:      selected == Some(day),
        is_today:         day == today,
        in_current_month: day.month() == view.month(),
        is_disabled:      picker_disabled || !bounds.allows(day),
    }
}

impl DayDescriptor {
    /// Whether clicking this day would commit it.
    pub const fn is_selectable(&self) -> bool {
        !self.is_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, view};
    use crate::{Weekday, compute_range, enumerate_days};
    use proptest::prelude::*;

    #[test]
    fn test_selected_and_today() {
        let d = classify(
            date(2024, 3, 15),
            view(2024, 3),
            Some(date(2024, 3, 15)),
            date(2024, 3, 15),
            false,
            &Bounds::UNBOUNDED,
        );
        assert!(d.is_selected);
        assert!(d.is_today);
        assert!(d.in_current_month);
        assert!(!d.is_disabled);
    }

    #[test]
    fn test_selection_needs_same_calendar_day() {
        let d = classify(
            date(2024, 3, 15),
            view(2024, 3),
            Some(date(2023, 3, 15)),
            date(2024, 3, 16),
            false,
            &Bounds::UNBOUNDED,
        );
        assert!(!d.is_selected);
        assert!(!d.is_today);
    }

    #[test]
    fn test_padding_day_outside_current_month() {
        let d = classify(
            date(2024, 1, 29),
            view(2024, 2),
            None,
            date(2024, 2, 10),
            false,
            &Bounds::UNBOUNDED,
        );
        assert!(!d.in_current_month);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
        let at = |d| classify(d, view(2024, 3), None, date(2000, 1, 1), false, &bounds);

        assert!(at(date(2024, 3, 9)).is_disabled);
        assert!(!at(date(2024, 3, 10)).is_disabled);
        assert!(!at(date(2024, 3, 20)).is_disabled);
        assert!(at(date(2024, 3, 21)).is_disabled);
    }

    #[test]
    fn test_half_open_bounds() {
        let only_min = Bounds::new(Some(date(2024, 1, 1)), None);
        assert!(only_min.allows(date(9998, 1, 1)));
        assert!(!only_min.allows(date(2023, 12, 31)));

        let only_max = Bounds::new(None, Some(date(2024, 1, 1)));
        assert!(only_max.allows(date(2, 1, 1)));
        assert!(!only_max.allows(date(2024, 1, 2)));
    }

    #[test]
    fn test_picker_disabled_disables_every_day() {
        let d = classify(
            date(2024, 3, 15),
            view(2024, 3),
            None,
            date(2024, 3, 15),
            true,
            &Bounds::UNBOUNDED,
        );
        assert!(d.is_disabled);
        assert!(!d.is_selectable());
    }

    proptest! {
        #[test]
        fn in_current_month_matches_view_month(
            y in 1900u16..=2100,
            m in 1u8..=12,
            first in 0u8..7,
        ) {
            let v = view(y, m);
            let range = compute_range(v, Weekday::from_index(first));
            for day in enumerate_days(range) {
                let d = classify(day, v, None, date(2000, 1, 1), false, &Bounds::UNBOUNDED);
                prop_assert_eq!(d.in_current_month, day.month() == v.month());
            }
        }
    }
}
