//! Render snapshots handed to the host.
//!
//! Everything here is derived on demand from one controller snapshot and
//! never stored, so the grid range and the day classifications always
//! describe the same view month.

use crate::{
    Bounds, CalendarDate, DateRange, DayDescriptor, DayNameStyle, LocaleProfile, Month,
    PickerConfig, ViewMonth, Year, classify, compute_range, enumerate_days, format_date,
};

/// Everything a front end needs to draw the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub field:  FieldView,
    /// Present only while the picker is open.
    pub header: Option<HeaderView>,
    /// Present only while the picker is open.
    pub grid:   Option<GridView>,
}

/// The text field showing the committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Committed value in the display format, or empty.
    pub text:          String,
    pub label:         String,
    pub placeholder:   String,
    pub disabled:      bool,
    pub error:         Option<String>,
    pub aria_expanded: bool,
    pub aria_haspopup: &'static str,
    pub role:          &'static str,
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

/// Month/year selectors and navigation buttons above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub month_options:      Vec<SelectOption<Month>>,
    pub year_options:       Vec<SelectOption<Year>>,
    pub selected_month:     Month,
    pub selected_year:      Year,
    pub previous_label:     &'static str,
    pub next_label:         &'static str,
    pub select_month_label: &'static str,
    pub select_year_label:  &'static str,
}

/// The month grid: weekday headers then one cell per displayed day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub role:            &'static str,
    pub aria_label:      &'static str,
    pub weekday_headers: [&'static str; 7],
    pub range:           DateRange,
    pub cells:           Vec<DayCell>,
}

/// A single day button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub descriptor:   DayDescriptor,
    pub text:         String,
    pub aria_label:   String,
    pub aria_pressed: bool,
    /// `0` for the grid's single default tab stop, `-1` otherwise.
    pub tab_index:    i8,
}

impl GridView {
    /// Cells grouped into week rows.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// The cell that receives focus when tabbing into the grid, if any.
    pub fn tab_stop(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.tab_index == 0)
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.descriptor.date == date)
    }
}

pub(crate) fn field_view(
    config: &PickerConfig,
    profile: &LocaleProfile,
    selected: Option<CalendarDate>,
    open: bool,
) -> FieldView {
    let text = selected
        .map(|date| format_date(date, config.effective_date_format(profile), profile))
        .unwrap_or_default();
    FieldView {
        text,
        label: config.effective_label(profile).to_owned(),
        placeholder: config.effective_placeholder(profile).to_owned(),
        disabled: config.disabled,
        error: config.error.clone(),
        aria_expanded: open,
        aria_haspopup: "dialog",
        role: "combobox",
    }
}

pub(crate) fn header_view(view: ViewMonth, profile: &LocaleProfile) -> HeaderView {
    HeaderView {
        month_options:      Month::all()
            .map(|month| SelectOption {
                value: month,
                label: profile.month_name(month).to_owned(),
            })
            .collect(),
        year_options:       view
            .year_options()
            .map(|year| SelectOption {
                value: year,
                label: year.to_string(),
            })
            .collect(),
        selected_month:     view.month(),
        selected_year:      view.year(),
        previous_label:     profile.texts.previous_month,
        next_label:         profile.texts.next_month,
        select_month_label: profile.texts.select_month,
        select_year_label:  profile.texts.select_year,
    }
}

pub(crate) struct GridInputs<'a> {
    pub view:     ViewMonth,
    pub profile:  &'a LocaleProfile,
    pub selected: Option<CalendarDate>,
    pub today:    CalendarDate,
    pub disabled: bool,
    pub bounds:   Bounds,
}

pub(crate) fn grid_view(inputs: &GridInputs<'_>) -> GridView {
    let range = compute_range(inputs.view, inputs.profile.first_day_of_week);
    let cells = enumerate_days(range)
        .map(|day| {
            let descriptor = classify(
                day,
                inputs.view,
                inputs.selected,
                inputs.today,
                inputs.disabled,
                &inputs.bounds,
            );
            day_cell(descriptor, inputs.profile)
        })
        .collect();

    GridView {
        role: "dialog",
        aria_label: inputs.profile.texts.calendar_label,
        weekday_headers: inputs.profile.weekday_headers(DayNameStyle::Short),
        range,
        cells,
    }
}

fn day_cell(descriptor: DayDescriptor, profile: &LocaleProfile) -> DayCell {
    let date = descriptor.date;
    let mut aria_label = format!(
        "{} {} {}",
        date.day().get(),
        profile.month_name(date.month()),
        date.year().get()
    );
    if descriptor.is_today {
        aria_label.push_str(", ");
        aria_label.push_str(profile.texts.today);
    }
    if descriptor.is_selected {
        aria_label.push_str(", ");
        aria_label.push_str(profile.texts.selected);
    }

    DayCell {
        text: date.day().get().to_string(),
        aria_label,
        aria_pressed: descriptor.is_selected,
        tab_index: if descriptor.is_selected { 0 } else { -1 },
        descriptor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;
    use crate::test_utils::{date, view};

    fn inputs(selected: Option<CalendarDate>, today: CalendarDate) -> GridInputs<'static> {
        GridInputs {
            view: view(2024, 2),
            profile: resolve(Some("fr")),
            selected,
            today,
            disabled: false,
            bounds: Bounds::UNBOUNDED,
        }
    }

    #[test]
    fn test_grid_cells_match_range() {
        let grid = grid_view(&inputs(None, date(2024, 2, 10)));
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.rows().count(), 5);
        assert_eq!(grid.cells[0].descriptor.date, grid.range.start());
        assert_eq!(grid.weekday_headers[0], "lun");
        assert!(!grid.cells[0].descriptor.in_current_month);
    }

    #[test]
    fn test_aria_label_with_qualifiers() {
        let grid = grid_view(&inputs(Some(date(2024, 2, 14)), date(2024, 2, 14)));
        let cell = grid.cell(date(2024, 2, 14)).unwrap();
        assert_eq!(cell.aria_label, "14 février 2024, aujourd'hui, sélectionné");
        assert!(cell.aria_pressed);
        assert_eq!(cell.text, "14");

        let plain = grid.cell(date(2024, 2, 15)).unwrap();
        assert_eq!(plain.aria_label, "15 février 2024");
        assert!(!plain.aria_pressed);
    }

    #[test]
    fn test_single_tab_stop_is_selected_day() {
        let grid = grid_view(&inputs(Some(date(2024, 2, 14)), date(2024, 2, 1)));
        assert_eq!(grid.cells.iter().filter(|c| c.tab_index == 0).count(), 1);
        assert_eq!(grid.tab_stop().map(|c| c.descriptor.date), Some(date(2024, 2, 14)));
    }

    #[test]
    fn test_no_tab_stop_without_selection() {
        let grid = grid_view(&inputs(None, date(2024, 2, 1)));
        assert!(grid.tab_stop().is_none());
        assert!(grid.cells.iter().all(|c| c.tab_index == -1));
    }

    #[test]
    fn test_header_options() {
        let header = header_view(view(2024, 12), resolve(Some("en")));
        assert_eq!(header.month_options.len(), 12);
        assert_eq!(header.month_options[0].label, "January");
        assert_eq!(header.year_options.len(), 21);
        assert_eq!(header.year_options[0].label, "2014");
        assert_eq!(header.year_options[20].label, "2034");
        assert_eq!(header.selected_year.get(), 2024);
        assert_eq!(header.previous_label, "Previous month");
    }

    #[test]
    fn test_field_view_text_and_defaults() {
        let config = PickerConfig::default();
        let field = field_view(&config, config.profile(), Some(date(2024, 3, 5)), true);
        assert_eq!(field.text, "05/03/2024");
        assert_eq!(field.label, "Sélecteur de date");
        assert_eq!(field.placeholder, "JJ/MM/AAAA");
        assert!(field.aria_expanded);
        assert_eq!(field.role, "combobox");
        assert_eq!(field.aria_haspopup, "dialog");

        let empty = field_view(&config, config.profile(), None, false);
        assert_eq!(empty.text, "");
        assert!(!empty.aria_expanded);
    }

    #[test]
    fn test_field_view_date_format_override() {
        let config = PickerConfig::default().with_locale("en").with_date_format("d MMM yyyy");
        let field = field_view(&config, resolve(Some("en")), Some(date(2024, 3, 5)), false);
        assert_eq!(field.text, "5 Mar 2024");
    }
}
