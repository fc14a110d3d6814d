//! Static locale profiles for the picker.
//!
//! Profiles are immutable data. [`resolve`] is total: anything it does not
//! recognize maps to the French profile.

use crate::consts::DEFAULT_LOCALE_CODE;
use crate::{Month, Weekday};

/// Which day-name list to read from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayNameStyle {
    /// `"lundi"`, `"Monday"`
    Full,
    /// `"lun"`, `"Mon"`
    #[default]
    Short,
    /// `"L"`, `"M"`
    Min,
}

/// Labels the picker shows or announces to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTexts {
    pub select_month:     &'static str,
    pub select_year:      &'static str,
    pub previous_month:   &'static str,
    pub next_month:       &'static str,
    pub today:            &'static str,
    pub selected:         &'static str,
    pub date_placeholder: &'static str,
    pub date_label:       &'static str,
    pub calendar_label:   &'static str,
}

/// Names, week layout, display format and UI texts for one language.
///
/// Day-name arrays are indexed by [`Weekday::index`] (Sunday first) whatever
/// the display order; month-name arrays by [`Month::index`].
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleProfile {
    pub code:              &'static str,
    pub month_names:       [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    pub day_names:         [&'static str; 7],
    pub day_names_short:   [&'static str; 7],
    pub day_names_min:     [&'static str; 7],
    pub date_format:       &'static str,
    pub first_day_of_week: Weekday,
    pub texts:             UiTexts,
}

pub static FR: LocaleProfile = LocaleProfile {
    code:              "fr",
    month_names:       [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    month_names_short: [
        "jan", "fév", "mar", "avr", "mai", "juin", "juil", "août", "sep", "oct", "nov", "déc",
    ],
    day_names:         ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    day_names_short:   ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
    day_names_min:     ["D", "L", "M", "M", "J", "V", "S"],
    date_format:       "dd/MM/yyyy",
    first_day_of_week: Weekday::Monday,
    texts:             UiTexts {
        select_month:     "Sélectionner le mois",
        select_year:      "Sélectionner l'année",
        previous_month:   "Mois précédent",
        next_month:       "Mois suivant",
        today:            "aujourd'hui",
        selected:         "sélectionné",
        date_placeholder: "JJ/MM/AAAA",
        date_label:       "Sélecteur de date",
        calendar_label:   "Calendrier de sélection de date",
    },
};

pub static EN: LocaleProfile = LocaleProfile {
    code:              "en",
    month_names:       [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names:         [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    day_names_short:   ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_names_min:     ["S", "M", "T", "W", "T", "F", "S"],
    date_format:       "MM/dd/yyyy",
    first_day_of_week: Weekday::Sunday,
    texts:             UiTexts {
        select_month:     "Select month",
        select_year:      "Select year",
        previous_month:   "Previous month",
        next_month:       "Next month",
        today:            "today",
        selected:         "selected",
        date_placeholder: "MM/DD/YYYY",
        date_label:       "Date picker",
        calendar_label:   "Date selection calendar",
    },
};

static PROFILES: [&LocaleProfile; 2] = [&FR, &EN];

/// Looks up the profile for `code`, falling back to the default (French).
///
/// Matching ignores case, surrounding whitespace and any region subtag, so
/// `"EN"`, `"en-US"` and `"en_GB"` all resolve to English.
pub fn resolve(code: Option<&str>) -> &'static LocaleProfile {
    let Some(raw) = code else {
        return default_profile();
    };
    let language = raw.trim().split(['-', '_']).next().unwrap_or_default();

    PROFILES
        .iter()
        .copied()
        .find(|profile| profile.code.eq_ignore_ascii_case(language))
        .unwrap_or_else(|| {
            tracing::warn!(code = raw, fallback = DEFAULT_LOCALE_CODE, "unknown locale code");
            default_profile()
        })
}

const fn default_profile() -> &'static LocaleProfile {
    &FR
}

impl LocaleProfile {
    pub const fn month_name(&self, month: Month) -> &'static str {
        self.month_names[month.index()]
    }

    pub const fn month_name_short(&self, month: Month) -> &'static str {
        self.month_names_short[month.index()]
    }

    pub const fn day_name(&self, weekday: Weekday, style: DayNameStyle) -> &'static str {
        let names = match style {
            DayNameStyle::Full => &self.day_names,
            DayNameStyle::Short => &self.day_names_short,
            DayNameStyle::Min => &self.day_names_min,
        };
        names[weekday.index() as usize]
    }

    /// Column headers for the grid, rotated to start on this locale's first
    /// day of week.
    pub fn weekday_headers(&self, style: DayNameStyle) -> [&'static str; 7] {
        Weekday::week_starting(self.first_day_of_week).map(|day| self.day_name(day, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::month;

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(resolve(Some("fr")).code, "fr");
        assert_eq!(resolve(Some("en")).code, "en");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        assert!(std::ptr::eq(resolve(Some("de")), resolve(None)));
        assert!(std::ptr::eq(resolve(Some("")), resolve(None)));
        assert_eq!(resolve(Some("xx-YY")).code, DEFAULT_LOCALE_CODE);
    }

    #[test]
    fn test_resolve_normalizes_code() {
        assert_eq!(resolve(Some(" EN ")).code, "en");
        assert_eq!(resolve(Some("en-US")).code, "en");
        assert_eq!(resolve(Some("fr_CA")).code, "fr");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for _ in 0..3 {
            assert!(std::ptr::eq(resolve(Some("de")), &FR));
        }
    }

    #[test]
    fn test_first_day_of_week() {
        assert_eq!(resolve(Some("fr")).first_day_of_week, Weekday::Monday);
        assert_eq!(resolve(Some("en")).first_day_of_week, Weekday::Sunday);
    }

    #[test]
    fn test_weekday_headers_rotated() {
        assert_eq!(
            resolve(Some("fr")).weekday_headers(DayNameStyle::Short),
            ["lun", "mar", "mer", "jeu", "ven", "sam", "dim"]
        );
        assert_eq!(
            resolve(Some("en")).weekday_headers(DayNameStyle::Min),
            ["S", "M", "T", "W", "T", "F", "S"]
        );
    }

    #[test]
    fn test_names_indexed_from_sunday_and_january() {
        let fr = resolve(Some("fr"));
        assert_eq!(fr.day_name(Weekday::Sunday, DayNameStyle::Full), "dimanche");
        assert_eq!(fr.month_name(month(8)), "août");
        assert_eq!(resolve(Some("en")).month_name_short(month(12)), "Dec");
    }
}
