/// Earliest representable year
pub const MIN_YEAR: u16 = 1;
/// Latest representable year
pub const MAX_YEAR: u16 = 9999;

/// Earliest year a view month may show. One year of headroom keeps the
/// leading padding days of January representable.
pub const MIN_VIEW_YEAR: u16 = MIN_YEAR + 1;
/// Latest year a view month may show, mirroring [`MIN_VIEW_YEAR`].
pub const MAX_VIEW_YEAR: u16 = MAX_YEAR - 1;

pub const MAX_MONTH: u8 = 12;
pub const MIN_DAY: u8 = 1;

pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const DECEMBER: u8 = 12;

/// Month lengths in a common year, January first.
pub const MONTH_LENGTHS: [u8; MAX_MONTH as usize] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
pub const LEAP_FEBRUARY_LENGTH: u8 = 29;

/// Cells in one grid row
pub const DAYS_PER_WEEK: u8 = 7;

/// Years offered on each side of the view year by the year selector
pub const YEAR_OPTIONS_SPAN: u16 = 10;

// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the ISO `YYYY-MM-DD` form used for serialization
pub const DATE_SEPARATOR: char = '-';

/// Locale used when none is supplied or the supplied one is unknown
pub const DEFAULT_LOCALE_CODE: &str = "fr";
