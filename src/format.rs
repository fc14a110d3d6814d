//! Rendering of dates with date-fns style patterns (`dd/MM/yyyy`).
//!
//! Supported tokens: `d`, `dd`, `M`, `MM`, `MMM`, `MMMM`, `y`, `yy`,
//! `yyyy`, `E`/`EE`/`EEE`, `EEEE`, `EEEEE`. Text in single quotes is
//! literal (`''` is a quote); any other character is copied through.

use std::borrow::Cow;

use crate::{CalendarDate, DayNameStyle, LocaleProfile};

/// Renders `date` according to `pattern`, taking names from `profile`.
pub fn format_date(date: CalendarDate, pattern: &str, profile: &LocaleProfile) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(lit) = chars.next() {
                    if lit != '\'' {
                        out.push(lit);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                    } else {
                        break;
                    }
                }
            },
            'd' | 'M' | 'y' | 'E' => {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                out.push_str(&field_text(date, c, width, profile));
            },
            other => out.push(other),
        }
    }

    out
}

fn field_text(
    date: CalendarDate,
    token: char,
    width: usize,
    profile: &LocaleProfile,
) -> Cow<'static, str> {
    let (day, month, year) = (date.day().get(), date.month().get(), date.year().get());
    match (token, width) {
        ('d', 1) => day.to_string().into(),
        ('d', _) => format!("{day:02}").into(),
        ('M', 1) => month.to_string().into(),
        ('M', 2) => format!("{month:02}").into(),
        ('M', 3) => profile.month_name_short(date.month()).into(),
        ('M', _) => profile.month_name(date.month()).into(),
        ('y', 1) => year.to_string().into(),
        ('y', 2) => format!("{:02}", year % 100).into(),
        ('y', _) => format!("{year:0width$}").into(),
        ('E', 4) => profile.day_name(date.weekday(), DayNameStyle::Full).into(),
        ('E', 5..) => profile.day_name(date.weekday(), DayNameStyle::Min).into(),
        _ => profile.day_name(date.weekday(), DayNameStyle::Short).into(),
    }
}
