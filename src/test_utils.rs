use crate::{CalendarDate, Month, ViewMonth, Year};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid test date")
}

pub fn view(year: u16, month: u8) -> ViewMonth {
    ViewMonth::new(year, month).expect("valid test view month")
}

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid test year")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid test month")
}
