//! Calendar-day normalisation.
//!
//! Every comparison between dates goes through [`CalendarDay`], so two values
//! on the same year-month-day are equal whatever their time of day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{DatePickError, DatePickResult};

/// Anything that falls on a calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// The wall-clock day in the value's own time zone.
impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

pub fn same_day(a: &impl CalendarDay, b: &impl CalendarDay) -> bool {
    a.calendar_day() == b.calendar_day()
}

/// Strictly before `today`. Today itself is not past.
pub fn is_past(day: &impl CalendarDay, today: NaiveDate) -> bool {
    day.calendar_day() < today
}

/// Parse YYYY-MM-DD
pub fn parse_day(s: &str) -> DatePickResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DatePickError::InvalidDate(s.to_string()))
}

/// Short label such as "Jan 5".
pub fn format_short(day: &impl CalendarDay) -> String {
    day.calendar_day().format("%b %-d").to_string()
}

/// Comma-separated short labels, or "None" for an empty list.
pub fn format_day_list(days: &[NaiveDate]) -> String {
    if days.is_empty() {
        return "None".to_string();
    }

    days.iter()
        .map(format_short)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The picker's trigger label for `count` selected days.
pub fn selection_label(count: usize) -> String {
    match count {
        0 => "Select dates".to_string(),
        1 => "1 date selected".to_string(),
        n => format!("{} dates selected", n),
    }
}
