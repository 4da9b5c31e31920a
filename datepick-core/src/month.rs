//! Month cursor and month grid.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::day::{CalendarDay, is_past};
use crate::error::{DatePickError, DatePickResult};

/// Column headers for a Sunday-first week.
pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown. Always holds the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first: NaiveDate,
}

/// One square of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for the padding days borrowed from the neighbouring months
    pub in_month: bool,
    pub is_past: bool,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> DatePickResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| MonthCursor { first })
            .ok_or_else(|| DatePickError::InvalidMonth(format!("{year}-{month:02}")))
    }

    pub fn containing(day: &impl CalendarDay) -> Self {
        let day = day.calendar_day();
        MonthCursor {
            first: day.with_day(1).unwrap_or(day),
        }
    }

    /// Parse YYYY-MM
    pub fn parse(s: &str) -> DatePickResult<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(|first| MonthCursor { first })
            .map_err(|_| DatePickError::InvalidMonth(s.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Move by `n` months (negative goes back). Stays put at the edges of
    /// the representable calendar.
    pub fn shift(self, n: i32) -> Self {
        let months = Months::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };

        moved.map(|first| MonthCursor { first }).unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first)
    }

    pub fn contains(&self, day: &impl CalendarDay) -> bool {
        let day = day.calendar_day();
        day.year() == self.year() && day.month() == self.month()
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first
            .iter_days()
            .take_while(move |d| d.month() == self.first.month())
    }

    /// "October 2026"
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Whole Sunday-to-Saturday weeks covering the month.
    ///
    /// Leading cells come from the previous month, trailing cells from the
    /// next one; the length is always a multiple of seven.
    pub fn grid(&self, today: NaiveDate) -> Vec<GridCell> {
        let cell = |date: NaiveDate, in_month: bool| GridCell {
            date,
            in_month,
            is_past: is_past(&date, today),
        };

        let leading = u64::from(self.first.weekday().num_days_from_sunday());
        let mut cells: Vec<GridCell> = (1..=leading)
            .rev()
            .filter_map(|i| self.first.checked_sub_days(Days::new(i)))
            .map(|d| cell(d, false))
            .collect();

        cells.extend(self.days().map(|d| cell(d, true)));

        let last = self.last_day();
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(
            (1..=trailing as u64)
                .filter_map(|i| last.checked_add_days(Days::new(i)))
                .map(|d| cell(d, false)),
        );

        cells
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}
