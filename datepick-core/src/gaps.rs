//! Excluded-day inference and the operations on a selected-day set.
//!
//! The selected set is whatever the user clicked. The excluded set is every
//! day strictly inside the selected span that was not clicked, and it is
//! always recomputed from scratch after the selected set changes.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::day::{CalendarDay, is_past, same_day};

/// Days lying strictly between consecutive selected days.
///
/// Input order and time of day do not matter. Fewer than two distinct days
/// yields an empty result. The output is chronological and never contains a
/// selected day.
pub fn compute_excluded_dates<I, D>(selected: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = D>,
    D: CalendarDay,
{
    let mut days: Vec<NaiveDate> = selected.into_iter().map(|d| d.calendar_day()).collect();
    days.sort_unstable();
    days.dedup();

    if days.len() < 2 {
        return Vec::new();
    }

    let mut excluded = Vec::new();
    for pair in days.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if (next - current).num_days() > 1 {
            excluded.extend(current.iter_days().skip(1).take_while(|d| *d < next));
        }
    }

    excluded
}

/// Add `candidate` if its day is absent, remove it if present.
///
/// Days before `today` are ignored and `selected` comes back unchanged.
/// Otherwise the result is sorted ascending.
pub fn toggle_date(
    selected: &[NaiveDate],
    candidate: impl CalendarDay,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    if is_past(&candidate, today) {
        return selected.to_vec();
    }

    let day = candidate.calendar_day();
    let mut next: Vec<NaiveDate> = if selected.iter().any(|d| same_day(d, &day)) {
        selected.iter().copied().filter(|d| !same_day(d, &day)).collect()
    } else {
        selected.iter().copied().chain(std::iter::once(day)).collect()
    };
    next.sort_unstable();
    next
}

/// Both sets, cleared.
pub fn reset() -> (Vec<NaiveDate>, Vec<NaiveDate>) {
    (Vec::new(), Vec::new())
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added(NaiveDate),
    Removed(NaiveDate),
    IgnoredPast(NaiveDate),
}

impl ToggleOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::IgnoredPast(_))
    }

    pub fn day(&self) -> NaiveDate {
        match self {
            ToggleOutcome::Added(d) | ToggleOutcome::Removed(d) | ToggleOutcome::IgnoredPast(d) => {
                *d
            }
        }
    }
}

/// A selected-day set together with its derived excluded set.
/// Only buildable through its constructors, so `excluded` is always
/// derived from `selected`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateSelection {
    selected: Vec<NaiveDate>,
    excluded: Vec<NaiveDate>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any days. Duplicates by calendar day collapse.
    pub fn from_dates<I, D>(dates: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: CalendarDay,
    {
        let mut selected: Vec<NaiveDate> = dates.into_iter().map(|d| d.calendar_day()).collect();
        selected.sort_unstable();
        selected.dedup();
        let excluded = compute_excluded_dates(&selected);
        DateSelection { selected, excluded }
    }

    pub fn selected(&self) -> &[NaiveDate] {
        &self.selected
    }

    pub fn excluded(&self) -> &[NaiveDate] {
        &self.excluded
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, day: &impl CalendarDay) -> bool {
        self.selected.iter().any(|d| same_day(d, day))
    }

    pub fn is_excluded(&self, day: &impl CalendarDay) -> bool {
        self.excluded.iter().any(|d| same_day(d, day))
    }

    pub fn toggle(&mut self, candidate: impl CalendarDay, today: NaiveDate) -> ToggleOutcome {
        let day = candidate.calendar_day();

        if is_past(&day, today) {
            debug!(%day, %today, "ignoring past day");
            return ToggleOutcome::IgnoredPast(day);
        }

        let outcome = if self.is_selected(&day) {
            ToggleOutcome::Removed(day)
        } else {
            ToggleOutcome::Added(day)
        };

        self.selected = toggle_date(&self.selected, day, today);
        self.excluded = compute_excluded_dates(&self.selected);

        debug!(
            ?outcome,
            selected = self.selected.len(),
            excluded = self.excluded.len(),
            "selection changed"
        );

        outcome
    }

    pub fn reset(&mut self) {
        info!(cleared = self.selected.len(), "selection reset");
        (self.selected, self.excluded) = reset();
    }
}
