//! One CLI invocation's view of the form: config, persisted values and the
//! picker restored from them.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use datepick_core::config::DatepickConfig;
use datepick_core::store::FormStore;
use datepick_core::{
    Clock, FieldValue, FormState, FormValues, MonthCursor, MultiDatePicker, ToggleOutcome,
};
use tracing::debug;

/// Derived field this front end keeps in step with the selection.
pub const NUMBER_OF_DAYS_FIELD: &str = "numberOfDays";

pub struct Session {
    store: FormStore,
    pub form: FormValues,
    pub picker: MultiDatePicker,
    pub today: NaiveDate,
    tracks_day_count: bool,
    day_count: Rc<Cell<Option<usize>>>,
}

impl Session {
    pub fn open(
        config: &DatepickConfig,
        state_override: Option<PathBuf>,
        month: Option<MonthCursor>,
        clock: &impl Clock,
    ) -> Result<Self> {
        let today = clock.today();
        let store = FormStore::new(state_override.unwrap_or_else(|| config.state_path()));
        let form = store
            .load()
            .with_context(|| format!("Failed to read form state from {}", store.path().display()))?;

        let day_count = Rc::new(Cell::new(None));
        let cursor = month.unwrap_or_else(|| MonthCursor::containing(&today));
        let mut picker = {
            let day_count = Rc::clone(&day_count);
            MultiDatePicker::new(config.picker_options(), cursor)
                .on_dates_selected(move |days| day_count.set(Some(days.len())))
        };
        picker
            .restore(&form)
            .context("Stored form does not hold a date selection")?;

        let tracks_day_count = config
            .dependent_fields
            .iter()
            .any(|f| f == NUMBER_OF_DAYS_FIELD);

        debug!(
            state = %store.path().display(),
            %today,
            month = %picker.cursor(),
            selected = picker.selected_dates().len(),
            "session opened"
        );

        Ok(Session {
            store,
            form,
            picker,
            today,
            tracks_day_count,
            day_count,
        })
    }

    pub fn toggle(&mut self, day: NaiveDate) -> ToggleOutcome {
        self.picker.select_date(day, self.today, &mut self.form)
    }

    pub fn cancel(&mut self) {
        self.picker.cancel(&mut self.form);
        self.day_count.set(None);
    }

    /// Write the form back, refreshing the day count if a toggle changed it.
    pub fn save(&mut self) -> Result<()> {
        if let Some(count) = self.day_count.take() {
            if self.tracks_day_count {
                self.form
                    .set_field_value(NUMBER_OF_DAYS_FIELD, FieldValue::Text(count.to_string()));
            }
        }

        self.store
            .save(&self.form)
            .with_context(|| format!("Failed to write form state to {}", self.store.path().display()))
    }

    pub fn number_of_days(&self) -> Option<&str> {
        match self.form.field_value(NUMBER_OF_DAYS_FIELD)? {
            FieldValue::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datepick_core::FixedClock;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn open(state: &std::path::Path) -> Session {
        Session::open(
            &DatepickConfig::default(),
            Some(state.to_path_buf()),
            None,
            &clock(),
        )
        .unwrap()
    }

    #[test]
    fn selection_survives_between_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("form.json");

        let mut first = open(&state);
        first.toggle(d(1));
        first.toggle(d(5));
        first.save().unwrap();

        let second = open(&state);
        assert_eq!(second.picker.selected_dates(), &[d(1), d(5)]);
        assert_eq!(second.picker.excluded_dates(), &[d(2), d(3), d(4)]);
        assert_eq!(second.number_of_days(), Some("2"));
    }

    #[test]
    fn ignored_toggle_leaves_day_count_alone() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("form.json");

        let mut session = open(&state);
        session.toggle(d(1));
        session.save().unwrap();

        let mut session = open(&state);
        let past = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!(!session.toggle(past).changed());
        session.save().unwrap();

        assert_eq!(open(&state).number_of_days(), Some("1"));
    }

    #[test]
    fn cancel_invalidates_everything() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("form.json");

        let mut session = open(&state);
        session.toggle(d(1));
        session.toggle(d(8));
        session.save().unwrap();

        let mut session = open(&state);
        session.cancel();
        session.save().unwrap();

        let after = open(&state);
        assert!(after.picker.selected_dates().is_empty());
        assert!(after.picker.excluded_dates().is_empty());
        assert_eq!(after.number_of_days(), None);
        assert_eq!(
            after.form.field_value(NUMBER_OF_DAYS_FIELD),
            Some(&FieldValue::empty_text())
        );
    }

    #[test]
    fn month_defaults_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let session = open(&dir.path().join("form.json"));
        assert_eq!(session.picker.cursor().label(), "October 2026");
    }
}
