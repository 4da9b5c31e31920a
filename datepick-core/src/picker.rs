//! The multi-date picker component.
//!
//! Holds the selection, the month being shown and the open/closed state, and
//! writes every change back into the caller's [`FormState`].

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::day::{CalendarDay, is_past, selection_label};
use crate::error::DatePickResult;
use crate::form::{FieldValue, FormState};
use crate::gaps::{DateSelection, ToggleOutcome};
use crate::month::MonthCursor;

type DatesCallback = Box<dyn FnMut(&[NaiveDate])>;

/// Which form fields the picker writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Receives the selected days
    pub field_name: String,
    /// Receives the excluded days, if set
    pub excluded_field: Option<String>,
    /// Derived fields the caller computes; invalidated on cancel
    pub dependent_fields: Vec<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            field_name: "dates".to_string(),
            excluded_field: Some("excludedDates".to_string()),
            dependent_fields: vec!["numberOfDays".to_string()],
        }
    }
}

/// How a day should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Selected,
    Excluded,
    Past,
    Available,
}

pub struct MultiDatePicker {
    options: PickerOptions,
    selection: DateSelection,
    cursor: MonthCursor,
    is_open: bool,
    on_excluded_dates_change: Option<DatesCallback>,
    on_dates_selected: Option<DatesCallback>,
}

impl fmt::Debug for MultiDatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiDatePicker")
            .field("options", &self.options)
            .field("selection", &self.selection)
            .field("cursor", &self.cursor)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}

impl MultiDatePicker {
    pub fn new(options: PickerOptions, cursor: MonthCursor) -> Self {
        MultiDatePicker {
            options,
            selection: DateSelection::new(),
            cursor,
            is_open: false,
            on_excluded_dates_change: None,
            on_dates_selected: None,
        }
    }

    /// Called with the new excluded days after every successful toggle.
    pub fn on_excluded_dates_change(mut self, f: impl FnMut(&[NaiveDate]) + 'static) -> Self {
        self.on_excluded_dates_change = Some(Box::new(f));
        self
    }

    /// Called with the new selected days after every successful toggle.
    pub fn on_dates_selected(mut self, f: impl FnMut(&[NaiveDate]) + 'static) -> Self {
        self.on_dates_selected = Some(Box::new(f));
        self
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Load the selection from the form's field and recompute the excluded days.
    pub fn restore(&mut self, form: &impl FormState) -> DatePickResult<()> {
        let dates = form.field_dates(&self.options.field_name)?;
        self.selection = DateSelection::from_dates(dates);
        debug!(
            field = %self.options.field_name,
            selected = self.selection.len(),
            "restored selection from form"
        );
        Ok(())
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Apply: keep the selection and close.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Toggle a day and, if anything changed, write back and notify.
    pub fn select_date(
        &mut self,
        candidate: impl CalendarDay,
        today: NaiveDate,
        form: &mut impl FormState,
    ) -> ToggleOutcome {
        let outcome = self.selection.toggle(candidate, today);
        if !outcome.changed() {
            return outcome;
        }

        let selected = self.selection.selected();
        let excluded = self.selection.excluded();

        form.set_field_value(&self.options.field_name, FieldValue::Dates(selected.to_vec()));
        form.clear_field_error(&self.options.field_name);
        if let Some(field) = &self.options.excluded_field {
            form.set_field_value(field, FieldValue::Dates(excluded.to_vec()));
        }

        if let Some(callback) = self.on_excluded_dates_change.as_mut() {
            callback(excluded);
        }
        if let Some(callback) = self.on_dates_selected.as_mut() {
            callback(selected);
        }

        outcome
    }

    /// Cancel: clear everything the picker owns in the form and close.
    pub fn cancel(&mut self, form: &mut impl FormState) {
        self.selection.reset();

        form.set_field_value(&self.options.field_name, FieldValue::Dates(Vec::new()));
        if let Some(field) = &self.options.excluded_field {
            form.set_field_value(field, FieldValue::Dates(Vec::new()));
        }
        for field in &self.options.dependent_fields {
            form.set_field_value(field, FieldValue::empty_text());
        }

        self.is_open = false;
    }

    pub fn change_month(&mut self, increment: i32) {
        self.cursor = self.cursor.shift(increment);
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn selected_dates(&self) -> &[NaiveDate] {
        self.selection.selected()
    }

    pub fn excluded_dates(&self) -> &[NaiveDate] {
        self.selection.excluded()
    }

    pub fn is_selected(&self, day: &impl CalendarDay) -> bool {
        self.selection.is_selected(day)
    }

    pub fn is_excluded(&self, day: &impl CalendarDay) -> bool {
        self.selection.is_excluded(day)
    }

    pub fn day_state(&self, day: &impl CalendarDay, today: NaiveDate) -> DayState {
        if self.is_selected(day) {
            DayState::Selected
        } else if self.is_excluded(day) {
            DayState::Excluded
        } else if is_past(day, today) {
            DayState::Past
        } else {
            DayState::Available
        }
    }

    /// "Select dates", "1 date selected", "3 dates selected"
    pub fn summary(&self) -> String {
        selection_label(self.selection.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, day).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn picker() -> MultiDatePicker {
        MultiDatePicker::new(PickerOptions::default(), MonthCursor::containing(&today()))
    }

    #[test]
    fn toggle_writes_back_to_form() {
        let mut form = FormValues::new();
        let mut picker = picker();

        picker.select_date(d(5), today(), &mut form);
        picker.select_date(d(1), today(), &mut form);

        assert_eq!(
            form.field_value("dates"),
            Some(&FieldValue::Dates(vec![d(1), d(5)]))
        );
        assert_eq!(
            form.field_value("excludedDates"),
            Some(&FieldValue::Dates(vec![d(2), d(3), d(4)]))
        );
    }

    #[test]
    fn callbacks_receive_both_sets() {
        let seen_excluded = Rc::new(RefCell::new(Vec::new()));
        let seen_selected = Rc::new(RefCell::new(Vec::new()));

        let mut picker = {
            let seen_excluded = Rc::clone(&seen_excluded);
            let seen_selected = Rc::clone(&seen_selected);
            picker()
                .on_excluded_dates_change(move |days| *seen_excluded.borrow_mut() = days.to_vec())
                .on_dates_selected(move |days| *seen_selected.borrow_mut() = days.to_vec())
        };

        let mut form = FormValues::new();
        picker.select_date(d(1), today(), &mut form);
        picker.select_date(d(3), today(), &mut form);

        assert_eq!(*seen_selected.borrow(), vec![d(1), d(3)]);
        assert_eq!(*seen_excluded.borrow(), vec![d(2)]);
    }

    #[test]
    fn past_day_touches_nothing() {
        let calls = Rc::new(RefCell::new(0));
        let mut picker = {
            let calls = Rc::clone(&calls);
            picker().on_dates_selected(move |_| *calls.borrow_mut() += 1)
        };

        let mut form = FormValues::new();
        let yesterday = today().pred_opt().unwrap();
        let outcome = picker.select_date(yesterday, today(), &mut form);

        assert_eq!(outcome, ToggleOutcome::IgnoredPast(yesterday));
        assert_eq!(*calls.borrow(), 0);
        assert!(form.field_value("dates").is_none());
    }

    #[test]
    fn successful_toggle_clears_field_error() {
        let mut form = FormValues::new();
        form.set_field_error("dates", "Required".into());

        let mut picker = picker();
        picker.select_date(d(1), today(), &mut form);
        assert_eq!(form.field_error("dates"), None);
    }

    #[test]
    fn cancel_clears_form_and_closes() {
        let mut form = FormValues::new();
        let mut picker = picker();
        picker.open();
        picker.select_date(d(1), today(), &mut form);
        picker.select_date(d(9), today(), &mut form);
        form.set_field_value("numberOfDays", FieldValue::Text("2".into()));

        picker.cancel(&mut form);

        assert!(!picker.is_open());
        assert!(picker.selected_dates().is_empty());
        assert!(picker.excluded_dates().is_empty());
        assert_eq!(form.field_value("dates"), Some(&FieldValue::Dates(vec![])));
        assert_eq!(form.field_value("excludedDates"), Some(&FieldValue::Dates(vec![])));
        assert_eq!(form.field_value("numberOfDays"), Some(&FieldValue::empty_text()));
    }

    #[test]
    fn custom_field_names_are_respected() {
        let options = PickerOptions {
            field_name: "eventDays".into(),
            excluded_field: None,
            dependent_fields: vec![],
        };
        let mut picker = MultiDatePicker::new(options, MonthCursor::containing(&today()));
        let mut form = FormValues::new();

        picker.select_date(d(1), today(), &mut form);
        picker.select_date(d(4), today(), &mut form);

        assert_eq!(form.field_dates("eventDays").unwrap(), vec![d(1), d(4)]);
        assert!(form.field_value("excludedDates").is_none());
        assert!(form.field_value("dates").is_none());
    }

    #[test]
    fn restore_rebuilds_excluded_days() {
        let mut form = FormValues::new();
        form.set_field_value("dates", FieldValue::Dates(vec![d(10), d(1), d(3)]));

        let mut picker = picker();
        picker.restore(&form).unwrap();

        assert_eq!(picker.selected_dates(), &[d(1), d(3), d(10)]);
        assert_eq!(picker.excluded_dates().len(), 7);
        assert_eq!(picker.summary(), "3 dates selected");
    }

    #[test]
    fn day_state_precedence() {
        let mut form = FormValues::new();
        let mut picker = picker();
        picker.select_date(d(1), today(), &mut form);
        picker.select_date(d(3), today(), &mut form);

        assert_eq!(picker.day_state(&d(1), today()), DayState::Selected);
        assert_eq!(picker.day_state(&d(2), today()), DayState::Excluded);
        assert_eq!(picker.day_state(&d(4), today()), DayState::Available);
        assert_eq!(picker.day_state(&today().pred_opt().unwrap(), today()), DayState::Past);
    }

    #[test]
    fn change_month_moves_cursor() {
        let mut picker = picker();
        picker.change_month(1);
        assert_eq!(picker.cursor().label(), "November 2026");
        picker.change_month(-2);
        assert_eq!(picker.cursor().label(), "September 2026");
    }
}
