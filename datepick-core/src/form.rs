//! The form-state seam.
//!
//! The picker never owns where its values end up. It writes the selected
//! days into a named field of whatever [`FormState`] the caller hands it,
//! and reads them back from there when restoring.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DatePickError, DatePickResult};

/// A single form field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Dates(Vec<NaiveDate>),
    Text(String),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn as_dates(&self) -> Option<&[NaiveDate]> {
        match self {
            FieldValue::Dates(dates) => Some(dates),
            FieldValue::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Dates(dates) => dates.is_empty(),
            FieldValue::Text(text) => text.is_empty(),
        }
    }
}

/// A container of named field values plus a per-field error channel.
pub trait FormState {
    fn field_value(&self, field: &str) -> Option<&FieldValue>;

    fn set_field_value(&mut self, field: &str, value: FieldValue);

    fn field_error(&self, field: &str) -> Option<&str>;

    fn set_field_error(&mut self, field: &str, message: String);

    fn clear_field_error(&mut self, field: &str);

    /// Read a field expected to hold dates. A missing field reads as empty.
    fn field_dates(&self, field: &str) -> DatePickResult<Vec<NaiveDate>> {
        match self.field_value(field) {
            None => Ok(Vec::new()),
            Some(FieldValue::Dates(dates)) => Ok(dates.clone()),
            // Invalidated fields hold empty text
            Some(FieldValue::Text(text)) if text.is_empty() => Ok(Vec::new()),
            Some(FieldValue::Text(_)) => Err(DatePickError::FieldType {
                field: field.to_string(),
            }),
        }
    }
}

/// In-memory form values, ordered by field name for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub values: BTreeMap<String, FieldValue>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormState for FormValues {
    fn field_value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    fn set_field_value(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    fn set_field_error(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), message);
    }

    fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn missing_field_reads_as_no_dates() {
        let form = FormValues::new();
        assert!(form.field_dates("dates").unwrap().is_empty());
    }

    #[test]
    fn invalidated_field_reads_as_no_dates() {
        let mut form = FormValues::new();
        form.set_field_value("dates", FieldValue::empty_text());
        assert!(form.field_dates("dates").unwrap().is_empty());
    }

    #[test]
    fn text_field_is_not_dates() {
        let mut form = FormValues::new();
        form.set_field_value("numberOfDays", FieldValue::Text("3".into()));
        assert!(matches!(
            form.field_dates("numberOfDays"),
            Err(DatePickError::FieldType { .. })
        ));
    }

    #[test]
    fn error_channel_is_per_field() {
        let mut form = FormValues::new();
        form.set_field_error("dates", "Pick at least two days".into());
        assert_eq!(form.field_error("dates"), Some("Pick at least two days"));
        assert_eq!(form.field_error("other"), None);
        form.clear_field_error("dates");
        assert_eq!(form.field_error("dates"), None);
    }

    #[test]
    fn json_shape_uses_plain_values() {
        let mut form = FormValues::new();
        form.set_field_value("dates", FieldValue::Dates(vec![d(1), d(3)]));
        form.set_field_value("numberOfDays", FieldValue::empty_text());

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "values": {
                    "dates": ["2026-02-01", "2026-02-03"],
                    "numberOfDays": ""
                }
            })
        );

        let back: FormValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }
}
