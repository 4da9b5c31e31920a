//! Core logic for the datepick multi-date picker.
//!
//! - `gaps`: the excluded-day inference and the toggle/reset operations
//! - `day`: calendar-day normalisation and display helpers
//! - `month`: month cursor and month grid construction
//! - `picker`: the picker component with form write-back and callbacks
//! - `form`: the form-state seam the picker writes into
//! - `config` and `store`: user configuration and the persisted form values

pub mod clock;
pub mod config;
pub mod day;
pub mod error;
pub mod form;
pub mod gaps;
pub mod month;
pub mod picker;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::CalendarDay;
pub use error::{DatePickError, DatePickResult};
pub use form::{FieldValue, FormState, FormValues};
pub use gaps::{DateSelection, ToggleOutcome, compute_excluded_dates, reset, toggle_date};
pub use month::{GridCell, MonthCursor};
pub use picker::{DayState, MultiDatePicker, PickerOptions};
