//! Turning user input into calendar days.

use anyhow::Result;
use chrono::NaiveDate;
use datepick_core::day::parse_day;

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// YYYY-MM-DD, or natural language like "tomorrow" or "next fri".
/// Any time of day in the input is dropped.
pub fn parse_day_input(input: &str) -> Result<NaiveDate> {
    if let Ok(day) = parse_day(input) {
        return Ok(day);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

pub fn parse_all(inputs: &[String]) -> Result<Vec<NaiveDate>> {
    inputs.iter().map(|s| parse_day_input(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local};

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("tues"), "tuesday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("Sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("next  friday"), "next friday");
    }

    #[test]
    fn iso_dates_parse_directly() {
        assert_eq!(
            parse_day_input("2026-11-03").unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()
        );
    }

    #[test]
    fn natural_language_drops_time() {
        let today = Local::now().date_naive();
        let day = parse_day_input("tomorrow 3pm").unwrap();
        assert_eq!(day, today.succ_opt().unwrap());
    }

    #[test]
    fn month_names_parse() {
        let day = parse_day_input("march 20").unwrap();
        assert_eq!((day.month(), day.day()), (3, 20));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_day_input("not a date at all xyz").is_err());
        assert!(parse_all(&["2026-11-03".into(), "xyz qq".into()]).is_err());
    }
}
