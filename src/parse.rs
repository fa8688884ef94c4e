//! parse.rs
//!
//! Resolution of the flexible source value a [`DiscordianDate`] can be
//! built from: an already-resolved calendar date, free-form text, or
//! nothing at all (meaning the current date). Free-form text is normalized
//! first and then matched against a fixed list of layouts, so inputs like
//! `"2013-04-12"`, `"08/09/2013"` and `"August 9th, 2013"` all resolve.
//!
//! [`DiscordianDate`]: crate::DiscordianDate

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DdateError;

/// Strips an ordinal suffix from day numbers, so "August 9th, 2013"
/// becomes "August 9, 2013" before layout matching.
static ORDINAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)\b").unwrap());

/// Collapses runs of whitespace so the layouts can assume single spaces.
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Layouts tried in order when resolving free-form text.
const TEXT_LAYOUTS: [&str; 6] = [
    "%Y-%m-%d",  // 2013-04-12
    "%m/%d/%Y",  // 04/12/2013
    "%B %d, %Y", // August 9, 2013
    "%b %d, %Y", // Aug 9, 2013
    "%d %B %Y",  // 9 August 2013
    "%B %d %Y",  // August 9 2013
];

/// The source value a Discordian date is constructed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateInput {
    /// Use the current local date at construction time.
    #[default]
    Today,
    /// An already-resolved calendar date.
    Date(NaiveDate),
    /// Free-form text to be parsed, e.g. `"2013-04-12"` or `"August 9, 2013"`.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Resolves a [`DateInput`] into a calendar date.
///
/// `Today` is resolved against the local clock exactly once, here; the
/// other variants never touch the clock.
///
/// # Errors
///
/// Returns [`DdateError::UnrecognizedDate`] if a `Text` input matches none
/// of the recognized layouts.
pub fn resolve(input: DateInput) -> Result<NaiveDate, DdateError> {
    match input {
        DateInput::Today => Ok(Local::now().date_naive()),
        DateInput::Date(date) => Ok(date),
        DateInput::Text(text) => parse_date(&text),
    }
}

/// Parses free-form date text into a calendar date.
///
/// The text is trimmed, day-number ordinal suffixes are stripped and
/// whitespace runs collapsed, then each recognized layout is tried in
/// order. The first match wins.
///
/// ```
/// # use ddate::parse::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2013, 8, 9).unwrap();
/// assert_eq!(parse_date("2013-08-09"), Ok(expected));
/// assert_eq!(parse_date("August 9th, 2013"), Ok(expected));
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, DdateError> {
    let cleaned = ORDINAL_SUFFIX_RE.replace_all(text.trim(), "$1");
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    for layout in TEXT_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, layout) {
            return Ok(date);
        }
    }
    Err(DdateError::UnrecognizedDate {
        input: text.to_string(),
    })
}
