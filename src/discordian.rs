//! discordian.rs
//!
//! The Discordian calendar conversion. The Discordian year divides into 5
//! seasons of exactly 73 days with a 5-day week running uninterrupted
//! through the whole year, and counts years from 1166 BC (YOLD, the Year
//! of Our Lady of Discord). Every field is derived from the day-of-year
//! ordinal by plain modulo arithmetic; there is no St. Tib's Day special
//! case, so leap years shift the mapping relative to the traditional
//! Discordian calendar definition.
//!
//! # Overview
//!
//! - **`DiscordianDate`**: an immutable converted date, built from a
//!   [`DateInput`] (or directly from a [`NaiveDate`]).
//! - Accessors for the derived fields: `day`, `day_ordinal`, `weekday`,
//!   `season`, `year`.
//! - Rendering through a format template lives in [`crate::format`].

use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::date::date_to_ydays;
use crate::error::DdateError;
use crate::ordinal::ordinalize;
use crate::parse::{self, DateInput};

/// Days in each Discordian season.
pub const SEASON_LENGTH: u32 = 73;

/// Days in the Discordian week.
pub const WEEK_LENGTH: u32 = 5;

/// Offset between a Gregorian year and its YOLD numbering.
pub const YOLD_OFFSET: i32 = 1166;

/// Long names of the five Discordian seasons, in calendar order.
pub static SEASONS_LONG: [&str; 5] =
    ["Chaos", "Discord", "Confusion", "Bureaucracy", "The Aftermath"];

/// Abbreviated season names, index-aligned with [`SEASONS_LONG`].
pub static SEASONS_SHORT: [&str; 5] = ["Chs", "Dsc", "Cfn", "Bcy", "Afm"];

/// Long names of the five Discordian weekdays, in week order.
pub static WEEKDAYS_LONG: [&str; 5] = [
    "Sweetmorn",
    "Boomtime",
    "Pungenday",
    "Prickle-Prickle",
    "Setting Orange",
];

/// Abbreviated weekday names, index-aligned with [`WEEKDAYS_LONG`].
pub static WEEKDAYS_SHORT: [&str; 5] = ["SM", "BT", "PD", "PP", "SO"];

/// A calendar date converted to the Discordian calendar.
///
/// The source date and its day-of-year ordinal are fixed at construction;
/// every accessor is a pure function of those two fields, so repeated
/// calls always return the same value.
///
/// ```
/// use ddate::DiscordianDate;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2013, 4, 12).unwrap();
/// let ddate = DiscordianDate::from_gregorian(date);
/// assert_eq!(ddate.weekday(true), "Boomtime");
/// assert_eq!(ddate.season(true), Some("Discord"));
/// assert_eq!(ddate.day_ordinal(), "29th");
/// assert_eq!(ddate.year(), 3179);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordianDate {
    gregorian: NaiveDate,
    day_of_year: u32,
}

impl DiscordianDate {
    /// Converts the given source value.
    ///
    /// Accepts anything convertible into a [`DateInput`]: a resolved
    /// [`NaiveDate`], free-form text, or [`DateInput::Today`].
    ///
    /// # Errors
    ///
    /// Returns [`DdateError::UnrecognizedDate`] if a text input cannot be
    /// parsed. No other input can fail.
    ///
    /// ```
    /// # use ddate::DiscordianDate;
    /// let ddate = DiscordianDate::new("2013-04-12").unwrap();
    /// assert_eq!(ddate.year(), 3179);
    /// assert!(DiscordianDate::new("immanentize").is_err());
    /// ```
    pub fn new(input: impl Into<DateInput>) -> Result<Self, DdateError> {
        let gregorian = parse::resolve(input.into())?;
        Ok(Self::from_gregorian(gregorian))
    }

    /// Converts an already-resolved calendar date. Infallible.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let day_of_year = date_to_ydays(date.day(), date.month(), date.year());
        DiscordianDate {
            gregorian: date,
            day_of_year,
        }
    }

    /// Converts the current local date.
    pub fn today() -> Self {
        Self::from_gregorian(Local::now().date_naive())
    }

    /// Returns the source calendar date.
    pub fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Returns the 1-based day-of-year ordinal of the source date.
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Returns the 0-based day within the season, `day_of_year mod 73`.
    ///
    /// Day 73·k of the year maps to day 0 of season k, so season
    /// boundaries fall on the multiples of 73.
    pub fn day(&self) -> u32 {
        self.day_of_year % SEASON_LENGTH
    }

    /// Returns the day within the season with its ordinal suffix
    /// appended, e.g. `"29th"`.
    pub fn day_ordinal(&self) -> String {
        ordinalize(self.day())
    }

    /// Returns the weekday name, long or abbreviated.
    ///
    /// The 5-day week cycles uninterrupted from January 1, so the index
    /// is `(day_of_year - 1) mod 5`.
    pub fn weekday(&self, long: bool) -> &'static str {
        let index = ((self.day_of_year - 1) % WEEK_LENGTH) as usize;
        if long {
            WEEKDAYS_LONG[index]
        } else {
            WEEKDAYS_SHORT[index]
        }
    }

    /// Returns the season name, long or abbreviated.
    ///
    /// The index is `day_of_year / 73`. On the last day of the year the
    /// quotient reaches 5 (365 = 5·73, and 366 likewise lands past the
    /// table), which names no season: the accessor returns `None` and
    /// formatting renders it as the empty string.
    pub fn season(&self, long: bool) -> Option<&'static str> {
        let index = (self.day_of_year / SEASON_LENGTH) as usize;
        let table = if long { &SEASONS_LONG } else { &SEASONS_SHORT };
        table.get(index).copied()
    }

    /// Returns the YOLD year, the Gregorian year plus 1166. Holds for all
    /// years, including years before the common era.
    pub fn year(&self) -> i32 {
        self.gregorian.year() + YOLD_OFFSET
    }
}

impl FromStr for DiscordianDate {
    type Err = DdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_date(s).map(Self::from_gregorian)
    }
}
