//! Conversion of Gregorian calendar dates into the Discordian calendar,
//! rendered through a small `strftime`-style format mini-language.
//!
//! The Discordian year is made of 5 seasons of 73 days each with a 5-day
//! week, counted from 1166 BC (YOLD). A [`DiscordianDate`] is built from
//! an already-resolved [`chrono::NaiveDate`], from free-form text, or from
//! the current date, and is rendered with [`DiscordianDate::format`] (or
//! `Display`, which applies the default template).
//!
//! # Usage
//!
//! ```
//! use ddate::DiscordianDate;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2013, 4, 12).unwrap();
//! let ddate = DiscordianDate::from_gregorian(date);
//!
//! assert_eq!(ddate.to_string(), "Boomtime Discord 29th, YOLD 3179");
//! assert_eq!(ddate.format("%a %b %d"), "BT Dsc 29");
//!
//! // Free-form text works too, and is the only thing that can fail.
//! let parsed = DiscordianDate::new("August 9, 2013")?;
//! assert_eq!(parsed.to_string(), "Sweetmorn Bureaucracy 2nd, YOLD 3179");
//! # Ok::<(), ddate::DdateError>(())
//! ```

pub mod date;
pub mod discordian;
pub mod error;
pub mod format;
pub mod ordinal;
pub mod parse;

pub use discordian::DiscordianDate;
pub use error::DdateError;
pub use format::DEFAULT_TEMPLATE;
pub use parse::DateInput;
