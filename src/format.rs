//! format.rs
//!
//! The `strftime`-style template interpreter for [`DiscordianDate`].
//!
//! A template is scanned left to right. Literal characters are copied
//! verbatim; a `%` consumes exactly one following character and
//! substitutes:
//!
//! | Directive | Substitution |
//! |-----------|--------------|
//! | `%A`      | long weekday name |
//! | `%a`      | abbreviated weekday name |
//! | `%B`      | long season name |
//! | `%b`      | abbreviated season name |
//! | `%d`      | day of the season |
//! | `%e`      | day of the season with its ordinal suffix |
//! | `%n`      | newline |
//! | `%t`      | tab |
//! | `%Y`      | YOLD year |
//!
//! Any other directive, including a `%` at the end of the template,
//! produces no output at all: the `%` and the character after it are both
//! consumed and dropped, never passed through literally.

use std::fmt;

use crate::discordian::DiscordianDate;

/// Template applied when no explicit format is given. Renders like
/// `Boomtime Discord 29th, YOLD 3179`.
pub const DEFAULT_TEMPLATE: &str = "%A %B %e, YOLD %Y";

impl DiscordianDate {
    /// Renders the date through the given template.
    ///
    /// Each directive occurrence queries the corresponding accessor
    /// independently; nothing is cached across occurrences.
    ///
    /// ```
    /// # use ddate::DiscordianDate;
    /// let ddate = DiscordianDate::new("2013-04-12").unwrap();
    /// assert_eq!(ddate.format("%A, %B %e"), "Boomtime, Discord 29th");
    /// assert_eq!(ddate.format("%a %b %d"), "BT Dsc 29");
    /// // Unrecognized directives vanish.
    /// assert_eq!(ddate.format("x%zy"), "xy");
    /// ```
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('A') => out.push_str(self.weekday(true)),
                Some('a') => out.push_str(self.weekday(false)),
                Some('B') => out.push_str(self.season(true).unwrap_or("")),
                Some('b') => out.push_str(self.season(false).unwrap_or("")),
                Some('d') => out.push_str(&self.day().to_string()),
                Some('e') => out.push_str(&self.day_ordinal()),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('Y') => out.push_str(&self.year().to_string()),
                // Unrecognized directive, or end of input right after the
                // '%': emit nothing.
                Some(_) | None => {}
            }
        }
        out
    }
}

impl fmt::Display for DiscordianDate {
    /// Renders with [`DEFAULT_TEMPLATE`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}
