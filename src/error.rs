//! Error types for the ddate crate.

/// Error type for all fallible operations in the ddate crate.
///
/// The only failure this crate can produce is a free-form date string that
/// matches none of the recognized layouts. Malformed format directives are
/// not errors (they are dropped during rendering), and the season-table
/// boundary on the last day of the year is handled by returning an absent
/// value rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DdateError {
    /// Returned when a date string matches none of the recognized layouts.
    #[error("unrecognized date: {input:?}")]
    UnrecognizedDate {
        /// The text that could not be parsed, as supplied by the caller.
        input: String,
    },
}
