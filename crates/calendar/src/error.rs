//! Error types for the calpart-calendar crate.

/// Error type for all fallible operations in the calpart-calendar crate.
///
/// This enum covers construction of dates that do not exist in the
/// proleptic Gregorian calendar, arithmetic that leaves the representable
/// range, and ISO date strings that cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a real calendar day.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The requested day of month.
        day: u32,
    },

    /// Returned when day or month arithmetic leaves the representable range.
    #[error("date overflow: {reason}")]
    Overflow {
        /// Description of the operation that overflowed.
        reason: String,
    },

    /// Returned when a string is not a valid `YYYY-MM-DD` date.
    #[error("cannot parse date '{input}': {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Description of the parse failure.
        reason: String,
    },
}
