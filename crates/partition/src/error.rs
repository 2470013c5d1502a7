//! Error types for the calpart-partition crate.

use calpart_calendar::{CalendarError, Date};

/// Error type for all fallible operations in the calpart-partition crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartitionError {
    /// Returned when the day increment is zero or negative.
    #[error("invalid day increment: {increment_days} (must be positive)")]
    InvalidInput {
        /// The rejected increment.
        increment_days: i64,
    },

    /// Returned when summarizing an empty sequence of month records.
    #[error("no month records to summarize")]
    EmptyInput,

    /// Returned when no partition point encloses a month boundary.
    #[error("partition series does not enclose month boundary {boundary}")]
    InsufficientWindow {
        /// The month boundary left without an enclosing partition point.
        boundary: Date,
    },

    /// Wraps an error originating from the calpart-calendar crate.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = PartitionError::InvalidInput { increment_days: 0 };
        assert_eq!(err.to_string(), "invalid day increment: 0 (must be positive)");
    }

    #[test]
    fn empty_input_display() {
        assert_eq!(
            PartitionError::EmptyInput.to_string(),
            "no month records to summarize"
        );
    }

    #[test]
    fn insufficient_window_display() {
        let err = PartitionError::InsufficientWindow {
            boundary: Date::new(2016, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "partition series does not enclose month boundary 2016-03-01"
        );
    }

    #[test]
    fn calendar_error_converts() {
        let inner = CalendarError::Overflow {
            reason: "adding 1 months to +262143-12-01".to_string(),
        };
        let err: PartitionError = inner.clone().into();
        assert_eq!(err, PartitionError::Calendar(inner));
        assert!(err.to_string().starts_with("calendar error: date overflow"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PartitionError>();
    }
}
