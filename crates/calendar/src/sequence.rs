//! Month boundary sequence generation.

use crate::date::Date;
use crate::error::CalendarError;

/// Generates the boundaries of `n_months` consecutive calendar months.
///
/// Starting from the first day of `first`'s month, produces `n_months + 1`
/// first-of-month dates, so consecutive pairs delimit the half-open month
/// ranges `[begin, end)`. Year boundaries are handled automatically.
/// `n_months == 0` yields only the starting boundary.
///
/// # Errors
///
/// Returns [`CalendarError::Overflow`] if a boundary lies past the
/// representable range.
///
/// # Example
///
/// ```ignore
/// let first = Date::new(2016, 11, 20).unwrap();
/// let starts = month_starts(first, 3).unwrap();
/// // 2016-11-01, 2016-12-01, 2017-01-01, 2017-02-01
/// assert_eq!(starts.len(), 4);
/// ```
pub fn month_starts(first: Date, n_months: u32) -> Result<Vec<Date>, CalendarError> {
    let origin = first.first_of_month();
    (0..=n_months).map(|i| origin.add_months(i)).collect()
}
