//! Partition point series generation.

use calpart_calendar::Date;

use crate::error::PartitionError;

/// Months of padding added past the evaluated window so that the last
/// month's closing boundary always has an enclosing partition point.
pub const WINDOW_PADDING_MONTHS: u32 = 2;

/// Strictly increasing partition points spaced a fixed number of days apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSeries {
    start: Date,
    increment_days: i64,
    points: Vec<Date>,
}

impl PartitionSeries {
    /// Returns the first partition point.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the spacing between consecutive points, in days.
    pub fn increment_days(&self) -> i64 {
        self.increment_days
    }

    /// Returns the partition points in ascending order.
    pub fn points(&self) -> &[Date] {
        &self.points
    }

    /// Returns the number of partition points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the series and returns the points.
    pub fn into_points(self) -> Vec<Date> {
        self.points
    }
}

/// Generates partition points from `start` in steps of `increment_days`.
///
/// Points are emitted while they do not pass `start` plus
/// `window_months + 2` months, giving the aligner two months of padding
/// beyond the evaluated window.
///
/// # Errors
///
/// Returns [`PartitionError::InvalidInput`] if `increment_days <= 0`.
/// Returns [`PartitionError::Calendar`] if the window end or a partition
/// point lies outside the representable date range.
#[tracing::instrument(level = "trace", skip(start), fields(start = %start))]
pub fn generate_series(
    start: Date,
    increment_days: i64,
    window_months: u32,
) -> Result<PartitionSeries, PartitionError> {
    if increment_days <= 0 {
        return Err(PartitionError::InvalidInput { increment_days });
    }

    let end = start.add_months(window_months.saturating_add(WINDOW_PADDING_MONTHS))?;
    let capacity = usize::try_from(start.days_until(end) / increment_days).unwrap_or(0) + 1;

    let mut points = Vec::with_capacity(capacity);
    let mut current = start;
    while current <= end {
        points.push(current);
        current = current.add_days(increment_days)?;
    }

    Ok(PartitionSeries {
        start,
        increment_days,
        points,
    })
}
