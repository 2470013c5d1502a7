//! Month alignment against a partition series.

use calpart_calendar::{Date, month_starts};
use tracing::trace;

use crate::error::PartitionError;
use crate::record::MonthRecord;
use crate::series::PartitionSeries;

/// Aligns `window_months` consecutive calendar months against `series`.
///
/// The first target month is the month after `start`'s month. For each
/// month `[range_begin, range_end)` the enclosing span runs from the point
/// immediately preceding the first point `>= range_begin` to the first
/// point `>= range_end`. A point landing exactly on `range_begin` therefore
/// still opens the span one increment earlier.
///
/// Returns an empty vector when `window_months == 0`.
///
/// # Errors
///
/// Returns [`PartitionError::InsufficientWindow`] when a month boundary has
/// no enclosing partition point on either side.
/// Returns [`PartitionError::Calendar`] if a month boundary overflows.
pub fn align_months(
    series: &PartitionSeries,
    start: Date,
    window_months: u32,
) -> Result<Vec<MonthRecord>, PartitionError> {
    let first = start.first_of_next_month()?;
    let bounds = month_starts(first, window_months)?;

    bounds
        .windows(2)
        .map(|range| align_month(series, range[0], range[1]))
        .collect()
}

/// Finds the enclosing partition points for a single month.
fn align_month(
    series: &PartitionSeries,
    range_begin: Date,
    range_end: Date,
) -> Result<MonthRecord, PartitionError> {
    let points = series.points();

    // Index of the first point >= range_begin; the front point precedes it.
    let begin_idx = points.partition_point(|&p| p < range_begin);
    if begin_idx == 0 || begin_idx == points.len() {
        return Err(PartitionError::InsufficientWindow {
            boundary: range_begin,
        });
    }
    let front = points[begin_idx - 1];

    let end_idx = points.partition_point(|&p| p < range_end);
    let back = points
        .get(end_idx)
        .copied()
        .ok_or(PartitionError::InsufficientWindow {
            boundary: range_end,
        })?;

    trace!(%range_begin, %front, %back, "aligned month");
    Ok(MonthRecord::new(
        range_begin,
        range_end,
        front,
        back,
        series.increment_days(),
    ))
}
