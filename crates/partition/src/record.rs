//! Per-month alignment record.

use calpart_calendar::Date;
use serde::Serialize;

/// How one calendar month sits inside its enclosing partition span.
///
/// Invariant: `front_partition_point <= range_begin <= range_end <= back_partition_point`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    range_begin: Date,
    range_end: Date,
    front_partition_point: Date,
    back_partition_point: Date,
    partition_count: i64,
    day_length: i64,
    unnecessary_days: i64,
}

impl MonthRecord {
    /// Derives the span statistics for the month `[range_begin, range_end)`
    /// enclosed by `[front, back]`.
    pub(crate) fn new(
        range_begin: Date,
        range_end: Date,
        front: Date,
        back: Date,
        increment_days: i64,
    ) -> Self {
        debug_assert!(front <= range_begin && range_begin <= range_end && range_end <= back);
        let day_length = front.days_until(back);
        Self {
            range_begin,
            range_end,
            front_partition_point: front,
            back_partition_point: back,
            partition_count: day_length / increment_days,
            day_length,
            unnecessary_days: front.days_until(range_begin) + range_end.days_until(back),
        }
    }

    /// First day of the month.
    pub fn range_begin(&self) -> Date {
        self.range_begin
    }

    /// First day of the following month (exclusive end).
    pub fn range_end(&self) -> Date {
        self.range_end
    }

    /// Partition point opening the enclosing span.
    pub fn front_partition_point(&self) -> Date {
        self.front_partition_point
    }

    /// Partition point closing the enclosing span.
    pub fn back_partition_point(&self) -> Date {
        self.back_partition_point
    }

    /// Whole increments between the front and back partition points.
    pub fn partition_count(&self) -> i64 {
        self.partition_count
    }

    /// Days between the front and back partition points.
    pub fn day_length(&self) -> i64 {
        self.day_length
    }

    /// Days inside the enclosing span but outside the month.
    pub fn unnecessary_days(&self) -> i64 {
        self.unnecessary_days
    }
}
