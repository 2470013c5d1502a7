//! Reduction of month records into summary statistics.

use serde::Serialize;

use crate::error::PartitionError;
use crate::record::MonthRecord;

/// Summary of how one increment aligns with calendar months.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    month_count: usize,
    partition_average: f64,
    partition_min: i64,
    partition_max: i64,
    day_average: f64,
    unnecessary_average: f64,
}

impl SummaryStats {
    /// Number of months summarized.
    pub fn month_count(&self) -> usize {
        self.month_count
    }

    /// Mean partitions spanning a month.
    pub fn partition_average(&self) -> f64 {
        self.partition_average
    }

    /// Fewest partitions spanning any month.
    pub fn partition_min(&self) -> i64 {
        self.partition_min
    }

    /// Most partitions spanning any month.
    pub fn partition_max(&self) -> i64 {
        self.partition_max
    }

    /// Mean enclosing span length in days.
    pub fn day_average(&self) -> f64 {
        self.day_average
    }

    /// Mean days per span falling outside the month.
    pub fn unnecessary_average(&self) -> f64 {
        self.unnecessary_average
    }
}

/// Reduces month records to averages and partition-count extremes.
///
/// # Errors
///
/// Returns [`PartitionError::EmptyInput`] if `records` is empty.
pub fn summarize(records: &[MonthRecord]) -> Result<SummaryStats, PartitionError> {
    let partitions: Vec<i64> = records.iter().map(MonthRecord::partition_count).collect();
    let (partition_min, partition_max) =
        calpart_stats::min_max(&partitions).ok_or(PartitionError::EmptyInput)?;

    let days: Vec<i64> = records.iter().map(MonthRecord::day_length).collect();
    let unnecessary: Vec<i64> = records.iter().map(MonthRecord::unnecessary_days).collect();

    Ok(SummaryStats {
        month_count: records.len(),
        partition_average: calpart_stats::mean_counts(&partitions),
        partition_min,
        partition_max,
        day_average: calpart_stats::mean_counts(&days),
        unnecessary_average: calpart_stats::mean_counts(&unnecessary),
    })
}
