//! End-to-end analysis of a single day increment.

use calpart_calendar::Date;
use serde::Serialize;
use tracing::debug;

use crate::align::align_months;
use crate::error::PartitionError;
use crate::record::MonthRecord;
use crate::series::generate_series;
use crate::summary::{SummaryStats, summarize};

/// Month records and their summary for one day increment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncrementAnalysis {
    increment_days: i64,
    summary: SummaryStats,
    records: Vec<MonthRecord>,
}

impl IncrementAnalysis {
    /// The analysed day increment.
    pub fn increment_days(&self) -> i64 {
        self.increment_days
    }

    /// Summary statistics over all evaluated months.
    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    /// Per-month records in calendar order.
    pub fn records(&self) -> &[MonthRecord] {
        &self.records
    }
}

/// Generates, aligns, and summarizes partitions for one increment.
///
/// # Errors
///
/// Returns [`PartitionError::InvalidInput`] for a non-positive increment,
/// [`PartitionError::EmptyInput`] when `window_months == 0`, and any
/// alignment or calendar error from the underlying steps.
#[tracing::instrument(level = "debug", skip(start), fields(start = %start))]
pub fn analyze_increment(
    start: Date,
    increment_days: i64,
    window_months: u32,
) -> Result<IncrementAnalysis, PartitionError> {
    let series = generate_series(start, increment_days, window_months)?;
    debug!(n_points = series.len(), "generated partition series");

    let records = align_months(&series, start, window_months)?;
    debug!(n_months = records.len(), "aligned months");

    let summary = summarize(&records)?;
    debug!(
        partition_average = summary.partition_average(),
        unnecessary_average = summary.unnecessary_average(),
        "summarized increment"
    );

    Ok(IncrementAnalysis {
        increment_days,
        summary,
        records,
    })
}
