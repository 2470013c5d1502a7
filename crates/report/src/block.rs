//! One report entry per configured day increment.

use calpart_partition::{IncrementAnalysis, PartitionError};

/// Outcome of analysing one day increment, in report order.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBlock {
    /// The increment was analysed successfully.
    Analyzed(IncrementAnalysis),
    /// The increment could not be analysed; the batch carried on without it.
    Skipped {
        /// The increment that failed.
        increment_days: i64,
        /// Why it was skipped.
        reason: String,
    },
}

impl ReportBlock {
    /// Builds a block from an analysis result, turning errors into skips.
    pub fn from_result(
        increment_days: i64,
        result: Result<IncrementAnalysis, PartitionError>,
    ) -> Self {
        match result {
            Ok(analysis) => Self::Analyzed(analysis),
            Err(e) => Self::Skipped {
                increment_days,
                reason: e.to_string(),
            },
        }
    }

    /// The increment this block reports on.
    pub fn increment_days(&self) -> i64 {
        match self {
            Self::Analyzed(analysis) => analysis.increment_days(),
            Self::Skipped { increment_days, .. } => *increment_days,
        }
    }

    /// Returns `true` for a skipped increment.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
