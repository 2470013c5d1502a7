//! # calpart-partition
//!
//! Fixed-increment partitioning of the calendar and its alignment with
//! month boundaries.
//!
//! # Pipeline
//!
//! ```text
//!  ┌─────────────────┐     ┌────────────────┐     ┌───────────────┐
//!  │ generate_series │────▶│  align_months  │────▶│   summarize   │
//!  │ (partition pts) │     │ (MonthRecords) │     │ (SummaryStats)│
//!  └─────────────────┘     └────────────────┘     └───────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use calpart_calendar::Date;
//! use calpart_partition::analyze_increment;
//!
//! let start = Date::new(2016, 1, 4)?;
//! let analysis = analyze_increment(start, 7, 24)?;
//! println!("{}", analysis.summary().unnecessary_average());
//! ```

mod align;
mod analysis;
mod error;
mod record;
mod series;
mod summary;

pub use align::align_months;
pub use analysis::{IncrementAnalysis, analyze_increment};
pub use error::PartitionError;
pub use record::MonthRecord;
pub use series::{PartitionSeries, WINDOW_PADDING_MONTHS, generate_series};
pub use summary::{SummaryStats, summarize};
