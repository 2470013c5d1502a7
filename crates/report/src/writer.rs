//! Report rendering and file output.

use std::fmt::{self, Write as _};
use std::path::Path;

use calpart_partition::{MonthRecord, SummaryStats};
use serde::Serialize;
use tracing::info;

use crate::block::ReportBlock;
use crate::error::ReportError;

/// Default report file name.
pub const DEFAULT_REPORT_PATH: &str = "output-calendar-partition.txt";

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Configuration for rendering a report.
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Include every month record after each summary.
    range_detailed: bool,
    /// Output format.
    format: ReportFormat,
}

impl WriterConfig {
    /// Sets whether per-month detail follows each summary.
    pub fn with_range_detailed(mut self, detailed: bool) -> Self {
        self.range_detailed = detailed;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns whether per-month detail is included.
    pub fn range_detailed(&self) -> bool {
        self.range_detailed
    }

    /// Returns the output format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

/// Renders blocks as text, one block per increment in the given order.
pub fn render_text(blocks: &[ReportBlock], config: &WriterConfig) -> String {
    let mut out = String::new();
    write_text(&mut out, blocks, config).expect("writing to a String cannot fail");
    out
}

fn write_text(out: &mut String, blocks: &[ReportBlock], config: &WriterConfig) -> fmt::Result {
    for block in blocks {
        writeln!(out, "DAY INCREMENT {}", block.increment_days())?;
        match block {
            ReportBlock::Analyzed(analysis) => {
                write_summary(out, analysis.summary())?;
                if config.range_detailed {
                    for record in analysis.records() {
                        write_record(out, record)?;
                    }
                }
            }
            ReportBlock::Skipped { reason, .. } => {
                writeln!(out, "Skipped: {reason}")?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

// Averages use `{:?}` so whole numbers keep their decimal point (`6.0`).
fn write_summary(out: &mut String, stats: &SummaryStats) -> fmt::Result {
    writeln!(
        out,
        "Average partitions in pull: {:?}",
        stats.partition_average()
    )?;
    writeln!(
        out,
        "Partition Min\\Max: {} | {}",
        stats.partition_min(),
        stats.partition_max()
    )?;
    writeln!(out, "Average day length of pull: {:?}", stats.day_average())?;
    writeln!(
        out,
        "Average unnecessary days in pull: {:?}",
        stats.unnecessary_average()
    )?;
    writeln!(out)
}

fn write_record(out: &mut String, record: &MonthRecord) -> fmt::Result {
    writeln!(
        out,
        "\tRANGE {} - {}:",
        record.range_begin(),
        record.range_end()
    )?;
    writeln!(
        out,
        "\tPartition range: {} - {}",
        record.front_partition_point(),
        record.back_partition_point()
    )?;
    writeln!(
        out,
        "\tPartitions, Days, Unnecessary Days: {} | {} | {}",
        record.partition_count(),
        record.day_length(),
        record.unnecessary_days()
    )?;
    writeln!(out)
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonBlock<'a> {
    Analyzed {
        increment_days: i64,
        summary: &'a SummaryStats,
        #[serde(skip_serializing_if = "Option::is_none")]
        records: Option<&'a [MonthRecord]>,
    },
    Skipped {
        increment_days: i64,
        reason: &'a str,
    },
}

/// Renders blocks as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ReportError::Serialization`] if serialization fails.
pub fn render_json(blocks: &[ReportBlock], config: &WriterConfig) -> Result<String, ReportError> {
    let entries: Vec<JsonBlock<'_>> = blocks
        .iter()
        .map(|block| match block {
            ReportBlock::Analyzed(analysis) => JsonBlock::Analyzed {
                increment_days: analysis.increment_days(),
                summary: analysis.summary(),
                records: config.range_detailed.then(|| analysis.records()),
            },
            ReportBlock::Skipped {
                increment_days,
                reason,
            } => JsonBlock::Skipped {
                increment_days: *increment_days,
                reason,
            },
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Renders `blocks` in the configured format and writes them to `path`,
/// replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the file cannot be written and
/// [`ReportError::Serialization`] if JSON rendering fails.
pub fn write_report(
    path: &Path,
    blocks: &[ReportBlock],
    config: &WriterConfig,
) -> Result<(), ReportError> {
    let contents = match config.format {
        ReportFormat::Text => render_text(blocks, config),
        ReportFormat::Json => render_json(blocks, config)?,
    };
    std::fs::write(path, contents).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        path = %path.display(),
        n_blocks = blocks.len(),
        format = ?config.format,
        "report written"
    );
    Ok(())
}
