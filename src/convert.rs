//! Pure conversion functions: TOML config structs -> run configuration.

use anyhow::{Context, Result, bail};

use calpart_calendar::Date;
use calpart_report::{ReportFormat, WriterConfig};

use crate::analyze_cmd::RunConfig;
use crate::config::CalpartConfig;

/// Parses a report format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<ReportFormat> {
    match s.to_lowercase().as_str() {
        "text" | "txt" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => bail!("unknown report format: {other:?}"),
    }
}

/// Builds a [`RunConfig`] from the TOML configuration.
pub fn build_run_config(config: &CalpartConfig) -> Result<RunConfig> {
    let start_date: Date = config
        .start_date
        .parse()
        .with_context(|| format!("invalid start_date {:?}", config.start_date))?;

    let Some(months_to_test) = config.years_to_test.checked_mul(12) else {
        bail!("years_to_test too large: {}", config.years_to_test);
    };

    let writer = WriterConfig::default()
        .with_range_detailed(config.output.range_detailed)
        .with_format(parse_format(&config.output.format)?);

    Ok(RunConfig {
        start_date,
        day_increments: config.day_increments.clone(),
        months_to_test,
        output: config.output.path.clone(),
        writer,
    })
}
