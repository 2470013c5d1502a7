//! Analyze command: evaluate every day increment and write the report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug_span, info, info_span, warn};

use calpart_calendar::Date;
use calpart_partition::analyze_increment;
use calpart_report::{ReportBlock, WriterConfig, write_report};

use crate::cli::{AnalyzeArgs, FormatArg};
use crate::config::CalpartConfig;
use crate::convert;

/// Explicit parameters for one analysis run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub start_date: Date,
    pub day_increments: Vec<i64>,
    pub months_to_test: u32,
    pub output: PathBuf,
    pub writer: WriterConfig,
}

/// Run the analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load optional TOML config, then let CLI flags override it
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    let run_cfg = convert::build_run_config(&config)?;
    info!(
        start_date = %run_cfg.start_date,
        n_increments = run_cfg.day_increments.len(),
        months_to_test = run_cfg.months_to_test,
        "starting analysis"
    );

    // 2. Analyse each increment independently
    let blocks = analyze_all(&run_cfg);

    // 3. Write report
    write_report(&run_cfg.output, &blocks, &run_cfg.writer)
        .with_context(|| format!("failed to write report: {}", run_cfg.output.display()))?;

    Ok(())
}

/// Analyses every configured increment in order.
///
/// A failing increment is logged and kept as a skipped block so the
/// remaining increments still run.
pub fn analyze_all(run: &RunConfig) -> Vec<ReportBlock> {
    run.day_increments
        .iter()
        .map(|&increment| {
            let _inc = debug_span!("increment", days = increment).entered();
            let result = analyze_increment(run.start_date, increment, run.months_to_test);
            match &result {
                Ok(analysis) => info!(
                    increment_days = increment,
                    partition_average = analysis.summary().partition_average(),
                    unnecessary_average = analysis.summary().unnecessary_average(),
                    "increment analysed"
                ),
                Err(e) => warn!(increment_days = increment, error = %e, "skipping increment"),
            }
            ReportBlock::from_result(increment, result)
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<CalpartConfig> {
    let Some(path) = path else {
        return Ok(CalpartConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

fn apply_overrides(config: &mut CalpartConfig, args: &AnalyzeArgs) {
    if let Some(ref start_date) = args.start_date {
        config.start_date = start_date.clone();
    }
    if let Some(ref increments) = args.increments {
        config.day_increments = increments.clone();
    }
    if let Some(years) = args.years {
        config.years_to_test = years;
    }
    if let Some(ref output) = args.output {
        config.output.path = output.clone();
    }
    if args.detailed {
        config.output.range_detailed = true;
    }
    if let Some(format) = args.format {
        config.output.format = match format {
            FormatArg::Text => "text",
            FormatArg::Json => "json",
        }
        .to_string();
    }
}
