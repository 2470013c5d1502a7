use std::path::PathBuf;

use serde::Deserialize;

/// Top-level calpart configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalpartConfig {
    /// First partition point, `YYYY-MM-DD`.
    #[serde(default = "default_start_date")]
    pub start_date: String,

    /// Day increments to analyse, in report order.
    #[serde(default = "default_day_increments")]
    pub day_increments: Vec<i64>,

    /// Years of months to evaluate per increment.
    #[serde(default = "default_years_to_test")]
    pub years_to_test: u32,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl Default for CalpartConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            day_increments: default_day_increments(),
            years_to_test: default_years_to_test(),
            output: OutputToml::default(),
        }
    }
}

fn default_start_date() -> String {
    "2016-01-04".to_string()
}
fn default_day_increments() -> Vec<i64> {
    vec![6, 7, 8, 9, 10]
}
fn default_years_to_test() -> u32 {
    2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub range_detailed: bool,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            range_detailed: false,
            format: default_format(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(calpart_report::DEFAULT_REPORT_PATH)
}
fn default_format() -> String {
    "text".to_string()
}
