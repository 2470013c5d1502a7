//! # calpart-report
//!
//! Serializes per-increment partition analyses to a flat text or JSON
//! report, one block per increment in configured order.

mod block;
mod error;
mod writer;

pub use block::ReportBlock;
pub use error::ReportError;
pub use writer::{
    DEFAULT_REPORT_PATH, ReportFormat, WriterConfig, render_json, render_text, write_report,
};
