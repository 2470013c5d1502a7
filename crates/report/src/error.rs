//! Error types for calpart-report.

use std::path::PathBuf;

/// Error type for all fallible operations in the calpart-report crate.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Returned when the report file cannot be created or written.
    #[error("failed to write report {}: {reason}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when JSON serialization fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Serialization {
            reason: e.to_string(),
        }
    }
}
