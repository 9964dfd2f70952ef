use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorgenError {
    #[error("Invalid value range: [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Timestamp overflow at record {index}")]
    TimestampOverflow { index: usize },

    #[error("Workbook serialization failed: {0}")]
    Workbook(String),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<rust_xlsxwriter::XlsxError> for SensorgenError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        SensorgenError::Workbook(e.to_string())
    }
}

/// Joins an error with each of its causes, outermost first.
pub fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
