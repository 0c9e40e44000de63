//! Error types.
//!
//! Most degraded conditions (unknown style names, missing 256-color support,
//! malformed XML) are not errors: they resolve to a fallback string. What is
//! left here are the conditions a caller has to handle.

use std::path::PathBuf;

/// Error type for fallible report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The XML parser could not rebuild a document it had already accepted.
    #[error("XML parser unavailable: {0}")]
    Parser(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration{}: {message}", location(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        ReportError::Config {
            path: None,
            message: err.to_string(),
        }
    }
}
