//! Error types for evidence parsing and gathering

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing or gathering evidence
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// Source file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Record does not follow the `index<summary<content` layout
    #[error("Malformed record{}: {reason}", location(.path))]
    Format {
        /// File the record came from, when known
        path: Option<PathBuf>,
        /// What was wrong with the record
        reason: String,
    },

    /// Gathering aborted on a failing path
    #[error("Gathering aborted at {path}: {source}")]
    Gather {
        /// Path that failed
        path: PathBuf,
        /// Parse failure for that path
        #[source]
        source: Box<EvidenceError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EvidenceError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        EvidenceError::Format {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attach a source path to a format error that has none yet
    pub(crate) fn at_path(self, at: &std::path::Path) -> Self {
        match self {
            EvidenceError::Format { path: None, reason } => EvidenceError::Format {
                path: Some(at.to_path_buf()),
                reason,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}
