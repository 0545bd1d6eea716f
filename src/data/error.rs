use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// RecordError – why a single CSV line could not become a StockPrice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields but found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field '{field}': '{value}' is not a valid {expected}")]
    InvalidField {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("field '{field}' must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

// ---------------------------------------------------------------------------
// LoadError – terminal failure of one load invocation
// ---------------------------------------------------------------------------

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    ResourceNotFound,
    Io,
    Parse,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `line` is 1-based and counts the header.
    #[error("line {line}: {reason} ('{content}')")]
    Parse {
        line: usize,
        content: String,
        #[source]
        reason: RecordError,
    },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::ResourceNotFound { .. } => LoadErrorKind::ResourceNotFound,
            LoadError::Io { .. } => LoadErrorKind::Io,
            LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }
}
