//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while interpreting a single trace record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing field `{field}` at index {index} (record has {found} fields)")]
    MissingField {
        field: &'static str,
        index: usize,
        found: usize,
    },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Errors that can occur while streaming a trace file
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("cannot open trace {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("cost total overflows a 64-bit integer at line {line}")]
    CostOverflow { line: usize },
}

/// Errors that can occur while writing reports
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),
}
