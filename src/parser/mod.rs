//! Trace reading and record parsing.
//!
//! This module handles:
//! - Streaming lines out of a trace file
//! - Classifying records by their first field
//! - Extracting typed call fields against a declared layout

pub mod reader;
pub mod record;
pub mod schema;

// Re-export main types
pub use reader::TraceReader;
pub use record::{classify, parse_call, parse_record};
pub use schema::{CallRecord, FieldLayout, Record, RecordKind, TraceLine};
