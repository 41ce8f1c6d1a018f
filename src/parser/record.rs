//! Record classification and typed field extraction.

use super::schema::{CallRecord, FieldLayout, Record, RecordKind, TraceLine};
use crate::utils::config::TraceDialect;
use crate::utils::error::{ParseError, TraceError};

/// Classify a record by its first field
///
/// Blank lines have no first field and come back as `Other`.
pub fn classify(fields: &[&str], dialect: &TraceDialect) -> RecordKind {
    match fields.first() {
        Some(&kind) if kind == dialect.call_marker => RecordKind::Call,
        Some(&kind) if kind == dialect.frame_end_marker => RecordKind::FrameEnd,
        _ => RecordKind::Other,
    }
}

/// Extract the typed fields of a call record
///
/// # Errors
/// * `ParseError::MissingField` - record shorter than the layout requires
/// * `ParseError::InvalidInteger` - timestamp or cost is not an integer
pub fn parse_call(fields: &[&str], layout: &FieldLayout) -> Result<CallRecord, ParseError> {
    let timestamp = layout
        .timestamp
        .map(|index| field(fields, "timestamp", index).and_then(|v| parse_int("timestamp", v)))
        .transpose()?;

    let cost = parse_int("cost", field(fields, "cost", layout.cost)?)?;

    let call_site = layout
        .call_site
        .map(|index| field(fields, "call_site", index).map(str::to_string))
        .transpose()?;

    Ok(CallRecord {
        timestamp,
        cost,
        call_site,
    })
}

/// Classify and parse one trace line
///
/// Parse failures are tagged with the line number.
pub fn parse_record(line: &TraceLine, dialect: &TraceDialect) -> Result<Record, TraceError> {
    let fields = line.fields();

    match classify(&fields, dialect) {
        RecordKind::Call => parse_call(&fields, &dialect.layout)
            .map(Record::Call)
            .map_err(|source| TraceError::Malformed {
                line: line.number,
                source,
            }),
        RecordKind::FrameEnd => Ok(Record::FrameEnd),
        RecordKind::Other => Ok(Record::Other),
    }
}

fn field<'a>(fields: &[&'a str], name: &'static str, index: usize) -> Result<&'a str, ParseError> {
    fields.get(index).copied().ok_or(ParseError::MissingField {
        field: name,
        index,
        found: fields.len(),
    })
}

fn parse_int(name: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        field: name,
        value: value.to_string(),
    })
}
