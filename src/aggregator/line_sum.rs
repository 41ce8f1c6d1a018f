//! Total call cost over a span of input lines.
//!
//! Unlike frame scanning there is no per-frame breakdown: every call
//! record whose 1-based line number lies inside the range adds its
//! cost, negative ones included, to one running total. Lines outside
//! the range are not parsed at all.

use super::range::LineRange;
use crate::parser::reader::TraceReader;
use crate::parser::record::parse_record;
use crate::parser::schema::{Record, TraceLine};
use crate::utils::config::TraceDialect;
use crate::utils::error::TraceError;
use log::debug;
use std::path::Path;

/// Sum call costs on the lines covered by `range`
///
/// # Errors
/// * `TraceError::Malformed` - call record inside the range is malformed
/// * `TraceError::CostOverflow` - running total exceeds `i64`
pub fn sum_line_range<I>(lines: I, dialect: &TraceDialect, range: LineRange) -> Result<i64, TraceError>
where
    I: IntoIterator<Item = Result<TraceLine, TraceError>>,
{
    let mut total: i64 = 0;
    let mut counted = 0usize;

    for line in lines {
        let line = line?;
        let number = i64::try_from(line.number).unwrap_or(i64::MAX);

        if number > range.end {
            break;
        }
        if !range.contains(number) {
            continue;
        }

        if let Record::Call(call) = parse_record(&line, dialect)? {
            total = total
                .checked_add(call.cost)
                .ok_or(TraceError::CostOverflow { line: line.number })?;
            counted += 1;
        }
    }

    debug!("Summed {} calls over lines {}: {}", counted, range, total);
    Ok(total)
}

/// Open `path` and sum the calls on the lines covered by `range`
pub fn sum_trace_range(
    path: impl AsRef<Path>,
    dialect: &TraceDialect,
    range: LineRange,
) -> Result<i64, TraceError> {
    let reader = TraceReader::open(path)?;
    sum_line_range(reader, dialect, range)
}
