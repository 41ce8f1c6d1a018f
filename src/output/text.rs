//! Plain-text report writers.
//!
//! Every writer takes the sink as `&mut impl Write` so the binary can
//! print to stdout while tests capture into a buffer.

use crate::aggregator::{FrameReport, FrameStats, LineRange};
use crate::parser::schema::TraceLine;
use crate::utils::config::IN_RANGE_MARKER;
use crate::utils::error::OutputError;
use std::io::Write;

/// Write the ranked call sites of a frame, then its `FID` boundary line
///
/// # Example
/// ```text
/// glDrawElements                                            30
/// glClear                                                    5
/// FID xxx2 frame_end: 1234
/// ```
pub fn write_ranked_frame(out: &mut impl Write, report: &FrameReport) -> Result<(), OutputError> {
    for entry in &report.ranked {
        writeln!(out, "{:<48} {:>12}", entry.call_site, entry.cost)?;
    }

    writeln!(out, "{}", frame_id_line(report))?;
    Ok(())
}

/// `FID <n> <boundary>`, with the in-range marker glued to the number
pub fn frame_id_line(report: &FrameReport) -> String {
    let marker = if report.in_range { IN_RANGE_MARKER } else { "" };
    format!("FID {}{} {}", marker, report.frame_no, report.boundary)
}

/// Write the total cost of a frame
pub fn write_frame_total(out: &mut impl Write, report: &FrameReport) -> Result<(), OutputError> {
    writeln!(out, "frame {} :", report.frame_no)?;
    writeln!(out, "gpu time: {}", report.total)?;
    Ok(())
}

/// Header naming the queried line span
pub fn write_range_header(out: &mut impl Write, range: LineRange) -> Result<(), OutputError> {
    writeln!(out, "check: {}", range)?;
    Ok(())
}

/// One labelled total of a line-span query
pub fn write_range_total(out: &mut impl Write, label: &str, total: i64) -> Result<(), OutputError> {
    writeln!(out, "{} {}", label, total)?;
    Ok(())
}

/// Echo a trace line as read
pub fn write_echo_line(out: &mut impl Write, line: &TraceLine) -> Result<(), OutputError> {
    writeln!(out, "{}", line.text)?;
    Ok(())
}

/// Frame distribution block printed under `--summary`
pub fn write_frame_summary(out: &mut impl Write, stats: &FrameStats) -> Result<(), OutputError> {
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "{}", stats.summary())?;
    writeln!(out, "{}", "=".repeat(80))?;
    Ok(())
}
