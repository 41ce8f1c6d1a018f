//! `gpu` command implementation: one running total per frame.

use super::models::TotalsArgs;
use crate::aggregator::{scan_frames, RangeFilter, ScanSummary};
use crate::output::{write_frame_summary, write_frame_total};
use crate::parser::TraceReader;
use anyhow::{Context, Result};
use log::{info, warn};
use std::io::Write;

/// Execute the `gpu` command, writing per-frame totals to `out`
pub fn execute_totals(args: &TotalsArgs, out: &mut impl Write) -> Result<ScanSummary> {
    let dialect = args.dialect();

    info!("Totalling frame cost: {}", args.trace.display());

    let reader = TraceReader::open(&args.trace).context("Failed to open trace")?;

    let summary = scan_frames(reader, &dialect, RangeFilter::disabled(), |report| -> Result<()> {
        write_frame_total(&mut *out, &report)?;
        Ok(())
    })
    .with_context(|| format!("Failed to scan trace {}", args.trace.display()))?;

    if summary.trailing_calls > 0 {
        warn!(
            "{} calls after the last frame boundary were not reported",
            summary.trailing_calls
        );
    }
    info!("Frame distribution: {}", summary.stats.summary());

    if args.print_summary {
        write_frame_summary(&mut *out, &summary.stats)?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(summary)
}
