//! `cpu` command implementation.
//!
//! The command:
//! 1. Opens the trace
//! 2. Streams records through the per-frame accumulator
//! 3. Prints each frame's call sites, heaviest first, then its `FID` line
//! 4. Reports frame statistics

use super::models::RankArgs;
use crate::aggregator::{scan_frames, RangeFilter, ScanSummary};
use crate::output::{write_frame_summary, write_ranked_frame};
use crate::parser::TraceReader;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::time::Instant;

/// Execute the `cpu` command, writing the ranked dump to `out`
///
/// # Errors
/// * Trace cannot be opened or read
/// * Malformed call record
/// * Write failure on `out`
pub fn execute_rank(args: &RankArgs, out: &mut impl Write) -> Result<ScanSummary> {
    let start_time = Instant::now();
    let dialect = args.dialect();

    info!("Ranking call sites per frame: {}", args.trace.display());
    debug!(
        "Boundary marker {:?}, call records need {} fields",
        dialect.frame_end_marker,
        dialect.layout.min_fields()
    );
    match args.range {
        Some(range) => info!("Flagging frames with a {:?} in [{}]", args.range_key, range),
        None => debug!("No range given, no frame will be flagged"),
    }

    info!("Step 1/2: Scanning frames...");
    let reader = TraceReader::open(&args.trace).context("Failed to open trace")?;
    let filter = RangeFilter::new(args.range, args.range_key);

    let summary = scan_frames(reader, &dialect, filter, |report| -> Result<()> {
        write_ranked_frame(&mut *out, &report)?;
        Ok(())
    })
    .with_context(|| format!("Failed to scan trace {}", args.trace.display()))?;

    info!("Step 2/2: Summarizing...");
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

    info!(
        "Scanned {} lines in {:.2}s",
        summary.lines,
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}
