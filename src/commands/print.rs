//! `print` command implementation: echo positive-cost calls and boundaries.

use super::models::PrintArgs;
use crate::aggregator::{echo_lines, EchoSummary};
use crate::output::write_echo_line;
use crate::parser::TraceReader;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

pub fn execute_print(args: &PrintArgs, out: &mut impl Write) -> Result<EchoSummary> {
    let dialect = args.dialect();

    info!("Echoing positive-cost calls: {}", args.trace.display());

    let reader = TraceReader::open(&args.trace).context("Failed to open trace")?;

    let summary = echo_lines(reader, &dialect, |line| -> Result<()> {
        write_echo_line(&mut *out, line)?;
        Ok(())
    })
    .with_context(|| format!("Failed to scan trace {}", args.trace.display()))?;

    out.flush().context("Failed to flush output")?;

    debug!(
        "Kept {} calls, dropped {}, {} frame boundaries",
        summary.calls_kept, summary.calls_dropped, summary.frames
    );

    Ok(summary)
}
