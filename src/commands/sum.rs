//! `sum` command implementation.
//!
//! Compares the same span of lines in the AMD and Mesa driver traces.

use super::models::SumArgs;
use crate::aggregator::sum_trace_range;
use crate::output::{write_range_header, write_range_total};
use crate::utils::config::{TraceDialect, AMD_TOTAL_LABEL, MESA_TOTAL_LABEL};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Totals of one `sum` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeTotals {
    pub amd: i64,
    pub mesa: i64,
}

/// Execute the `sum` command, writing both totals to `out`
pub fn execute_sum(args: &SumArgs, out: &mut impl Write) -> Result<RangeTotals> {
    let dialect = TraceDialect::gpu();

    info!("Summing lines {} of both driver traces", args.range);
    write_range_header(&mut *out, args.range)?;

    let amd = sum_trace_range(&args.amd_trace, &dialect, args.range)
        .with_context(|| format!("Failed to sum {}", args.amd_trace.display()))?;
    write_range_total(&mut *out, AMD_TOTAL_LABEL, amd)?;

    let mesa = sum_trace_range(&args.mesa_trace, &dialect, args.range)
        .with_context(|| format!("Failed to sum {}", args.mesa_trace.display()))?;
    write_range_total(&mut *out, MESA_TOTAL_LABEL, mesa)?;

    out.flush().context("Failed to flush output")?;

    Ok(RangeTotals { amd, mesa })
}
