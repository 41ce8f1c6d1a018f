//! Early argument validation shared by all commands.

use super::models::{PrintArgs, RankArgs, SumArgs, TotalsArgs};
use anyhow::Result;
use log::warn;
use std::path::Path;

/// Validate `cpu` command arguments
pub fn validate_rank_args(args: &RankArgs) -> Result<()> {
    validate_trace_path(&args.trace)?;
    validate_marker(args.frame_end_marker.as_deref())?;

    if let Some(range) = args.range {
        if range.is_empty() {
            warn!("Range {} is empty, no frame will be flagged", range);
        }
    }

    Ok(())
}

/// Validate `gpu` command arguments
pub fn validate_totals_args(args: &TotalsArgs) -> Result<()> {
    validate_trace_path(&args.trace)?;
    validate_marker(args.frame_end_marker.as_deref())
}

/// Validate `sum` command arguments
pub fn validate_sum_args(args: &SumArgs) -> Result<()> {
    validate_trace_path(&args.amd_trace)?;
    validate_trace_path(&args.mesa_trace)?;

    if args.range.is_empty() {
        warn!("Line range {} is empty, totals will be 0", args.range);
    }

    Ok(())
}

/// Validate `print` command arguments
pub fn validate_print_args(args: &PrintArgs) -> Result<()> {
    validate_trace_path(&args.trace)?;
    validate_marker(args.frame_end_marker.as_deref())
}

/// Path must be non-empty and must not name a directory
pub fn validate_trace_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if path.is_dir() {
        anyhow::bail!("Trace path is a directory: {}", path.display());
    }

    Ok(())
}

/// Markers are compared against a single token, so they can't contain whitespace
pub fn validate_marker(marker: Option<&str>) -> Result<()> {
    let Some(marker) = marker else {
        return Ok(());
    };

    if marker.is_empty() {
        anyhow::bail!("Frame end marker cannot be empty");
    }

    if marker.chars().any(char::is_whitespace) {
        anyhow::bail!("Frame end marker must be a single token: {:?}", marker);
    }

    Ok(())
}
