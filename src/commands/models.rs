use crate::aggregator::{LineRange, RangeKey};
use crate::utils::config::{TraceDialect, DEFAULT_AMD_TRACE, DEFAULT_MESA_TRACE};
use std::path::PathBuf;

/// Arguments for the `cpu` command (ranked per-frame dump)
#[derive(Debug, Clone)]
pub struct RankArgs {
    /// Trace file to read
    pub trace: PathBuf,

    /// Frames touching this range get flagged
    pub range: Option<LineRange>,

    /// Value compared against the range
    pub range_key: RangeKey,

    /// Override for the frame boundary token
    pub frame_end_marker: Option<String>,

    /// Print frame statistics after the dump
    pub print_summary: bool,
}

impl Default for RankArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::new(),
            range: None,
            range_key: RangeKey::Timestamp,
            frame_end_marker: None,
            print_summary: false,
        }
    }
}

impl RankArgs {
    pub fn dialect(&self) -> TraceDialect {
        apply_marker(TraceDialect::cpu(), self.frame_end_marker.as_deref())
    }
}

/// Arguments for the `gpu` command (per-frame totals)
#[derive(Debug, Clone, Default)]
pub struct TotalsArgs {
    pub trace: PathBuf,
    pub frame_end_marker: Option<String>,
    pub print_summary: bool,
}

impl TotalsArgs {
    pub fn dialect(&self) -> TraceDialect {
        apply_marker(TraceDialect::gpu(), self.frame_end_marker.as_deref())
    }
}

/// Arguments for the `sum` command (line-span totals of two traces)
#[derive(Debug, Clone)]
pub struct SumArgs {
    /// Inclusive span of 1-based line numbers
    pub range: LineRange,

    pub amd_trace: PathBuf,
    pub mesa_trace: PathBuf,
}

impl Default for SumArgs {
    fn default() -> Self {
        Self {
            range: LineRange::new(1, 1),
            amd_trace: PathBuf::from(DEFAULT_AMD_TRACE),
            mesa_trace: PathBuf::from(DEFAULT_MESA_TRACE),
        }
    }
}

/// Arguments for the `print` command (echo filter)
#[derive(Debug, Clone, Default)]
pub struct PrintArgs {
    pub trace: PathBuf,
    pub frame_end_marker: Option<String>,
}

impl PrintArgs {
    pub fn dialect(&self) -> TraceDialect {
        apply_marker(TraceDialect::gpu(), self.frame_end_marker.as_deref())
    }
}

fn apply_marker(dialect: TraceDialect, marker: Option<&str>) -> TraceDialect {
    match marker {
        Some(marker) => dialect.with_frame_end_marker(marker),
        None => dialect,
    }
}
