//! Configuration and constants for the CLI.

use crate::parser::schema::FieldLayout;

/// First field of every call record
pub const CALL_MARKER: &str = "call";

// CPU traces terminate the boundary token with a colon, GPU traces don't
pub const CPU_FRAME_END_MARKER: &str = "frame_end:";
pub const GPU_FRAME_END_MARKER: &str = "frame_end";

// Field positions inside a call record
pub const TIMESTAMP_FIELD: usize = 1;
pub const GPU_COST_FIELD: usize = 3;
pub const CPU_COST_FIELD: usize = 5;
pub const CPU_CALL_SITE_FIELD: usize = 12;

/// Prefix put in front of the frame id when a frame touches the query range
pub const IN_RANGE_MARKER: &str = "xxx";

// Fixed traces compared by the `sum` command
pub const DEFAULT_AMD_TRACE: &str = "/media/temp/frame_amd.txt";
pub const DEFAULT_MESA_TRACE: &str = "/media/temp/frame_mesa.txt";
pub const AMD_TOTAL_LABEL: &str = "total_amd ";
pub const MESA_TOTAL_LABEL: &str = "total_mesa";

/// Markers and field layout describing one flavour of trace file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceDialect {
    /// Token identifying a call record
    pub call_marker: String,

    /// Token identifying a frame boundary
    pub frame_end_marker: String,

    /// Where the typed fields of a call record live
    pub layout: FieldLayout,
}

impl TraceDialect {
    /// Dialect of CPU-side traces (`frame_end:` boundaries, named call sites)
    pub fn cpu() -> Self {
        Self {
            call_marker: CALL_MARKER.to_string(),
            frame_end_marker: CPU_FRAME_END_MARKER.to_string(),
            layout: FieldLayout::cpu(),
        }
    }

    /// Dialect of GPU-side traces (`frame_end` boundaries, cost only)
    pub fn gpu() -> Self {
        Self {
            call_marker: CALL_MARKER.to_string(),
            frame_end_marker: GPU_FRAME_END_MARKER.to_string(),
            layout: FieldLayout::gpu(),
        }
    }

    /// Replace the frame boundary token
    pub fn with_frame_end_marker(mut self, marker: impl Into<String>) -> Self {
        self.frame_end_marker = marker.into();
        self
    }
}
