//! Accumulation of call costs per frame, per call site and per line span.

pub mod echo;
pub mod frame;
pub mod line_sum;
pub mod metrics;
pub mod range;
pub mod tally;

pub use echo::{echo_lines, EchoSummary};
pub use frame::{scan_frames, FrameAccumulator, FrameReport, ScanSummary};
pub use line_sum::{sum_line_range, sum_trace_range};
pub use metrics::FrameStats;
pub use range::{LineRange, RangeFilter, RangeKey};
pub use tally::{CallSiteTally, SiteCost};
