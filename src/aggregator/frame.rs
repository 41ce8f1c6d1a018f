//! Per-frame accumulation.
//!
//! The accumulator is a small state machine: call records add to the
//! current frame, a frame boundary emits a [`FrameReport`] and starts the
//! next frame. Frames are numbered from 1 in the order their boundaries
//! appear. Calls after the last boundary are never reported.

use super::metrics::FrameStats;
use super::range::RangeFilter;
use super::tally::{CallSiteTally, SiteCost};
use crate::parser::record::parse_record;
use crate::parser::schema::{CallRecord, Record, TraceLine};
use crate::utils::config::TraceDialect;
use crate::utils::error::TraceError;
use log::debug;

/// Everything known about one finished frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based frame number
    pub frame_no: u64,

    /// Whether any call in the frame hit the query range
    pub in_range: bool,

    /// Call sites sorted by cost, descending
    pub ranked: Vec<SiteCost>,

    /// Sum of positive call costs in the frame
    pub total: i64,

    /// Number of call records in the frame, whatever their cost
    pub calls: usize,

    /// The boundary line, as read
    pub boundary: String,
}

/// Running state for the frame currently being read
#[derive(Debug)]
pub struct FrameAccumulator {
    frame_no: u64,
    tally: CallSiteTally,
    total: i64,
    calls: usize,
    filter: RangeFilter,
}

impl FrameAccumulator {
    pub fn new(filter: RangeFilter) -> Self {
        Self {
            frame_no: 1,
            tally: CallSiteTally::new(),
            total: 0,
            calls: 0,
            filter,
        }
    }

    /// Number of the frame being accumulated
    pub fn frame_no(&self) -> u64 {
        self.frame_no
    }

    /// Call records seen since the last boundary
    pub fn pending_calls(&self) -> usize {
        self.calls
    }

    pub fn tally(&self) -> &CallSiteTally {
        &self.tally
    }

    /// Add one call to the current frame
    ///
    /// # Errors
    /// * `TraceError::CostOverflow` - frame or call-site total exceeds `i64`
    pub fn record_call(&mut self, call: &CallRecord, line_no: usize) -> Result<(), TraceError> {
        self.filter.observe(call, line_no);
        self.calls += 1;

        if !call.has_positive_cost() {
            return Ok(());
        }

        let total = self
            .total
            .checked_add(call.cost)
            .ok_or(TraceError::CostOverflow { line: line_no })?;
        // A site total never exceeds the frame total, so this only guards the invariant
        if let Some(site) = &call.call_site {
            self.tally
                .add(site, call.cost)
                .ok_or(TraceError::CostOverflow { line: line_no })?;
        }
        self.total = total;

        Ok(())
    }

    /// Close the current frame and start the next one
    pub fn end_frame(&mut self, boundary: &str) -> FrameReport {
        let report = FrameReport {
            frame_no: self.frame_no,
            in_range: self.filter.end_frame(),
            ranked: self.tally.take_ranked(),
            total: std::mem::take(&mut self.total),
            calls: std::mem::take(&mut self.calls),
            boundary: boundary.to_string(),
        };

        self.frame_no += 1;
        report
    }
}

/// Totals for one pass over a trace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines read
    pub lines: usize,

    /// Call records read, including ones after the last boundary
    pub calls: usize,

    /// Call records after the last boundary, never reported
    pub trailing_calls: usize,

    /// Per-frame statistics
    pub stats: FrameStats,
}

/// Stream `lines` through the accumulator, handing each finished frame to `on_frame`
///
/// # Errors
/// Stops at the first read or parse error, or the first error returned by
/// `on_frame`. Frames already handed out stay handed out.
pub fn scan_frames<I, F, E>(
    lines: I,
    dialect: &TraceDialect,
    filter: RangeFilter,
    mut on_frame: F,
) -> Result<ScanSummary, E>
where
    I: IntoIterator<Item = Result<TraceLine, TraceError>>,
    F: FnMut(FrameReport) -> Result<(), E>,
    E: From<TraceError>,
{
    let mut accumulator = FrameAccumulator::new(filter);
    let mut summary = ScanSummary::default();

    for line in lines {
        let line = line?;
        summary.lines += 1;

        match parse_record(&line, dialect)? {
            Record::Call(call) => {
                summary.calls += 1;
                accumulator.record_call(&call, line.number)?;
            }
            Record::FrameEnd => {
                let report = accumulator.end_frame(&line.text);
                debug!(
                    "Frame {} closed at line {}: {} calls, total {}",
                    report.frame_no, line.number, report.calls, report.total
                );
                summary.stats.record(report.frame_no, report.total);
                on_frame(report)?;
            }
            Record::Other => {}
        }
    }

    summary.trailing_calls = accumulator.pending_calls();
    if summary.trailing_calls > 0 {
        debug!(
            "Discarding {} calls after the last frame boundary",
            summary.trailing_calls
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::range::{LineRange, RangeKey};

    fn lines(text: &str) -> Vec<Result<TraceLine, TraceError>> {
        text.lines()
            .enumerate()
            .map(|(i, l)| Ok(TraceLine::new(i + 1, l)))
            .collect()
    }

    fn collect(
        text: &str,
        dialect: &TraceDialect,
        filter: RangeFilter,
    ) -> (Vec<FrameReport>, ScanSummary) {
        let mut frames = Vec::new();
        let summary = scan_frames(lines(text), dialect, filter, |r| {
            frames.push(r);
            Ok::<(), TraceError>(())
        })
        .unwrap();
        (frames, summary)
    }

    #[test]
    fn test_gpu_totals_per_frame() {
        let trace = "call 0 0 10\ncall 0 0 20\nframe_end\ncall 0 0 5\nframe_end\n";
        let (frames, summary) = collect(trace, &TraceDialect::gpu(), RangeFilter::disabled());

        assert_eq!(frames.len(), 2);
        assert_eq!((frames[0].frame_no, frames[0].total), (1, 30));
        assert_eq!((frames[1].frame_no, frames[1].total), (2, 5));
        assert_eq!(summary.stats.grand_total, 35);
    }

    #[test]
    fn test_non_positive_costs_are_skipped() {
        let trace = "call 0 0 -4\ncall 0 0 0\ncall 0 0 6\nframe_end\n";
        let (frames, _) = collect(trace, &TraceDialect::gpu(), RangeFilter::disabled());

        assert_eq!(frames[0].total, 6);
        assert_eq!(frames[0].calls, 3);
    }

    #[test]
    fn test_trailing_calls_are_not_reported() {
        let trace = "call 0 0 1\nframe_end\ncall 0 0 2\ncall 0 0 3\n";
        let (frames, summary) = collect(trace, &TraceDialect::gpu(), RangeFilter::disabled());

        assert_eq!(frames.len(), 1);
        assert_eq!(summary.calls, 3);
        assert_eq!(summary.trailing_calls, 2);
    }

    #[test]
    fn test_range_flag_by_line_number() {
        let trace = "call 0 0 1\nframe_end\ncall 0 0 1\nframe_end\ncall 0 0 1\nframe_end\n";
        let filter = RangeFilter::new(Some(LineRange::new(3, 3)), RangeKey::Line);
        let (frames, _) = collect(trace, &TraceDialect::gpu(), filter);

        let flags: Vec<bool> = frames.iter().map(|f| f.in_range).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_frame_total_overflow_is_an_error() {
        let result = scan_frames(
            lines("call 0 0 9223372036854775807\ncall 0 0 1\nframe_end\n"),
            &TraceDialect::gpu(),
            RangeFilter::disabled(),
            |_| Ok::<(), TraceError>(()),
        );

        assert!(matches!(result, Err(TraceError::CostOverflow { line: 2 })));
    }

    #[test]
    fn test_malformed_call_aborts() {
        let mut seen = 0;
        let result = scan_frames(
            lines("call 0 0 1\nframe_end\ncall 0 0\nframe_end\n"),
            &TraceDialect::gpu(),
            RangeFilter::disabled(),
            |_| {
                seen += 1;
                Ok::<(), TraceError>(())
            },
        );

        assert!(matches!(result, Err(TraceError::Malformed { line: 3, .. })));
        assert_eq!(seen, 1);
    }
}
