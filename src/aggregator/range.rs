//! Inclusive query ranges and the per-frame range flag.

use crate::parser::schema::CallRecord;
use std::fmt;

/// Inclusive integer interval `[start, end]`
///
/// An interval with `end < start` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: i64,
    pub end: i64,
}

impl LineRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// Which value of a call record is tested against the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RangeKey {
    /// The record's timestamp field
    #[default]
    Timestamp,
    /// The record's 1-based line number in the trace
    Line,
}

/// Tracks whether the current frame touched the query range
#[derive(Debug, Clone, Default)]
pub struct RangeFilter {
    range: Option<LineRange>,
    key: RangeKey,
    in_range: bool,
}

impl RangeFilter {
    pub fn new(range: Option<LineRange>, key: RangeKey) -> Self {
        Self {
            range,
            key,
            in_range: false,
        }
    }

    /// A filter that never flags a frame
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Test one call record; non-positive costs still count here
    pub fn observe(&mut self, call: &CallRecord, line_no: usize) {
        let Some(range) = self.range else {
            return;
        };

        let value = match self.key {
            RangeKey::Timestamp => call.timestamp,
            RangeKey::Line => i64::try_from(line_no).ok(),
        };

        if value.is_some_and(|v| range.contains(v)) {
            self.in_range = true;
        }
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// Return the flag for the finished frame and clear it
    pub fn end_frame(&mut self) -> bool {
        std::mem::replace(&mut self.in_range, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_at(timestamp: i64, cost: i64) -> CallRecord {
        CallRecord {
            timestamp: Some(timestamp),
            cost,
            call_site: None,
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = LineRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_empty_range_contains_nothing() {
        let range = LineRange::new(10_000_000, -1);
        assert!(range.is_empty());
        assert!(!range.contains(0));
        assert!(!range.contains(10_000_000));
    }

    #[test]
    fn test_flag_resets_at_frame_end() {
        let mut filter = RangeFilter::new(Some(LineRange::new(100, 200)), RangeKey::Timestamp);

        filter.observe(&call_at(150, 0), 1);
        assert!(filter.in_range());
        assert!(filter.end_frame());

        filter.observe(&call_at(250, 5), 2);
        assert!(!filter.end_frame());
    }

    #[test]
    fn test_line_key_uses_line_number() {
        let mut filter = RangeFilter::new(Some(LineRange::new(3, 4)), RangeKey::Line);

        filter.observe(&call_at(1_000, 1), 2);
        assert!(!filter.in_range());
        filter.observe(&call_at(1_000, 1), 4);
        assert!(filter.in_range());
    }

    #[test]
    fn test_disabled_never_flags() {
        let mut filter = RangeFilter::disabled();
        filter.observe(&call_at(0, 1), 1);
        assert!(!filter.end_frame());
    }
}
