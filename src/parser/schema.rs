//! Record schema for line-oriented trace files.
//!
//! Trace lines carry no header. Each variant of the tooling reads its
//! fields from fixed positions, so the positions are declared once here
//! as a [`FieldLayout`] and every call record is checked against it.

use crate::utils::config::{CPU_CALL_SITE_FIELD, CPU_COST_FIELD, GPU_COST_FIELD, TIMESTAMP_FIELD};

/// Field positions of a call record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Timestamp column, if the variant reads one
    pub timestamp: Option<usize>,

    /// Cost column
    pub cost: usize,

    /// Call-site identifier column, if the variant groups by call site
    pub call_site: Option<usize>,
}

impl FieldLayout {
    /// CPU traces: timestamp at 1, cost at 5, call site at 12
    pub const fn cpu() -> Self {
        Self {
            timestamp: Some(TIMESTAMP_FIELD),
            cost: CPU_COST_FIELD,
            call_site: Some(CPU_CALL_SITE_FIELD),
        }
    }

    /// GPU traces: cost at 3, nothing else is read
    pub const fn gpu() -> Self {
        Self {
            timestamp: None,
            cost: GPU_COST_FIELD,
            call_site: None,
        }
    }

    /// Smallest field count a call record must have under this layout
    pub fn min_fields(&self) -> usize {
        let highest = [Some(self.cost), self.timestamp, self.call_site]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0);
        highest + 1
    }
}

/// One raw line of a trace, with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub number: usize,
    pub text: String,
}

impl TraceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Whitespace separated tokens of the line
    pub fn fields(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

/// Kind of a record, decided from its first field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Call,
    FrameEnd,
    Other,
}

/// Typed view of a `call` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub timestamp: Option<i64>,
    pub cost: i64,
    pub call_site: Option<String>,
}

impl CallRecord {
    /// Only positive costs are accumulated
    pub fn has_positive_cost(&self) -> bool {
        self.cost > 0
    }
}

/// A classified and parsed trace record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Call(CallRecord),
    FrameEnd,
    Other,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Call(_) => RecordKind::Call,
            Record::FrameEnd => RecordKind::FrameEnd,
            Record::Other => RecordKind::Other,
        }
    }
}
