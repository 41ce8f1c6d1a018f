//! Summary statistics over the frames of one trace.
//!
//! Heavy frames are the first thing to look at when hunting a stall,
//! so the summary keeps track of the heaviest one.

/// Frame distribution statistics
///
/// **Public** - returned inside `ScanSummary`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of frames reported
    pub frame_count: u64,

    /// Sum of all frame totals, wide enough that it can't overflow
    pub grand_total: i128,

    /// Heaviest frame as `(frame number, total)`
    pub heaviest: Option<(u64, i64)>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished frame into the statistics
    pub fn record(&mut self, frame_no: u64, total: i64) {
        self.frame_count += 1;
        self.grand_total += i128::from(total);

        // Strictly greater: the earliest frame wins a tie
        match self.heaviest {
            Some((_, best)) if best >= total => {}
            _ => self.heaviest = Some((frame_no, total)),
        }
    }

    /// Mean total per frame (integer division)
    pub fn mean_per_frame(&self) -> i128 {
        if self.frame_count == 0 {
            return 0;
        }
        self.grand_total / i128::from(self.frame_count)
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the `--summary` flag
    pub fn summary(&self) -> String {
        let heaviest = match self.heaviest {
            Some((frame, total)) => format!("frame {} ({})", frame, total),
            None => "n/a".to_string(),
        };

        format!(
            "Frames: {} | Total: {} | Mean: {} | Heaviest: {}",
            self.frame_count,
            self.grand_total,
            self.mean_per_frame(),
            heaviest
        )
    }
}
