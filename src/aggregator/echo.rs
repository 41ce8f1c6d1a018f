//! Echo filter: keep positive-cost calls and frame boundaries.

use crate::parser::record::parse_record;
use crate::parser::schema::{Record, TraceLine};
use crate::utils::config::TraceDialect;
use crate::utils::error::TraceError;

/// Counts for one echo pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoSummary {
    pub calls_kept: usize,
    pub calls_dropped: usize,
    pub frames: usize,
}

/// Stream `lines`, handing every positive-cost call and every boundary to `emit`
pub fn echo_lines<I, F, E>(lines: I, dialect: &TraceDialect, mut emit: F) -> Result<EchoSummary, E>
where
    I: IntoIterator<Item = Result<TraceLine, TraceError>>,
    F: FnMut(&TraceLine) -> Result<(), E>,
    E: From<TraceError>,
{
    let mut summary = EchoSummary::default();

    for line in lines {
        let line = line?;

        match parse_record(&line, dialect)? {
            Record::Call(call) if call.has_positive_cost() => {
                summary.calls_kept += 1;
                emit(&line)?;
            }
            Record::Call(_) => summary.calls_dropped += 1,
            Record::FrameEnd => {
                summary.frames += 1;
                emit(&line)?;
            }
            Record::Other => {}
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_keeps_positive_calls_and_boundaries() {
        let trace = "header line\ncall 0 0 3\ncall 0 0 0\nframe_end 17\n";
        let input: Vec<Result<TraceLine, TraceError>> = trace
            .lines()
            .enumerate()
            .map(|(i, l)| Ok(TraceLine::new(i + 1, l)))
            .collect();

        let mut kept = Vec::new();
        let summary = echo_lines(input, &TraceDialect::gpu(), |line| {
            kept.push(line.text.clone());
            Ok::<(), TraceError>(())
        })
        .unwrap();

        assert_eq!(kept, vec!["call 0 0 3", "frame_end 17"]);
        assert_eq!(
            summary,
            EchoSummary {
                calls_kept: 1,
                calls_dropped: 1,
                frames: 1
            }
        );
    }
}
