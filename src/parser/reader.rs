//! Streaming trace reader.
//!
//! Yields one [`TraceLine`] per input line without loading the file into
//! memory. Read errors end the stream; there is no retry.

use super::schema::TraceLine;
use crate::utils::error::TraceError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Iterator over the numbered lines of a trace
pub struct TraceReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file for a single pass
    ///
    /// # Errors
    /// * `TraceError::Open` - file missing or unreadable
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        debug!("Opening trace: {}", path.display());

        let file = File::open(path).map_err(|source| TraceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Number of lines yielded so far
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceLine, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.next()?;
        self.line_no += 1;

        Some(
            next.map(|text| TraceLine::new(self.line_no, text))
                .map_err(|source| TraceError::Read {
                    line: self.line_no,
                    source,
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_are_numbered_from_one() {
        let reader = TraceReader::new(Cursor::new("call 1 2 3\n\nframe_end\n"));
        let lines: Vec<TraceLine> = reader.map(Result::unwrap).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TraceLine::new(1, "call 1 2 3"));
        assert_eq!(lines[1], TraceLine::new(2, ""));
        assert_eq!(lines[2], TraceLine::new(3, "frame_end"));
    }

    #[test]
    fn test_open_missing_file() {
        let result = TraceReader::open("/nonexistent/frame-perf/trace.txt");
        assert!(matches!(result, Err(TraceError::Open { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"call 1 2 3\n\xff\xfe\n";
        let mut reader = TraceReader::new(Cursor::new(bytes));

        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next().unwrap(),
            Err(TraceError::Read { line: 2, .. })
        ));
    }
}
