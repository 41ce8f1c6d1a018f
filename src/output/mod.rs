//! Report writers.
//!
//! All reports are plain text written to a caller-supplied sink.

pub mod text;

pub use text::{
    frame_id_line, write_echo_line, write_frame_summary, write_frame_total, write_range_header,
    write_range_total, write_ranked_frame,
};
