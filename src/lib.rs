//! Frame Perf
//!
//! Per-frame cost summaries for CPU and GPU pipeline trace logs.
//!
//! A trace is a text file with one record per line. `call` records carry
//! a cost (and, in CPU traces, a timestamp and a call-site name); boundary
//! records close a frame. The crate streams a trace once and reports, per
//! frame, the call sites ranked by cost or the frame's total cost.
//!
//! ## Getting Started
//!
//! ```bash
//! frame-perf cpu -f trace.txt -s 1000 -e 2000
//! frame-perf gpu gpu_trace.txt
//! frame-perf --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
