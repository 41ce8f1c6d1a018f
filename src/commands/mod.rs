//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod print;
pub mod rank;
pub mod sum;
pub mod totals;
pub mod utils;
pub mod validate;

// Re-export main command functions
pub use models::{PrintArgs, RankArgs, SumArgs, TotalsArgs};
pub use print::execute_print;
pub use rank::execute_rank;
pub use sum::{execute_sum, RangeTotals};
pub use totals::execute_totals;
pub use utils::{display_layout, display_version};
pub use validate::{
    validate_marker, validate_print_args, validate_rank_args, validate_sum_args,
    validate_totals_args, validate_trace_path,
};
