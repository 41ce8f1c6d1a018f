//! Frame Perf CLI
//!
//! Summarizes CPU and GPU pipeline trace logs frame by frame.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::PathBuf;

use frame_perf::aggregator::{LineRange, RangeKey};
use frame_perf::commands::{
    display_layout, display_version, execute_print, execute_rank, execute_sum, execute_totals,
    validate_print_args, validate_rank_args, validate_sum_args, validate_totals_args, PrintArgs,
    RankArgs, SumArgs, TotalsArgs,
};
use frame_perf::utils::config::{DEFAULT_AMD_TRACE, DEFAULT_MESA_TRACE};

/// Frame Perf - per-frame cost summaries from pipeline traces
#[derive(Parser, Debug)]
#[command(name = "frame-perf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank call sites per frame in a CPU trace
    Cpu {
        /// Trace file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Start of the range that flags a frame
        #[arg(short, long, requires = "end", allow_hyphen_values = true)]
        start: Option<i64>,

        /// End of the range that flags a frame (inclusive)
        #[arg(short, long, requires = "start", allow_hyphen_values = true)]
        end: Option<i64>,

        /// Value compared against the range
        #[arg(long, value_enum, default_value_t = RangeKey::Timestamp)]
        range_key: RangeKey,

        /// Frame boundary token (default `frame_end:`)
        #[arg(long)]
        marker: Option<String>,

        /// Print frame statistics after the dump
        #[arg(long)]
        summary: bool,
    },

    /// Print the total cost of every frame in a GPU trace
    Gpu {
        /// Trace file to read
        trace: PathBuf,

        /// Frame boundary token (default `frame_end`)
        #[arg(long)]
        marker: Option<String>,

        /// Print frame statistics after the totals
        #[arg(long)]
        summary: bool,
    },

    /// Sum call costs over a span of lines in the AMD and Mesa traces
    Sum {
        /// First line of the span (1-based)
        #[arg(allow_hyphen_values = true)]
        start: i64,

        /// Last line of the span (inclusive)
        #[arg(allow_hyphen_values = true)]
        end: i64,

        /// AMD driver trace
        #[arg(long, default_value = DEFAULT_AMD_TRACE)]
        amd: PathBuf,

        /// Mesa driver trace
        #[arg(long, default_value = DEFAULT_MESA_TRACE)]
        mesa: PathBuf,
    },

    /// Echo positive-cost calls and frame boundaries of a GPU trace
    Print {
        /// Trace file to read
        trace: PathBuf,

        /// Frame boundary token (default `frame_end`)
        #[arg(long)]
        marker: Option<String>,
    },

    /// Display trace record layouts
    Layout {
        /// Show field positions
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Cpu {
            file,
            start,
            end,
            range_key,
            marker,
            summary,
        } => {
            let range = match (start, end) {
                (Some(start), Some(end)) => Some(LineRange::new(start, end)),
                _ => None,
            };

            let args = RankArgs {
                trace: file,
                range,
                range_key,
                frame_end_marker: marker,
                print_summary: summary,
            };

            validate_rank_args(&args)?;
            execute_rank(&args, &mut out)?;
        }

        Commands::Gpu {
            trace,
            marker,
            summary,
        } => {
            let args = TotalsArgs {
                trace,
                frame_end_marker: marker,
                print_summary: summary,
            };

            validate_totals_args(&args)?;
            execute_totals(&args, &mut out)?;
        }

        Commands::Sum {
            start,
            end,
            amd,
            mesa,
        } => {
            let args = SumArgs {
                range: LineRange::new(start, end),
                amd_trace: amd,
                mesa_trace: mesa,
            };

            validate_sum_args(&args)?;
            execute_sum(&args, &mut out)?;
        }

        Commands::Print { trace, marker } => {
            let args = PrintArgs {
                trace,
                frame_end_marker: marker,
            };

            validate_print_args(&args)?;
            execute_print(&args, &mut out)?;
        }

        Commands::Layout { show } => {
            display_layout(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
