use crate::utils::config::TraceDialect;

/// Display the record layout of both trace dialects
pub fn display_layout(show_details: bool) {
    println!("Frame Perf Trace Layouts");
    println!();

    for (name, dialect) in [("cpu", TraceDialect::cpu()), ("gpu", TraceDialect::gpu())] {
        println!(
            "  {}: `{}` records, boundary `{}`, at least {} fields per call",
            name,
            dialect.call_marker,
            dialect.frame_end_marker,
            dialect.layout.min_fields()
        );

        if show_details {
            if let Some(index) = dialect.layout.timestamp {
                println!("    field {:>2}: timestamp  - integer, tested against -s/-e", index);
            }
            println!("    field {:>2}: cost       - integer, only positive values count", dialect.layout.cost);
            if let Some(index) = dialect.layout.call_site {
                println!("    field {:>2}: call site  - grouping key of the ranked dump", index);
            }
        }
    }

    if !show_details {
        println!();
        println!("Use --show for field positions");
    }
}

/// Display version information
pub fn display_version() {
    println!("Frame Perf v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-frame call-site cost summaries from pipeline trace logs.");
}
