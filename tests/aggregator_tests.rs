use frame_perf::aggregator::{
    scan_frames, CallSiteTally, FrameAccumulator, FrameReport, LineRange, RangeFilter, RangeKey,
    SiteCost,
};
use frame_perf::parser::{CallRecord, TraceLine};
use frame_perf::utils::{TraceDialect, TraceError};
use pretty_assertions::assert_eq;

/// Build a CPU call line: timestamp at 1, cost at 5, call site at 12
fn cpu_call(timestamp: i64, cost: i64, site: &str) -> String {
    format!("call {} t0 t1 t2 {} f6 f7 f8 f9 f10 f11 {} trailing", timestamp, cost, site)
}

fn numbered(text: &str) -> Vec<Result<TraceLine, TraceError>> {
    text.lines()
        .enumerate()
        .map(|(i, l)| Ok(TraceLine::new(i + 1, l)))
        .collect()
}

fn scan(text: &str, dialect: &TraceDialect, filter: RangeFilter) -> Vec<FrameReport> {
    let mut frames = Vec::new();
    scan_frames(numbered(text), dialect, filter, |report| {
        frames.push(report);
        Ok::<(), TraceError>(())
    })
    .unwrap();
    frames
}

#[test]
fn test_two_frames_with_call_sites() {
    let trace = [
        cpu_call(1, 10, "X"),
        cpu_call(2, 20, "X"),
        "frame_end: 1".to_string(),
        cpu_call(3, 5, "Y"),
        "frame_end: 2".to_string(),
    ]
    .join("\n");

    let frames = scan(&trace, &TraceDialect::cpu(), RangeFilter::disabled());

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].frame_no, 1);
    assert_eq!(frames[0].ranked, vec![SiteCost::new("X", 30)]);
    assert_eq!(frames[0].boundary, "frame_end: 1");
    assert_eq!(frames[1].frame_no, 2);
    assert_eq!(frames[1].ranked, vec![SiteCost::new("Y", 5)]);
}

#[test]
fn test_tally_sum_matches_positive_costs() {
    let trace = [
        cpu_call(1, 7, "A"),
        cpu_call(2, -3, "B"),
        cpu_call(3, 0, "A"),
        cpu_call(4, 11, "C"),
        cpu_call(5, 2, "A"),
        "frame_end:".to_string(),
    ]
    .join("\n");

    let frames = scan(&trace, &TraceDialect::cpu(), RangeFilter::disabled());
    let tally_sum: i64 = frames[0].ranked.iter().map(|e| e.cost).sum();

    assert_eq!(tally_sum, 20);
    assert_eq!(frames[0].total, 20);
    assert!(frames[0].ranked.iter().all(|e| e.call_site != "B"));
}

#[test]
fn test_ranked_order_with_ties() {
    let trace = [
        cpu_call(1, 5, "A"),
        cpu_call(2, 9, "B"),
        cpu_call(3, 9, "C"),
        "frame_end:".to_string(),
    ]
    .join("\n");

    let frames = scan(&trace, &TraceDialect::cpu(), RangeFilter::disabled());
    let names: Vec<&str> = frames[0].ranked.iter().map(|e| e.call_site.as_str()).collect();

    assert_eq!(names, vec!["B", "C", "A"]);
}

#[test]
fn test_frame_numbers_have_no_gaps() {
    let trace = "frame_end\ncall 0 0 1\nframe_end\nframe_end\nnoise\nframe_end\n";
    let frames = scan(trace, &TraceDialect::gpu(), RangeFilter::disabled());

    let numbers: Vec<u64> = frames.iter().map(|f| f.frame_no).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_range_flags_only_matching_frames() {
    let trace = [
        cpu_call(100, 1, "A"),
        "frame_end:".to_string(),
        cpu_call(150, -1, "A"),
        cpu_call(400, 1, "A"),
        "frame_end:".to_string(),
        cpu_call(300, 1, "A"),
        "frame_end:".to_string(),
    ]
    .join("\n");

    let filter = RangeFilter::new(Some(LineRange::new(120, 200)), RangeKey::Timestamp);
    let frames = scan(&trace, &TraceDialect::cpu(), filter);

    let flags: Vec<bool> = frames.iter().map(|f| f.in_range).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn test_empty_range_never_flags() {
    let trace = [cpu_call(5, 1, "A"), "frame_end:".to_string()].join("\n");
    let filter = RangeFilter::new(Some(LineRange::new(10_000_000, -1)), RangeKey::Timestamp);

    let frames = scan(&trace, &TraceDialect::cpu(), filter);
    assert!(!frames[0].in_range);
}

#[test]
fn test_accumulator_resets_between_frames() {
    let mut acc = FrameAccumulator::new(RangeFilter::disabled());
    let call = CallRecord {
        timestamp: None,
        cost: 4,
        call_site: Some("draw".to_string()),
    };

    acc.record_call(&call, 1).unwrap();
    acc.record_call(&call, 2).unwrap();
    assert_eq!(acc.tally().get("draw"), Some(8));

    let first = acc.end_frame("frame_end");
    assert_eq!(first.total, 8);
    assert_eq!(acc.frame_no(), 2);
    assert!(acc.tally().is_empty());
    assert_eq!(acc.pending_calls(), 0);
}

#[test]
fn test_tally_entries_first_seen_order() {
    let mut tally = CallSiteTally::new();
    tally.add("late", 1);
    tally.add("early", 100);
    tally.add("late", 1);

    let names: Vec<&str> = tally.entries().iter().map(|e| e.call_site.as_str()).collect();
    assert_eq!(names, vec!["late", "early"]);
}
