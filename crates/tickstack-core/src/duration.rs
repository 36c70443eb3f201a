//! Parsing and formatting of countdown durations.
//!
//! Accepted input forms are `SS`, `MM:SS`, and `HH:MM:SS`. A bare number
//! with no colon is raw seconds. Parsing is total: malformed segments
//! count as zero and invalid input yields a zero duration.

/// Parse a human-entered duration string into whole seconds.
///
/// Each colon-delimited segment is parsed as a base-10 integer;
/// non-numeric segments count as 0. Unrecognized shapes (four or more
/// segments, empty input) yield 0. Never panics.
pub fn parse(input: &str) -> u64 {
    let segments: Vec<u64> = input
        .trim()
        .split(':')
        .map(|s| s.trim().parse::<u64>().unwrap_or(0))
        .collect();

    match segments.as_slice() {
        [secs] => *secs,
        [mins, secs] => mins.saturating_mul(60).saturating_add(*secs),
        [hours, mins, secs] => hours
            .saturating_mul(3600)
            .saturating_add(mins.saturating_mul(60))
            .saturating_add(*secs),
        _ => 0,
    }
}

/// Format whole seconds for display: `HH:MM:SS` when hours are present,
/// `MM:SS` otherwise, fields zero-padded to two digits.
pub fn format(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
