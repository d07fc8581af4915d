//! Time-label arithmetic shared across the engine
//!
//! Roast logs carry sample times as "mm:ss" strings. Parsing and
//! formatting live here so the segmenter, the timeline projector, and the
//! ingestion adapter all agree on the exact rules.

use crate::error::{AnalysisError, AnalysisResult};

/// Parse an "mm:ss" time label into total seconds
///
/// The label must be exactly two colon-separated numeric parts. Minutes
/// beyond 59 are accepted ("75:30" is 4530 seconds); so are seconds beyond
/// 59, since some loggers emit them.
pub fn parse_time_label(label: &str) -> AnalysisResult<u32> {
    let malformed = || AnalysisError::MalformedTimeLabel {
        label: label.to_string(),
    };

    let mut parts = label.split(':');
    let minutes = parts.next().ok_or_else(malformed)?;
    let seconds = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() || minutes.is_empty() || seconds.is_empty() {
        return Err(malformed());
    }

    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
    Ok(minutes * 60 + seconds)
}

/// Format a second count as an "m:ss" label
///
/// Truncates toward zero, never rounds. Negative inputs (possible for
/// phase durations computed from non-monotonic logs) keep their sign as a
/// prefix on the formatted magnitude.
pub fn format_time(total_seconds: i64) -> String {
    if total_seconds < 0 {
        return format!("-{}", format_time(-total_seconds));
    }
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
