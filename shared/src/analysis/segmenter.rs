//! Phase segmentation from threshold boundary points

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::AnalysisResult;
use crate::models::{PhaseSummary, RoastLogRow, RoastProfile, ThresholdPoints};
use crate::types::{format_time, parse_time_label};

use super::ror::average_ror;

/// Build a roast profile from the detected boundary points
///
/// Durations are derived from the boundary rows' time labels and are not
/// clamped: a non-monotonic log yields negative values that the caller can
/// detect. A phase slot stays `None` when its defining boundary is absent
/// (the 160°C point for drying; the first-crack point for browning and
/// development). When first crack is absent its end defaults to the drying
/// end, making the browning arithmetic zero-length rather than undefined.
pub fn build_profile(
    rows: &[RoastLogRow],
    points: &ThresholdPoints,
    file_name: &str,
) -> AnalysisResult<RoastProfile> {
    let total_seconds = i64::from(parse_time_label(&points.end.time_label)?);
    let phase1_end = match &points.temp_160 {
        Some(point) => i64::from(parse_time_label(&point.time_label)?),
        None => 0,
    };
    let phase2_end = match &points.first_crack {
        Some(point) => i64::from(parse_time_label(&point.time_label)?),
        None => phase1_end,
    };

    let drying_duration = phase1_end;
    let browning_duration = phase2_end - phase1_end;
    let development_duration = total_seconds - phase2_end;

    let drying = points.temp_160.as_ref().map(|point| {
        phase_summary(
            drying_duration,
            total_seconds,
            average_ror(rows, 0, point.index),
        )
    });

    // Browning's RoR range starts at the 160°C row, falling back to the
    // start of the log when that threshold was never reached.
    let browning_start = points.temp_160.as_ref().map(|p| p.index).unwrap_or(0);
    let browning = points.first_crack.as_ref().map(|point| {
        phase_summary(
            browning_duration,
            total_seconds,
            average_ror(rows, browning_start, point.index),
        )
    });

    let development = points.first_crack.as_ref().map(|point| {
        phase_summary(
            development_duration,
            total_seconds,
            average_ror(rows, point.index, points.end.index),
        )
    });

    Ok(RoastProfile {
        file_name: file_name.to_string(),
        drying,
        browning,
        development,
        total_time: format_time(total_seconds),
    })
}

fn phase_summary(duration_seconds: i64, total_seconds: i64, average_ror: i32) -> PhaseSummary {
    PhaseSummary {
        time: format_time(duration_seconds),
        duration_seconds,
        percentage: percentage_label(duration_seconds, total_seconds),
        average_ror,
    }
}

/// Share of total time with exactly one fractional digit, or "0" when the
/// total is zero
fn percentage_label(duration_seconds: i64, total_seconds: i64) -> String {
    if total_seconds == 0 {
        return "0".to_string();
    }
    let percent = Decimal::from(duration_seconds) * Decimal::from(100)
        / Decimal::from(total_seconds);
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}
