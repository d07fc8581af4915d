//! Timeline projection onto a bounded time axis
//!
//! Maps a finished profile to percentage-based layout geometry. Pixel
//! drawing belongs to the rendering collaborator; this module only decides
//! what each phase occupies on the axis. Nothing is clamped: a roast
//! longer than the axis domain projects past 100% and the renderer is
//! expected to clip or scroll.

use serde::{Deserialize, Serialize};

use crate::models::{PhaseName, RoastProfile};
use crate::types::format_time;

/// Default axis domain in seconds (10 minutes)
pub const DEFAULT_TIMELINE_SECONDS: u32 = 600;

/// Fixed spacing of axis tick marks in seconds
pub const TICK_INTERVAL_SECONDS: u32 = 60;

/// Axis placement of one present phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub phase: PhaseName,
    pub start_percent: f64,
    pub width_percent: f64,
}

/// A labeled marker at a phase's cumulative end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeMarker {
    pub label: String,
    pub left_percent: f64,
}

/// A fixed-interval axis tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub seconds: u32,
    pub percent: f64,
    pub label: String,
}

/// Complete axis layout for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineProjection {
    pub file_name: String,
    pub spans: Vec<PhaseSpan>,
    pub markers: Vec<TimeMarker>,
    pub ticks: Vec<AxisTick>,
}

/// Project a profile onto an axis of `max_total_seconds`
///
/// Absent phases contribute nothing to the cumulative offset. Each present
/// phase also gets a marker at its cumulative end; the development marker
/// reuses the profile's total-time label instead of re-formatting.
pub fn project_timeline(profile: &RoastProfile, max_total_seconds: u32) -> TimelineProjection {
    let max = f64::from(max_total_seconds);

    let mut spans = Vec::new();
    let mut markers = Vec::new();
    let mut cumulative: i64 = 0;
    for (name, slot) in profile.phases() {
        let Some(phase) = slot else {
            continue;
        };
        let start_percent = cumulative as f64 / max * 100.0;
        cumulative += phase.duration_seconds;
        spans.push(PhaseSpan {
            phase: name,
            start_percent,
            width_percent: phase.duration_seconds as f64 / max * 100.0,
        });

        let label = if name == PhaseName::Development {
            profile.total_time.clone()
        } else {
            format_time(cumulative)
        };
        markers.push(TimeMarker {
            label,
            left_percent: cumulative as f64 / max * 100.0,
        });
    }

    let ticks = (0..=max_total_seconds)
        .step_by(TICK_INTERVAL_SECONDS as usize)
        .map(|seconds| AxisTick {
            seconds,
            percent: f64::from(seconds) / max * 100.0,
            label: format_time(i64::from(seconds)),
        })
        .collect();

    TimelineProjection {
        file_name: profile.file_name.clone(),
        spans,
        markers,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhaseSummary;
    use crate::types::format_time;

    fn summary(duration: i64) -> PhaseSummary {
        PhaseSummary {
            time: format_time(duration),
            duration_seconds: duration,
            percentage: "0".to_string(),
            average_ror: 0,
        }
    }

    fn profile(
        drying: Option<i64>,
        browning: Option<i64>,
        development: Option<i64>,
        total_time: &str,
    ) -> RoastProfile {
        RoastProfile {
            file_name: "test.csv".to_string(),
            drying: drying.map(summary),
            browning: browning.map(summary),
            development: development.map(summary),
            total_time: total_time.to_string(),
        }
    }

    #[test]
    fn test_span_placement() {
        let profile = profile(Some(120), Some(180), Some(180), "8:00");
        let projection = project_timeline(&profile, DEFAULT_TIMELINE_SECONDS);

        assert_eq!(projection.spans.len(), 3);
        let [drying, browning, development] = &projection.spans[..] else {
            panic!("expected three spans");
        };
        assert_eq!(drying.phase, PhaseName::Drying);
        assert!((drying.start_percent - 0.0).abs() < 1e-9);
        assert!((drying.width_percent - 20.0).abs() < 1e-9);
        assert!((browning.start_percent - 20.0).abs() < 1e-9);
        assert!((browning.width_percent - 30.0).abs() < 1e-9);
        assert!((development.start_percent - 50.0).abs() < 1e-9);
        assert!((development.width_percent - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_markers_label_cumulative_ends() {
        let profile = profile(Some(120), Some(180), Some(180), "8:00");
        let projection = project_timeline(&profile, DEFAULT_TIMELINE_SECONDS);

        let labels: Vec<&str> = projection.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["2:00", "5:00", "8:00"]);
        assert!((projection.markers[2].left_percent - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_absent_phases_are_skipped() {
        let profile = profile(None, Some(300), Some(180), "8:00");
        let projection = project_timeline(&profile, DEFAULT_TIMELINE_SECONDS);

        assert_eq!(projection.spans.len(), 2);
        assert_eq!(projection.spans[0].phase, PhaseName::Browning);
        // Missing drying contributes nothing to the cumulative offset
        assert!((projection.spans[0].start_percent - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_overrun_exceeds_hundred_percent() {
        // 12-minute roast on the default 10-minute axis
        let profile = profile(Some(240), Some(240), Some(240), "12:00");
        let projection = project_timeline(&profile, DEFAULT_TIMELINE_SECONDS);

        let development = &projection.spans[2];
        assert!(development.start_percent + development.width_percent > 100.0);
    }

    #[test]
    fn test_default_axis_has_eleven_ticks() {
        let profile = profile(Some(120), None, None, "2:00");
        let projection = project_timeline(&profile, DEFAULT_TIMELINE_SECONDS);

        assert_eq!(projection.ticks.len(), 11);
        assert_eq!(projection.ticks[0].seconds, 0);
        assert_eq!(projection.ticks[0].label, "0:00");
        assert_eq!(projection.ticks[10].seconds, 600);
        assert_eq!(projection.ticks[10].label, "10:00");
        assert!((projection.ticks[5].percent - 50.0).abs() < 1e-9);
    }
}
