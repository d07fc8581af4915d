//! Roast-curve phase-segmentation and rate-of-rise engine
//!
//! Pipeline per log file: threshold detection over the row sequence, then
//! phase segmentation (with per-phase average RoR) into a `RoastProfile`.
//! The timeline projector maps a finished profile onto a bounded axis for
//! the rendering layer.

pub mod detector;
pub mod ror;
pub mod segmenter;
pub mod timeline;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::models::{RoastLogRow, RoastProfile};

pub use detector::{detect_thresholds, DRYING_END_TEMP_C, FIRST_CRACK_TEMP_C};
pub use ror::average_ror;
pub use segmenter::build_profile;
pub use timeline::{
    project_timeline, AxisTick, PhaseSpan, TimeMarker, TimelineProjection,
    DEFAULT_TIMELINE_SECONDS, TICK_INTERVAL_SECONDS,
};

/// Tunable engine thresholds
///
/// Defaults are the standard 160°C / 204°C boundaries; the analyzer's
/// configuration layer may override them per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Bean temperature marking the end of the drying phase
    pub drying_end_temp_c: f64,

    /// Bean temperature approximating first crack
    pub first_crack_temp_c: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            drying_end_temp_c: DRYING_END_TEMP_C,
            first_crack_temp_c: FIRST_CRACK_TEMP_C,
        }
    }
}

/// Analyze one roast log into a profile
///
/// Pure function of the row sequence and file name. Fails only on an empty
/// sequence or a malformed time label; unreached thresholds yield `None`
/// phase slots instead of errors.
pub fn analyze_log(
    rows: &[RoastLogRow],
    file_name: &str,
    settings: &EngineSettings,
) -> AnalysisResult<RoastProfile> {
    let points = detect_thresholds(rows, settings.drying_end_temp_c, settings.first_crack_temp_c)?;
    build_profile(rows, &points, file_name)
}
