//! Roast log rows

use serde::{Deserialize, Serialize};

/// One sampled reading from a roast temperature log
///
/// Produced by the ingestion adapter; immutable once created. The row's
/// position in its sequence is its implicit index. Time labels are assumed
/// non-decreasing across the sequence; the engine does not verify this and
/// surfaces the resulting negative durations if the assumption is broken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastLogRow {
    /// Sample time as an "mm:ss" label
    pub time_label: String,

    /// Bean-surface temperature in °C; `None` when the cell was missing
    /// or unreadable
    pub bean_temp_c: Option<f64>,
}

impl RoastLogRow {
    pub fn new(time_label: impl Into<String>, bean_temp_c: impl Into<Option<f64>>) -> Self {
        Self {
            time_label: time_label.into(),
            bean_temp_c: bean_temp_c.into(),
        }
    }
}
