//! Threshold boundary points located by the detector

use serde::{Deserialize, Serialize};

use super::RoastLogRow;

/// A reference to the first row satisfying a temperature predicate
///
/// Carries a copy of the row's fields plus its index so downstream stages
/// never have to re-scan the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPoint {
    pub index: usize,
    pub time_label: String,
    pub bean_temp_c: Option<f64>,
}

impl ThresholdPoint {
    pub fn from_row(index: usize, row: &RoastLogRow) -> Self {
        Self {
            index,
            time_label: row.time_label.clone(),
            bean_temp_c: row.bean_temp_c,
        }
    }
}

/// The three boundary points of a roast log
///
/// `end` is always the last row. The two threshold crossings are `None`
/// when the log never reaches the corresponding temperature; the affected
/// phases are then omitted from the profile rather than zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPoints {
    /// First row at or above the drying-end temperature (160°C)
    pub temp_160: Option<ThresholdPoint>,

    /// First row at or above the first-crack temperature (204°C)
    pub first_crack: Option<ThresholdPoint>,

    /// The terminal "drop" row
    pub end: ThresholdPoint,
}
