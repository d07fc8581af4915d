//! Threshold detection over a roast temperature series

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{RoastLogRow, ThresholdPoint, ThresholdPoints};

/// Default bean temperature marking the end of the drying phase (°C)
pub const DRYING_END_TEMP_C: f64 = 160.0;

/// Default bean temperature approximating first crack (°C)
pub const FIRST_CRACK_TEMP_C: f64 = 204.0;

/// Locate the three boundary points of a roast log
///
/// Single forward pass. The first row reaching a threshold is kept even if
/// the temperature later dips back below it; rows without a temperature
/// reading never match. The end point is the last row, unconditionally.
pub fn detect_thresholds(
    rows: &[RoastLogRow],
    drying_end_temp_c: f64,
    first_crack_temp_c: f64,
) -> AnalysisResult<ThresholdPoints> {
    let last = rows.last().ok_or(AnalysisError::EmptyLog)?;

    let mut temp_160 = None;
    let mut first_crack = None;
    for (index, row) in rows.iter().enumerate() {
        let Some(temp) = row.bean_temp_c else {
            continue;
        };
        if temp_160.is_none() && temp >= drying_end_temp_c {
            temp_160 = Some(ThresholdPoint::from_row(index, row));
        }
        if first_crack.is_none() && temp >= first_crack_temp_c {
            first_crack = Some(ThresholdPoint::from_row(index, row));
        }
    }

    Ok(ThresholdPoints {
        temp_160,
        first_crack,
        end: ThresholdPoint::from_row(rows.len() - 1, last),
    })
}
