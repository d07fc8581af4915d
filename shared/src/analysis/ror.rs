//! Average rate-of-rise over a phase's index range

use crate::models::RoastLogRow;

/// Average per-minute temperature rate of rise over `[start_index, end_index]`
///
/// Assumes one reading per second, so each consecutive delta scales by 60.
/// Each instantaneous value is rounded to one decimal before accumulation,
/// and the final average is rounded to the nearest integer. A degenerate
/// range (`start >= end`) or a range with no valid reading pairs returns 0;
/// pairs with a missing temperature on either side are skipped.
pub fn average_ror(rows: &[RoastLogRow], start_index: usize, end_index: usize) -> i32 {
    if start_index >= end_index {
        return 0;
    }

    let mut total = 0.0;
    let mut count = 0u32;
    for i in (start_index + 1)..=end_index {
        let (Some(prev), Some(curr)) = (rows.get(i - 1), rows.get(i)) else {
            break;
        };
        if let (Some(prev_temp), Some(curr_temp)) = (prev.bean_temp_c, curr.bean_temp_c) {
            let instantaneous = ((curr_temp - prev_temp) * 60.0 * 10.0).round() / 10.0;
            total += instantaneous;
            count += 1;
        }
    }

    if count > 0 {
        (total / f64::from(count)).round() as i32
    } else {
        0
    }
}
