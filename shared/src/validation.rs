//! Validation utilities for roast log input
//!
//! Column checks mirror what the ingestion adapter needs: logical column
//! names are matched case-insensitively after trimming, so "Time",
//! " time " and "TIME" all resolve to the same column.

use crate::types::parse_time_label;

/// Validate that a time label is a well-formed "mm:ss" string
pub fn validate_time_label(label: &str) -> Result<(), &'static str> {
    parse_time_label(label)
        .map(|_| ())
        .map_err(|_| "Time label must be in mm:ss form")
}

/// Find a logical column among raw spreadsheet headers
///
/// Returns the index of the first header matching the logical name after
/// trimming and lowercasing both sides.
pub fn find_column(headers: &[String], logical_name: &str) -> Option<usize> {
    let wanted = logical_name.trim().to_lowercase();
    headers
        .iter()
        .position(|h| h.trim().to_lowercase() == wanted)
}

/// Check that every required logical column is present
pub fn has_required_columns(headers: &[String], required: &[&str]) -> bool {
    required
        .iter()
        .all(|name| find_column(headers, name).is_some())
}
