//! WebAssembly module for the Roast Curve Analyzer
//!
//! Provides client-side computation for:
//! - Roast log analysis into three-phase profiles
//! - Timeline layout projection for the upload-page bars
//! - Presentation constants (phase colors) owned by the rendering layer

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::analysis::*;
pub use shared::models::*;
pub use shared::types::*;

/// Display colors per phase, matching the upload page's bar styling
const PHASE_COLORS: [(PhaseName, &str); 3] = [
    (PhaseName::Drying, "rgba(144, 238, 144, 0.7)"),
    (PhaseName::Browning, "rgba(255, 255, 224, 0.7)"),
    (PhaseName::Development, "rgba(210, 180, 140, 0.7)"),
];

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"roast-curve-wasm initialized".into());
}

/// Analyze a roast log into a profile
///
/// `rows_json` is a JSON array of `{ time_label, bean_temp_c }` objects;
/// the returned string is the serialized `RoastProfile`.
#[wasm_bindgen]
pub fn analyze_roast_log(rows_json: &str, file_name: &str) -> Result<String, JsValue> {
    let rows: Vec<RoastLogRow> = serde_json::from_str(rows_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid rows JSON: {}", e)))?;

    let profile = analyze_log(&rows, file_name, &EngineSettings::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&profile).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Project a profile onto the timeline axis
#[wasm_bindgen]
pub fn project_roast_timeline(profile_json: &str, max_total_seconds: u32) -> Result<String, JsValue> {
    let profile: RoastProfile = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;

    let projection = project_timeline(&profile, max_total_seconds);
    serde_json::to_string(&projection).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Default timeline axis domain in seconds
#[wasm_bindgen]
pub fn default_timeline_seconds() -> u32 {
    DEFAULT_TIMELINE_SECONDS
}

/// Display color for a phase name ("drying", "browning", "development")
#[wasm_bindgen]
pub fn phase_color(phase: &str) -> Option<String> {
    let name = PhaseName::from_str(phase)?;
    PHASE_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| color.to_string())
}

/// Re-format a second count as an "m:ss" label
#[wasm_bindgen]
pub fn format_seconds(total_seconds: i64) -> String {
    format_time(total_seconds)
}
