use rumsi_core::pipeline;
use rumsi_core::snapshot::parse_snapshot;
use wasm_bindgen::prelude::*;

/// Compute the full measurement from a JSON telemetry snapshot.
///
/// Returns the measurement as JSON (`speedIndex`, `firstPaint`,
/// `firstPaintSource`). Malformed snapshots and an unavailable metric both
/// surface as `JsError` so the host can distinguish them from a result.
#[wasm_bindgen]
pub fn measure(data: &[u8]) -> Result<String, JsError> {
    let snapshot = parse_snapshot(data).map_err(|e| JsError::new(&e.to_string()))?;
    let measurement = pipeline::compute(&snapshot).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&measurement).map_err(|e| JsError::new(&e.to_string()))
}

/// Fail-safe entry point: the Speed Index in ms, or `undefined` when the
/// snapshot cannot be parsed or the metric is unavailable. Never 0 as a
/// stand-in for failure.
#[wasm_bindgen]
pub fn speed_index(data: &[u8]) -> Option<f64> {
    let snapshot = parse_snapshot(data).ok()?;
    pipeline::speed_index(&snapshot)
}
