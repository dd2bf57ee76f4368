//! JSON snapshot ingestion.
//!
//! Hosts (page instrumentation, typically on the far side of the WASM
//! boundary) hand the telemetry snapshot over as JSON. Ingestion is serde
//! deserialization plus a light normalization pass; a snapshot that cannot
//! be parsed at all is an ingestion error, distinct from the pipeline's
//! "unavailable" outcome.

use rumsi_telemetry::TelemetrySnapshot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse and normalize a JSON telemetry snapshot.
pub fn parse_snapshot(data: &[u8]) -> Result<TelemetrySnapshot, SnapshotError> {
    let mut snapshot: TelemetrySnapshot = serde_json::from_slice(data)?;
    normalize(&mut snapshot);
    Ok(snapshot)
}

/// Scrub values the pipeline cannot do arithmetic on. JSON has no literal
/// infinities, but number overflow (`1e999`) still parses to one.
fn normalize(snapshot: &mut TelemetrySnapshot) {
    let timing = &mut snapshot.timing;
    timing.resources.retain(|r| r.response_end.is_finite());
    scrub(&mut timing.navigation.response_start);
    scrub(&mut timing.paint.first_paint);
    if let Some(vendor) = &mut timing.paint.vendor {
        scrub(&mut vendor.first_paint_time);
        scrub(&mut vendor.start_load_time);
        scrub(&mut vendor.request_time);
    }
}

fn scrub(value: &mut Option<f64>) {
    if value.is_some_and(|v| !v.is_finite()) {
        *value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_snapshot() {
        let json = br#"{
            "dom": { "elements": [], "head": [] },
            "geometry": {
                "viewport": { "width": 800.0, "height": 600.0 },
                "document": { "width": 800.0, "height": 1200.0 }
            },
            "timing": {
                "navigation": { "responseStart": 95.2 },
                "resources": [
                    { "name": "https://example.com/a.css", "responseEnd": 180.0, "initiatorType": "link" }
                ],
                "paint": {}
            }
        }"#;
        let snapshot = parse_snapshot(json).expect("parse");
        assert_eq!(snapshot.timing.resources.len(), 1);
        assert_eq!(snapshot.timing.navigation.response_start, Some(95.2));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_snapshot(b"{ not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn drops_overflowed_timings() {
        let json = br#"{
            "dom": { "elements": [] },
            "geometry": {
                "viewport": { "width": 800.0, "height": 600.0 },
                "document": { "width": 800.0, "height": 600.0 }
            },
            "timing": {
                "navigation": { "responseStart": 1e999 },
                "resources": [
                    { "name": "https://example.com/a.js", "responseEnd": 1e999, "initiatorType": "script" },
                    { "name": "https://example.com/b.js", "responseEnd": 120.0, "initiatorType": "script" }
                ]
            }
        }"#;
        let snapshot = parse_snapshot(json).expect("parse");
        assert!(snapshot.timing.navigation.response_start.is_none());
        assert_eq!(snapshot.timing.resources.len(), 1);
        assert_eq!(snapshot.timing.resources[0].name, "https://example.com/b.js");
    }
}
