use serde::{Deserialize, Serialize};

use crate::dom::DomSnapshot;
use crate::timing::TimingSnapshot;
use crate::types::PageGeometry;

/// The complete telemetry snapshot a host hands to the pipeline — everything
/// the metric is a function of, read once from the live page and never
/// re-read mid-computation.
///
/// ```text
///   DOM + computed style ─┐
///   Viewport/doc geometry ├─▶ TelemetrySnapshot ──▶ pipeline ──▶ Speed Index
///   Navigation/Resource   │       (this)
///   Timing + paint signals┘
/// ```
///
/// # Design principles
///
/// 1. **Three narrow providers** — `dom`, `geometry`, and `timing` are
///    independent read interfaces; each pipeline stage takes only the
///    providers it reads, so every stage is testable against synthetic
///    fixtures built from plain struct literals.
/// 2. **Host-shaped wire format** — field names follow the browser APIs the
///    host copies from (`responseEnd`, `initiatorType`, ...), so
///    instrumentation can serialize `performance` entries essentially
///    verbatim. Absent signals deserialize to `None`/empty rather than
///    failing.
/// 3. **Quiescent by assumption** — the snapshot models a settled, post-load
///    page. Consistency between the element tree and the timing records is
///    the host's concern; the pipeline only degrades gracefully when they
///    disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub dom: DomSnapshot,
    pub geometry: PageGeometry,
    pub timing: TimingSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementSnapshot;
    use crate::timing::ResourceRecord;
    use crate::types::{DocumentSize, Rect, Viewport};

    fn sample_snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            dom: DomSnapshot {
                elements: vec![ElementSnapshot {
                    tag: "img".into(),
                    src: Some("https://example.com/a.png".into()),
                    background_image: None,
                    rect: Rect::new(0.0, 0.0, 100.0, 100.0),
                }],
                head: vec![],
            },
            geometry: PageGeometry {
                viewport: Viewport {
                    width: 1024.0,
                    height: 768.0,
                },
                document: DocumentSize {
                    width: 1024.0,
                    height: 2048.0,
                },
            },
            timing: TimingSnapshot {
                resources: vec![ResourceRecord {
                    name: "https://example.com/a.png".into(),
                    response_end: 321.5,
                    initiator_type: "img".into(),
                }],
                ..TimingSnapshot::default()
            },
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: TelemetrySnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.dom.elements.len(), 1);
        assert_eq!(back.timing.resources[0].name, "https://example.com/a.png");
        assert!((back.timing.resources[0].response_end - 321.5).abs() < f64::EPSILON);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_string(&sample_snapshot()).expect("serialize");
        assert!(json.contains("\"responseEnd\""));
        assert!(json.contains("\"initiatorType\""));
    }

    #[test]
    fn absent_signals_deserialize_to_defaults() {
        // A host that can only capture the element tree and geometry.
        let json = r#"{
            "dom": { "elements": [] },
            "geometry": {
                "viewport": { "width": 800.0, "height": 600.0 },
                "document": { "width": 800.0, "height": 600.0 }
            },
            "timing": {}
        }"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).expect("deserialize");
        assert!(snapshot.dom.head.is_empty());
        assert!(snapshot.timing.navigation.response_start.is_none());
        assert!(snapshot.timing.resources.is_empty());
        assert!(snapshot.timing.paint.first_paint.is_none());
        assert!(snapshot.timing.paint.vendor.is_none());
    }

    #[test]
    fn head_async_flag_uses_reserved_word_on_the_wire() {
        let json = r#"{
            "tag": "script",
            "src": "https://example.com/app.js",
            "async": true
        }"#;
        let head: crate::dom::HeadElement = serde_json::from_str(json).expect("deserialize");
        assert!(head.is_async);
    }
}
