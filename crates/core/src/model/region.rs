use rumsi_telemetry::Rect;
use serde::{Deserialize, Serialize};

/// One visible, resource-backed screen area: an image element or an element
/// with an absolute-URL background image, clipped to the viewport.
///
/// Invariant: `area > 0` and `rect` is fully contained in the viewport.
/// Overlapping regions are deliberately kept as-is — painted area is
/// double-counted where regions overlap, matching the metric's historical
/// calibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// URL of the backing resource.
    pub url: String,
    /// Clipped area in px².
    pub area: f64,
    /// Viewport-clipped rect.
    pub rect: Rect,
}

/// A region annotated with the completion time of its backing resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedRegion {
    pub url: String,
    pub area: f64,
    pub rect: Rect,
    /// `responseEnd` of the matching resource record, ms since navigation
    /// start; `0.0` when no record matched.
    pub paint_time: f64,
}

impl ResolvedRegion {
    /// The modeled time this region becomes visible: its resource completion
    /// time, but never before the page's first paint.
    pub fn effective_time(&self, first_paint: f64) -> f64 {
        self.paint_time.max(first_paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(paint_time: f64) -> ResolvedRegion {
        ResolvedRegion {
            url: "https://example.com/a.png".into(),
            area: 100.0,
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            paint_time,
        }
    }

    #[test]
    fn effective_time_floors_at_first_paint() {
        assert_eq!(region(50.0).effective_time(200.0), 200.0);
        assert_eq!(region(350.0).effective_time(200.0), 350.0);
        assert_eq!(region(0.0).effective_time(0.0), 0.0);
    }
}
