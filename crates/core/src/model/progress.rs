use serde::{Deserialize, Serialize};

/// A bucket of painted area landing at one effective paint time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Effective paint time, ms since navigation start.
    pub time: f64,
    /// Area painted at this time, px² (background credit included).
    pub area: f64,
    /// Cumulative painted fraction after this point, 0..=1.
    pub progress: f64,
}

/// Time-ordered visual-progress curve.
///
/// `points` is sorted ascending by time with `progress` monotone
/// non-decreasing, reaching 1.0 at the final point whenever `total_area > 0`.
/// An empty curve is the legitimate degenerate case of a page with no
/// paintable area at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualProgress {
    pub points: Vec<ProgressPoint>,
    /// Total accounted area in px², background credit included.
    pub total_area: f64,
}

impl VisualProgress {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
