use serde::{Deserialize, Serialize};

/// One Resource Timing entry, as the host read it from
/// `performance.getEntriesByType("resource")`. Listed in the browser's own
/// (chronological) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Absolute resource URL.
    pub name: String,
    /// Completion time in ms since navigation start.
    pub response_end: f64,
    /// Who initiated the fetch ("script", "link", "img", "css", ...).
    /// Open set defined by the browser, kept as a string.
    #[serde(default)]
    pub initiator_type: String,
}

impl ResourceRecord {
    /// Whether the fetch was initiated by a script or link element — the
    /// initiator roles that mark a head-critical resource.
    pub fn is_script_or_link(&self) -> bool {
        self.initiator_type == "script" || self.initiator_type == "link"
    }
}

/// Navigation Timing values, relative to navigation start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTiming {
    /// `responseStart` in ms since navigation start; `None` when the host
    /// could not read Navigation Timing at all.
    #[serde(default)]
    pub response_start: Option<f64>,
}

/// Vendor-specific load-times bundle. Raw clock values in milliseconds,
/// NOT relativized to navigation start — the estimator does the subtraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPaintSignals {
    #[serde(default)]
    pub first_paint_time: Option<f64>,
    #[serde(default)]
    pub start_load_time: Option<f64>,
    #[serde(default)]
    pub request_time: Option<f64>,
}

/// First-paint signals in preference order: the standards-track signal when
/// the browser exposes one, the vendor bundle otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintSignals {
    /// Browser-native first paint, ms since navigation start.
    #[serde(default)]
    pub first_paint: Option<f64>,
    #[serde(default)]
    pub vendor: Option<VendorPaintSignals>,
}

/// Load/response timestamps — the timing-records provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingSnapshot {
    #[serde(default)]
    pub navigation: NavigationTiming,
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
    #[serde(default)]
    pub paint: PaintSignals,
}
