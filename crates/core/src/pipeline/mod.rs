//! The five pipeline stages, strictly forward, single pass:
//! regions → timing → first paint → progress → integral.

pub mod first_paint;
pub mod integrate;
pub mod progress;
pub mod regions;
pub mod timing;

pub use first_paint::{FirstPaint, FirstPaintSource, estimate_first_paint};
pub use integrate::integrate;
pub use progress::{BACKGROUND_PAINT_WEIGHT, build_progress};
pub use regions::collect_regions;
pub use timing::resolve_paint_times;

use log::debug;
use rumsi_telemetry::TelemetrySnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the pipeline could not produce a meaningful metric.
///
/// Stages degrade gracefully on their own (unresolvable timing becomes 0,
/// unparseable styles are skipped); only conditions that would make the
/// final number meaningless surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricError {
    /// Every first-paint strategy came up empty. A fabricated 0 would be
    /// indistinguishable from a genuinely instant paint, so the whole
    /// measurement is unavailable instead.
    #[error("no usable first-paint signal")]
    NoFirstPaintSignal,
}

/// The computed metric, plus the first-paint estimate it hinged on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Speed Index in ms; lower is better.
    pub speed_index: f64,
    /// First-paint estimate in ms since navigation start.
    pub first_paint: f64,
    /// Strategy that produced the first-paint estimate.
    pub first_paint_source: FirstPaintSource,
}

/// Run the full pipeline over one telemetry snapshot.
///
/// Pure function of the snapshot — identical input yields identical output,
/// and nothing is retained across invocations. Unavailability is an
/// expected, first-class outcome for callers, not an exceptional one.
pub fn compute(snapshot: &TelemetrySnapshot) -> Result<Measurement, MetricError> {
    let regions = collect_regions(&snapshot.dom, &snapshot.geometry.viewport);
    let resolved = resolve_paint_times(regions, &snapshot.timing.resources);
    let first_paint = estimate_first_paint(&snapshot.timing, &snapshot.dom.head)
        .ok_or(MetricError::NoFirstPaintSignal)?;
    let progress = build_progress(&resolved, first_paint.time, &snapshot.geometry);
    if progress.is_empty() {
        debug!("no paintable area, metric degenerates to first paint");
    }
    let speed_index = integrate(&progress, first_paint.time);
    Ok(Measurement {
        speed_index,
        first_paint: first_paint.time,
        first_paint_source: first_paint.source,
    })
}

/// Fail-safe boundary around [`compute`]: any failure collapses to `None`
/// ("unavailable"), never a partial or zero-filled value.
pub fn speed_index(snapshot: &TelemetrySnapshot) -> Option<f64> {
    compute(snapshot).ok().map(|m| m.speed_index)
}
