use rumsi_telemetry::PageGeometry;

use crate::model::{ProgressPoint, ResolvedRegion, VisualProgress};

/// Fraction of the uncovered viewport credited as painted at first paint.
/// Part of the metric's calibration — not tunable.
pub const BACKGROUND_PAINT_WEIGHT: f64 = 0.1;

/// Build the monotone visual-progress curve from the resolved regions.
///
/// Regions are bucketed by effective paint time (a region cannot register
/// before first paint). Viewport area not covered by any region earns a
/// fixed 10% paint credit at first paint. The resulting curve is sorted
/// ascending by time, cumulative, and ends at exactly 1.0 — unless the page
/// has no paintable area at all, in which case it is empty.
pub fn build_progress(
    regions: &[ResolvedRegion],
    first_paint: f64,
    geometry: &PageGeometry,
) -> VisualProgress {
    let mut buckets: Vec<(f64, f64)> = Vec::with_capacity(regions.len() + 1);
    let mut total = 0.0;

    for region in regions {
        buckets.push((region.effective_time(first_paint), region.area));
        total += region.area;
    }

    let viewport_px = geometry.document.width.max(geometry.viewport.width)
        * geometry.document.height.max(geometry.viewport.height);
    let uncovered = (viewport_px - total).max(0.0);
    if uncovered > 0.0 {
        let credit = uncovered * BACKGROUND_PAINT_WEIGHT;
        buckets.push((first_paint, credit));
        total += credit;
    }

    if total <= 0.0 {
        return VisualProgress::default();
    }

    buckets.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut points: Vec<ProgressPoint> = Vec::with_capacity(buckets.len());
    let mut running = 0.0;
    for (time, area) in buckets {
        running += area;
        let progress = running / total;
        match points.last_mut() {
            Some(last) if last.time == time => {
                last.area += area;
                last.progress = progress;
            }
            _ => points.push(ProgressPoint {
                time,
                area,
                progress,
            }),
        }
    }

    VisualProgress {
        points,
        total_area: total,
    }
}
