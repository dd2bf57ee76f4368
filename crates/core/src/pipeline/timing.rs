use std::collections::HashMap;

use rumsi_telemetry::ResourceRecord;

use crate::model::{Region, ResolvedRegion};

/// Annotate each region with the completion time of its backing resource.
///
/// URL matching is exact — no prefix or substring matching. Regions whose
/// resource never shows up in the records (cache hits, cross-origin entries
/// the host couldn't read) get `0.0` rather than failing the pipeline.
/// When the records list the same URL twice, the later entry wins.
pub fn resolve_paint_times(
    regions: Vec<Region>,
    resources: &[ResourceRecord],
) -> Vec<ResolvedRegion> {
    let mut by_url: HashMap<&str, f64> = HashMap::with_capacity(resources.len());
    for record in resources {
        by_url.insert(record.name.as_str(), record.response_end);
    }

    regions
        .into_iter()
        .map(|region| {
            let paint_time = by_url.get(region.url.as_str()).copied().unwrap_or(0.0);
            ResolvedRegion {
                url: region.url,
                area: region.area,
                rect: region.rect,
                paint_time,
            }
        })
        .collect()
}
