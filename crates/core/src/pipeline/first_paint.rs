use std::collections::HashSet;

use log::debug;
use rumsi_telemetry::{HeadElement, TimingSnapshot, VendorPaintSignals};
use serde::{Deserialize, Serialize};

/// Which fallback strategy produced the first-paint estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirstPaintSource {
    /// Browser-native paint timing, trusted as-is.
    Native,
    /// Vendor load-times bundle, relativized to its own load-start clock.
    Vendor,
    /// Heuristic over head-critical resources.
    CriticalChain,
}

/// First-paint estimate in ms since navigation start, tagged with the
/// strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstPaint {
    pub time: f64,
    pub source: FirstPaintSource,
}

/// Estimate when the page first rendered non-blank content.
///
/// Strategies are tried in priority order, first satisfied wins; each either
/// resolves a value or reports no signal. `None` means the chain is
/// exhausted — the caller escalates that to the "unavailable" outcome
/// rather than fabricating a zero.
pub fn estimate_first_paint(timing: &TimingSnapshot, head: &[HeadElement]) -> Option<FirstPaint> {
    let estimate = native_signal(timing)
        .or_else(|| vendor_signal(timing))
        .or_else(|| critical_chain(timing, head));
    match estimate {
        Some(fp) => debug!("first paint {:.1}ms via {:?}", fp.time, fp.source),
        None => debug!("no usable first-paint signal"),
    }
    estimate
}

fn native_signal(timing: &TimingSnapshot) -> Option<FirstPaint> {
    timing.paint.first_paint.map(|time| FirstPaint {
        time,
        source: FirstPaintSource::Native,
    })
}

/// The vendor bundle reports raw clock values; the estimate is the paint
/// clock minus the load-start reference. A signal earlier than its own
/// reference is nonsensical and rejected. When neither reference clock was
/// captured the reference degrades to 0, which admits any positive signal —
/// kept as-is to match the historical metric.
fn vendor_signal(timing: &TimingSnapshot) -> Option<FirstPaint> {
    let vendor: &VendorPaintSignals = timing.paint.vendor.as_ref()?;
    let first_paint_time = vendor.first_paint_time.filter(|&t| t > 0.0)?;
    let reference = vendor
        .start_load_time
        .or(vendor.request_time)
        .unwrap_or(0.0);
    if first_paint_time < reference {
        debug!(
            "vendor first paint {first_paint_time:.1} predates load start {reference:.1}, ignored"
        );
        return None;
    }
    Some(FirstPaint {
        time: first_paint_time - reference,
        source: FirstPaintSource::Vendor,
    })
}

/// Paint is modeled as blocked until the head's synchronous critical-path
/// resources finish, or until the first non-critical resource appears,
/// whichever comes first in the record order.
fn critical_chain(timing: &TimingSnapshot, head: &[HeadElement]) -> Option<FirstPaint> {
    let mut estimate = timing.navigation.response_start?;
    let critical = critical_urls(head);

    for record in &timing.resources {
        if !critical.contains(record.name.as_str()) || !record.is_script_or_link() {
            // First non-critical record ends the blocking chain; critical
            // completions after it do not count.
            break;
        }
        if record.response_end > estimate {
            estimate = record.response_end;
        }
    }

    Some(FirstPaint {
        time: estimate,
        source: FirstPaintSource::CriticalChain,
    })
}

/// URLs of render-blocking head resources: non-async scripts and stylesheet
/// links, in document order.
fn critical_urls(head: &[HeadElement]) -> HashSet<&str> {
    let mut urls = HashSet::new();
    for element in head {
        match element.tag.as_str() {
            "script" if !element.is_async => {
                if let Some(src) = element.src.as_deref()
                    && !src.is_empty()
                {
                    urls.insert(src);
                }
            }
            "link" => {
                let is_stylesheet = element
                    .rel
                    .as_deref()
                    .is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"));
                if is_stylesheet
                    && let Some(href) = element.href.as_deref()
                    && !href.is_empty()
                {
                    urls.insert(href);
                }
            }
            _ => {}
        }
    }
    urls
}
