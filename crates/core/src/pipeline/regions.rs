use rumsi_telemetry::{DomSnapshot, Rect, Viewport};

use crate::model::Region;

/// Scan the element snapshot once and emit the visible, resource-backed
/// regions: image elements with a source URL and elements whose computed
/// `background-image` resolves to an absolute URL.
///
/// Rects are clipped to the viewport; fully off-screen or collapsed elements
/// are discarded. An `<img>` that also carries a styled background
/// contributes two regions — candidates are checked independently, and
/// overlap stays double-counted.
pub fn collect_regions(dom: &DomSnapshot, viewport: &Viewport) -> Vec<Region> {
    let bounds = viewport.bounds();
    let mut regions = Vec::new();

    for element in &dom.elements {
        if element.tag == "img"
            && let Some(src) = element.src.as_deref()
            && !src.is_empty()
        {
            push_clipped(&mut regions, src, &element.rect, &bounds);
        }
        if let Some(style) = element.background_image.as_deref()
            && let Some(url) = background_url(style)
        {
            push_clipped(&mut regions, url, &element.rect, &bounds);
        }
    }

    regions
}

fn push_clipped(regions: &mut Vec<Region>, url: &str, rect: &Rect, bounds: &Rect) {
    if let Some(clipped) = rect.intersect(bounds) {
        regions.push(Region {
            url: url.to_string(),
            area: clipped.area(),
            rect: clipped,
        });
    }
}

/// Extract the first `url(...)` argument from a computed `background-image`
/// value, quotes trimmed. Only absolute http(s) URLs qualify — gradients,
/// `none`, and data URIs are not network-backed paint sources.
fn background_url(value: &str) -> Option<&str> {
    let lower = value.to_ascii_lowercase();
    let open = lower.find("url(")? + 4;
    let close = open + lower[open..].find(')')?;
    let url = value[open..close]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');
    if has_http_scheme(url) { Some(url) } else { None }
}

fn has_http_scheme(url: &str) -> bool {
    url.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || url.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}
