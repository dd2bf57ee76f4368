use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// One rendered element as captured by the host: tag identity, the resolved
/// resource references the style engine reports for it, and its layout rect.
///
/// `rect` is in viewport coordinates and is NOT pre-clipped — elements
/// scrolled out of view carry negative or out-of-range edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    /// Lowercase tag name ("img", "div", ...).
    pub tag: String,
    /// Resolved `src` URL, for image elements.
    #[serde(default)]
    pub src: Option<String>,
    /// Computed `background-image` value, verbatim (e.g. `url("https://…")`).
    #[serde(default)]
    pub background_image: Option<String>,
    pub rect: Rect,
}

/// An ordered `<head>` child, reduced to the attributes that decide whether
/// it references a render-blocking resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadElement {
    /// Lowercase tag name ("script", "link", ...).
    pub tag: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub rel: Option<String>,
}

/// Element tree snapshot — the element+style provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomSnapshot {
    /// All rendered elements, in document order.
    pub elements: Vec<ElementSnapshot>,
    /// Children of `<head>`, in document order.
    #[serde(default)]
    pub head: Vec<HeadElement>,
}
