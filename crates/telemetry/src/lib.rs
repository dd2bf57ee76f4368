pub mod dom;
pub mod snapshot;
pub mod timing;
pub mod types;

pub use dom::{DomSnapshot, ElementSnapshot, HeadElement};
pub use snapshot::TelemetrySnapshot;
pub use timing::{
    NavigationTiming, PaintSignals, ResourceRecord, TimingSnapshot, VendorPaintSignals,
};
pub use types::{DocumentSize, PageGeometry, Rect, Viewport};
