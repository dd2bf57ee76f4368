pub mod progress;
pub mod region;

pub use progress::{ProgressPoint, VisualProgress};
pub use region::{Region, ResolvedRegion};
