//! Real-user Speed Index estimation.
//!
//! Takes a read-only telemetry snapshot of an already-loaded page (element
//! tree, geometry, timing records) and reduces it to one scalar: the integral
//! over time of the fraction of visual content not yet painted. Paint events
//! are approximated from network completion times, not pixel sampling.
//!
//! The pipeline runs strictly forward in a single pass:
//! region collection → timing resolution → first-paint estimation →
//! progress curve → integration. It is a pure function of the snapshot;
//! unavailability is a first-class outcome, never a zero.

pub mod model;
pub mod pipeline;
pub mod snapshot;

pub use pipeline::{Measurement, MetricError, compute, speed_index};
