//! # mfxview-telemetry
//!
//! Event bus for cook telemetry. Each cook emits structured events
//! (begin, skipped faces, degenerate triangles, end) that pluggable
//! sinks consume: an in-memory list for tests, `tracing` for logs.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{events_for_conditions, CookEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
