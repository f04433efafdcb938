//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{CookEvent, EventKind};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &CookEvent);

    /// Called when the session ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// Clones share the same list, so a test can keep one clone and hand the
/// other to the bus.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<CookEvent>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far.
    pub fn events(&self) -> Vec<CookEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &CookEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing`. Conditions log at `warn`, the rest at `info`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &CookEvent) {
        match &event.kind {
            EventKind::FaceSkipped { .. }
            | EventKind::DegenerateTriangle { .. }
            | EventKind::UnknownComponentType { .. } => {
                tracing::warn!(cook = event.cook, event = ?event.kind, "cook_condition");
            }
            _ => {
                tracing::info!(cook = event.cook, event = ?event.kind, "cook_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
