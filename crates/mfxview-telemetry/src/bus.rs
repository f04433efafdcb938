//! Event bus: channel-backed dispatch to pluggable sinks.
//!
//! Producers call `emit` from anywhere holding a shared reference; events
//! queue on an `mpsc` channel until `flush` hands them to every sink.

use std::sync::mpsc;

use crate::events::CookEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for cook telemetry.
pub struct EventBus {
    sender: mpsc::Sender<CookEvent>,
    receiver: mpsc::Receiver<CookEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events on `emit`.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event. No-op while disabled.
    pub fn emit(&self, event: CookEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives in `self`, so send cannot fail here.
        let _ = self.sender.send(event);
    }

    /// Queues several events in order.
    pub fn emit_all(&self, events: impl IntoIterator<Item = CookEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    /// Dispatches every queued event to every sink. Returns the number of
    /// events dispatched.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            dispatched += 1;
        }
        dispatched
    }

    /// Flushes, then lets every sink finalize.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
