//! Cook event types.
//!
//! Events are small value types tagged with the cook that produced them.
//! Recoverable conditions from a pass map one-to-one onto events.

use mfxview_types::Condition;
use serde::{Deserialize, Serialize};

/// An event emitted while cooking a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookEvent {
    /// Cook number (0-indexed).
    pub cook: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A new mesh arrived.
    CookBegin {
        point_count: usize,
        corner_count: usize,
        face_count: usize,
    },

    /// A face was left out of the triangle list.
    FaceSkipped { face: u32, size: i64 },

    /// A triangle got the zero normal.
    DegenerateTriangle { triangle: u32 },

    /// An attribute buffer could not be decoded.
    UnknownComponentType {
        identifier: String,
        type_name: String,
    },

    /// Render geometry was rebuilt.
    CookEnd {
        triangle_count: usize,
        /// Wall-clock time for the cook (seconds).
        wall_time: f64,
    },
}

impl CookEvent {
    pub fn new(cook: u32, kind: EventKind) -> Self {
        Self { cook, kind }
    }
}

impl From<&Condition> for EventKind {
    fn from(condition: &Condition) -> Self {
        match condition {
            Condition::UnsupportedFaceSize { face, size } => Self::FaceSkipped {
                face: face.0,
                size: *size,
            },
            Condition::DegenerateTriangle { triangle } => Self::DegenerateTriangle {
                triangle: triangle.0,
            },
            Condition::UnknownComponentType {
                identifier,
                type_name,
            } => Self::UnknownComponentType {
                identifier: identifier.clone(),
                type_name: type_name.clone(),
            },
        }
    }
}

/// One event per condition, in order.
pub fn events_for_conditions(cook: u32, conditions: &[Condition]) -> Vec<CookEvent> {
    conditions
        .iter()
        .map(|c| CookEvent::new(cook, EventKind::from(c)))
        .collect()
}
