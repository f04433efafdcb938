//! Recoverable conditions reported alongside partial results.
//!
//! A triangulation or projection pass never aborts for a single bad
//! face or buffer. It skips the offender, records one condition for it,
//! and keeps going. Callers receive the list next to the result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{FaceId, TriangleId};

/// A recoverable finding from a projection, triangulation or build pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// A face is neither a triangle nor a quad and was left out of the output.
    UnsupportedFaceSize { face: FaceId, size: i64 },

    /// A triangle's edges are collinear; its normal fell back to zero.
    DegenerateTriangle { triangle: TriangleId },

    /// A buffer could not be decoded; other buffers are unaffected.
    UnknownComponentType {
        identifier: String,
        type_name: String,
    },
}

impl Condition {
    /// Short machine-friendly name of the condition kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFaceSize { .. } => "unsupported_face_size",
            Self::DegenerateTriangle { .. } => "degenerate_triangle",
            Self::UnknownComponentType { .. } => "unknown_component_type",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFaceSize { face, size } => {
                write!(f, "face {} has unsupported size {}", face.0, size)
            }
            Self::DegenerateTriangle { triangle } => {
                write!(f, "triangle {} is degenerate", triangle.0)
            }
            Self::UnknownComponentType {
                identifier,
                type_name,
            } => write!(f, "attribute '{identifier}' has unknown type '{type_name}'"),
        }
    }
}
