//! Attachments and component types.
//!
//! An attachment names the index space a buffer is keyed by. A component
//! type names how each scalar is stored. Both travel across the host
//! boundary as strings, so each has a lossless mapping to and from its
//! host identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which index space an attribute buffer is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attachment {
    /// One element per point.
    Point,
    /// One element per face-vertex incidence.
    Corner,
    /// One element per face.
    Face,
    /// A single element for the whole mesh.
    Mesh,
}

impl Attachment {
    /// All attachments, in table order.
    pub const ALL: [Attachment; 4] = [Self::Point, Self::Corner, Self::Face, Self::Mesh];

    /// Host identifier of this attachment (e.g. `OfxMeshAttribPoint`).
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Point => constants::ATTACHMENT_POINT,
            Self::Corner => constants::ATTACHMENT_CORNER,
            Self::Face => constants::ATTACHMENT_FACE,
            Self::Mesh => constants::ATTACHMENT_MESH,
        }
    }

    /// Parses a host attachment identifier.
    ///
    /// The short forms (`point`, `corner`, `face`, `mesh`) are accepted too,
    /// case-insensitively, for hand-written mesh documents.
    pub fn from_identifier(name: &str) -> Option<Self> {
        match name {
            constants::ATTACHMENT_POINT => Some(Self::Point),
            constants::ATTACHMENT_CORNER => Some(Self::Corner),
            constants::ATTACHMENT_FACE => Some(Self::Face),
            constants::ATTACHMENT_MESH => Some(Self::Mesh),
            other => match other.to_ascii_lowercase().as_str() {
                "point" => Some(Self::Point),
                "corner" => Some(Self::Corner),
                "face" => Some(Self::Face),
                "mesh" => Some(Self::Mesh),
                _ => None,
            },
        }
    }

    /// Human-readable name, used as a table title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Corner => "Corner",
            Self::Face => "Face",
            Self::Mesh => "Mesh",
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage type of a single attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// `u8`, widened on read.
    UnsignedByte,
    /// `i32`.
    Int32,
    /// `f32`.
    Float32,
}

impl ComponentType {
    /// Size of one component in bytes.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Self::UnsignedByte => 1,
            Self::Int32 => 4,
            Self::Float32 => 4,
        }
    }

    /// Host identifier of this type (e.g. `OfxMeshAttribTypeFloat`).
    pub fn identifier(self) -> &'static str {
        match self {
            Self::UnsignedByte => constants::TYPE_UBYTE,
            Self::Int32 => constants::TYPE_INT,
            Self::Float32 => constants::TYPE_FLOAT,
        }
    }

    /// Parses a host type identifier. Unknown names yield `None`.
    pub fn from_identifier(name: &str) -> Option<Self> {
        match name {
            constants::TYPE_UBYTE => Some(Self::UnsignedByte),
            constants::TYPE_INT => Some(Self::Int32),
            constants::TYPE_FLOAT => Some(Self::Float32),
            _ => None,
        }
    }

    /// Whether values of this type can serve as element indices.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::UnsignedByte | Self::Int32)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
