//! Strongly-typed identifiers for mesh elements.
//!
//! Conditions name faces and triangles through these newtypes so the
//! two index spaces cannot be mixed up.

use serde::{Deserialize, Serialize};

use crate::error::MfxError;

/// Index into the face space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

/// Index into a triangulation's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriangleId(pub u32);

impl FaceId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for FaceId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for TriangleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl TryFrom<usize> for FaceId {
    type Error = MfxError;

    /// Fails past `u32::MAX` instead of truncating.
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| MfxError::InconsistentCounts(format!("face {index} exceeds the 32-bit id range")))
    }
}

impl TryFrom<usize> for TriangleId {
    type Error = MfxError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| MfxError::InconsistentCounts(format!("triangle {index} exceeds the 32-bit id range")))
    }
}
