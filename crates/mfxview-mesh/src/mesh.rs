//! The canonical in-memory mesh: element counts plus an attribute set.
//!
//! A [`MeshView`] is produced once per cook and is immutable for the
//! duration of a projection or triangulation pass. It never owns attribute
//! memory; its lifetime `'a` is the lifetime of the host's buffers.

use glam::Vec3;
use mfxview_types::constants::{
    CORNER_POINT, FACE_SIZE, MIN_CONSTANT_FACE_SIZE, POINT_POSITION, VARIABLE_FACE_SIZE,
};
use mfxview_types::{Attachment, ComponentType, MfxError, MfxResult};
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeBuffer, AttributeSet};

/// Element counts of a mesh, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshCounts {
    pub point_count: usize,
    pub corner_count: usize,
    pub face_count: usize,
    /// `-1` when faces vary in size, otherwise the size of every face.
    pub constant_face_size: i32,
}

impl MeshCounts {
    /// Counts for a mesh whose faces vary in size.
    pub fn variable(point_count: usize, corner_count: usize, face_count: usize) -> Self {
        Self {
            point_count,
            corner_count,
            face_count,
            constant_face_size: VARIABLE_FACE_SIZE,
        }
    }

    /// Counts for a mesh where every face has `face_size` corners.
    ///
    /// A corner count that would overflow saturates, so [`validate`](Self::validate)
    /// rejects the result.
    pub fn constant(point_count: usize, face_count: usize, face_size: u32) -> Self {
        Self {
            point_count,
            corner_count: face_count.saturating_mul(face_size as usize),
            face_count,
            constant_face_size: face_size as i32,
        }
    }

    /// Number of elements in an attachment's index space.
    pub fn element_count(&self, attachment: Attachment) -> usize {
        match attachment {
            Attachment::Point => self.point_count,
            Attachment::Corner => self.corner_count,
            Attachment::Face => self.face_count,
            Attachment::Mesh => 1,
        }
    }

    /// Checks the count-only invariants.
    pub fn validate(&self) -> MfxResult<()> {
        let size = self.constant_face_size;
        if size == VARIABLE_FACE_SIZE {
            return Ok(());
        }
        if size < MIN_CONSTANT_FACE_SIZE {
            return Err(MfxError::InconsistentCounts(format!(
                "constant face size {} must be -1 or at least {}",
                size, MIN_CONSTANT_FACE_SIZE
            )));
        }
        let expected = self.face_count.checked_mul(size as usize).ok_or_else(|| {
            MfxError::InconsistentCounts(format!(
                "{} faces of size {} overflow the corner count",
                self.face_count, size
            ))
        })?;
        if expected != self.corner_count {
            return Err(MfxError::InconsistentCounts(format!(
                "{} faces of size {} need {} corners, mesh declares {}",
                self.face_count, size, expected, self.corner_count
            )));
        }
        Ok(())
    }
}

/// Where face sizes come from.
///
/// With a constant face size no FaceSize buffer exists and none is
/// materialized; the constant is answered directly.
#[derive(Debug, Clone, Copy)]
pub enum FaceSizeSource<'v, 'a> {
    /// A host-provided `(Face, FaceSize)` buffer.
    Explicit(&'v AttributeBuffer<'a>),
    /// Every face has this many corners.
    Constant(u32),
}

impl FaceSizeSource<'_, '_> {
    /// Corner count of face `face`.
    pub fn size_of(&self, face: usize) -> MfxResult<i64> {
        match self {
            Self::Explicit(buffer) => buffer.integer_at(face),
            Self::Constant(size) => Ok(i64::from(*size)),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

/// Counts plus attributes; the input of every downstream stage.
#[derive(Debug, Clone)]
pub struct MeshView<'a> {
    counts: MeshCounts,
    attributes: AttributeSet<'a>,
}

impl<'a> MeshView<'a> {
    /// Assembles a view, checking counts and buffer element counts.
    ///
    /// Mandatory attributes are not required here: a mesh without
    /// positions can still be projected into tables. Triangulation and
    /// building check them.
    pub fn new(counts: MeshCounts, attributes: AttributeSet<'a>) -> MfxResult<Self> {
        counts.validate()?;
        for buffer in attributes.iter() {
            let expected = counts.element_count(buffer.attachment());
            if buffer.element_count() != expected {
                return Err(MfxError::InconsistentCounts(format!(
                    "attribute '{}' has {} elements, {} attachment has {}",
                    buffer.identifier(),
                    buffer.element_count(),
                    buffer.attachment(),
                    expected
                )));
            }
        }
        Ok(Self { counts, attributes })
    }

    #[inline]
    pub fn counts(&self) -> MeshCounts {
        self.counts
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.counts.point_count
    }

    #[inline]
    pub fn corner_count(&self) -> usize {
        self.counts.corner_count
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.counts.face_count
    }

    #[inline]
    pub fn constant_face_size(&self) -> i32 {
        self.counts.constant_face_size
    }

    /// Number of elements in an attachment's index space.
    #[inline]
    pub fn element_count(&self, attachment: Attachment) -> usize {
        self.counts.element_count(attachment)
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeSet<'a> {
        &self.attributes
    }

    /// Looks up a declared buffer by `(attachment, identifier)`.
    ///
    /// With a constant face size there is no `(Face, FaceSize)` buffer and
    /// this returns `None` for that key; use [`face_sizes`](Self::face_sizes),
    /// which answers for both layouts.
    pub fn attribute(&self, attachment: Attachment, identifier: &str) -> Option<&AttributeBuffer<'a>> {
        self.attributes.get(attachment, identifier)
    }

    /// Face size source: the constant, or the explicit FaceSize buffer.
    pub fn face_sizes(&self) -> MfxResult<FaceSizeSource<'_, 'a>> {
        if self.counts.constant_face_size != VARIABLE_FACE_SIZE {
            return Ok(FaceSizeSource::Constant(self.counts.constant_face_size as u32));
        }
        let buffer = self.required(Attachment::Face, FACE_SIZE)?;
        let ty = buffer.component_type()?;
        if !ty.is_integer() || buffer.component_count() != 1 {
            return Err(MfxError::InvalidRequiredAttribute {
                identifier: FACE_SIZE.into(),
                reason: format!(
                    "expected 1 integer component, found {} × {}",
                    buffer.component_count(),
                    ty
                ),
            });
        }
        Ok(FaceSizeSource::Explicit(buffer))
    }

    /// The mandatory point position buffer (3 × Float32).
    pub fn positions(&self) -> MfxResult<&AttributeBuffer<'a>> {
        let buffer = self.required(Attachment::Point, POINT_POSITION)?;
        let ty = buffer.component_type()?;
        if ty != ComponentType::Float32 || buffer.component_count() != 3 {
            return Err(MfxError::InvalidRequiredAttribute {
                identifier: POINT_POSITION.into(),
                reason: format!(
                    "expected 3 × {}, found {} × {}",
                    ComponentType::Float32,
                    buffer.component_count(),
                    ty
                ),
            });
        }
        Ok(buffer)
    }

    /// The mandatory corner → point buffer (1 × Int32 or UnsignedByte).
    pub fn corner_points(&self) -> MfxResult<&AttributeBuffer<'a>> {
        let buffer = self.required(Attachment::Corner, CORNER_POINT)?;
        let ty = buffer.component_type()?;
        if !ty.is_integer() || buffer.component_count() != 1 {
            return Err(MfxError::InvalidRequiredAttribute {
                identifier: CORNER_POINT.into(),
                reason: format!(
                    "expected 1 integer component, found {} × {}",
                    buffer.component_count(),
                    ty
                ),
            });
        }
        Ok(buffer)
    }

    /// Point index of corner `corner`, range-checked against the point count.
    pub fn corner_point(&self, corner: usize) -> MfxResult<u32> {
        let point = self.corner_points()?.integer_at(corner)?;
        self.check_point_index(corner, point)
    }

    /// Decodes every point position.
    pub fn point_positions(&self) -> MfxResult<Vec<Vec3>> {
        let positions = self.positions()?;
        (0..self.point_count())
            .map(|i| positions.vec3_at(i).map(Vec3::from_array))
            .collect()
    }

    /// Checks the structural invariants triangulation relies on.
    ///
    /// - point position and corner point buffers exist with the right shape
    /// - every corner index is `< point_count`
    /// - face sizes are non-negative and sum to `corner_count`
    pub fn validate_topology(&self) -> MfxResult<()> {
        self.positions()?;
        let corner_points = self.corner_points()?;
        for corner in 0..self.corner_count() {
            let point = corner_points.integer_at(corner)?;
            self.check_point_index(corner, point)?;
        }

        let sizes = self.face_sizes()?;
        let mut total: usize = 0;
        for face in 0..self.face_count() {
            let size = sizes.size_of(face)?;
            if size < 0 {
                return Err(MfxError::InconsistentCounts(format!(
                    "face {} has negative size {}",
                    face, size
                )));
            }
            total = total.checked_add(size as usize).ok_or_else(|| {
                MfxError::InconsistentCounts(format!("face sizes overflow at face {}", face))
            })?;
        }
        if total != self.corner_count() {
            return Err(MfxError::InconsistentCounts(format!(
                "face sizes sum to {}, mesh declares {} corners",
                total,
                self.corner_count()
            )));
        }
        Ok(())
    }

    fn required(&self, attachment: Attachment, identifier: &str) -> MfxResult<&AttributeBuffer<'a>> {
        self.attributes
            .get(attachment, identifier)
            .ok_or_else(|| MfxError::MissingRequiredAttribute {
                attachment,
                identifier: identifier.to_string(),
            })
    }

    fn check_point_index(&self, corner: usize, point: i64) -> MfxResult<u32> {
        if point < 0 || point as u64 >= self.point_count() as u64 {
            return Err(MfxError::CornerIndexOutOfRange {
                corner,
                point,
                point_count: self.point_count(),
            });
        }
        Ok(point as u32)
    }
}
