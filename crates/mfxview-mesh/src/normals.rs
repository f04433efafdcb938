//! Flat (per-triangle) normal computation.
//!
//! Each triangle gets `normalize(cross(p1 - p0, p2 - p0))`. Nothing is
//! averaged across shared points: the renderer broadcasts the normal to
//! the triangle's three corners. A zero-length cross product (collinear or
//! coincident points) yields the zero vector and a `DegenerateTriangle`
//! condition.

use glam::Vec3;
use mfxview_types::{Condition, MfxError, MfxResult, TriangleId};

use crate::mesh::MeshView;
use crate::triangulate::triangulate;

/// Unit normal of triangle `(p0, p1, p2)`, or `None` if it is degenerate.
#[inline]
pub fn flat_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Option<Vec3> {
    let ab = p1 - p0;
    let ac = p2 - p0;
    ab.cross(ac).try_normalize()
}

/// One normal per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatNormals {
    /// Normals parallel to the input triangles.
    pub normals: Vec<Vec3>,
    /// Triangles whose normal fell back to zero.
    pub degenerate: Vec<TriangleId>,
}

impl FlatNormals {
    /// Degenerate triangles as reportable conditions.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.degenerate
            .iter()
            .map(|&triangle| Condition::DegenerateTriangle { triangle })
    }
}

/// Computes the flat normal of every triangle.
///
/// `positions` is indexed by point. A triangle index past the end of
/// `positions` is a `TriangleIndexOutOfRange` error; triangulation output
/// never produces one.
pub fn flat_normals(positions: &[Vec3], triangles: &[[u32; 3]]) -> MfxResult<FlatNormals> {
    let mut out = FlatNormals {
        normals: Vec::with_capacity(triangles.len()),
        degenerate: Vec::new(),
    };

    let point = |triangle: usize, index: u32| {
        positions
            .get(index as usize)
            .copied()
            .ok_or_else(|| MfxError::TriangleIndexOutOfRange {
                triangle,
                point: index,
                point_count: positions.len(),
            })
    };

    for (t, &[a, b, c]) in triangles.iter().enumerate() {
        let (p0, p1, p2) = (point(t, a)?, point(t, b)?, point(t, c)?);
        match flat_normal(p0, p1, p2) {
            Some(n) => out.normals.push(n),
            None => {
                out.normals.push(Vec3::ZERO);
                out.degenerate.push(TriangleId::try_from(t)?);
            }
        }
    }

    Ok(out)
}

/// Per-face normals: each face takes the normal of its first triangle.
///
/// Faces that were skipped by triangulation get the zero vector. The
/// returned conditions cover both skipped faces and degenerate triangles.
pub fn face_normals(mesh: &MeshView<'_>) -> MfxResult<(Vec<[f32; 3]>, Vec<Condition>)> {
    let triangulation = triangulate(mesh)?;
    let positions = mesh.point_positions()?;
    let flat = flat_normals(&positions, &triangulation.triangles)?;

    let mut normals = vec![[0.0f32; 3]; mesh.face_count()];
    let mut assigned = vec![false; mesh.face_count()];
    for (face, normal) in triangulation.source_faces.iter().zip(&flat.normals) {
        let f = face.index();
        if !assigned[f] {
            normals[f] = normal.to_array();
            assigned[f] = true;
        }
    }

    let mut conditions = triangulation.conditions;
    conditions.extend(flat.conditions());
    Ok((normals, conditions))
}
