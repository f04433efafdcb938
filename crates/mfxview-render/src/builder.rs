//! Render mesh construction.
//!
//! Output is non-indexed: every triangle owns three vertices, and each
//! vertex carries its triangle's flat normal.
//!
//! ```text
//! positions: [x0 y0 z0  x1 y1 z1  x2 y2 z2] [triangle 1] ...
//! normals:   [nx ny nz  nx ny nz  nx ny nz] [triangle 1] ...
//! ```

use mfxview_mesh::normals::flat_normals;
use mfxview_mesh::{triangulate, MeshView};
use mfxview_types::{Condition, MfxResult};
use serde::{Deserialize, Serialize};

/// Floats per triangle in each buffer (3 vertices × xyz).
pub const FLOATS_PER_TRIANGLE: usize = 9;

/// Flat triangle geometry ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderMesh {
    /// `9 * triangle_count` floats.
    pub positions: Vec<f32>,
    /// `9 * triangle_count` floats, same layout as `positions`.
    pub normals: Vec<f32>,
    /// Skipped faces and degenerate triangles.
    pub conditions: Vec<Condition>,
}

impl RenderMesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_TRIANGLE
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Triangulates `mesh` and expands it into a [`RenderMesh`].
///
/// Fails on the same structural problems as [`triangulate`]. Face-local
/// and triangle-local problems end up in `conditions`.
pub fn build(mesh: &MeshView<'_>) -> MfxResult<RenderMesh> {
    let triangulation = triangulate(mesh)?;
    let points = mesh.point_positions()?;
    let flat = flat_normals(&points, &triangulation.triangles)?;

    let n = triangulation.triangle_count() * FLOATS_PER_TRIANGLE;
    let mut positions = Vec::with_capacity(n);
    let mut normals = Vec::with_capacity(n);

    for (triangle, normal) in triangulation.triangles.iter().zip(&flat.normals) {
        for &p in triangle {
            positions.extend_from_slice(&points[p as usize].to_array());
            normals.extend_from_slice(&normal.to_array());
        }
    }

    let mut conditions = triangulation.conditions;
    conditions.extend(flat.conditions());

    tracing::debug!(
        triangles = triangulation.triangles.len(),
        conditions = conditions.len(),
        "built render mesh"
    );

    Ok(RenderMesh {
        positions,
        normals,
        conditions,
    })
}
