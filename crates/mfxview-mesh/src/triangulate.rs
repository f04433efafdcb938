//! Face → triangle conversion.
//!
//! Faces are walked in order with a running corner cursor:
//!
//! ```text
//! size 3: (c0, c1, c2)
//! size 4: (c0, c1, c2), (c2, c3, c0)    split along the c2–c0 diagonal
//! other:  skipped, one UnsupportedFaceSize condition
//! ```
//!
//! The quad split is fixed, not the shorter-diagonal heuristic, so output
//! stays identical to what the host's viewer has always produced.

use mfxview_types::{Condition, FaceId, MfxResult};

use crate::mesh::MeshView;

/// Triangles produced from a mesh, plus what was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    /// Point indices per triangle, in emission order.
    pub triangles: Vec<[u32; 3]>,
    /// Face each triangle came from, parallel to `triangles`.
    pub source_faces: Vec<FaceId>,
    /// Faces that could not be triangulated.
    pub conditions: Vec<Condition>,
}

impl Triangulation {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Point indices flattened to `[t0p0, t0p1, t0p2, t1p0, ...]`.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    fn push(&mut self, face: FaceId, triangle: [u32; 3]) {
        self.triangles.push(triangle);
        self.source_faces.push(face);
    }
}

/// Triangulates every triangle and quad face of `mesh`.
///
/// Fails only on structural problems (missing mandatory attributes,
/// inconsistent counts, out-of-range corner indices). A face of any other
/// size is left out and reported; the faces after it are still processed.
pub fn triangulate(mesh: &MeshView<'_>) -> MfxResult<Triangulation> {
    mesh.validate_topology()?;
    let sizes = mesh.face_sizes()?;

    let mut out = Triangulation {
        triangles: Vec::with_capacity(mesh.face_count() * 2),
        source_faces: Vec::with_capacity(mesh.face_count() * 2),
        conditions: Vec::new(),
    };

    let mut cursor = 0usize;
    for f in 0..mesh.face_count() {
        let face = FaceId::try_from(f)?;
        let size = sizes.size_of(f)?;
        let corner = |k: usize| mesh.corner_point(cursor + k);

        match size {
            3 => {
                out.push(face, [corner(0)?, corner(1)?, corner(2)?]);
            }
            4 => {
                let c = [corner(0)?, corner(1)?, corner(2)?, corner(3)?];
                out.push(face, [c[0], c[1], c[2]]);
                out.push(face, [c[2], c[3], c[0]]);
            }
            _ => {
                tracing::warn!(face = f, size, "skipping face with unsupported size");
                out.conditions
                    .push(Condition::UnsupportedFaceSize { face, size });
            }
        }

        // validate_topology guarantees non-negative sizes.
        cursor += size as usize;
    }

    tracing::debug!(
        faces = mesh.face_count(),
        triangles = out.triangle_count(),
        skipped = out.conditions.len(),
        "triangulated mesh"
    );
    Ok(out)
}
