//! Procedural mesh generators.
//!
//! These produce the same attribute layout a mesh effect plugin would:
//! float positions, int corner points, and either a constant face size
//! or an explicit FaceSize buffer.

use mfxview_types::constants::{CORNER_POINT, FACE_SIZE, POINT_POSITION};
use mfxview_types::{Attachment, MfxResult};

use crate::mesh::MeshCounts;
use crate::storage::MeshStorage;

/// Corner table of the box: six quads, outward winding.
const BOX_CORNERS: [i32; 24] = [
    0, 2, 3, 1, //
    4, 5, 7, 6, //
    0, 1, 5, 4, //
    1, 3, 7, 5, //
    3, 2, 6, 7, //
    2, 0, 4, 6, //
];

/// Generates an axis-aligned box centered at the origin.
///
/// Point `i` sits at `(bit_k(i) - 0.5) * dimension_k` on each axis `k`,
/// so point 0 is the `(-,-,-)` corner and point 7 the `(+,+,+)` one.
/// Faces are 6 quads declared with a constant face size of 4.
///
/// # Example
/// ```
/// use mfxview_mesh::generators::box_mesh;
/// let storage = box_mesh(1.0, 1.0, 1.0).unwrap();
/// let mesh = storage.view().unwrap();
/// assert_eq!(mesh.point_count(), 8);
/// assert_eq!(mesh.corner_count(), 24);
/// ```
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MfxResult<MeshStorage> {
    let dimensions = [width, height, depth];
    let mut positions = Vec::with_capacity(8 * 3);
    for i in 0..8u32 {
        for (k, dim) in dimensions.iter().enumerate() {
            let sign = ((i >> k) & 1) as f32;
            positions.push((sign - 0.5) * dim);
        }
    }

    let mut storage = MeshStorage::new(MeshCounts::constant(8, 6, 4));
    storage.define_f32(Attachment::Point, POINT_POSITION, 3, &positions)?;
    storage.define_i32(Attachment::Corner, CORNER_POINT, 1, &BOX_CORNERS)?;
    Ok(storage)
}

/// Generates a flat grid of quads in the XY plane, facing +Z.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y.
/// With `explicit_sizes` the faces are described by a FaceSize buffer of 4s
/// instead of a constant face size; both describe the same mesh.
pub fn quad_grid(
    cols: usize,
    rows: usize,
    width: f32,
    height: f32,
    explicit_sizes: bool,
) -> MfxResult<MeshStorage> {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let face_count = cols * rows;

    let mut positions = Vec::with_capacity(verts_x * verts_y * 3);
    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols.max(1) as f32;
            let v = j as f32 / rows.max(1) as f32;
            positions.push(-width / 2.0 + u * width);
            positions.push(-height / 2.0 + v * height);
            positions.push(0.0);
        }
    }

    // Counter-clockwise seen from +Z.
    let mut corners = Vec::with_capacity(face_count * 4);
    for j in 0..rows {
        for i in 0..cols {
            let bottom_left = (j * verts_x + i) as i32;
            let bottom_right = bottom_left + 1;
            let top_left = bottom_left + verts_x as i32;
            let top_right = top_left + 1;
            corners.extend_from_slice(&[bottom_left, bottom_right, top_right, top_left]);
        }
    }

    let point_count = verts_x * verts_y;
    let counts = if explicit_sizes {
        MeshCounts::variable(point_count, face_count * 4, face_count)
    } else {
        MeshCounts::constant(point_count, face_count, 4)
    };

    let mut storage = MeshStorage::new(counts);
    storage.define_f32(Attachment::Point, POINT_POSITION, 3, &positions)?;
    storage.define_i32(Attachment::Corner, CORNER_POINT, 1, &corners)?;
    if explicit_sizes {
        storage.define_i32(Attachment::Face, FACE_SIZE, 1, &vec![4; face_count])?;
    }
    Ok(storage)
}

/// Builds a variable-size polygon mesh from explicit faces.
///
/// `faces` lists the point indices of each face in winding order. The
/// result always carries an explicit FaceSize buffer.
pub fn polygons(positions: &[[f32; 3]], faces: &[&[i32]]) -> MfxResult<MeshStorage> {
    let corner_count = faces.iter().map(|f| f.len()).sum();
    let counts = MeshCounts::variable(positions.len(), corner_count, faces.len());

    let flat_positions: Vec<f32> = positions.iter().flatten().copied().collect();
    let corners: Vec<i32> = faces.iter().flat_map(|f| f.iter().copied()).collect();
    let sizes: Vec<i32> = faces.iter().map(|f| f.len() as i32).collect();

    let mut storage = MeshStorage::new(counts);
    storage.define_f32(Attachment::Point, POINT_POSITION, 3, &flat_positions)?;
    storage.define_i32(Attachment::Corner, CORNER_POINT, 1, &corners)?;
    storage.define_i32(Attachment::Face, FACE_SIZE, 1, &sizes)?;
    Ok(storage)
}
