//! Wavefront OBJ import.
//!
//! Faces keep their arity: nothing is triangulated on load, so quads and
//! larger polygons reach the triangulator as they are in the file. Every
//! object in the file is appended to one mesh with a variable face size
//! and an explicit `Int` FaceSize buffer. Materials, normals and texture
//! coordinates are not imported.

use std::io::BufRead;
use std::path::Path;

use mfxview_mesh::{MeshCounts, MeshStorage};
use mfxview_types::constants::{CORNER_POINT, FACE_SIZE, POINT_POSITION};
use mfxview_types::{Attachment, MfxError, MfxResult};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: false,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

fn parse_error(e: tobj::LoadError) -> MfxError {
    MfxError::Serialization(format!("OBJ parse error: {e}"))
}

/// Loads an OBJ file into owned storage.
pub fn load_obj(path: impl AsRef<Path>) -> MfxResult<MeshStorage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MfxError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no such OBJ file: {}", path.display()),
        )));
    }
    let (models, _materials) = tobj::load_obj(path, &load_options()).map_err(parse_error)?;
    models_to_storage(&models)
}

/// Parses OBJ text. `mtllib` references are ignored.
pub fn parse_obj(text: &str) -> MfxResult<MeshStorage> {
    let mut reader = std::io::BufReader::new(text.as_bytes());
    obj_from_reader(&mut reader)
}

fn obj_from_reader(reader: &mut impl BufRead) -> MfxResult<MeshStorage> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(parse_error)?;
    models_to_storage(&models)
}

/// Concatenates every model into one variable-size mesh.
///
/// Each model carries its own position list, so corner indices are shifted
/// by the number of points appended before it.
fn models_to_storage(models: &[tobj::Model]) -> MfxResult<MeshStorage> {
    let mut positions: Vec<f32> = Vec::new();
    let mut corners: Vec<i32> = Vec::new();
    let mut sizes: Vec<i32> = Vec::new();

    for model in models {
        let mesh = &model.mesh;
        let base = positions.len() / 3;
        for &index in &mesh.indices {
            let point = base + index as usize;
            corners.push(i32::try_from(point).map_err(|_| too_large(&model.name, "point index"))?);
        }

        if mesh.face_arities.is_empty() {
            // All triangles.
            sizes.extend(std::iter::repeat(3).take(mesh.indices.len() / 3));
        } else {
            for &arity in &mesh.face_arities {
                sizes.push(i32::try_from(arity).map_err(|_| too_large(&model.name, "face size"))?);
            }
        }
        positions.extend_from_slice(&mesh.positions);
    }

    let counts = MeshCounts::variable(positions.len() / 3, corners.len(), sizes.len());
    let mut storage = MeshStorage::new(counts);
    storage.define_f32(Attachment::Point, POINT_POSITION, 3, &positions)?;
    storage.define_i32(Attachment::Corner, CORNER_POINT, 1, &corners)?;
    storage.define_i32(Attachment::Face, FACE_SIZE, 1, &sizes)?;

    storage.view()?;
    tracing::debug!(
        objects = models.len(),
        points = counts.point_count,
        faces = counts.face_count,
        "loaded OBJ mesh"
    );
    Ok(storage)
}

fn too_large(object: &str, what: &str) -> MfxError {
    MfxError::InconsistentCounts(format!("{what} in object '{object}' exceeds the Int range"))
}
