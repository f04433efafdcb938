//! Mesh document types.
//!
//! A document lists counts plus one entry per attribute with its values
//! flattened element by element. Values are numbers regardless of the
//! storage type; the validator narrows them.
//!
//! ```json
//! {
//!   "point_count": 3, "corner_count": 3, "face_count": 1,
//!   "constant_face_size": 3,
//!   "attributes": [
//!     { "attachment": "point", "identifier": "OfxMeshAttribPointPosition",
//!       "type": "float", "component_count": 3,
//!       "values": [0,0,0, 1,0,0, 0,1,0] },
//!     { "attachment": "corner", "identifier": "OfxMeshAttribCornerPoint",
//!       "type": "int", "component_count": 1, "values": [0,1,2] }
//!   ]
//! }
//! ```

use mfxview_mesh::MeshView;
use mfxview_types::constants::VARIABLE_FACE_SIZE;
use mfxview_types::{MfxError, MfxResult};
use serde::{Deserialize, Serialize};

/// A serialized mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshDocument {
    pub point_count: usize,
    pub corner_count: usize,
    pub face_count: usize,
    /// `-1` (the default) when the FaceSize attribute gives each face's size.
    #[serde(default = "variable_face_size")]
    pub constant_face_size: i32,
    #[serde(default)]
    pub attributes: Vec<AttributeDocument>,
}

/// One attribute of a [`MeshDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDocument {
    /// Host identifier or short name (`point`, `corner`, `face`, `mesh`).
    pub attachment: String,
    pub identifier: String,
    /// Host type identifier or short name (`ubyte`, `int`, `float`).
    #[serde(rename = "type")]
    pub component_type: String,
    pub component_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,
    /// `element_count × component_count` numbers.
    pub values: Vec<f64>,
}

fn variable_face_size() -> i32 {
    VARIABLE_FACE_SIZE
}

impl MeshDocument {
    /// Decodes every attribute of `mesh` into a document.
    ///
    /// Fails if any buffer has an unknown component type, since its values
    /// cannot be written out.
    pub fn from_view(mesh: &MeshView<'_>) -> MfxResult<Self> {
        let mut attributes = Vec::with_capacity(mesh.attributes().len());
        for buffer in mesh.attributes().iter() {
            let mut values = Vec::with_capacity(buffer.element_count() * buffer.component_count());
            for element in 0..buffer.element_count() {
                values.extend(buffer.element_at(element)?);
            }
            attributes.push(AttributeDocument {
                attachment: buffer.attachment().identifier().to_string(),
                identifier: buffer.identifier().to_string(),
                component_type: buffer.type_name().to_string(),
                component_count: buffer.component_count(),
                semantic: buffer.semantic().map(str::to_string),
                values,
            });
        }

        let counts = mesh.counts();
        Ok(Self {
            point_count: counts.point_count,
            corner_count: counts.corner_count,
            face_count: counts.face_count,
            constant_face_size: counts.constant_face_size,
            attributes,
        })
    }

    pub fn from_json(text: &str) -> MfxResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| MfxError::Serialization(format!("Invalid mesh document: {e}")))
    }

    pub fn to_json(&self, pretty: bool) -> MfxResult<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| MfxError::Serialization(format!("JSON serialization failed: {e}")))
    }
}
