//! Mesh document validation.
//!
//! Converts a [`MeshDocument`] into [`MeshStorage`], catching data-level
//! errors at the boundary: unknown attachments or types, value counts
//! that do not match the element count, and numbers that do not fit the
//! declared storage type.

use std::path::Path;

use mfxview_mesh::{AttributeLayout, MeshCounts, MeshStorage};
use mfxview_types::{Attachment, ComponentType, MfxError, MfxResult};

use crate::contract::{AttributeDocument, MeshDocument};

/// Reads and parses a mesh document from a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> MfxResult<MeshDocument> {
    let text = std::fs::read_to_string(path.as_ref())?;
    MeshDocument::from_json(&text)
}

/// Builds owned storage from a document.
///
/// Checks:
/// - attachment and type names are known
/// - each attribute has `element_count × component_count` values
/// - values fit the storage type (integral, within range)
/// - counts are consistent and every buffer fits, as for host buffers
pub fn document_to_storage(document: &MeshDocument) -> MfxResult<MeshStorage> {
    let counts = MeshCounts {
        point_count: document.point_count,
        corner_count: document.corner_count,
        face_count: document.face_count,
        constant_face_size: document.constant_face_size,
    };
    counts.validate()?;

    let mut storage = MeshStorage::new(counts);
    for attribute in &document.attributes {
        let attachment = parse_attachment(attribute)?;
        let ty = parse_component_type(attribute)?;

        let element_count = counts.element_count(attachment);
        let expected = element_count
            .checked_mul(attribute.component_count)
            .ok_or_else(|| MfxError::InvalidAttribute {
                identifier: attribute.identifier.clone(),
                reason: format!(
                    "{} elements × {} components overflows",
                    element_count, attribute.component_count
                ),
            })?;
        if attribute.values.len() != expected {
            return Err(MfxError::InvalidAttribute {
                identifier: attribute.identifier.clone(),
                reason: format!(
                    "expected {} values ({} elements × {} components), found {}",
                    expected,
                    element_count,
                    attribute.component_count,
                    attribute.values.len()
                ),
            });
        }

        let bytes = encode_values(attribute, ty)?;
        let mut layout =
            AttributeLayout::new(attachment, attribute.identifier.as_str(), ty, attribute.component_count);
        if let Some(semantic) = &attribute.semantic {
            layout = layout.with_semantic(semantic.as_str());
        }
        storage.define_attribute(layout, bytes)?;
    }

    // Surface layout and count problems now rather than at first use.
    storage.view()?;
    tracing::debug!(
        points = counts.point_count,
        faces = counts.face_count,
        attributes = storage.attribute_count(),
        "loaded mesh document"
    );
    Ok(storage)
}

/// Full structural check: storage conversion plus the topology checks
/// triangulation relies on.
pub fn validate_document(document: &MeshDocument) -> MfxResult<MeshStorage> {
    let storage = document_to_storage(document)?;
    storage.view()?.validate_topology()?;
    Ok(storage)
}

fn parse_attachment(attribute: &AttributeDocument) -> MfxResult<Attachment> {
    Attachment::from_identifier(&attribute.attachment).ok_or_else(|| MfxError::InvalidAttribute {
        identifier: attribute.identifier.clone(),
        reason: format!("unknown attachment '{}'", attribute.attachment),
    })
}

fn parse_component_type(attribute: &AttributeDocument) -> MfxResult<ComponentType> {
    let name = attribute.component_type.as_str();
    let short = match name.to_ascii_lowercase().as_str() {
        "ubyte" | "u8" => Some(ComponentType::UnsignedByte),
        "int" | "i32" => Some(ComponentType::Int32),
        "float" | "f32" => Some(ComponentType::Float32),
        _ => None,
    };
    ComponentType::from_identifier(name)
        .or(short)
        .ok_or_else(|| MfxError::UnknownComponentType {
            identifier: attribute.identifier.clone(),
            type_name: name.to_string(),
        })
}

fn encode_values(attribute: &AttributeDocument, ty: ComponentType) -> MfxResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(attribute.values.len() * ty.size());
    for (i, &value) in attribute.values.iter().enumerate() {
        let out_of_range = |kind: &str| MfxError::InvalidAttribute {
            identifier: attribute.identifier.clone(),
            reason: format!("value {} at index {} is not a valid {}", value, i, kind),
        };
        match ty {
            ComponentType::Float32 => bytes.extend_from_slice(&(value as f32).to_ne_bytes()),
            ComponentType::Int32 => {
                if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
                    return Err(out_of_range("int"));
                }
                bytes.extend_from_slice(&(value as i32).to_ne_bytes());
            }
            ComponentType::UnsignedByte => {
                if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
                    return Err(out_of_range("ubyte"));
                }
                bytes.push(value as u8);
            }
        }
    }
    Ok(bytes)
}
