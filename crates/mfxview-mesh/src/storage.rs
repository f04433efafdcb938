//! Owned attribute memory.
//!
//! The plugin host normally owns attribute buffers and hands out views.
//! `MeshStorage` plays that owner role for meshes created on this side of
//! the boundary: generators, mesh documents and tests. It keeps one byte
//! vector per attribute and lends them out as a [`MeshView`].

use mfxview_types::constants::{FACE_NORMAL, SEMANTIC_NORMAL};
use mfxview_types::{Attachment, ComponentType, MfxError, MfxResult};

use crate::attribute::{AttributeBuffer, AttributeLayout, AttributeSet};
use crate::mesh::{MeshCounts, MeshView};
use crate::normals::face_normals;

/// An attribute declaration together with the bytes it describes.
#[derive(Debug, Clone)]
struct OwnedAttribute {
    layout: AttributeLayout,
    data: Vec<u8>,
}

/// Owner of a mesh's counts and attribute bytes.
#[derive(Debug, Clone)]
pub struct MeshStorage {
    counts: MeshCounts,
    attributes: Vec<OwnedAttribute>,
}

impl MeshStorage {
    /// Creates storage with the given counts and no attributes.
    pub fn new(counts: MeshCounts) -> Self {
        Self {
            counts,
            attributes: Vec::new(),
        }
    }

    #[inline]
    pub fn counts(&self) -> MeshCounts {
        self.counts
    }

    /// Number of defined attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Defines an attribute from raw bytes.
    ///
    /// Only uniqueness is checked here; layout-versus-memory checks happen
    /// when a view is built, exactly as for host-provided buffers.
    pub fn define_attribute(&mut self, layout: AttributeLayout, data: Vec<u8>) -> MfxResult<()> {
        let exists = self
            .attributes
            .iter()
            .any(|a| a.layout.attachment == layout.attachment && a.layout.identifier == layout.identifier);
        if exists {
            return Err(MfxError::DuplicateAttribute {
                attachment: layout.attachment,
                identifier: layout.identifier,
            });
        }
        self.attributes.push(OwnedAttribute { layout, data });
        Ok(())
    }

    /// Defines a tightly packed `f32` attribute.
    pub fn define_f32(
        &mut self,
        attachment: Attachment,
        identifier: &str,
        component_count: usize,
        values: &[f32],
    ) -> MfxResult<()> {
        let layout = AttributeLayout::new(attachment, identifier, ComponentType::Float32, component_count);
        self.define_attribute(layout, bytemuck::cast_slice(values).to_vec())
    }

    /// Defines a tightly packed `i32` attribute.
    pub fn define_i32(
        &mut self,
        attachment: Attachment,
        identifier: &str,
        component_count: usize,
        values: &[i32],
    ) -> MfxResult<()> {
        let layout = AttributeLayout::new(attachment, identifier, ComponentType::Int32, component_count);
        self.define_attribute(layout, bytemuck::cast_slice(values).to_vec())
    }

    /// Defines a tightly packed `u8` attribute.
    pub fn define_u8(
        &mut self,
        attachment: Attachment,
        identifier: &str,
        component_count: usize,
        values: &[u8],
    ) -> MfxResult<()> {
        let layout =
            AttributeLayout::new(attachment, identifier, ComponentType::UnsignedByte, component_count);
        self.define_attribute(layout, values.to_vec())
    }

    /// Lends the attributes out as a view.
    pub fn view(&self) -> MfxResult<MeshView<'_>> {
        let mut set = AttributeSet::new();
        for attribute in &self.attributes {
            let count = self.counts.element_count(attribute.layout.attachment);
            set.insert(AttributeBuffer::new(
                attribute.layout.clone(),
                count,
                &attribute.data,
            )?)?;
        }
        MeshView::new(self.counts, set)
    }

    /// Adds a `(Face, "normal")` 3 × Float32 attribute holding one flat
    /// normal per face.
    pub fn with_face_normals(mut self) -> MfxResult<Self> {
        let (normals, conditions) = face_normals(&self.view()?)?;
        if !conditions.is_empty() {
            tracing::debug!(count = conditions.len(), "face normals computed with conditions");
        }
        let flat: Vec<f32> = normals.iter().flatten().copied().collect();
        let layout = AttributeLayout::new(Attachment::Face, FACE_NORMAL, ComponentType::Float32, 3)
            .with_semantic(SEMANTIC_NORMAL);
        self.define_attribute(layout, bytemuck::cast_slice(&flat).to_vec())?;
        Ok(self)
    }
}
