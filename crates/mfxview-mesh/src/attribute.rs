//! Typed, strided views over host-owned attribute memory.
//!
//! An [`AttributeBuffer`] borrows a byte region owned by the plugin host
//! (or by a [`MeshStorage`](crate::storage::MeshStorage)) and decodes one
//! scalar at a time:
//!
//! ```text
//! offset(element, component) = byte_stride * element + component_size * component
//! ```
//!
//! The footprint of every element is checked once, when the view is built.
//! Decoding afterwards only checks the logical element/component indices.

use mfxview_types::{Attachment, ComponentType, MfxError, MfxResult};
use serde::{Deserialize, Serialize};

/// Declaration of an attribute, independent of its memory.
///
/// `type_name` is kept verbatim as the host declared it so that a buffer
/// with an unrecognized type can still be listed and reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLayout {
    /// Namespaced identifier, e.g. `OfxMeshAttribPointPosition`.
    pub identifier: String,
    /// Index space the buffer is keyed by.
    pub attachment: Attachment,
    /// Host type identifier, e.g. `OfxMeshAttribTypeFloat`.
    pub type_name: String,
    /// Components per element (3 for a position).
    pub component_count: usize,
    /// Bytes between consecutive elements.
    pub byte_stride: usize,
    /// Optional semantic hint (`normal`, `color`, ...).
    pub semantic: Option<String>,
}

impl AttributeLayout {
    /// Creates a tightly packed layout for a known component type.
    pub fn new(
        attachment: Attachment,
        identifier: impl Into<String>,
        component_type: ComponentType,
        component_count: usize,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            attachment,
            type_name: component_type.identifier().to_string(),
            component_count,
            byte_stride: component_count * component_type.size(),
            semantic: None,
        }
    }

    /// Creates a layout from the host's raw declaration.
    pub fn from_raw(
        attachment: Attachment,
        identifier: impl Into<String>,
        type_name: impl Into<String>,
        component_count: usize,
        byte_stride: usize,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            attachment,
            type_name: type_name.into(),
            component_count,
            byte_stride,
            semantic: None,
        }
    }

    /// Overrides the byte stride (interleaved storage).
    pub fn with_stride(mut self, byte_stride: usize) -> Self {
        self.byte_stride = byte_stride;
        self
    }

    /// Attaches a semantic hint.
    pub fn with_semantic(mut self, semantic: impl Into<String>) -> Self {
        self.semantic = Some(semantic.into());
        self
    }

    /// Parsed component type, or `None` if the host used an unknown name.
    pub fn component_type(&self) -> Option<ComponentType> {
        ComponentType::from_identifier(&self.type_name)
    }

    /// Number of bytes `element_count` elements occupy in a region.
    ///
    /// For a known type this is the exact footprint: every stride but the
    /// last one, plus the packed size of the last element. Unknown types
    /// cannot be sized per component, so the full stride is charged.
    pub fn required_bytes(&self, element_count: usize) -> Option<usize> {
        if element_count == 0 {
            return Some(0);
        }
        match self.component_type() {
            Some(ty) => (element_count - 1)
                .checked_mul(self.byte_stride)?
                .checked_add(self.component_count.checked_mul(ty.size())?),
            None => element_count.checked_mul(self.byte_stride),
        }
    }
}

/// A borrowed, read-only view over one attribute's memory.
#[derive(Debug, Clone)]
pub struct AttributeBuffer<'a> {
    layout: AttributeLayout,
    element_count: usize,
    data: &'a [u8],
}

impl<'a> AttributeBuffer<'a> {
    /// Builds a view, checking that the layout fits in `data`.
    ///
    /// This is the boundary guard: once a view exists, every element in
    /// `0..element_count` can be decoded without touching memory outside
    /// the borrowed region.
    pub fn new(layout: AttributeLayout, element_count: usize, data: &'a [u8]) -> MfxResult<Self> {
        if layout.component_count == 0 {
            return Err(MfxError::InvalidAttribute {
                identifier: layout.identifier,
                reason: "component count must be positive".into(),
            });
        }

        if let Some(ty) = layout.component_type() {
            let packed = layout.component_count * ty.size();
            if element_count > 1 && layout.byte_stride < packed {
                return Err(MfxError::InvalidAttribute {
                    identifier: layout.identifier,
                    reason: format!(
                        "byte stride {} is smaller than one element ({} bytes)",
                        layout.byte_stride, packed
                    ),
                });
            }
        }

        let required = layout
            .required_bytes(element_count)
            .unwrap_or(usize::MAX);
        if required > data.len() {
            return Err(MfxError::BufferOutOfBounds {
                identifier: layout.identifier,
                required,
                available: data.len(),
            });
        }

        Ok(Self {
            layout,
            element_count,
            data,
        })
    }

    /// The declaration this view was built from.
    #[inline]
    pub fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.layout.identifier
    }

    #[inline]
    pub fn attachment(&self) -> Attachment {
        self.layout.attachment
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.layout.type_name
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.layout.component_count
    }

    #[inline]
    pub fn byte_stride(&self) -> usize {
        self.layout.byte_stride
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    #[inline]
    pub fn semantic(&self) -> Option<&str> {
        self.layout.semantic.as_deref()
    }

    /// The borrowed region, starting at the first element.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Decoded component type.
    ///
    /// Fails with [`MfxError::UnknownComponentType`] for unrecognized
    /// type names. Only this buffer is affected.
    pub fn component_type(&self) -> MfxResult<ComponentType> {
        self.layout
            .component_type()
            .ok_or_else(|| MfxError::UnknownComponentType {
                identifier: self.layout.identifier.clone(),
                type_name: self.layout.type_name.clone(),
            })
    }

    /// Reads one scalar, widened to `f64`.
    ///
    /// `u8`, `i32` and `f32` all convert to `f64` exactly.
    pub fn scalar_at(&self, element: usize, component: usize) -> MfxResult<f64> {
        let (offset, ty) = self.locate(element, component)?;
        let value = match ty {
            ComponentType::UnsignedByte => f64::from(self.data[offset]),
            ComponentType::Int32 => f64::from(self.read_i32(offset)),
            ComponentType::Float32 => f64::from(self.read_f32(offset)),
        };
        Ok(value)
    }

    /// Reads a whole element as `f64` components.
    pub fn element_at(&self, element: usize) -> MfxResult<Vec<f64>> {
        (0..self.component_count())
            .map(|c| self.scalar_at(element, c))
            .collect()
    }

    /// Reads the first three float components of an element.
    pub fn vec3_at(&self, element: usize) -> MfxResult<[f32; 3]> {
        let ty = self.component_type()?;
        if ty != ComponentType::Float32 || self.component_count() < 3 {
            return Err(MfxError::InvalidAttribute {
                identifier: self.layout.identifier.clone(),
                reason: format!(
                    "expected at least 3 × {}, found {} × {}",
                    ComponentType::Float32,
                    self.component_count(),
                    ty
                ),
            });
        }
        let (base, _) = self.locate(element, 0)?;
        Ok([
            self.read_f32(base),
            self.read_f32(base + 4),
            self.read_f32(base + 8),
        ])
    }

    /// Reads component 0 of an element as an integer.
    ///
    /// `u8` values are widened. Float buffers are rejected rather than
    /// truncated.
    pub fn integer_at(&self, element: usize) -> MfxResult<i64> {
        let (offset, ty) = self.locate(element, 0)?;
        match ty {
            ComponentType::UnsignedByte => Ok(i64::from(self.data[offset])),
            ComponentType::Int32 => Ok(i64::from(self.read_i32(offset))),
            ComponentType::Float32 => Err(MfxError::InvalidAttribute {
                identifier: self.layout.identifier.clone(),
                reason: "expected an integer component type".into(),
            }),
        }
    }

    /// Byte offset of `(element, component)` and the decoded type.
    fn locate(&self, element: usize, component: usize) -> MfxResult<(usize, ComponentType)> {
        let ty = self.component_type()?;
        if element >= self.element_count {
            return Err(MfxError::ElementOutOfRange {
                identifier: self.layout.identifier.clone(),
                element,
                element_count: self.element_count,
            });
        }
        if component >= self.component_count() {
            return Err(MfxError::ComponentOutOfRange {
                identifier: self.layout.identifier.clone(),
                component,
                component_count: self.component_count(),
            });
        }
        Ok((self.layout.byte_stride * element + ty.size() * component, ty))
    }

    #[inline]
    fn read_i32(&self, offset: usize) -> i32 {
        bytemuck::pod_read_unaligned(&self.data[offset..offset + 4])
    }

    #[inline]
    fn read_f32(&self, offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&self.data[offset..offset + 4])
    }
}

/// Attribute buffers keyed by `(attachment, identifier)`, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet<'a> {
    buffers: Vec<AttributeBuffer<'a>>,
}

impl<'a> AttributeSet<'a> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
        }
    }

    /// Appends a buffer. Identifiers must be unique within an attachment.
    pub fn insert(&mut self, buffer: AttributeBuffer<'a>) -> MfxResult<()> {
        if self.contains(buffer.attachment(), buffer.identifier()) {
            return Err(MfxError::DuplicateAttribute {
                attachment: buffer.attachment(),
                identifier: buffer.identifier().to_string(),
            });
        }
        self.buffers.push(buffer);
        Ok(())
    }

    /// Looks up a buffer.
    pub fn get(&self, attachment: Attachment, identifier: &str) -> Option<&AttributeBuffer<'a>> {
        self.buffers
            .iter()
            .find(|b| b.attachment() == attachment && b.identifier() == identifier)
    }

    /// Returns true if a buffer with this key exists.
    pub fn contains(&self, attachment: Attachment, identifier: &str) -> bool {
        self.get(attachment, identifier).is_some()
    }

    /// All buffers, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeBuffer<'a>> {
        self.buffers.iter()
    }

    /// Buffers of one attachment, in declaration order.
    pub fn for_attachment(
        &self,
        attachment: Attachment,
    ) -> impl Iterator<Item = &AttributeBuffer<'a>> {
        self.buffers
            .iter()
            .filter(move |b| b.attachment() == attachment)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
