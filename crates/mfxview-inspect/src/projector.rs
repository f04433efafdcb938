//! Tabular projection of a mesh.
//!
//! One table per attachment. Rows are elements of the attachment, columns
//! are the attachment's attribute buffers in declaration order, preceded
//! by a synthetic row-index column. Nothing is decoded up front; each cell
//! reads its scalar from the buffer when asked.
//!
//! ```text
//! Point table
//! #   Position
//! 0   -0.5 -0.5 -0.5
//! 1    0.5 -0.5 -0.5
//! ...
//! ```

use mfxview_mesh::{AttributeBuffer, MeshView};
use mfxview_types::{Attachment, Condition, MfxError, MfxResult};

/// Header of the synthetic row-index column.
pub const ROW_INDEX_HEADER: &str = "#";

/// Readable name for an attribute identifier.
///
/// Strips the attachment namespace (`OfxMeshAttribPoint`, or the bare
/// `Point`) from the front of the identifier when something is left
/// afterwards. Otherwise the identifier is returned unchanged.
pub fn display_name(attachment: Attachment, identifier: &str) -> String {
    for prefix in [attachment.identifier(), attachment.label()] {
        if let Some(rest) = identifier.strip_prefix(prefix) {
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }
    identifier.to_string()
}

/// A table column.
#[derive(Debug, Clone)]
pub enum Column<'v, 'a> {
    /// Row number, one component.
    RowIndex,
    /// One attribute buffer, one sub-column per component.
    Attribute {
        display_name: String,
        buffer: &'v AttributeBuffer<'a>,
    },
}

impl Column<'_, '_> {
    pub fn display_name(&self) -> &str {
        match self {
            Self::RowIndex => ROW_INDEX_HEADER,
            Self::Attribute { display_name, .. } => display_name,
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            Self::RowIndex => 1,
            Self::Attribute { buffer, .. } => buffer.component_count(),
        }
    }

    /// Decodes one cell. The row is not checked against the table here;
    /// use [`Table::cell_value`] for that.
    pub fn cell_value(&self, row: usize, component: usize) -> MfxResult<f64> {
        match self {
            Self::RowIndex => {
                if component != 0 {
                    return Err(MfxError::ComponentOutOfRange {
                        identifier: ROW_INDEX_HEADER.into(),
                        component,
                        component_count: 1,
                    });
                }
                Ok(row as f64)
            }
            Self::Attribute { buffer, .. } => buffer.scalar_at(row, component),
        }
    }
}

/// All columns of one attachment.
#[derive(Debug, Clone)]
pub struct Table<'v, 'a> {
    pub attachment: Attachment,
    pub row_count: usize,
    pub columns: Vec<Column<'v, 'a>>,
}

impl<'v, 'a> Table<'v, 'a> {
    fn for_attachment(mesh: &'v MeshView<'a>, attachment: Attachment) -> Self {
        let mut columns = vec![Column::RowIndex];
        columns.extend(mesh.attributes().for_attachment(attachment).map(|buffer| {
            Column::Attribute {
                display_name: display_name(attachment, buffer.identifier()),
                buffer,
            }
        }));
        Self {
            attachment,
            row_count: mesh.element_count(attachment),
            columns,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total scalar columns once every attribute is expanded per component.
    pub fn scalar_column_count(&self) -> usize {
        self.columns.iter().map(Column::component_count).sum()
    }

    /// Decodes the cell at `(row, column, component)`.
    pub fn cell_value(&self, row: usize, column: usize, component: usize) -> MfxResult<f64> {
        if row >= self.row_count {
            return Err(MfxError::ElementOutOfRange {
                identifier: self.attachment.label().into(),
                element: row,
                element_count: self.row_count,
            });
        }
        let col = self.columns.get(column).ok_or_else(|| MfxError::ComponentOutOfRange {
            identifier: self.attachment.label().into(),
            component: column,
            component_count: self.columns.len(),
        })?;
        col.cell_value(row, component)
    }

    /// Column headers, with a `.k` suffix per component for vector columns.
    pub fn headers(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.scalar_column_count());
        for column in &self.columns {
            let n = column.component_count();
            if n == 1 {
                out.push(column.display_name().to_string());
            } else {
                out.extend((0..n).map(|k| format!("{}.{}", column.display_name(), k)));
            }
        }
        out
    }
}

/// Four tables, one per attachment, plus buffer-local conditions.
#[derive(Debug, Clone)]
pub struct Projection<'v, 'a> {
    pub point: Table<'v, 'a>,
    pub corner: Table<'v, 'a>,
    pub face: Table<'v, 'a>,
    pub mesh: Table<'v, 'a>,
    /// One `UnknownComponentType` per undecodable buffer.
    pub conditions: Vec<Condition>,
}

impl<'v, 'a> Projection<'v, 'a> {
    pub fn table(&self, attachment: Attachment) -> &Table<'v, 'a> {
        match attachment {
            Attachment::Point => &self.point,
            Attachment::Corner => &self.corner,
            Attachment::Face => &self.face,
            Attachment::Mesh => &self.mesh,
        }
    }

    /// Tables in point, corner, face, mesh order.
    pub fn tables(&self) -> [&Table<'v, 'a>; 4] {
        [&self.point, &self.corner, &self.face, &self.mesh]
    }
}

/// Projects `mesh` into tables.
///
/// Never fails: a buffer whose type cannot be decoded keeps its column,
/// its cells return errors, and the projection carries one condition for it.
pub fn project<'v, 'a>(mesh: &'v MeshView<'a>) -> Projection<'v, 'a> {
    let mut conditions = Vec::new();
    for buffer in mesh.attributes().iter() {
        if buffer.component_type().is_err() {
            tracing::warn!(
                attribute = buffer.identifier(),
                type_name = buffer.type_name(),
                "attribute has unknown component type"
            );
            conditions.push(Condition::UnknownComponentType {
                identifier: buffer.identifier().to_string(),
                type_name: buffer.type_name().to_string(),
            });
        }
    }

    Projection {
        point: Table::for_attachment(mesh, Attachment::Point),
        corner: Table::for_attachment(mesh, Attachment::Corner),
        face: Table::for_attachment(mesh, Attachment::Face),
        mesh: Table::for_attachment(mesh, Attachment::Mesh),
        conditions,
    }
}
