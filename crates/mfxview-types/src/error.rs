//! Error types for mfxview.
//!
//! All crates return `MfxResult<T>` from fallible operations. Recoverable
//! buffer-local and face-local findings are not errors; they are reported
//! as [`Condition`](crate::Condition)s alongside a partial result.

use thiserror::Error;

use crate::attachment::Attachment;

/// Unified error type for mfxview.
#[derive(Debug, Error)]
pub enum MfxError {
    /// A buffer declares a component type the decoder does not recognize.
    #[error("Attribute '{identifier}' has unknown component type '{type_name}'")]
    UnknownComponentType {
        identifier: String,
        type_name: String,
    },

    /// The point position or corner point buffer is absent.
    #[error("Missing required attribute {identifier} on {attachment}")]
    MissingRequiredAttribute {
        attachment: Attachment,
        identifier: String,
    },

    /// A mandatory buffer is present but has the wrong shape.
    #[error("Required attribute {identifier} is invalid: {reason}")]
    InvalidRequiredAttribute { identifier: String, reason: String },

    /// Mesh counts disagree with each other or with a buffer.
    #[error("Inconsistent mesh counts: {0}")]
    InconsistentCounts(String),

    /// A corner refers to a point that does not exist.
    #[error("Corner {corner} refers to point {point}, but the mesh has {point_count} points")]
    CornerIndexOutOfRange {
        corner: usize,
        point: i64,
        point_count: usize,
    },

    /// A triangle refers to a point outside the position list.
    #[error("Triangle {triangle} refers to point {point}, but there are {point_count} positions")]
    TriangleIndexOutOfRange {
        triangle: usize,
        point: u32,
        point_count: usize,
    },

    /// An element read past the buffer's declared element count.
    #[error("Element {element} is out of range for '{identifier}' ({element_count} elements)")]
    ElementOutOfRange {
        identifier: String,
        element: usize,
        element_count: usize,
    },

    /// A component read past the buffer's component count.
    #[error("Component {component} is out of range for '{identifier}' ({component_count} components)")]
    ComponentOutOfRange {
        identifier: String,
        component: usize,
        component_count: usize,
    },

    /// The declared layout does not fit in the borrowed memory region.
    #[error("Attribute '{identifier}' needs {required} bytes but its region holds {available}")]
    BufferOutOfBounds {
        identifier: String,
        required: usize,
        available: usize,
    },

    /// An attribute declaration is malformed (zero components, short stride, ...).
    #[error("Invalid attribute '{identifier}': {reason}")]
    InvalidAttribute { identifier: String, reason: String },

    /// Two buffers share an identifier within one attachment.
    #[error("Attribute '{identifier}' is already defined on {attachment}")]
    DuplicateAttribute {
        attachment: Attachment,
        identifier: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, MfxError>`.
pub type MfxResult<T> = Result<T, MfxError>;
