//! # mfxview-types
//!
//! Shared vocabulary for the mfxview crates: attribute identifiers,
//! attachments and component types, strongly-typed element ids, the
//! error type and the recoverable condition list.
//!
//! This crate has zero mesh logic. Everything that walks buffers lives
//! in `mfxview-mesh`.

pub mod attachment;
pub mod condition;
pub mod constants;
pub mod error;
pub mod ids;

pub use attachment::{Attachment, ComponentType};
pub use condition::Condition;
pub use error::{MfxError, MfxResult};
pub use ids::{FaceId, TriangleId};
