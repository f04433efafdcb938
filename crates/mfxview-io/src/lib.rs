//! # mfxview-io
//!
//! Boundary types for getting meshes and settings into mfxview.
//!
//! - [`contract::MeshDocument`]: a JSON description of a mesh's counts and
//!   attribute values.
//! - [`validator`]: turns a document into owned attribute storage, checking
//!   it the way a host checks attribute definitions.
//! - [`obj`]: Wavefront OBJ import that keeps face sizes.
//! - [`config::ViewerConfig`]: TOML settings for the command-line viewer.

pub mod config;
pub mod contract;
pub mod obj;
pub mod validator;

pub use config::{BoxParams, ViewerConfig};
pub use contract::{AttributeDocument, MeshDocument};
pub use obj::{load_obj, parse_obj};
pub use validator::{document_to_storage, load_document, validate_document};
