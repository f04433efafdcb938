//! # mfxview-mesh
//!
//! Mesh attribute model and the triangulation pipeline.
//!
//! ## Key Types
//!
//! - [`AttributeBuffer`]: A typed, strided, borrowed view over host memory.
//! - [`AttributeSet`]: Buffers keyed by `(attachment, identifier)`.
//! - [`MeshView`]: Counts plus attributes; the input of every stage.
//! - [`triangulate()`]: Triangles and quads to a flat triangle list.
//! - [`flat_normals()`]: One normal per triangle, zero for degenerate ones.
//! - [`MeshStorage`]: Owned attribute memory for generated meshes.

pub mod attribute;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod storage;
pub mod triangulate;

pub use attribute::{AttributeBuffer, AttributeLayout, AttributeSet};
pub use mesh::{FaceSizeSource, MeshCounts, MeshView};
pub use normals::{flat_normal, flat_normals, FlatNormals};
pub use storage::MeshStorage;
pub use triangulate::{triangulate, Triangulation};
