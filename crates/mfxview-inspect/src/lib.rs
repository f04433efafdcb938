//! # mfxview-inspect
//!
//! Read-side projection of a mesh into per-attachment tables, the way a
//! spreadsheet widget shows them, plus materialized snapshots for export.

pub mod projector;
pub mod snapshot;

pub use projector::{display_name, project, Column, Projection, Table};
pub use snapshot::TableSnapshot;
