//! # mfxview-render
//!
//! Turns a mesh into flat, non-indexed triangle geometry and hands it to
//! a pluggable `Renderer`: a `HeadlessRenderer` for tests and CI, and a
//! `JsonFrameExporter` that writes frames to disk for the web viewer.

pub mod builder;
pub mod json_exporter;
pub mod renderer;

pub use builder::{build, RenderMesh};
pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, Renderer};
