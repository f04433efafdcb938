//! Renderer trait and HeadlessRenderer.
//!
//! A renderer receives one [`RenderMesh`] per cook. Each submitted mesh
//! replaces the previous geometry wholesale; nothing is patched in place.

use mfxview_types::MfxResult;

use crate::builder::RenderMesh;

/// Consumer of built render meshes.
///
/// # Implementations
/// - [`HeadlessRenderer`]: keeps only geometry sizes (tests, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): writes frames to a JSON file
pub trait Renderer: Send {
    /// Prepares the renderer before the first frame.
    fn init(&mut self) -> MfxResult<()>;

    /// Presents a new geometry, replacing the previous one.
    fn submit_frame(&mut self, mesh: &RenderMesh) -> MfxResult<()>;

    /// Flushes buffers and closes outputs.
    fn finalize(&mut self) -> MfxResult<()>;

    fn name(&self) -> &str;

    /// Number of frames submitted since `init`.
    fn frame_count(&self) -> u32;
}

/// Renderer that draws nothing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    triangle_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle count of the geometry currently held.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self) -> MfxResult<()> {
        self.frames = 0;
        self.triangle_count = 0;
        Ok(())
    }

    fn submit_frame(&mut self, mesh: &RenderMesh) -> MfxResult<()> {
        self.frames += 1;
        self.triangle_count = mesh.triangle_count();
        Ok(())
    }

    fn finalize(&mut self) -> MfxResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
