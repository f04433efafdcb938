//! JSON frame exporter.
//!
//! Collects the positions and normals of every submitted frame and writes
//! them to one JSON file on `finalize()`. The web viewer loads the file
//! straight into non-indexed vertex buffers.

use std::path::{Path, PathBuf};

use mfxview_types::{Condition, MfxError, MfxResult};
use serde::Serialize;

use crate::builder::RenderMesh;
use crate::renderer::Renderer;

#[derive(Serialize)]
struct FrameData {
    frame: u32,
    triangle_count: usize,
    positions: Vec<f32>,
    normals: Vec<f32>,
    conditions: Vec<Condition>,
}

#[derive(Serialize)]
struct ExportData<'f> {
    frame_count: usize,
    frames: &'f [FrameData],
}

/// Writes submitted frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init()?;
/// exporter.submit_frame(&render_mesh)?;
/// exporter.finalize()?; // writes the file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    pretty: bool,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            pretty: false,
            frames: Vec::new(),
        }
    }

    /// Indents the output file.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self) -> MfxResult<()> {
        self.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, mesh: &RenderMesh) -> MfxResult<()> {
        self.frames.push(FrameData {
            frame: self.frames.len() as u32,
            triangle_count: mesh.triangle_count(),
            positions: mesh.positions.clone(),
            normals: mesh.normals.clone(),
            conditions: mesh.conditions.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> MfxResult<()> {
        let data = ExportData {
            frame_count: self.frames.len(),
            frames: &self.frames,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&data)
        } else {
            serde_json::to_string(&data)
        }
        .map_err(|e| MfxError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            frames = self.frames.len(),
            "exported frames"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
