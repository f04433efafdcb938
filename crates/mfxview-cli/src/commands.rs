//! CLI command implementations.

use std::time::Instant;

use mfxview_inspect::{project, TableSnapshot};
use mfxview_io::{document_to_storage, load_document, load_obj, validate_document, BoxParams, MeshDocument, ViewerConfig};
use mfxview_mesh::generators::box_mesh;
use mfxview_mesh::{MeshStorage, MeshView};
use mfxview_render::{HeadlessRenderer, JsonFrameExporter, RenderMesh, Renderer};
use mfxview_telemetry::{events_for_conditions, CookEvent, EventBus, EventKind, TracingSink};
use mfxview_types::Attachment;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Builds render geometry for `mesh`, reporting the cook on a telemetry bus.
fn cook(mesh: &MeshView<'_>, renderer: &mut dyn Renderer) -> Result<RenderMesh, Box<dyn std::error::Error>> {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let start = Instant::now();
    bus.emit(CookEvent::new(
        0,
        EventKind::CookBegin {
            point_count: mesh.point_count(),
            corner_count: mesh.corner_count(),
            face_count: mesh.face_count(),
        },
    ));

    let render_mesh = mfxview_render::build(mesh)?;
    bus.emit_all(events_for_conditions(0, &render_mesh.conditions));

    renderer.init()?;
    renderer.submit_frame(&render_mesh)?;
    renderer.finalize()?;

    bus.emit(CookEvent::new(
        0,
        EventKind::CookEnd {
            triangle_count: render_mesh.triangle_count(),
            wall_time: start.elapsed().as_secs_f64(),
        },
    ));
    bus.finalize();
    Ok(render_mesh)
}

/// Loads a mesh from an OBJ file or a JSON mesh document.
fn load_mesh(path: &str) -> Result<MeshStorage, Box<dyn std::error::Error>> {
    if path.ends_with(".obj") {
        Ok(load_obj(path)?)
    } else {
        Ok(document_to_storage(&load_document(path)?)?)
    }
}

fn print_summary(mesh: &MeshView<'_>, render_mesh: &RenderMesh) {
    println!("Points:       {}", mesh.point_count());
    println!("Corners:      {}", mesh.corner_count());
    println!("Faces:        {}", mesh.face_count());
    match mesh.constant_face_size() {
        -1 => println!("Face size:    variable"),
        n => println!("Face size:    {n}"),
    }
    println!("Attributes:   {}", mesh.attributes().len());
    println!("Triangles:    {}", render_mesh.triangle_count());
    if !render_mesh.conditions.is_empty() {
        println!();
        println!("Conditions ({}):", render_mesh.conditions.len());
        for condition in &render_mesh.conditions {
            println!("  - {condition}");
        }
    }
}

/// Cook the box generator.
pub fn cook_box(config: &ViewerConfig, params: BoxParams, normals: bool, output_path: Option<&str>) -> CmdResult {
    println!("mfxview Box");
    println!("───────────");
    println!();

    let check = ViewerConfig {
        box_params: params,
        ..config.clone()
    };
    check.validate()?;

    let mut storage = box_mesh(params.width, params.height, params.depth)?;
    if normals {
        storage = storage.with_face_normals()?;
    }
    let mesh = storage.view()?;

    println!("Size:         {} × {} × {}", params.width, params.height, params.depth);
    let render_mesh = cook(&mesh, &mut HeadlessRenderer::new())?;
    print_summary(&mesh, &render_mesh);

    if let Some(path) = output_path {
        let document = MeshDocument::from_view(&mesh)?;
        std::fs::write(path, document.to_json(config.pretty_json)?)?;
        println!();
        println!("Mesh written to: {path}");
    }

    Ok(())
}

/// Print attribute tables of a mesh.
pub fn inspect(path: &str, attachment: Option<&str>, max_rows: usize, json: bool) -> CmdResult {
    let filter = match attachment {
        Some(name) => Some(
            Attachment::from_identifier(name)
                .ok_or_else(|| format!("Unknown attachment: '{name}'. Available: point, corner, face, mesh"))?,
        ),
        None => None,
    };

    let storage = load_mesh(path)?;
    let mesh = storage.view()?;
    let projection = project(&mesh);

    let snapshots: Vec<TableSnapshot> = projection
        .tables()
        .into_iter()
        .filter(|table| filter.map_or(true, |a| a == table.attachment))
        .map(|table| TableSnapshot::capture(table, max_rows.max(1)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        println!("mfxview Inspector");
        println!("─────────────────");
        println!("Mesh: {path}");
        println!();
        for snapshot in &snapshots {
            println!("{}", snapshot.to_text());
        }
    }

    for condition in &projection.conditions {
        tracing::warn!(%condition, "projection condition");
    }
    Ok(())
}

/// Build render geometry from a mesh.
pub fn build(config: &ViewerConfig, path: &str, output_path: Option<&str>) -> CmdResult {
    println!("mfxview Build");
    println!("─────────────");
    println!("Mesh: {path}");
    println!();

    let storage = load_mesh(path)?;
    let mesh = storage.view()?;

    let render_mesh = match output_path {
        Some(out) => {
            let mut exporter = JsonFrameExporter::new(out).with_pretty(config.pretty_json);
            cook(&mesh, &mut exporter)?
        }
        None => cook(&mesh, &mut HeadlessRenderer::new())?,
    };
    print_summary(&mesh, &render_mesh);

    if let Some(out) = output_path {
        println!();
        println!("Frames written to: {out}");
    }
    Ok(())
}

/// Validate a mesh or config file.
pub fn validate(path: &str) -> CmdResult {
    println!("mfxview Validator");
    println!("─────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = ViewerConfig::load(path)?;
        println!("✅ Config is valid (log level '{}', {} rows).", config.log_level, config.max_rows);
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let document = load_document(path)?;
        match validate_document(&document) {
            Ok(storage) => {
                let counts = storage.counts();
                println!(
                    "✅ Mesh is valid ({} points, {} corners, {} faces).",
                    counts.point_count, counts.corner_count, counts.face_count
                );
            }
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else if path.ends_with(".obj") {
        println!("Validating mesh: {path}");
        let checked = load_obj(path).and_then(|storage| {
            storage.view()?.validate_topology()?;
            Ok(storage)
        });
        match checked {
            Ok(storage) => {
                let counts = storage.counts();
                println!(
                    "✅ Mesh is valid ({} points, {} corners, {} faces).",
                    counts.point_count, counts.corner_count, counts.face_count
                );
            }
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config), .json or .obj (mesh).");
    }

    Ok(())
}
