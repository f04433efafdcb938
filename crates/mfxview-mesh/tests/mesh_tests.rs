//! Integration tests for mfxview-mesh.

use glam::Vec3;
use mfxview_mesh::generators::{box_mesh, polygons, quad_grid};
use mfxview_mesh::normals::{face_normals, flat_normal, flat_normals};
use mfxview_mesh::{
    triangulate, AttributeBuffer, AttributeLayout, AttributeSet, MeshCounts, MeshStorage,
    MeshView,
};
use mfxview_types::constants::{CORNER_POINT, FACE_NORMAL, FACE_SIZE, POINT_POSITION};
use mfxview_types::{Attachment, ComponentType, Condition, FaceId, MfxError, TriangleId};

fn unit_square_positions() -> Vec<[f32; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 1.0, 0.0],
    ]
}

fn bytes_of(values: &[f32]) -> Vec<u8> {
    bytemuck::cast_slice(values).to_vec()
}

// ─── AttributeBuffer Tests ────────────────────────────────────

#[test]
fn decode_float_components() {
    let data = bytes_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let layout = AttributeLayout::new(Attachment::Point, POINT_POSITION, ComponentType::Float32, 3);
    let buffer = AttributeBuffer::new(layout, 2, &data).unwrap();
    assert_eq!(buffer.scalar_at(1, 2).unwrap(), 6.0);
    assert_eq!(buffer.vec3_at(0).unwrap(), [1.0, 2.0, 3.0]);
    assert_eq!(buffer.element_at(1).unwrap(), vec![4.0, 5.0, 6.0]);
}

#[test]
fn decode_int_and_ubyte() {
    let ints: Vec<u8> = bytemuck::cast_slice(&[-7i32, 42]).to_vec();
    let layout = AttributeLayout::new(Attachment::Face, "id", ComponentType::Int32, 1);
    let buffer = AttributeBuffer::new(layout, 2, &ints).unwrap();
    assert_eq!(buffer.scalar_at(0, 0).unwrap(), -7.0);
    assert_eq!(buffer.integer_at(1).unwrap(), 42);

    let bytes = [255u8, 0, 128, 3];
    let layout = AttributeLayout::new(Attachment::Point, "color", ComponentType::UnsignedByte, 4);
    let buffer = AttributeBuffer::new(layout, 1, &bytes).unwrap();
    assert_eq!(buffer.scalar_at(0, 0).unwrap(), 255.0);
    assert_eq!(buffer.scalar_at(0, 2).unwrap(), 128.0);
}

#[test]
fn decode_interleaved_stride() {
    // Each point stores position then normal: 6 floats, stride 24 bytes.
    let data = bytes_of(&[
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
        1.0, 2.0, 3.0, 0.0, 1.0, 0.0, //
    ]);
    let positions = AttributeLayout::new(Attachment::Point, POINT_POSITION, ComponentType::Float32, 3)
        .with_stride(24);
    let normals =
        AttributeLayout::new(Attachment::Point, "normal", ComponentType::Float32, 3).with_stride(24);

    let pos = AttributeBuffer::new(positions, 2, &data).unwrap();
    let nrm = AttributeBuffer::new(normals, 2, &data[12..]).unwrap();
    assert_eq!(pos.vec3_at(1).unwrap(), [1.0, 2.0, 3.0]);
    assert_eq!(nrm.vec3_at(0).unwrap(), [0.0, 0.0, 1.0]);
    assert_eq!(nrm.vec3_at(1).unwrap(), [0.0, 1.0, 0.0]);
}

#[test]
fn buffer_too_small_is_rejected_at_the_boundary() {
    let data = bytes_of(&[1.0, 2.0, 3.0]);
    let layout = AttributeLayout::new(Attachment::Point, POINT_POSITION, ComponentType::Float32, 3);
    let err = AttributeBuffer::new(layout, 2, &data).unwrap_err();
    assert!(matches!(
        err,
        MfxError::BufferOutOfBounds {
            required: 24,
            available: 12,
            ..
        }
    ));
}

#[test]
fn short_stride_is_rejected() {
    let data = bytes_of(&[0.0; 9]);
    let layout = AttributeLayout::new(Attachment::Point, POINT_POSITION, ComponentType::Float32, 3)
        .with_stride(8);
    let err = AttributeBuffer::new(layout, 3, &data).unwrap_err();
    assert!(matches!(err, MfxError::InvalidAttribute { .. }));
}

#[test]
fn zero_components_is_rejected() {
    let layout = AttributeLayout::new(Attachment::Point, "empty", ComponentType::Float32, 0);
    assert!(AttributeBuffer::new(layout, 0, &[]).is_err());
}

#[test]
fn out_of_range_reads_are_errors_not_clamps() {
    let data = bytes_of(&[1.0, 2.0]);
    let layout = AttributeLayout::new(Attachment::Point, "w", ComponentType::Float32, 1);
    let buffer = AttributeBuffer::new(layout, 2, &data).unwrap();
    assert!(matches!(
        buffer.scalar_at(2, 0),
        Err(MfxError::ElementOutOfRange { element: 2, element_count: 2, .. })
    ));
    assert!(matches!(
        buffer.scalar_at(0, 1),
        Err(MfxError::ComponentOutOfRange { component: 1, .. })
    ));
}

#[test]
fn unknown_type_fails_only_on_decode() {
    let data = vec![0u8; 16];
    let layout = AttributeLayout::from_raw(Attachment::Point, "weight", "OfxMeshAttribTypeDouble", 1, 8);
    let buffer = AttributeBuffer::new(layout, 2, &data).unwrap();
    assert_eq!(buffer.type_name(), "OfxMeshAttribTypeDouble");
    assert!(matches!(
        buffer.scalar_at(0, 0),
        Err(MfxError::UnknownComponentType { .. })
    ));
}

#[test]
fn integer_read_rejects_floats() {
    let data = bytes_of(&[1.0]);
    let layout = AttributeLayout::new(Attachment::Corner, CORNER_POINT, ComponentType::Float32, 1);
    let buffer = AttributeBuffer::new(layout, 1, &data).unwrap();
    assert!(buffer.integer_at(0).is_err());
}

// ─── AttributeSet / MeshView Tests ────────────────────────────

#[test]
fn attribute_set_keeps_declaration_order_and_rejects_duplicates() {
    let data = bytes_of(&[0.0; 3]);
    let mut set = AttributeSet::new();
    for name in ["b", "a", "c"] {
        let layout = AttributeLayout::new(Attachment::Point, name, ComponentType::Float32, 3);
        set.insert(AttributeBuffer::new(layout, 1, &data).unwrap()).unwrap();
    }
    let names: Vec<&str> = set.iter().map(|b| b.identifier()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);

    let dup = AttributeLayout::new(Attachment::Point, "a", ComponentType::Float32, 3);
    let err = set.insert(AttributeBuffer::new(dup, 1, &data).unwrap()).unwrap_err();
    assert!(matches!(err, MfxError::DuplicateAttribute { .. }));

    // Same identifier on another attachment is fine.
    let other = AttributeLayout::new(Attachment::Face, "a", ComponentType::Float32, 3);
    set.insert(AttributeBuffer::new(other, 1, &data).unwrap()).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.for_attachment(Attachment::Point).count(), 3);
}

#[test]
fn mesh_view_rejects_mismatched_element_count() {
    let mut storage = MeshStorage::new(MeshCounts::variable(3, 0, 0));
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 3, &[0.0; 6])
        .unwrap();
    // 6 floats hold 2 points, the mesh declares 3.
    assert!(matches!(
        storage.view(),
        Err(MfxError::BufferOutOfBounds { .. })
    ));

    let mut storage = MeshStorage::new(MeshCounts::variable(1, 0, 0));
    storage
        .define_f32(Attachment::Mesh, "scale", 1, &[2.0])
        .unwrap();
    let view = storage.view().unwrap();
    assert_eq!(view.element_count(Attachment::Mesh), 1);
}

#[test]
fn constant_face_size_must_match_corner_count() {
    let counts = MeshCounts {
        point_count: 4,
        corner_count: 5,
        face_count: 1,
        constant_face_size: 4,
    };
    assert!(matches!(
        counts.validate(),
        Err(MfxError::InconsistentCounts(_))
    ));

    let counts = MeshCounts {
        point_count: 4,
        corner_count: 2,
        face_count: 1,
        constant_face_size: 2,
    };
    assert!(counts.validate().is_err());
}

#[test]
fn overflowing_corner_count_is_rejected() {
    // 2^62 quads would wrap the corner count to zero.
    let counts = MeshCounts {
        point_count: 0,
        corner_count: 0,
        face_count: 1 << 62,
        constant_face_size: 4,
    };
    assert!(matches!(
        counts.validate(),
        Err(MfxError::InconsistentCounts(_))
    ));

    let saturated = MeshCounts::constant(0, usize::MAX, 3);
    assert_eq!(saturated.corner_count, usize::MAX);
    assert!(saturated.validate().is_err());
    assert!(MeshStorage::new(saturated).view().is_err());
}

#[test]
fn face_sizes_are_synthesized_for_constant_meshes() {
    let storage = box_mesh(1.0, 1.0, 1.0).unwrap();
    let mesh = storage.view().unwrap();
    assert!(mesh.attribute(Attachment::Face, FACE_SIZE).is_none());
    let sizes = mesh.face_sizes().unwrap();
    assert!(sizes.is_constant());
    for face in 0..mesh.face_count() {
        assert_eq!(sizes.size_of(face).unwrap(), 4);
    }
}

#[test]
fn variable_mesh_without_face_size_is_missing_attribute() {
    let mut storage = MeshStorage::new(MeshCounts::variable(3, 3, 1));
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 3, &[0.0; 9])
        .unwrap();
    storage
        .define_i32(Attachment::Corner, CORNER_POINT, 1, &[0, 1, 2])
        .unwrap();
    let mesh = storage.view().unwrap();
    assert!(matches!(
        mesh.face_sizes(),
        Err(MfxError::MissingRequiredAttribute {
            attachment: Attachment::Face,
            ..
        })
    ));
}

// ─── Triangulation Tests ──────────────────────────────────────

#[test]
fn triangle_faces_keep_corner_order() {
    let storage = polygons(&unit_square_positions(), &[&[0, 1, 2], &[2, 3, 0], &[1, 4, 5]]).unwrap();
    let result = triangulate(&storage.view().unwrap()).unwrap();
    assert_eq!(result.triangle_count(), 3);
    assert_eq!(result.triangles, vec![[0, 1, 2], [2, 3, 0], [1, 4, 5]]);
    assert!(result.conditions.is_empty());
}

#[test]
fn quad_faces_split_along_c2_c0() {
    let storage = polygons(&unit_square_positions(), &[&[0, 1, 2, 3], &[1, 4, 5, 2]]).unwrap();
    let result = triangulate(&storage.view().unwrap()).unwrap();
    assert_eq!(result.triangle_count(), 4);
    assert_eq!(
        result.triangles,
        vec![[0, 1, 2], [2, 3, 0], [1, 4, 5], [5, 2, 1]]
    );
    assert_eq!(
        result.source_faces,
        vec![FaceId(0), FaceId(0), FaceId(1), FaceId(1)]
    );
}

#[test]
fn ubyte_corner_points_are_widened() {
    let mut storage = MeshStorage::new(MeshCounts::constant(4, 1, 4));
    let positions: Vec<f32> = unit_square_positions()[..4].iter().flatten().copied().collect();
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 3, &positions)
        .unwrap();
    storage
        .define_u8(Attachment::Corner, CORNER_POINT, 1, &[3, 2, 1, 0])
        .unwrap();
    let result = triangulate(&storage.view().unwrap()).unwrap();
    assert_eq!(result.triangles, vec![[3, 2, 1], [1, 0, 3]]);
}

#[test]
fn unsupported_face_is_skipped_and_reported_once() {
    let positions = unit_square_positions();
    let storage = polygons(
        &positions,
        &[&[0, 1, 2], &[0, 1, 4, 5, 3], &[0, 1, 2, 3]],
    )
    .unwrap();
    let result = triangulate(&storage.view().unwrap()).unwrap();

    assert_eq!(result.triangle_count(), 3);
    // The pentagon's corners are consumed, so the quad after it reads its own corners.
    assert_eq!(result.triangles, vec![[0, 1, 2], [0, 1, 2], [2, 3, 0]]);
    assert_eq!(
        result.conditions,
        vec![Condition::UnsupportedFaceSize {
            face: FaceId(1),
            size: 5
        }]
    );
}

#[test]
fn constant_and_explicit_face_sizes_triangulate_identically() {
    let constant = quad_grid(3, 2, 1.0, 1.0, false).unwrap();
    let explicit = quad_grid(3, 2, 1.0, 1.0, true).unwrap();
    let a = triangulate(&constant.view().unwrap()).unwrap();
    let b = triangulate(&explicit.view().unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.triangle_count(), 12);
}

#[test]
fn missing_positions_is_fatal() {
    let mut storage = MeshStorage::new(MeshCounts::constant(3, 1, 3));
    storage
        .define_i32(Attachment::Corner, CORNER_POINT, 1, &[0, 1, 2])
        .unwrap();
    let err = triangulate(&storage.view().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        MfxError::MissingRequiredAttribute {
            attachment: Attachment::Point,
            ..
        }
    ));
}

#[test]
fn missing_corner_points_is_fatal() {
    let mut storage = MeshStorage::new(MeshCounts::constant(3, 1, 3));
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 3, &[0.0; 9])
        .unwrap();
    let err = triangulate(&storage.view().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        MfxError::MissingRequiredAttribute {
            attachment: Attachment::Corner,
            ..
        }
    ));
}

#[test]
fn corner_index_out_of_range_is_fatal() {
    let storage = polygons(&unit_square_positions(), &[&[0, 1, 9]]).unwrap();
    let err = triangulate(&storage.view().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        MfxError::CornerIndexOutOfRange { corner: 2, point: 9, .. }
    ));
}

#[test]
fn face_sizes_must_sum_to_corner_count() {
    let mut storage = MeshStorage::new(MeshCounts::variable(4, 4, 1));
    let positions: Vec<f32> = unit_square_positions()[..4].iter().flatten().copied().collect();
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 3, &positions)
        .unwrap();
    storage
        .define_i32(Attachment::Corner, CORNER_POINT, 1, &[0, 1, 2, 3])
        .unwrap();
    storage
        .define_i32(Attachment::Face, FACE_SIZE, 1, &[3])
        .unwrap();
    let err = triangulate(&storage.view().unwrap()).unwrap_err();
    assert!(matches!(err, MfxError::InconsistentCounts(_)));
}

#[test]
fn positions_must_be_three_floats() {
    let mut storage = MeshStorage::new(MeshCounts::constant(3, 1, 3));
    storage
        .define_f32(Attachment::Point, POINT_POSITION, 2, &[0.0; 6])
        .unwrap();
    storage
        .define_i32(Attachment::Corner, CORNER_POINT, 1, &[0, 1, 2])
        .unwrap();
    let err = triangulate(&storage.view().unwrap()).unwrap_err();
    assert!(matches!(err, MfxError::InvalidRequiredAttribute { .. }));
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_normal_is_unit_length() {
    let n = flat_normal(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 5.0, 0.0),
    )
    .unwrap();
    assert!((n.length() - 1.0).abs() < 1e-6);
    assert!((n.z - 1.0).abs() < 1e-6);
}

#[test]
fn collinear_triangle_gets_zero_normal() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(2.0, 2.0, 2.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let result = flat_normals(&positions, &[[0, 1, 2], [0, 3, 1], [3, 3, 3]]).unwrap();
    assert_eq!(result.normals[0], Vec3::ZERO);
    assert!((result.normals[1].length() - 1.0).abs() < 1e-6);
    assert_eq!(result.normals[2], Vec3::ZERO);
    assert_eq!(result.degenerate, vec![TriangleId(0), TriangleId(2)]);
    assert_eq!(result.conditions().count(), 2);
}

#[test]
fn triangle_index_past_positions_is_an_error() {
    let positions = vec![Vec3::ZERO, Vec3::X];
    let err = flat_normals(&positions, &[[0, 1, 0], [0, 1, 2]]).unwrap_err();
    assert!(matches!(
        err,
        MfxError::TriangleIndexOutOfRange {
            triangle: 1,
            point: 2,
            point_count: 2,
        }
    ));
}

#[test]
fn grid_normals_face_positive_z() {
    let storage = quad_grid(4, 4, 2.0, 2.0, false).unwrap();
    let mesh = storage.view().unwrap();
    let triangulation = triangulate(&mesh).unwrap();
    let positions = mesh.point_positions().unwrap();
    let result = flat_normals(&positions, &triangulation.triangles).unwrap();
    assert_eq!(result.normals.len(), 32);
    for n in &result.normals {
        assert!((n.z - 1.0).abs() < 1e-6, "normal {:?} not +Z", n);
    }
}

#[test]
fn box_normals_point_outward() {
    let storage = box_mesh(2.0, 3.0, 4.0).unwrap();
    let mesh = storage.view().unwrap();
    let triangulation = triangulate(&mesh).unwrap();
    let positions = mesh.point_positions().unwrap();
    let result = flat_normals(&positions, &triangulation.triangles).unwrap();
    assert!(result.degenerate.is_empty());
    for (t, [a, b, c]) in triangulation.triangles.iter().enumerate() {
        let centroid = (positions[*a as usize] + positions[*b as usize] + positions[*c as usize]) / 3.0;
        assert!(
            result.normals[t].dot(centroid) > 0.0,
            "triangle {} normal points inward",
            t
        );
    }
}

#[test]
fn face_normal_attribute_is_added() {
    let storage = box_mesh(1.0, 1.0, 1.0).unwrap().with_face_normals().unwrap();
    assert_eq!(storage.attribute_count(), 3);
    let mesh = storage.view().unwrap();
    let normals = mesh.attribute(Attachment::Face, FACE_NORMAL).unwrap();
    assert_eq!(normals.semantic(), Some("normal"));
    assert_eq!(normals.element_count(), 6);
    // Face 0 is the -Z side.
    assert_eq!(normals.vec3_at(0).unwrap(), [0.0, 0.0, -1.0]);
}

#[test]
fn face_normals_report_skipped_faces() {
    let storage = polygons(&unit_square_positions(), &[&[0, 1, 4, 5, 3], &[0, 1, 2]]).unwrap();
    let (normals, conditions) = face_normals(&storage.view().unwrap()).unwrap();
    assert_eq!(normals[0], [0.0, 0.0, 0.0]);
    assert_eq!(normals[1], [0.0, 0.0, 1.0]);
    assert_eq!(conditions.len(), 1);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn box_corner_positions() {
    let storage = box_mesh(2.0, 4.0, 6.0).unwrap();
    let mesh = storage.view().unwrap();
    let positions = mesh.point_positions().unwrap();
    assert_eq!(positions[0], Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(positions[7], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(positions[1], Vec3::new(1.0, -2.0, -3.0));
}

#[test]
fn box_scenario_counts() {
    let storage = box_mesh(1.0, 1.0, 1.0).unwrap();
    let mesh = storage.view().unwrap();
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.constant_face_size(), 4);
    let result = triangulate(&mesh).unwrap();
    assert_eq!(result.triangle_count(), 12);
}

#[test]
fn quad_grid_counts() {
    let storage = quad_grid(2, 2, 1.0, 1.0, false).unwrap();
    let mesh = storage.view().unwrap();
    assert_eq!(mesh.point_count(), 9);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.corner_count(), 16);
}

#[test]
fn mesh_counts_serialize() {
    let counts = MeshCounts::constant(8, 6, 4);
    let json = serde_json::to_string(&counts).unwrap();
    let back: MeshCounts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counts);
    assert_eq!(back.corner_count, 24);
}
