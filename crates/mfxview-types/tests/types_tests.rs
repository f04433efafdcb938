//! Integration tests for mfxview-types.

use mfxview_types::constants;
use mfxview_types::{
    Attachment, ComponentType, Condition, FaceId, MfxError, TriangleId,
};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn triangle_id_index() {
    let id = TriangleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn face_id_from_u32() {
    let id: FaceId = 7u32.into();
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_from_usize_refuse_to_truncate() {
    assert_eq!(FaceId::try_from(9usize).unwrap(), FaceId(9));
    assert_eq!(TriangleId::try_from(u32::MAX as usize).unwrap(), TriangleId(u32::MAX));

    let past = u32::MAX as usize + 1;
    assert!(matches!(FaceId::try_from(past), Err(MfxError::InconsistentCounts(_))));
    assert!(matches!(TriangleId::try_from(past), Err(MfxError::InconsistentCounts(_))));
}

#[test]
fn ids_are_serializable() {
    let id = TriangleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: TriangleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Attachment / ComponentType Tests ─────────────────────────

#[test]
fn attachment_identifiers_round_trip() {
    for attachment in Attachment::ALL {
        assert_eq!(
            Attachment::from_identifier(attachment.identifier()),
            Some(attachment)
        );
    }
}

#[test]
fn attachment_short_names() {
    assert_eq!(Attachment::from_identifier("Corner"), Some(Attachment::Corner));
    assert_eq!(Attachment::from_identifier("mesh"), Some(Attachment::Mesh));
    assert_eq!(Attachment::from_identifier("vertex"), None);
}

#[test]
fn component_sizes() {
    assert_eq!(ComponentType::UnsignedByte.size(), 1);
    assert_eq!(ComponentType::Int32.size(), 4);
    assert_eq!(ComponentType::Float32.size(), 4);
}

#[test]
fn component_type_parsing() {
    assert_eq!(
        ComponentType::from_identifier(constants::TYPE_FLOAT),
        Some(ComponentType::Float32)
    );
    assert_eq!(ComponentType::from_identifier("OfxMeshAttribTypeDouble"), None);
    assert!(ComponentType::Int32.is_integer());
    assert!(!ComponentType::Float32.is_integer());
}

// ─── Error / Condition Tests ──────────────────────────────────

#[test]
fn missing_attribute_display() {
    let err = MfxError::MissingRequiredAttribute {
        attachment: Attachment::Point,
        identifier: constants::POINT_POSITION.into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("OfxMeshAttribPointPosition"));
    assert!(msg.contains("Point"));
}

#[test]
fn corner_out_of_range_display() {
    let err = MfxError::CornerIndexOutOfRange {
        corner: 3,
        point: 12,
        point_count: 8,
    };
    assert!(err.to_string().contains("12"));
}

#[test]
fn condition_kinds_are_distinct() {
    let face = Condition::UnsupportedFaceSize {
        face: FaceId(2),
        size: 5,
    };
    let tri = Condition::DegenerateTriangle {
        triangle: TriangleId(0),
    };
    assert_ne!(face.kind(), tri.kind());
    assert_eq!(face.to_string(), "face 2 has unsupported size 5");
}

#[test]
fn condition_serialization() {
    let condition = Condition::UnknownComponentType {
        identifier: "weight".into(),
        type_name: "OfxMeshAttribTypeDouble".into(),
    };
    let json = serde_json::to_string(&condition).unwrap();
    let recovered: Condition = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, condition);
}
