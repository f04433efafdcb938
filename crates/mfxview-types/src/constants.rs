//! Well-known attribute identifiers and host constants.
//!
//! These mirror the string identifiers a mesh effect host uses for
//! attachments, mandatory attributes and component types.

/// Attachment name for point attributes.
pub const ATTACHMENT_POINT: &str = "OfxMeshAttribPoint";
/// Attachment name for corner attributes.
pub const ATTACHMENT_CORNER: &str = "OfxMeshAttribCorner";
/// Attachment name for face attributes.
pub const ATTACHMENT_FACE: &str = "OfxMeshAttribFace";
/// Attachment name for whole-mesh attributes.
pub const ATTACHMENT_MESH: &str = "OfxMeshAttribMesh";

/// Point position, 3 × float. Mandatory.
pub const POINT_POSITION: &str = "OfxMeshAttribPointPosition";
/// Corner → point index, 1 × int (or ubyte). Mandatory.
pub const CORNER_POINT: &str = "OfxMeshAttribCornerPoint";
/// Face corner count, 1 × int. Only required when faces vary in size.
pub const FACE_SIZE: &str = "OfxMeshAttribFaceSize";

/// Component type name for unsigned bytes.
pub const TYPE_UBYTE: &str = "OfxMeshAttribTypeUByte";
/// Component type name for 32-bit signed integers.
pub const TYPE_INT: &str = "OfxMeshAttribTypeInt";
/// Component type name for 32-bit floats.
pub const TYPE_FLOAT: &str = "OfxMeshAttribTypeFloat";

/// Semantic hint for normal vectors.
pub const SEMANTIC_NORMAL: &str = "normal";

/// Identifier of the per-face normal attribute written by the face normal pass.
pub const FACE_NORMAL: &str = "normal";

/// `constant_face_size` value meaning "faces vary, read the FaceSize buffer".
pub const VARIABLE_FACE_SIZE: i32 = -1;

/// Smallest face a mesh may declare as its constant size.
pub const MIN_CONSTANT_FACE_SIZE: i32 = 3;
