//! Tests for the ErrorUnion and ToSchema derive macros.

#![allow(dead_code)]

use error_union::{ErrorUnion, ErrorVariants, Schema, SchemaKind, StatusCode, ToSchema};

// ============================================================================
// Explicit statuses
// ============================================================================

/// Errors of the user API
#[derive(Debug, ErrorUnion)]
enum ApiError {
    /// Unable to find user
    #[status(404)]
    UserNotFound { name: String },
    #[status(Forbidden)]
    AccessDenied,
    #[status(429)]
    TooManyRequests { retry_after: Option<u32> },
}

#[test]
fn test_declared_variants_in_order() {
    let declared = ApiError::declared_variants();
    let summary: Vec<_> = declared
        .iter()
        .map(|(id, status)| (id.simple_name(), status.as_u16()))
        .collect();

    assert_eq!(
        summary,
        [("UserNotFound", 404), ("AccessDenied", 403), ("TooManyRequests", 429)]
    );
}

#[test]
fn test_variant_ids_are_qualified() {
    let (id, _) = ApiError::declared_variants()[0];
    assert_eq!(id.full_name(), concat!(module_path!(), "::ApiError::UserNotFound"));
}

#[test]
fn test_variant_id_dispatch() {
    let declared = ApiError::declared_variants();

    let err = ApiError::UserNotFound {
        name: "bob".to_string(),
    };
    assert_eq!(err.variant_id(), declared[0].0);
    assert_eq!(ApiError::AccessDenied.variant_id(), declared[1].0);
    assert_eq!(
        ApiError::TooManyRequests { retry_after: None }.variant_id(),
        declared[2].0
    );
}

#[test]
fn test_error_schema_shape() {
    let schema = ApiError::error_schema();
    assert_eq!(schema.name.as_ref().unwrap().simple_name(), "ApiError");
    assert_eq!(schema.description.as_deref(), Some("Errors of the user API"));

    let union = schema.as_coproduct().unwrap();
    assert!(union.discriminator.is_none());
    assert_eq!(union.subtypes.len(), 3);

    let user_not_found = &union.subtypes[0];
    assert_eq!(user_not_found.description.as_deref(), Some("Unable to find user"));
    let record = user_not_found.as_product().unwrap();
    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.fields[0].schema, Schema::string());

    let access_denied = union.subtypes[1].as_product().unwrap();
    assert!(access_denied.fields.is_empty());

    let too_many = union.subtypes[2].as_product().unwrap();
    assert!(!too_many.fields[0].is_required());
}

// ============================================================================
// Inferred statuses
// ============================================================================

#[derive(Debug, ErrorUnion)]
enum InferredError {
    NotFound,
    InvalidEmail { email: String },
    Unauthorized,
    Boom,
}

#[test]
fn test_status_inferred_from_name() {
    let statuses: Vec<_> = InferredError::declared_variants()
        .into_iter()
        .map(|(_, status)| status)
        .collect();

    assert_eq!(
        statuses,
        [
            StatusCode::NOT_FOUND,
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
        ]
    );
}

// ============================================================================
// Newtype variants
// ============================================================================

/// Lock details
#[derive(Debug, ToSchema)]
struct LockInfo {
    until: u64,
    reason: Option<String>,
}

#[derive(Debug, ErrorUnion)]
enum PayloadError {
    #[status(423)]
    Locked(LockInfo),
    #[status(400)]
    Message(String),
}

#[test]
fn test_to_schema_derive() {
    let schema = LockInfo::schema();
    assert_eq!(schema.name.as_ref().unwrap().simple_name(), "LockInfo");
    assert_eq!(schema.description.as_deref(), Some("Lock details"));

    let record = schema.as_product().unwrap();
    assert_eq!(record.fields[0].name, "until");
    assert_eq!(record.fields[0].schema, Schema::integer());
    assert!(!record.fields[1].is_required());
}

#[test]
fn test_newtype_variant_reuses_payload_schema() {
    let schema = PayloadError::error_schema();
    let union = schema.as_coproduct().unwrap();

    let locked = &union.subtypes[0];
    assert_eq!(locked.name.as_ref().unwrap().simple_name(), "Locked");
    assert_eq!(locked.description.as_deref(), Some("Lock details"));
    assert_eq!(locked.as_product().unwrap().fields.len(), 2);

    let message = &union.subtypes[1];
    assert!(matches!(message.kind, SchemaKind::String { .. }));
    assert_eq!(message.name.as_ref().unwrap().simple_name(), "Message");
}

#[test]
fn test_newtype_variant_dispatch() {
    let err = PayloadError::Message("nope".to_string());
    assert_eq!(err.variant_id().simple_name(), "Message");
}
