//! Tests for rendering grouped error responses into an OpenAPI document.

#![allow(dead_code)]

use error_union::{
    ErrorUnion, Naming, OpenApiBuilder, OpenApiOperation, OpenApiPath, SchemaRenderer, ToSchema,
    error_responses,
};
use serde_json::json;

#[derive(Debug, ErrorUnion)]
enum UserError {
    /// Unable to find user
    #[status(404)]
    UserNotFound { name: String },
    #[status(403)]
    Forbidden,
    #[status(403)]
    AccountLocked(LockInfo),
}

/// Account is locked
#[derive(Debug, ToSchema)]
struct LockInfo {
    until: u64,
}

#[derive(Debug, ErrorUnion)]
enum OrderError {
    /// Unable to find user
    #[status(404)]
    UserNotFound { name: String },
    #[status(409)]
    AlreadyShipped,
}

fn spec() -> serde_json::Value {
    let responses = error_responses::<UserError>("error", Naming::KebabCase).unwrap();
    let (operation, schemas) = responses
        .openapi_operation(OpenApiOperation::new("Get user").with_id("get_user"))
        .unwrap();

    OpenApiBuilder::new()
        .title("Users")
        .version("1.0.0")
        .path(OpenApiPath::new("/users/{name}", "get").with_operation(operation))
        .unwrap()
        .merge_schemas(schemas)
        .unwrap()
        .build()
}

#[test]
fn test_responses_per_status() {
    let spec = spec();
    let responses = &spec["paths"]["/users/{name}"]["get"]["responses"];

    assert_eq!(
        responses["404"],
        json!({
            "description": "Unable to find user",
            "content": {
                "application/json": {
                    "schema": {"$ref": "#/components/schemas/UserNotFound"}
                }
            }
        })
    );

    assert_eq!(
        responses["403"]["content"]["application/json"]["schema"],
        json!({
            "oneOf": [
                {"$ref": "#/components/schemas/Forbidden"},
                {"$ref": "#/components/schemas/AccountLocked"}
            ],
            "discriminator": {
                "propertyName": "error",
                "mapping": {
                    "forbidden": "#/components/schemas/Forbidden",
                    "account-locked": "#/components/schemas/AccountLocked"
                }
            }
        })
    );
    assert_eq!(responses["403"]["description"], "Account is locked");
    assert_eq!(spec["paths"]["/users/{name}"]["get"]["operationId"], "get_user");
}

#[test]
fn test_components_carry_discriminator_field() {
    let spec = spec();
    let schemas = &spec["components"]["schemas"];

    assert_eq!(
        schemas["Forbidden"],
        json!({
            "type": "object",
            "properties": {"error": {"type": "string", "enum": ["forbidden"]}},
            "required": ["error"]
        })
    );
    assert_eq!(
        schemas["AccountLocked"]["properties"]["until"],
        json!({"type": "integer"})
    );
    assert_eq!(
        schemas["AccountLocked"]["required"],
        json!(["until", "error"])
    );
}

#[test]
fn test_identical_variants_shared_across_operations() {
    let mut renderer = SchemaRenderer::new();

    let users = error_responses::<UserError>("error", Naming::KebabCase).unwrap();
    let orders = error_responses::<OrderError>("error", Naming::KebabCase).unwrap();
    users
        .render_into(OpenApiOperation::new("Get user"), &mut renderer)
        .unwrap();
    orders
        .render_into(OpenApiOperation::new("Get order"), &mut renderer)
        .unwrap();

    // UserNotFound is described the same way by both enums
    assert!(renderer.schemas().contains_key("UserNotFound"));
    assert!(renderer.schemas().contains_key("AlreadyShipped"));
}

#[test]
fn test_conflicting_variants_rejected() {
    #[derive(Debug, ErrorUnion)]
    enum OtherError {
        #[status(404)]
        UserNotFound { id: u64 },
    }

    let mut renderer = SchemaRenderer::new();
    error_responses::<UserError>("error", Naming::KebabCase)
        .unwrap()
        .render_into(OpenApiOperation::new("Get user"), &mut renderer)
        .unwrap();

    let result = error_responses::<OtherError>("error", Naming::KebabCase)
        .unwrap()
        .render_into(OpenApiOperation::new("Get other"), &mut renderer);
    assert!(result.is_err());
}
