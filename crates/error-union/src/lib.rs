//! error-union - closed error enums as OpenAPI responses
//!
//! Each variant of an error enum carries its own HTTP status and schema.
//! Variants sharing a status are merged into one discriminated union, so an
//! endpoint documents exactly one response per status code.
//!
//! # Quick Start
//!
//! ```ignore
//! use error_union::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Debug, Serialize, ErrorUnion)]
//! #[serde(tag = "error", rename_all = "kebab-case")]
//! enum ApiError {
//!     /// Unable to find user
//!     #[status(404)]
//!     UserNotFound { name: String },
//!     #[status(403)]
//!     Forbidden,
//!     #[status(403)]
//!     AccountLocked { until: u64 },
//! }
//!
//! // At startup: misconfiguration fails here, not on the first request.
//! let responses = error_responses::<ApiError>("error", Naming::KebabCase)?;
//!
//! let (operation, schemas) = responses.openapi_operation(OpenApiOperation::new("Get user"))?;
//! let spec = OpenApiBuilder::new()
//!     .path(OpenApiPath::new("/users/{name}", "get").with_operation(operation))?
//!     .merge_schemas(schemas)?
//!     .build();
//!
//! // At request time: status and body for a concrete error.
//! let encoded = responses.encode(&ApiError::Forbidden)?;
//! ```
//!
//! This documents:
//! - **403**: `oneOf` Forbidden / AccountLocked, discriminated by `error`
//! - **404**: a reference to the UserNotFound schema
//!
//! # Steps
//!
//! | Step | Function | Fails with |
//! |------|----------|------------|
//! | Add discriminator | [`add_discriminator`], [`add_discriminator_with`] | `NotACoproduct`, `DuplicateDiscriminatorValue` |
//! | Resolve variants | [`VariantContext::resolve`], [`resolve_contexts`] | `UnresolvedDiscriminatorValue`, `UnresolvedVariantSchema` |
//! | Group by status | [`ErrorResponses::new`], [`ErrorResponses::synthesize`] | `NotACoproduct`, `MissingDiscriminator` |
//!
//! [`error_responses`] runs all three for a derived enum.
//!
//! # Feature Flags
//!
//! - `derive` - `#[derive(ErrorUnion)]` and `#[derive(ToSchema)]` (default)

#[cfg(feature = "derive")]
pub use error_union_macros::{ErrorUnion, ToSchema};

pub use error_union_core::{
    BodyDescriptor, Codec, EncodedResponse, ErrorCode, ErrorResponses, ErrorVariants, JsonCodec,
    NameToDiscriminator, Naming, OpenApiError, ResponseDescription, ResponseEntry, Result,
    StatusCode, ToSchema, VariantContext, VariantId, VariantMatcher, add_discriminator,
    add_discriminator_with, contexts_for, error_responses, resolve_context, resolve_contexts,
};

pub use error_union_openapi::{
    Coproduct, Discriminator, Field, OpenApiBuilder, OpenApiOperation, OpenApiPath,
    OpenApiResponse, OpenApiSchema, Product, Schema, SchemaKind, SchemaRef, SchemaRenderer,
    TypeName,
};

// Re-export for generated code
pub use serde;
pub use serde_json;

/// Prelude for convenient imports.
pub mod prelude {
    #[cfg(feature = "derive")]
    pub use crate::{ErrorUnion, ToSchema};
    pub use crate::{
        ErrorResponses, ErrorVariants, Naming, OpenApiBuilder, OpenApiOperation, OpenApiPath,
        ResponseDescription, StatusCode, error_responses,
    };
}
