//! Status-code grouping of closed error enums into discriminated OpenAPI responses.
//!
//! Three steps, run once when an endpoint is defined:
//!
//! 1. [`add_discriminator`] turns the enum's tagged-union schema into a
//!    discriminated one: each record variant gets a constant-string field.
//! 2. [`VariantContext::resolve`] pairs each variant with its status code,
//!    discriminator value and schema.
//! 3. [`ErrorResponses::synthesize`] groups the contexts by status: one variant
//!    per status references that variant's schema, several become a tagged
//!    union restricted to just those variants.
//!
//! # Example
//!
//! ```ignore
//! use error_union_core::{error_responses, Naming};
//!
//! let responses = error_responses::<ApiError>("error", Naming::KebabCase)?;
//! let (operation, schemas) = responses.openapi_operation(OpenApiOperation::new("Get user"))?;
//! ```
//!
//! All failures are [`OpenApiError`] configuration errors; build descriptions at
//! startup so they surface before any request is served.

mod body;
mod context;
mod discriminator;
mod responses;
mod status;
mod variant;

pub use body::{BodyDescriptor, Codec, JsonCodec};
pub use context::{VariantContext, contexts_for, resolve_context, resolve_contexts};
pub use discriminator::{NameToDiscriminator, Naming, add_discriminator, add_discriminator_with};
pub use responses::{
    EncodedResponse, ErrorResponses, ResponseDescription, ResponseEntry, VariantMatcher,
    error_responses,
};
pub use status::ErrorCode;
pub use variant::{ErrorVariants, ToSchema, VariantId};

pub use error_union_openapi::{OpenApiError, Result};
pub use http::StatusCode;
