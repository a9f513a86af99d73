//! Schema model and OpenAPI rendering for error-union.
//!
//! This crate provides the typed schema model (records, tagged unions,
//! discriminators), the configuration errors raised while wiring them, and the
//! pieces that turn them into an OpenAPI 3.0 document.
//!
//! # Example
//!
//! ```ignore
//! use error_union_openapi::{SchemaRenderer, OpenApiBuilder};
//!
//! let mut renderer = SchemaRenderer::new();
//! let body = renderer.render(&schema)?;
//!
//! let spec = OpenApiBuilder::new()
//!     .title("My API")
//!     .merge_schemas(renderer.into_schemas())?
//!     .build();
//! ```

mod builder;
mod error;
mod render;
mod schema;
mod types;

pub use builder::OpenApiBuilder;
pub use error::OpenApiError;
pub use render::SchemaRenderer;
pub use schema::*;
pub use types::*;

/// Result type for schema and OpenAPI operations.
pub type Result<T> = std::result::Result<T, OpenApiError>;
