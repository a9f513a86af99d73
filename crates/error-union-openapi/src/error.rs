//! Configuration errors raised while wiring error variants to schemas.

use thiserror::Error;

/// Errors raised while building or rendering error-union schemas.
///
/// Everything except [`OpenApiError::Json`] is a wiring mistake between variant
/// declarations and schema metadata and should surface at startup.
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// A tagged-union schema was required.
    #[error("Not a coproduct schema: {schema}")]
    NotACoproduct { schema: String },

    /// The tagged union has no discriminator metadata.
    #[error("Schema must contain a discriminator: {schema}")]
    MissingDiscriminator { schema: String },

    /// Two variants derive the same discriminator value.
    #[error("Discriminator value '{value}' is shared by several variants of {schema}")]
    DuplicateDiscriminatorValue { value: String, schema: String },

    /// No discriminator mapping entry targets the variant.
    #[error("Unable to find discriminator for type '{type_name}' in {schema}")]
    UnresolvedDiscriminatorValue { type_name: String, schema: String },

    /// No variant schema carries the variant's type name.
    #[error("Unable to find schema for type '{type_name}' in {schema}")]
    UnresolvedVariantSchema { type_name: String, schema: String },

    /// Schema conflict: same component name, different definitions.
    #[error("Schema conflict for '{name}': defined differently in multiple places")]
    SchemaConflict { name: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
