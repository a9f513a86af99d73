//! Resolution of error variants against their parent union's metadata.

use error_union_openapi::{Coproduct, Discriminator, OpenApiError, Result, Schema};
use http::StatusCode;

use crate::variant::{ErrorVariants, VariantId};

/// One error variant resolved against its parent union.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantContext {
    pub variant: VariantId,
    pub status: StatusCode,
    /// Value of the discriminator field for this variant.
    pub discriminator_value: String,
    /// The variant's own schema, as listed in the parent union.
    pub schema: Schema,
}

impl VariantContext {
    /// Resolve `variant` against `parent`, which must be a tagged union with a
    /// discriminator.
    pub fn resolve(variant: VariantId, status: StatusCode, parent: &Schema) -> Result<Self> {
        let (coproduct, discriminator) = discriminated(parent)?;
        let type_name = variant.type_name();

        let discriminator_value = discriminator
            .value_for(&type_name)
            .ok_or_else(|| OpenApiError::UnresolvedDiscriminatorValue {
                type_name: type_name.to_string(),
                schema: parent.to_string(),
            })?
            .to_string();

        let schema = coproduct
            .subtype(&type_name)
            .ok_or_else(|| OpenApiError::UnresolvedVariantSchema {
                type_name: type_name.to_string(),
                schema: parent.to_string(),
            })?
            .clone();

        Ok(Self {
            variant,
            status,
            discriminator_value,
            schema,
        })
    }
}

/// Free-function form of [`VariantContext::resolve`].
pub fn resolve_context(
    variant: VariantId,
    status: StatusCode,
    parent: &Schema,
) -> Result<VariantContext> {
    VariantContext::resolve(variant, status, parent)
}

/// Resolve an ordered list of `(variant, status)` pairs, keeping their order.
pub fn resolve_contexts(
    variants: &[(VariantId, StatusCode)],
    parent: &Schema,
) -> Result<Vec<VariantContext>> {
    variants
        .iter()
        .map(|&(variant, status)| VariantContext::resolve(variant, status, parent))
        .collect()
}

/// Contexts for the declared variants of `E`.
///
/// Variants whose schema is not a record carry no discriminator and are left
/// out. Any other variant missing from `parent` is an error.
pub fn contexts_for<E: ErrorVariants>(parent: &Schema) -> Result<Vec<VariantContext>> {
    let (coproduct, _) = discriminated(parent)?;
    let declared: Vec<_> = E::declared_variants()
        .into_iter()
        .filter(|(variant, _)| {
            let skipped = coproduct
                .subtype(&variant.type_name())
                .is_some_and(|schema| schema.as_product().is_none());
            if skipped {
                tracing::warn!(
                    variant = variant.full_name(),
                    "variant is not a record, no response is documented for it"
                );
            }
            !skipped
        })
        .collect();
    resolve_contexts(&declared, parent)
}

/// Split a schema into its union and discriminator, or explain why it can't be.
pub(crate) fn discriminated(schema: &Schema) -> Result<(&Coproduct, &Discriminator)> {
    let coproduct = schema
        .as_coproduct()
        .ok_or_else(|| OpenApiError::NotACoproduct {
            schema: schema.to_string(),
        })?;
    let discriminator = coproduct.discriminator.as_ref().ok_or_else(|| {
        OpenApiError::MissingDiscriminator {
            schema: schema.to_string(),
        }
    })?;
    Ok((coproduct, discriminator))
}
