//! Grouping of error variants into one response per status code.
//!
//! Variants sharing a status are merged into a tagged union restricted to just
//! those variants; a status with a single variant points straight at that
//! variant's schema.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use error_union_openapi::{
    Coproduct, Discriminator, OpenApiOperation, OpenApiResponse, OpenApiSchema, Result, Schema,
    SchemaKind, SchemaRef, SchemaRenderer,
};
use http::StatusCode;
use serde::Serialize;

use crate::body::{BodyDescriptor, Codec, JsonCodec};
use crate::context::{VariantContext, contexts_for, discriminated};
use crate::discriminator::{NameToDiscriminator, add_discriminator_with};
use crate::variant::{ErrorVariants, VariantId};

/// Which variants a response entry answers for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantMatcher {
    /// Exactly one variant.
    Variant(VariantId),
    /// Any of several variants sharing a status.
    AnyOf(Vec<VariantId>),
}

impl VariantMatcher {
    /// Whether `variant` is answered by this matcher.
    pub fn matches(&self, variant: VariantId) -> bool {
        match self {
            VariantMatcher::Variant(id) => *id == variant,
            VariantMatcher::AnyOf(ids) => ids.contains(&variant),
        }
    }
}

/// One status code of a [`ResponseDescription`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry<C = JsonCodec> {
    pub status: StatusCode,
    pub body: BodyDescriptor<C>,
    pub matcher: VariantMatcher,
    contexts: Vec<VariantContext>,
}

impl<C> ResponseEntry<C> {
    /// The variants merged into this entry, in caller order.
    pub fn contexts(&self) -> &[VariantContext] {
        &self.contexts
    }

    /// Schema describing a value of `variant`: the first matching context wins.
    pub fn schema_for(&self, variant: VariantId) -> Option<&Schema> {
        self.contexts
            .iter()
            .find(|context| context.variant == variant)
            .map(|context| &context.schema)
    }

    pub fn description(&self) -> &str {
        self.body.description.as_deref().unwrap_or("")
    }
}

/// An error value ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Alternative error responses for one endpoint, ascending by status code.
///
/// The declared type stays the whole error enum `E`: values are encoded as
/// they are, only the schema chosen to describe them differs per status.
pub struct ResponseDescription<E, C = JsonCodec> {
    entries: Vec<ResponseEntry<C>>,
    error_schema: Schema,
    _error: PhantomData<fn(&E)>,
}

impl<E, C: Codec> ResponseDescription<E, C> {
    pub fn entries(&self) -> &[ResponseEntry<C>] {
        &self.entries
    }

    /// Schema of the full error enum.
    pub fn error_schema(&self) -> &Schema {
        &self.error_schema
    }

    pub fn statuses(&self) -> Vec<StatusCode> {
        self.entries.iter().map(|entry| entry.status).collect()
    }

    pub fn entry(&self, status: StatusCode) -> Option<&ResponseEntry<C>> {
        self.entries.iter().find(|entry| entry.status == status)
    }

    /// Add one response per entry to `operation`, rendering schemas through `renderer`.
    pub fn render_into(
        &self,
        mut operation: OpenApiOperation,
        renderer: &mut SchemaRenderer,
    ) -> Result<OpenApiOperation> {
        for entry in &self.entries {
            let schema = renderer.render(&entry.body.schema)?;
            let response = OpenApiResponse::new(entry.description())
                .with_content(entry.body.media_type(), schema);
            operation = operation.with_response(entry.status.as_u16().to_string(), response);
        }
        Ok(operation)
    }

    /// Add one response per entry to `operation` and return the component schemas they reference.
    pub fn openapi_operation(
        &self,
        operation: OpenApiOperation,
    ) -> Result<(OpenApiOperation, Vec<OpenApiSchema>)> {
        let mut renderer = SchemaRenderer::new();
        let operation = self.render_into(operation, &mut renderer)?;
        Ok((operation, renderer.into_schemas()))
    }
}

impl<E: ErrorVariants, C: Codec> ResponseDescription<E, C> {
    /// The entry responsible for `error`, if its variant was listed.
    pub fn select(&self, error: &E) -> Option<&ResponseEntry<C>> {
        let variant = error.variant_id();
        self.entries
            .iter()
            .find(|entry| entry.matcher.matches(variant))
    }

    /// Schema describing `error`.
    pub fn schema_for(&self, error: &E) -> Option<&Schema> {
        self.select(error)
            .and_then(|entry| entry.schema_for(error.variant_id()))
    }

    /// Encode `error` with its entry's codec. `None` when its variant was not listed.
    pub fn encode(&self, error: &E) -> Result<Option<EncodedResponse>>
    where
        E: Serialize,
    {
        let Some(entry) = self.select(error) else {
            return Ok(None);
        };
        Ok(Some(EncodedResponse {
            status: entry.status,
            content_type: entry.body.media_type(),
            body: entry.body.codec.encode(error)?,
        }))
    }
}

impl<E, C: Clone> Clone for ResponseDescription<E, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            error_schema: self.error_schema.clone(),
            _error: PhantomData,
        }
    }
}

impl<E, C: fmt::Debug> fmt::Debug for ResponseDescription<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseDescription")
            .field("entries", &self.entries)
            .field("error_schema", &self.error_schema)
            .finish()
    }
}

/// Builds [`ResponseDescription`]s for one discriminated error union.
#[derive(Debug, Clone)]
pub struct ErrorResponses<C = JsonCodec> {
    body: BodyDescriptor<C>,
    property_name: String,
}

impl<C: Codec> ErrorResponses<C> {
    /// Fails unless the body's schema is a tagged union with a discriminator.
    pub fn new(body: BodyDescriptor<C>) -> Result<Self> {
        let (_, discriminator) = discriminated(&body.schema)?;
        let property_name = discriminator.property_name.clone();
        Ok(Self {
            body,
            property_name,
        })
    }

    /// Schema of the full error union.
    pub fn schema(&self) -> &Schema {
        &self.body.schema
    }

    /// Group `contexts` by status and build one entry per status, ascending.
    ///
    /// Variants keep the caller's order within their group. A variant listed
    /// more than once keeps only its first context, status included.
    pub fn synthesize<E>(
        &self,
        contexts: impl IntoIterator<Item = VariantContext>,
    ) -> ResponseDescription<E, C> {
        let mut seen = HashSet::new();
        let mut groups: BTreeMap<StatusCode, Vec<VariantContext>> = BTreeMap::new();
        for context in contexts {
            if !seen.insert(context.variant) {
                tracing::warn!(
                    variant = context.variant.full_name(),
                    status = context.status.as_u16(),
                    "variant listed more than once, keeping its first status"
                );
                continue;
            }
            groups.entry(context.status).or_default().push(context);
        }

        let entries = groups
            .into_iter()
            .map(|(status, group)| self.entry(status, group))
            .collect();

        ResponseDescription {
            entries,
            error_schema: self.body.schema.clone(),
            _error: PhantomData,
        }
    }

    fn entry(&self, status: StatusCode, contexts: Vec<VariantContext>) -> ResponseEntry<C> {
        tracing::debug!(
            status = status.as_u16(),
            variants = contexts.len(),
            "building error response"
        );

        if let [context] = contexts.as_slice() {
            let body = self
                .body
                .with_schema(context.schema.clone())
                .with_description(context.schema.description_or_empty());
            let matcher = VariantMatcher::Variant(context.variant);
            return ResponseEntry {
                status,
                body,
                matcher,
                contexts,
            };
        }

        let mapping = contexts
            .iter()
            .map(|context| {
                (
                    context.discriminator_value.clone(),
                    SchemaRef(context.variant.type_name()),
                )
            })
            .collect();
        let discriminator = Discriminator {
            property_name: self.property_name.clone(),
            mapping,
        };
        let subtypes = contexts.iter().map(|context| context.schema.clone()).collect();
        let union = Schema::new(SchemaKind::Coproduct(
            Coproduct::new(subtypes).with_discriminator(discriminator),
        ));

        let description = contexts
            .iter()
            .filter_map(|context| context.schema.description.as_deref())
            .filter(|description| !description.is_empty())
            .collect::<Vec<_>>()
            .join("; ");

        let matcher =
            VariantMatcher::AnyOf(contexts.iter().map(|context| context.variant).collect());
        ResponseEntry {
            status,
            body: self.body.with_schema(union).with_description(description),
            matcher,
            contexts,
        }
    }
}

/// Discriminate `E`'s schema, resolve every declared variant and group them, as JSON.
///
/// Runs once at startup; any error means the enum's declarations and its
/// schema disagree.
pub fn error_responses<E: ErrorVariants>(
    field_name: &str,
    naming: impl NameToDiscriminator,
) -> Result<ResponseDescription<E>> {
    let schema = add_discriminator_with(&E::error_schema(), field_name, naming)?;
    let contexts = contexts_for::<E>(&schema)?;
    let responses = ErrorResponses::new(BodyDescriptor::json(schema))?;
    Ok(responses.synthesize(contexts))
}
