//! Rendering of the schema model into OpenAPI 3.0 JSON.

use serde_json::{Map, Value, json};

use crate::Result;
use crate::error::OpenApiError;
use crate::schema::{Schema, SchemaKind, SchemaRef};
use crate::types::OpenApiSchema;

/// Renders [`Schema`] values, collecting named records and unions as components.
///
/// Named records and tagged unions are emitted once under `components/schemas`
/// (keyed by simple name) and referenced with `$ref`. Everything else renders
/// inline.
///
/// # Conflict Resolution
///
/// Identical schemas registered under one name are deduplicated; different
/// schemas under one name cause [`OpenApiError::SchemaConflict`].
#[derive(Debug, Clone, Default)]
pub struct SchemaRenderer {
    schemas: Map<String, Value>,
}

impl SchemaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a schema, returning either a `$ref` or an inline definition.
    pub fn render(&mut self, schema: &Schema) -> Result<Value> {
        let body = self.render_inline(schema)?;
        match (&schema.name, &schema.kind) {
            (Some(name), SchemaKind::Product(_) | SchemaKind::Coproduct(_)) => {
                self.register(name.simple_name(), body)?;
                Ok(json!({ "$ref": SchemaRef(name.clone()).pointer() }))
            }
            _ => Ok(body),
        }
    }

    /// Render a schema's definition without turning it into a reference.
    pub fn render_inline(&mut self, schema: &Schema) -> Result<Value> {
        let mut out = Map::new();

        match &schema.kind {
            SchemaKind::String { allowed } => {
                out.insert("type".to_string(), json!("string"));
                if !allowed.is_empty() {
                    out.insert("enum".to_string(), json!(allowed));
                }
            }
            SchemaKind::Integer => {
                out.insert("type".to_string(), json!("integer"));
            }
            SchemaKind::Number => {
                out.insert("type".to_string(), json!("number"));
            }
            SchemaKind::Boolean => {
                out.insert("type".to_string(), json!("boolean"));
            }
            SchemaKind::Any => {}
            SchemaKind::Array(items) => {
                out.insert("type".to_string(), json!("array"));
                out.insert("items".to_string(), self.render(items)?);
            }
            SchemaKind::Product(product) => {
                let mut properties = Map::new();
                let mut required = Vec::new();
                for field in &product.fields {
                    properties.insert(field.name.clone(), self.render(&field.schema)?);
                    if field.is_required() {
                        required.push(Value::String(field.name.clone()));
                    }
                }
                out.insert("type".to_string(), json!("object"));
                out.insert("properties".to_string(), Value::Object(properties));
                if !required.is_empty() {
                    out.insert("required".to_string(), Value::Array(required));
                }
            }
            SchemaKind::Coproduct(coproduct) => {
                let variants = coproduct
                    .subtypes
                    .iter()
                    .map(|subtype| self.render(subtype))
                    .collect::<Result<Vec<_>>>()?;
                out.insert("oneOf".to_string(), Value::Array(variants));

                if let Some(discriminator) = &coproduct.discriminator {
                    let mapping: Map<String, Value> = discriminator
                        .mapping
                        .iter()
                        .map(|(value, target)| (value.clone(), Value::String(target.pointer())))
                        .collect();
                    out.insert(
                        "discriminator".to_string(),
                        json!({
                            "propertyName": discriminator.property_name,
                            "mapping": mapping,
                        }),
                    );
                }
            }
        }

        if let Some(description) = &schema.description {
            out.insert("description".to_string(), Value::String(description.clone()));
        }

        Ok(Value::Object(out))
    }

    fn register(&mut self, name: &str, schema: Value) -> Result<()> {
        if let Some(existing) = self.schemas.get(name) {
            if existing != &schema {
                return Err(OpenApiError::SchemaConflict {
                    name: name.to_string(),
                });
            }
        } else {
            self.schemas.insert(name.to_string(), schema);
        }
        Ok(())
    }

    /// Component schemas collected so far.
    pub fn schemas(&self) -> &Map<String, Value> {
        &self.schemas
    }

    pub fn into_schemas(self) -> Vec<OpenApiSchema> {
        self.schemas
            .into_iter()
            .map(|(name, schema)| OpenApiSchema::new(name, schema))
            .collect()
    }
}
