//! Typed schema model.
//!
//! A small, immutable description of the data an endpoint returns. Tagged unions
//! ("coproducts") carry an ordered list of per-variant schemas and an optional
//! discriminator; records ("products") carry an ordered list of fields.

use std::fmt;

use indexmap::IndexMap;

/// Fully-qualified type name, e.g. `app::errors::ApiError::UserNotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from its fully-qualified path.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    /// The full path.
    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// Last path segment (`UserNotFound` for `app::ApiError::UserNotFound`).
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a named schema, rendered as `#/components/schemas/<simple name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaRef(pub TypeName);

impl SchemaRef {
    /// The referenced type.
    pub fn type_name(&self) -> &TypeName {
        &self.0
    }

    /// JSON pointer into `components/schemas`.
    pub fn pointer(&self) -> String {
        format!("#/components/schemas/{}", self.0.simple_name())
    }
}

/// Discriminator metadata of a tagged union.
#[derive(Debug, Clone, PartialEq)]
pub struct Discriminator {
    /// Name of the field holding the discriminator value.
    pub property_name: String,
    /// Discriminator value -> variant schema, in insertion order.
    pub mapping: IndexMap<String, SchemaRef>,
}

impl Discriminator {
    /// A discriminator on `property_name` with an empty mapping.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: IndexMap::new(),
        }
    }

    /// Add a mapping entry.
    pub fn with_mapping(mut self, value: impl Into<String>, target: SchemaRef) -> Self {
        self.mapping.insert(value.into(), target);
        self
    }

    /// Discriminator value whose mapping targets `type_name`.
    pub fn value_for(&self, type_name: &TypeName) -> Option<&str> {
        self.mapping
            .iter()
            .find(|(_, target)| target.type_name() == type_name)
            .map(|(value, _)| value.as_str())
    }
}

/// A record field. Required unless its schema is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

impl Field {
    /// A field named `name` holding `schema`.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        !self.schema.optional
    }
}

/// Record type with ordered fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub fields: Vec<Field>,
}

impl Product {
    /// A record with `fields` in order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// A new record with `field` appended after the existing fields.
    pub fn with_field(&self, field: Field) -> Self {
        let mut fields = self.fields.clone();
        fields.push(field);
        Self { fields }
    }

    /// Field named `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Tagged union with ordered variant schemas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coproduct {
    pub subtypes: Vec<Schema>,
    pub discriminator: Option<Discriminator>,
}

impl Coproduct {
    /// A union of `subtypes` without a discriminator.
    pub fn new(subtypes: Vec<Schema>) -> Self {
        Self {
            subtypes,
            discriminator: None,
        }
    }

    /// Attach discriminator metadata.
    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    /// The variant schema named `type_name`.
    pub fn subtype(&self, type_name: &TypeName) -> Option<&Schema> {
        self.subtypes
            .iter()
            .find(|s| s.name.as_ref() == Some(type_name))
    }
}

/// Underlying shape of a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// A string, optionally restricted to the listed values.
    String { allowed: Vec<String> },
    Integer,
    Number,
    Boolean,
    Array(Box<Schema>),
    /// Any JSON value.
    Any,
    Product(Product),
    Coproduct(Coproduct),
}

/// A schema: shape plus naming metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub name: Option<TypeName>,
    pub description: Option<String>,
    pub optional: bool,
}

impl Schema {
    /// An unnamed, required schema of the given shape.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            name: None,
            description: None,
            optional: false,
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::String {
            allowed: Vec::new(),
        })
    }

    /// A string restricted to exactly `value`.
    pub fn constant(value: impl Into<String>) -> Self {
        Self::new(SchemaKind::String {
            allowed: vec![value.into()],
        })
    }

    pub fn integer() -> Self {
        Self::new(SchemaKind::Integer)
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn any() -> Self {
        Self::new(SchemaKind::Any)
    }

    pub fn array(items: Schema) -> Self {
        Self::new(SchemaKind::Array(Box::new(items)))
    }

    pub fn product(fields: Vec<Field>) -> Self {
        Self::new(SchemaKind::Product(Product::new(fields)))
    }

    pub fn coproduct(subtypes: Vec<Schema>) -> Self {
        Self::new(SchemaKind::Coproduct(Coproduct::new(subtypes)))
    }

    /// Name the schema; named records and unions render as components.
    pub fn with_name(mut self, name: TypeName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this schema as optional (the field holding it is not required).
    pub fn into_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Same metadata, different shape.
    pub fn with_kind(&self, kind: SchemaKind) -> Self {
        Self {
            kind,
            name: self.name.clone(),
            description: self.description.clone(),
            optional: self.optional,
        }
    }

    /// The record shape, if this is a record.
    pub fn as_product(&self) -> Option<&Product> {
        match &self.kind {
            SchemaKind::Product(product) => Some(product),
            _ => None,
        }
    }

    /// The union shape, if this is a tagged union.
    pub fn as_coproduct(&self) -> Option<&Coproduct> {
        match &self.kind {
            SchemaKind::Coproduct(coproduct) => Some(coproduct),
            _ => None,
        }
    }

    /// Description, or an empty string.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name.simple_name())?;
        }
        match &self.kind {
            SchemaKind::String { allowed } if allowed.is_empty() => f.write_str("string")?,
            SchemaKind::String { allowed } => write!(f, "string{allowed:?}")?,
            SchemaKind::Integer => f.write_str("integer")?,
            SchemaKind::Number => f.write_str("number")?,
            SchemaKind::Boolean => f.write_str("boolean")?,
            SchemaKind::Any => f.write_str("any")?,
            SchemaKind::Array(items) => write!(f, "array<{items}>")?,
            SchemaKind::Product(product) => {
                f.write_str("object{")?;
                for (i, field) in product.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.schema)?;
                }
                f.write_str("}")?;
            }
            SchemaKind::Coproduct(coproduct) => {
                f.write_str("coproduct(")?;
                for (i, subtype) in coproduct.subtypes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    match &subtype.name {
                        Some(name) => f.write_str(name.simple_name())?,
                        None => write!(f, "{subtype}")?,
                    }
                }
                f.write_str(")")?;
                if let Some(discriminator) = &coproduct.discriminator {
                    write!(f, " by {}", discriminator.property_name)?;
                }
            }
        }
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}
