//! Discriminator injection for tagged-union schemas.
//!
//! Every named record variant gets one more required field holding a constant
//! string (the discriminator value), and the union records which value selects
//! which variant.

use error_union_openapi::{
    Coproduct, Discriminator, Field, OpenApiError, Result, Schema, SchemaKind, SchemaRef,
};
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};
use serde::{Deserialize, Serialize};

/// Derives a discriminator value from a variant's simple type name.
pub trait NameToDiscriminator {
    /// Discriminator value for a variant named `simple_name`.
    fn discriminator_value(&self, simple_name: &str) -> String;
}

impl<F> NameToDiscriminator for F
where
    F: Fn(&str) -> String,
{
    fn discriminator_value(&self, simple_name: &str) -> String {
        self(simple_name)
    }
}

/// Built-in naming rules, spelled like serde's `rename_all` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Naming {
    /// `UserNotFound`
    #[default]
    #[serde(rename = "identity")]
    Identity,
    /// `user-not-found`
    #[serde(rename = "kebab-case")]
    KebabCase,
    /// `user_not_found`
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// `userNotFound`
    #[serde(rename = "camelCase")]
    LowerCamelCase,
}

impl Naming {
    /// Apply the rule to a simple type name.
    pub fn apply(&self, simple_name: &str) -> String {
        match self {
            Naming::Identity => simple_name.to_string(),
            Naming::KebabCase => simple_name.to_kebab_case(),
            Naming::SnakeCase => simple_name.to_snake_case(),
            Naming::LowerCamelCase => simple_name.to_lower_camel_case(),
        }
    }
}

impl NameToDiscriminator for Naming {
    fn discriminator_value(&self, simple_name: &str) -> String {
        self.apply(simple_name)
    }
}

/// Add a discriminator field named `field_name`, using variant names as values.
pub fn add_discriminator(schema: &Schema, field_name: &str) -> Result<Schema> {
    add_discriminator_with(schema, field_name, Naming::Identity)
}

/// Add a discriminator field named `field_name`, deriving values with `naming`.
///
/// Variants that are not named records are kept as they are and left out of
/// the mapping. Fails with [`OpenApiError::NotACoproduct`] when `schema` is not
/// a tagged union, and with [`OpenApiError::DuplicateDiscriminatorValue`] when
/// two variants map to the same value. The input schema is not modified.
pub fn add_discriminator_with(
    schema: &Schema,
    field_name: &str,
    naming: impl NameToDiscriminator,
) -> Result<Schema> {
    let Some(coproduct) = schema.as_coproduct() else {
        return Err(OpenApiError::NotACoproduct {
            schema: schema.to_string(),
        });
    };

    let mut discriminator = Discriminator::new(field_name);
    let mut subtypes = Vec::with_capacity(coproduct.subtypes.len());

    for subtype in &coproduct.subtypes {
        match (subtype.as_product(), &subtype.name) {
            (Some(product), Some(name)) => {
                let value = naming.discriminator_value(name.simple_name());
                let field = Field::new(field_name, Schema::constant(value.clone()));
                if discriminator.mapping.contains_key(&value) {
                    return Err(OpenApiError::DuplicateDiscriminatorValue {
                        value,
                        schema: schema.to_string(),
                    });
                }
                subtypes.push(subtype.with_kind(SchemaKind::Product(product.with_field(field))));
                discriminator.mapping.insert(value, SchemaRef(name.clone()));
            }
            _ => {
                tracing::warn!(
                    variant = %subtype,
                    field = field_name,
                    "variant is not a named record, leaving it out of the discriminator"
                );
                subtypes.push(subtype.clone());
            }
        }
    }

    Ok(schema.with_kind(SchemaKind::Coproduct(Coproduct {
        subtypes,
        discriminator: Some(discriminator),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_union_openapi::TypeName;

    fn variant(name: &str, fields: Vec<Field>) -> Schema {
        Schema::product(fields).with_name(TypeName::new(format!("app::ApiError::{name}")))
    }

    fn api_error() -> Schema {
        Schema::coproduct(vec![
            variant("UserNotFound", vec![Field::new("name", Schema::string())]),
            variant("Forbidden", vec![]),
            variant("AccountLocked", vec![Field::new("until", Schema::integer())]),
        ])
        .with_name(TypeName::new("app::ApiError"))
    }

    #[test]
    fn test_identity_naming() {
        let schema = add_discriminator(&api_error(), "error").unwrap();
        let discriminator = schema.as_coproduct().unwrap().discriminator.as_ref().unwrap();

        assert_eq!(discriminator.property_name, "error");
        let values: Vec<_> = discriminator.mapping.keys().map(String::as_str).collect();
        assert_eq!(values, ["UserNotFound", "Forbidden", "AccountLocked"]);
    }

    #[test]
    fn test_kebab_case_field_appended() {
        let schema = add_discriminator_with(&api_error(), "error", Naming::KebabCase).unwrap();
        let coproduct = schema.as_coproduct().unwrap();

        let user_not_found = coproduct.subtypes[0].as_product().unwrap();
        assert_eq!(user_not_found.fields.len(), 2);
        assert_eq!(user_not_found.fields[0].name, "name");
        assert_eq!(user_not_found.fields[1].name, "error");
        assert!(user_not_found.fields[1].is_required());
        assert_eq!(user_not_found.fields[1].schema, Schema::constant("user-not-found"));

        let target = &coproduct.discriminator.as_ref().unwrap().mapping["account-locked"];
        assert_eq!(target.type_name().full_name(), "app::ApiError::AccountLocked");
    }

    #[test]
    fn test_custom_naming_closure() {
        let schema =
            add_discriminator_with(&api_error(), "kind", |name: &str| name.to_uppercase()).unwrap();
        let discriminator = schema.as_coproduct().unwrap().discriminator.as_ref().unwrap();

        assert!(discriminator.mapping.contains_key("FORBIDDEN"));
    }

    #[test]
    fn test_naming_is_deterministic() {
        assert_eq!(Naming::KebabCase.apply("UserNotFound"), "user-not-found");
        assert_eq!(
            Naming::KebabCase.apply("UserNotFound"),
            Naming::KebabCase.apply("UserNotFound")
        );
        assert_eq!(Naming::SnakeCase.apply("UserNotFound"), "user_not_found");
        assert_eq!(Naming::LowerCamelCase.apply("UserNotFound"), "userNotFound");
    }

    #[test]
    fn test_naming_deserializes_from_serde_names() {
        let naming: Naming = serde_json::from_str("\"kebab-case\"").unwrap();
        assert_eq!(naming, Naming::KebabCase);
    }

    #[test]
    fn test_input_not_mutated() {
        let original = api_error();
        let _ = add_discriminator(&original, "error").unwrap();

        assert_eq!(original, api_error());
        assert!(original.as_coproduct().unwrap().discriminator.is_none());
    }

    #[test]
    fn test_non_record_variant_skipped() {
        let message = Schema::string().with_name(TypeName::new("app::ApiError::Message"));
        let schema = Schema::coproduct(vec![
            variant("UserNotFound", vec![Field::new("name", Schema::string())]),
            message.clone(),
        ]);

        let result = add_discriminator(&schema, "error").unwrap();
        let coproduct = result.as_coproduct().unwrap();

        assert_eq!(coproduct.discriminator.as_ref().unwrap().mapping.len(), 1);
        assert_eq!(coproduct.subtypes.len(), 2);
        assert_eq!(coproduct.subtypes[1], message);
    }

    #[test]
    fn test_colliding_values_rejected() {
        let schema = Schema::coproduct(vec![
            variant("HTTPError", vec![Field::new("a", Schema::string())]),
            variant("HttpError", vec![Field::new("b", Schema::string())]),
        ]);

        let err = add_discriminator_with(&schema, "error", Naming::KebabCase).unwrap_err();
        assert!(matches!(
            &err,
            OpenApiError::DuplicateDiscriminatorValue { value, .. } if value == "http-error"
        ));

        // identity naming keeps them apart
        let schema = add_discriminator(&schema, "error").unwrap();
        assert_eq!(schema.as_coproduct().unwrap().discriminator.as_ref().unwrap().mapping.len(), 2);
    }

    #[test]
    fn test_not_a_coproduct() {
        let record = variant("UserNotFound", vec![Field::new("name", Schema::string())]);
        let err = add_discriminator(&record, "error").unwrap_err();

        assert!(matches!(
            &err,
            OpenApiError::NotACoproduct { schema } if schema.contains("UserNotFound")
        ));
    }
}
