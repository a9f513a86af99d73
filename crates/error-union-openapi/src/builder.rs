//! OpenAPI document builder.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::{Map, Value, json};

use crate::Result;
use crate::error::OpenApiError;
use crate::types::{OpenApiPath, OpenApiSchema};

const OPENAPI_VERSION: &str = "3.0.0";
const DEFAULT_TITLE: &str = "API";
const DEFAULT_VERSION: &str = "0.1.0";

/// Builder assembling operations and component schemas into one document.
///
/// # Example
///
/// ```ignore
/// let (operation, schemas) = responses.openapi_operation(OpenApiOperation::new("Get user"))?;
///
/// let spec = OpenApiBuilder::new()
///     .title("Users")
///     .version("1.0.0")
///     .path(OpenApiPath::new("/users/{name}", "get").with_operation(operation))?
///     .merge_schemas(schemas)?
///     .build();
/// ```
///
/// # Conflict Resolution
///
/// - **Paths**: Last write wins for the same path+method.
/// - **Schemas**: Identical schemas are deduplicated; different schemas with the
///   same name cause an error.
#[derive(Debug, Clone, Default)]
pub struct OpenApiBuilder {
    title: Option<String>,
    version: Option<String>,
    description: Option<String>,
    /// path -> method -> operation
    paths: IndexMap<String, IndexMap<String, Value>>,
    schemas: IndexMap<String, Value>,
}

impl OpenApiBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the API version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the API description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an operation. A later operation on the same path and method replaces
    /// the earlier one.
    pub fn path(mut self, path_def: OpenApiPath) -> Result<Self> {
        let operation = serde_json::to_value(&path_def.operation)?;
        self.paths
            .entry(path_def.path)
            .or_default()
            .insert(path_def.method, operation);
        Ok(self)
    }

    /// Merge component schemas.
    pub fn merge_schemas(mut self, schemas: Vec<OpenApiSchema>) -> Result<Self> {
        for schema_def in schemas {
            self.merge_schema(schema_def.name, schema_def.schema)?;
        }
        Ok(self)
    }

    fn merge_schema(&mut self, name: String, schema: Value) -> Result<()> {
        match self.schemas.entry(name) {
            Entry::Occupied(existing) if *existing.get() != schema => {
                Err(OpenApiError::SchemaConflict {
                    name: existing.key().clone(),
                })
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(schema);
                Ok(())
            }
        }
    }

    /// Build the final OpenAPI document.
    ///
    /// `paths` and `components` are only present when something was added.
    pub fn build(self) -> Value {
        let mut info = json!({
            "title": self.title.as_deref().unwrap_or(DEFAULT_TITLE),
            "version": self.version.as_deref().unwrap_or(DEFAULT_VERSION),
        });
        if let Some(description) = self.description {
            info["description"] = Value::String(description);
        }

        let mut spec = json!({ "openapi": OPENAPI_VERSION, "info": info });
        if !self.paths.is_empty() {
            let paths: Map<String, Value> = self
                .paths
                .into_iter()
                .map(|(path, methods)| (path, Value::Object(methods.into_iter().collect())))
                .collect();
            spec["paths"] = Value::Object(paths);
        }
        if !self.schemas.is_empty() {
            let schemas: Map<String, Value> = self.schemas.into_iter().collect();
            spec["components"] = json!({ "schemas": schemas });
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OpenApiOperation, OpenApiResponse};
    use serde_json::json;

    #[test]
    fn test_basic_builder() {
        let spec = OpenApiBuilder::new()
            .title("Test API")
            .version("1.0.0")
            .description("A test API")
            .build();

        assert_eq!(spec["info"]["title"], "Test API");
        assert_eq!(spec["info"]["version"], "1.0.0");
        assert_eq!(spec["info"]["description"], "A test API");
        assert_eq!(spec["openapi"], "3.0.0");
        assert!(spec.get("paths").is_none());
        assert!(spec.get("components").is_none());
    }

    #[test]
    fn test_defaults() {
        let spec = OpenApiBuilder::new().build();

        assert_eq!(spec["info"], json!({"title": "API", "version": "0.1.0"}));
    }

    #[test]
    fn test_methods_share_path() {
        let spec = OpenApiBuilder::new()
            .path(OpenApiPath::new("/users", "get").with_operation(OpenApiOperation::new("List")))
            .unwrap()
            .path(
                OpenApiPath::new("/users", "POST").with_operation(OpenApiOperation::new("Create")),
            )
            .unwrap()
            .build();

        assert_eq!(spec["paths"]["/users"]["get"]["summary"], "List");
        assert_eq!(spec["paths"]["/users"]["post"]["summary"], "Create");
    }

    #[test]
    fn test_operation_responses_rendered() {
        let operation = OpenApiOperation::new("Get user").with_response(
            "404",
            OpenApiResponse::new("Unable to find user")
                .with_content("application/json", json!({"type": "object"})),
        );

        let spec = OpenApiBuilder::new()
            .path(OpenApiPath::new("/users", "GET").with_operation(operation))
            .unwrap()
            .build();

        let response = &spec["paths"]["/users"]["get"]["responses"]["404"];
        assert_eq!(response["description"], "Unable to find user");
        assert_eq!(
            response["content"]["application/json"]["schema"],
            json!({"type": "object"})
        );
    }

    #[test]
    fn test_path_override() {
        let spec = OpenApiBuilder::new()
            .path(OpenApiPath::new("/users", "get").with_operation(OpenApiOperation::new("First")))
            .unwrap()
            .path(OpenApiPath::new("/users", "get").with_operation(OpenApiOperation::new("Second")))
            .unwrap()
            .build();

        assert_eq!(spec["paths"]["/users"]["get"]["summary"], "Second");
    }

    #[test]
    fn test_schema_deduplication() {
        let user = || OpenApiSchema::new("User", json!({"type": "object"}));

        let spec = OpenApiBuilder::new()
            .merge_schemas(vec![user()])
            .unwrap()
            .merge_schemas(vec![user()])
            .unwrap()
            .build();

        assert!(spec["components"]["schemas"]["User"].is_object());
    }

    #[test]
    fn test_schema_conflict() {
        let result = OpenApiBuilder::new()
            .merge_schemas(vec![OpenApiSchema::new("User", json!({"type": "object"}))])
            .unwrap()
            .merge_schemas(vec![OpenApiSchema::new("User", json!({"type": "string"}))]);

        let err = result.unwrap_err();
        assert!(matches!(err, OpenApiError::SchemaConflict { name } if name == "User"));
    }
}
