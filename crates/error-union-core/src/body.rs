//! Response body descriptors.

use error_union_openapi::{Result, Schema};
use serde::Serialize;

/// Wire format of a response body.
pub trait Codec: Clone {
    /// Media type written to the `content` map of a response.
    fn media_type(&self) -> &'static str;

    /// Encode a value.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;
}

/// `application/json` via serde_json.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn media_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }
}

/// A response body: codec, schema and description.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDescriptor<C = JsonCodec> {
    pub codec: C,
    pub schema: Schema,
    pub description: Option<String>,
}

impl BodyDescriptor<JsonCodec> {
    /// JSON body described by `schema`.
    pub fn json(schema: Schema) -> Self {
        Self::new(JsonCodec, schema)
    }
}

impl<C: Codec> BodyDescriptor<C> {
    pub fn new(codec: C, schema: Schema) -> Self {
        Self {
            codec,
            schema,
            description: None,
        }
    }

    /// Same codec, different schema.
    pub fn with_schema(&self, schema: Schema) -> Self {
        Self {
            codec: self.codec.clone(),
            schema,
            description: self.description.clone(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn media_type(&self) -> &'static str {
        self.codec.media_type()
    }
}
