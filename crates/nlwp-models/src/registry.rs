//! # Exported-Schema Registry
//!
//! Publishes the OpenAPI schema object of every protocol model by name.
//! The conformance checker treats this registry as an opaque capability
//! lookup: a name either resolves to a schema value or it does not, which
//! is how partially implemented protocol revisions stay comparable.

use serde_json::Value;
use utoipa::PartialSchema;

use crate::models::{AskRequest, AskResponse, WhoRequest, WhoResponse};

/// One protocol model exported by this crate together with its schema
/// producer.
pub struct ExportedModel {
    /// Model name as it appears in the protocol specification.
    pub name: &'static str,
    schema: fn() -> Value,
}

impl ExportedModel {
    /// The model's OpenAPI schema object as plain JSON.
    pub fn schema(&self) -> Value {
        (self.schema)()
    }
}

fn schema_value<T: PartialSchema>() -> Value {
    // Schema objects are plain trees of strings, numbers, and maps with
    // string keys; serializing them to JSON cannot fail.
    serde_json::to_value(T::schema()).expect("OpenAPI schema objects serialize to JSON")
}

/// Every model this implementation exports, in protocol order.
pub const PROTOCOL_MODELS: &[ExportedModel] = &[
    ExportedModel {
        name: "AskRequest",
        schema: schema_value::<AskRequest>,
    },
    ExportedModel {
        name: "AskResponse",
        schema: schema_value::<AskResponse>,
    },
    ExportedModel {
        name: "WhoRequest",
        schema: schema_value::<WhoRequest>,
    },
    ExportedModel {
        name: "WhoResponse",
        schema: schema_value::<WhoResponse>,
    },
];

/// Look up the schema of an exported model by name.
///
/// Returns `None` when this implementation does not (yet) provide the
/// model, which callers treat as "not implemented" rather than an error.
pub fn model_schema(name: &str) -> Option<Value> {
    PROTOCOL_MODELS
        .iter()
        .find(|model| model.name == name)
        .map(ExportedModel::schema)
}
