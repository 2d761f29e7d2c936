//! # Schema Source Loader
//!
//! Obtains the two model-name → schema mappings the comparator consumes.
//!
//! Side A is the OpenAPI document the TypeSpec toolchain writes to
//! `tsp-output/openapi/openapi.yaml`; its named schema definitions live
//! under `components.schemas`. Side B is the implementation's model
//! library, consulted through a plain lookup from model name to exported
//! schema object.
//!
//! Either source failing to load is fatal to the run: with only one side
//! there is nothing to compare.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::ConformanceError;

/// Mapping from model name to its JSON-Schema-shaped document.
///
/// Ordered so reports iterate deterministically.
pub type SchemaMap = BTreeMap<String, Value>;

/// Fixed location of the named schema definitions inside the
/// specification document.
const SCHEMA_SECTION: &[&str] = &["components", "schemas"];

/// Load the specification side from a TypeSpec-generated OpenAPI artifact.
///
/// # Errors
///
/// - [`ConformanceError::MissingArtifact`] if nothing exists at `path`
///   (the generation step has not been run).
/// - [`ConformanceError::MalformedSpecification`] if the document is not
///   YAML or lacks a `components.schemas` mapping.
pub fn load_specification_schemas(path: &Path) -> Result<SchemaMap, ConformanceError> {
    if !path.exists() {
        return Err(ConformanceError::MissingArtifact {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    // OpenAPI documents are the JSON-compatible subset of YAML, so they
    // deserialize straight into a JSON value tree.
    let document: Value =
        serde_yaml::from_str(&content).map_err(|e| ConformanceError::MalformedSpecification {
            path: path.display().to_string(),
            reason: format!("invalid YAML: {e}"),
        })?;

    let mut section = &document;
    for key in SCHEMA_SECTION {
        section = section
            .get(key)
            .ok_or_else(|| ConformanceError::MalformedSpecification {
                path: path.display().to_string(),
                reason: format!("missing '{}' section", SCHEMA_SECTION.join(".")),
            })?;
    }
    let schemas = section
        .as_object()
        .ok_or_else(|| ConformanceError::MalformedSpecification {
            path: path.display().to_string(),
            reason: format!("'{}' is not a mapping", SCHEMA_SECTION.join(".")),
        })?;

    tracing::debug!(
        path = %path.display(),
        count = schemas.len(),
        "loaded specification schemas"
    );

    Ok(schemas
        .iter()
        .map(|(name, schema)| (name.clone(), schema.clone()))
        .collect())
}

/// Implementation-side schemas plus the expected models the library does
/// not export.
#[derive(Debug)]
pub struct ImplementationSchemas {
    /// Exported schemas, keyed by model name.
    pub schemas: SchemaMap,
    /// Expected models the implementation does not provide. Not errors;
    /// in-progress implementations are comparable on what they do export.
    pub skipped: Vec<String>,
}

/// Load the implementation side through the model library's export
/// lookup.
///
/// Each expected model name is looked up individually; absent models are
/// recorded as skipped. A lookup that yields nothing for every expected
/// name means the model library itself is unusable.
///
/// # Errors
///
/// [`ConformanceError::MissingDependency`] if no expected model resolves
/// at all.
pub fn load_implementation_schemas<F>(
    expected: &[&str],
    lookup: F,
) -> Result<ImplementationSchemas, ConformanceError>
where
    F: Fn(&str) -> Option<Value>,
{
    let mut schemas = SchemaMap::new();
    let mut skipped = Vec::new();

    for name in expected {
        match lookup(name) {
            Some(schema) => {
                schemas.insert((*name).to_string(), schema);
            }
            None => {
                tracing::debug!(model = *name, "model not exported by the implementation");
                skipped.push((*name).to_string());
            }
        }
    }

    if schemas.is_empty() && !expected.is_empty() {
        return Err(ConformanceError::MissingDependency);
    }

    Ok(ImplementationSchemas { schemas, skipped })
}
