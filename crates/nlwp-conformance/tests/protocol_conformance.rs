//! End-to-end conformance run: a specification artifact written to disk,
//! loaded through the loader, and compared against the real model
//! registry exported by `nlwp-models`.

use std::io::Write;
use std::path::PathBuf;

use serde_json::json;

use nlwp_conformance::{
    load_implementation_schemas, load_specification_schemas, validate_protocol, CompareOptions,
    SkipReason, Verdict, PROTOCOL_MODEL_NAMES,
};

/// A specification document matching what the TypeSpec toolchain emits
/// for the current protocol revision: the `_meta` spelling, optional
/// fields outside `required`, and `$ref`s for nested model types.
fn specification_document() -> serde_json::Value {
    json!({
        "openapi": "3.1.0",
        "info": { "title": "NLWeb Protocol", "version": "0.1.0" },
        "components": {
            "schemas": {
                "AskRequest": {
                    "type": "object",
                    "required": ["query"],
                    "properties": {
                        "query": { "type": "string" },
                        "site": { "type": "string" },
                        "mode": {
                            "anyOf": [
                                { "$ref": "#/components/schemas/Mode" },
                                { "type": "null" }
                            ]
                        },
                        "prev": { "type": "array", "items": { "type": "string" } },
                        "streaming": { "type": "boolean" },
                        "_meta": { "type": "object", "additionalProperties": true }
                    }
                },
                "AskResponse": {
                    "type": "object",
                    "required": ["results"],
                    "properties": {
                        "query_id": { "type": "string" },
                        "results": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/ResultItem" }
                        },
                        "_meta": { "type": "object", "additionalProperties": true }
                    }
                },
                "WhoRequest": {
                    "type": "object",
                    "required": ["query"],
                    "properties": {
                        "query": { "type": "string" },
                        "_meta": { "type": "object", "additionalProperties": true }
                    }
                },
                "WhoResponse": {
                    "type": "object",
                    "required": ["endpoints"],
                    "properties": {
                        "query_id": { "type": "string" },
                        "endpoints": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Endpoint" }
                        },
                        "_meta": { "type": "object", "additionalProperties": true }
                    }
                },
                "Mode": {
                    "type": "string",
                    "enum": ["list", "summarize", "generate"]
                },
                "ResultItem": {
                    "type": "object",
                    "required": ["url", "name"],
                    "properties": {
                        "url": { "type": "string" },
                        "name": { "type": "string" },
                        "site": { "type": "string" },
                        "score": { "type": "number" },
                        "description": { "type": "string" },
                        "schema_object": { "type": "object", "additionalProperties": true }
                    }
                },
                "Endpoint": {
                    "type": "object",
                    "required": ["name", "base_url"],
                    "properties": {
                        "name": { "type": "string" },
                        "base_url": { "type": "string" },
                        "description": { "type": "string" },
                        "capabilities": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }
        }
    })
}

fn write_specification(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("openapi.yaml");
    let yaml = serde_yaml::to_string(&specification_document()).unwrap();
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    path
}

#[test]
fn current_models_conform_to_the_specification() {
    let dir = tempfile::tempdir().unwrap();
    let specification = load_specification_schemas(&write_specification(&dir)).unwrap();
    let implementation =
        load_implementation_schemas(PROTOCOL_MODEL_NAMES, nlwp_models::model_schema).unwrap();
    assert!(implementation.skipped.is_empty());

    let report = validate_protocol(
        &specification,
        &implementation.schemas,
        PROTOCOL_MODEL_NAMES,
        CompareOptions::default(),
    );

    for model in &report.models {
        assert_eq!(
            model.verdict,
            Verdict::Pass,
            "{} drifted: {:?}",
            model.model,
            model.trace
        );
    }
    assert!(report.overall_pass());
}

#[test]
fn dropped_specification_model_is_reported_not_applicable() {
    let dir = tempfile::tempdir().unwrap();
    let mut specification = load_specification_schemas(&write_specification(&dir)).unwrap();
    specification.remove("WhoRequest");

    let implementation =
        load_implementation_schemas(PROTOCOL_MODEL_NAMES, nlwp_models::model_schema).unwrap();
    let report = validate_protocol(
        &specification,
        &implementation.schemas,
        PROTOCOL_MODEL_NAMES,
        CompareOptions::default(),
    );

    let who = report
        .models
        .iter()
        .find(|model| model.model == "WhoRequest")
        .unwrap();
    assert_eq!(
        who.verdict,
        Verdict::NotApplicable(SkipReason::NotInSpecification)
    );
    assert!(report.overall_pass());
    assert_eq!(report.evaluated().count(), 3);
}

#[test]
fn specification_drift_is_caught_and_named() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = specification_document();
    // The next protocol revision adds a constraint field the
    // implementation does not know about yet.
    document["components"]["schemas"]["AskRequest"]["properties"]["max_results"] =
        json!({ "type": "integer" });

    let path = dir.path().join("openapi.yaml");
    std::fs::write(&path, serde_yaml::to_string(&document).unwrap()).unwrap();

    let specification = load_specification_schemas(&path).unwrap();
    let implementation =
        load_implementation_schemas(PROTOCOL_MODEL_NAMES, nlwp_models::model_schema).unwrap();
    let report = validate_protocol(
        &specification,
        &implementation.schemas,
        PROTOCOL_MODEL_NAMES,
        CompareOptions::default(),
    );

    assert!(!report.overall_pass());
    let ask = report
        .models
        .iter()
        .find(|model| model.model == "AskRequest")
        .unwrap();
    assert_eq!(ask.verdict, Verdict::Fail);
    assert!(
        ask.trace
            .iter()
            .any(|line| line.contains("max_results") && line.contains("not implementation")),
        "trace must name the drifted property: {:?}",
        ask.trace
    );
}
