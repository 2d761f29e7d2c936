//! # nlwp-conformance — Specification/Implementation Drift Detection
//!
//! Cross-validates two independently maintained descriptions of the NLWeb
//! protocol contract: the OpenAPI document generated by the TypeSpec
//! toolchain, and the schemas the server implementation derives from its
//! own model types. The goal is to catch drift before a published
//! specification and the library implementing it silently diverge.
//!
//! ## Pipeline
//!
//! - [`loader`] obtains the two model-name → schema mappings.
//! - [`reconcile`] maps known, intentional naming differences between the
//!   two schema dialects onto a single canonical spelling.
//! - [`compare`] checks one matched schema pair structurally: required
//!   fields, property existence, and reference-shape per property.
//! - [`validate`] runs the comparator over the fixed protocol model list
//!   and aggregates the per-model verdicts into a report.
//!
//! Both schema mappings are loaded once, held read-only, and compared
//! strictly sequentially. Every listed model is always evaluated, so one
//! run reports the full set of discrepancies rather than stopping at the
//! first.
//!
//! This crate only diffs schema documents. It does not generate schemas
//! and it never validates request or response payloads against them.

pub mod compare;
pub mod error;
pub mod loader;
pub mod reconcile;
pub mod validate;

pub use compare::{
    compare_model, compare_properties, compare_required_fields, compare_type_shape,
    is_reference_shaped, CheckOutcome, CompareOptions, ModelComparison,
};
pub use error::ConformanceError;
pub use loader::{
    load_implementation_schemas, load_specification_schemas, ImplementationSchemas, SchemaMap,
};
pub use reconcile::{reconcile_names, FieldAlias, FIELD_ALIASES};
pub use validate::{
    validate_protocol, ModelReport, SkipReason, ValidationReport, Verdict, PROTOCOL_MODEL_NAMES,
};
