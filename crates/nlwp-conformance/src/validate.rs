//! # Validation Orchestrator
//!
//! Runs the structural comparator over the fixed protocol model list and
//! aggregates the per-model verdicts. A model absent from either side is
//! not applicable rather than failing; a structural mismatch fails that
//! model but never stops the remaining comparisons, so one run reports
//! every discrepancy.

use crate::compare::{compare_model, CompareOptions};
use crate::loader::SchemaMap;
use crate::reconcile::FIELD_ALIASES;

/// The protocol message types this tool is scoped to: the request and
/// response pair of each supported operation. Extending coverage means
/// extending this list.
pub const PROTOCOL_MODEL_NAMES: &[&str] =
    &["AskRequest", "AskResponse", "WhoRequest", "WhoResponse"];

/// Why a model could not be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The specification does not define the model.
    NotInSpecification,
    /// The implementation does not export the model yet.
    NotImplemented,
}

impl SkipReason {
    /// Diagnostic line for the validation trace.
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::NotInSpecification => "not found in specification",
            SkipReason::NotImplemented => "not yet implemented - skipping",
        }
    }
}

/// Tri-state outcome of validating one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every enabled check passed.
    Pass,
    /// At least one structural mismatch.
    Fail,
    /// The model is absent from one side; comparison cannot proceed.
    NotApplicable(SkipReason),
}

/// Verdict and trace for a single model.
#[derive(Debug, Clone)]
pub struct ModelReport {
    /// Model name from the configured list.
    pub model: String,
    pub verdict: Verdict,
    /// Human-readable lines from the checks (or the skip diagnostic).
    pub trace: Vec<String>,
}

impl ModelReport {
    /// True when the model was actually compared (pass or fail).
    pub fn evaluated(&self) -> bool {
        matches!(self.verdict, Verdict::Pass | Verdict::Fail)
    }
}

/// Ordered per-model outcomes for one run.
#[derive(Debug)]
pub struct ValidationReport {
    /// One entry per configured model, in configuration order.
    pub models: Vec<ModelReport>,
}

impl ValidationReport {
    /// Overall success: no evaluated model failed. Not-applicable models
    /// never flip the run to failure.
    pub fn overall_pass(&self) -> bool {
        !self
            .models
            .iter()
            .any(|model| model.verdict == Verdict::Fail)
    }

    /// The models that were actually compared, for the summary table.
    pub fn evaluated(&self) -> impl Iterator<Item = &ModelReport> {
        self.models.iter().filter(|model| model.evaluated())
    }
}

/// Validate every configured model, in order, against the two loaded
/// schema mappings.
pub fn validate_protocol(
    specification: &SchemaMap,
    implementation: &SchemaMap,
    models: &[&str],
    options: CompareOptions,
) -> ValidationReport {
    let reports = models
        .iter()
        .map(|name| validate_model(name, specification, implementation, options))
        .collect();
    ValidationReport { models: reports }
}

fn validate_model(
    name: &str,
    specification: &SchemaMap,
    implementation: &SchemaMap,
    options: CompareOptions,
) -> ModelReport {
    let Some(spec_schema) = specification.get(name) else {
        let reason = SkipReason::NotInSpecification;
        return skip(name, reason);
    };
    let Some(impl_schema) = implementation.get(name) else {
        let reason = SkipReason::NotImplemented;
        return skip(name, reason);
    };

    let comparison = compare_model(spec_schema, impl_schema, FIELD_ALIASES, options);
    let verdict = if comparison.passed() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    tracing::debug!(model = name, passed = comparison.passed(), "model compared");

    ModelReport {
        model: name.to_string(),
        verdict,
        trace: comparison.findings().map(str::to_string).collect(),
    }
}

fn skip(name: &str, reason: SkipReason) -> ModelReport {
    tracing::info!(model = name, reason = reason.message(), "model skipped");
    ModelReport {
        model: name.to_string(),
        verdict: Verdict::NotApplicable(reason),
        trace: vec![reason.message().to_string()],
    }
}
