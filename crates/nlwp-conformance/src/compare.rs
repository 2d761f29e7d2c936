//! # Structural Comparator
//!
//! Compares one specification schema against its implementation
//! counterpart with three independent checks: required-field sets,
//! property-key sets, and per-property reference-shape. A model passes
//! only if every enabled check passes.
//!
//! Each check returns its verdict together with the concrete offending
//! field names, so a mismatch can be acted on without re-running at a
//! higher verbosity. The verdict lines and the returned booleans always
//! agree.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::reconcile::{reconcile_names, FieldAlias};

/// Result of a single structural check: the verdict plus human-readable
/// finding lines (the verdict line first, offending names after it).
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Whether the check succeeded.
    pub passed: bool,
    /// Report lines describing the verdict and any mismatches.
    pub findings: Vec<String>,
}

impl CheckOutcome {
    fn pass(verdict: impl Into<String>) -> Self {
        CheckOutcome {
            passed: true,
            findings: vec![verdict.into()],
        }
    }

    fn fail(findings: Vec<String>) -> Self {
        CheckOutcome {
            passed: false,
            findings,
        }
    }
}

/// Which comparator phases to run.
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    /// Run the reference-shape check in addition to the two set checks.
    pub check_type_shape: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            check_type_shape: true,
        }
    }
}

/// Outcome of comparing one matched schema pair.
#[derive(Debug, Clone)]
pub struct ModelComparison {
    /// Required-fields check outcome.
    pub required: CheckOutcome,
    /// Properties-existence check outcome.
    pub properties: CheckOutcome,
    /// Reference-shape check outcome; `None` when the phase is disabled.
    pub type_shape: Option<CheckOutcome>,
}

impl ModelComparison {
    /// True iff every enabled check passed.
    pub fn passed(&self) -> bool {
        self.required.passed
            && self.properties.passed
            && self.type_shape.as_ref().map_or(true, |check| check.passed)
    }

    /// All finding lines in check order.
    pub fn findings(&self) -> impl Iterator<Item = &str> {
        self.required
            .findings
            .iter()
            .chain(self.properties.findings.iter())
            .chain(self.type_shape.iter().flat_map(|check| check.findings.iter()))
            .map(String::as_str)
    }
}

/// Run all enabled checks against one matched schema pair.
pub fn compare_model(
    specification: &Value,
    implementation: &Value,
    aliases: &[FieldAlias],
    options: CompareOptions,
) -> ModelComparison {
    ModelComparison {
        required: compare_required_fields(specification, implementation, aliases),
        properties: compare_properties(specification, implementation, aliases),
        type_shape: options
            .check_type_shape
            .then(|| compare_type_shape(specification, implementation, aliases)),
    }
}

/// Check that the two sides agree on which fields are required.
///
/// Order is irrelevant; the sets are compared after reconciliation. On
/// mismatch both reconciled sets are reported and the check fails.
pub fn compare_required_fields(
    specification: &Value,
    implementation: &Value,
    aliases: &[FieldAlias],
) -> CheckOutcome {
    let spec_required = required_set(specification);
    let impl_required = reconcile_names(&spec_required, &required_set(implementation), aliases);

    if spec_required == impl_required {
        CheckOutcome::pass("required fields match")
    } else {
        CheckOutcome::fail(vec![
            "required fields mismatch".to_string(),
            format!("  specification:  {}", render_set(&spec_required)),
            format!("  implementation: {}", render_set(&impl_required)),
        ])
    }
}

/// Check that every property exists on both sides.
///
/// Both set differences are computed and reported; the check passes only
/// when both are empty.
pub fn compare_properties(
    specification: &Value,
    implementation: &Value,
    aliases: &[FieldAlias],
) -> CheckOutcome {
    let spec_props = property_set(specification);
    let impl_props = reconcile_names(&spec_props, &property_set(implementation), aliases);

    let missing_in_implementation: BTreeSet<String> =
        spec_props.difference(&impl_props).cloned().collect();
    let missing_in_specification: BTreeSet<String> =
        impl_props.difference(&spec_props).cloned().collect();

    if missing_in_implementation.is_empty() && missing_in_specification.is_empty() {
        return CheckOutcome::pass("all properties present in both");
    }

    let mut findings = vec!["properties mismatch".to_string()];
    if !missing_in_implementation.is_empty() {
        findings.push(format!(
            "  in specification but not implementation: {}",
            render_set(&missing_in_implementation)
        ));
    }
    if !missing_in_specification.is_empty() {
        findings.push(format!(
            "  in implementation but not specification: {}",
            render_set(&missing_in_specification)
        ));
    }
    CheckOutcome::fail(findings)
}

/// Check that shared properties agree on whether they are
/// reference-shaped.
///
/// The check is shallow: it asks only "does this property delegate to a
/// named schema", never whether the referenced schemas are themselves
/// equal. Properties present on one side only are skipped here; the
/// properties-existence check already reports them.
pub fn compare_type_shape(
    specification: &Value,
    implementation: &Value,
    aliases: &[FieldAlias],
) -> CheckOutcome {
    let empty = serde_json::Map::new();
    let spec_props = specification
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let impl_props = implementation
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let mut findings = Vec::new();
    for (name, spec_prop) in spec_props {
        let impl_prop = impl_props.get(name).or_else(|| {
            // Same divergence table as the set checks: a field recognized
            // as equivalent there must be recognized as equivalent here.
            aliases
                .iter()
                .find_map(|alias| alias.alternate_for(name))
                .and_then(|alternate| impl_props.get(alternate))
        });
        let Some(impl_prop) = impl_prop else {
            continue;
        };

        let spec_ref = is_reference_shaped(spec_prop);
        let impl_ref = is_reference_shaped(impl_prop);
        if spec_ref != impl_ref {
            findings.push(format!(
                "  {name}: specification is {}, implementation is {}",
                describe_shape(spec_ref),
                describe_shape(impl_ref)
            ));
        }
    }

    if findings.is_empty() {
        CheckOutcome::pass("all property types agree")
    } else {
        findings.insert(0, "property type mismatches".to_string());
        CheckOutcome::fail(findings)
    }
}

/// Whether a property schema delegates to another named schema.
///
/// True for a direct `$ref`, a `$ref` inside any `allOf` item, or a
/// `$ref` inside any `anyOf`/`oneOf` alternative that is not the `null`
/// marker.
pub fn is_reference_shaped(property: &Value) -> bool {
    if property.get("$ref").is_some() {
        return true;
    }
    if let Some(items) = property.get("allOf").and_then(Value::as_array) {
        if items.iter().any(|item| item.get("$ref").is_some()) {
            return true;
        }
    }
    for composite in ["anyOf", "oneOf"] {
        if let Some(items) = property.get(composite).and_then(Value::as_array) {
            let has_ref = items
                .iter()
                .filter(|item| item.get("type").and_then(Value::as_str) != Some("null"))
                .any(|item| item.get("$ref").is_some());
            if has_ref {
                return true;
            }
        }
    }
    false
}

fn describe_shape(is_reference: bool) -> &'static str {
    if is_reference {
        "a schema reference"
    } else {
        "an inline type"
    }
}

fn required_set(schema: &Value) -> BTreeSet<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn property_set(schema: &Value) -> BTreeSet<String> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| properties.keys().cloned().collect())
        .unwrap_or_default()
}

fn render_set(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        return "(none)".to_string();
    }
    let joined: Vec<&str> = names.iter().map(String::as_str).collect();
    format!("{{{}}}", joined.join(", "))
}
