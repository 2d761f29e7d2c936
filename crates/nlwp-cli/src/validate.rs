//! # Validate Subcommand
//!
//! Loads both schema sources, runs the conformance comparison over the
//! protocol model list, and prints the banner, per-model trace, and
//! summary table.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use nlwp_conformance::{
    load_implementation_schemas, load_specification_schemas, validate_protocol, CompareOptions,
    ConformanceError, ValidationReport, Verdict, PROTOCOL_MODEL_NAMES,
};

/// Conventional location of the TypeSpec compiler output, relative to
/// the repository root.
pub const DEFAULT_SPEC_PATH: &str = "tsp-output/openapi/openapi.yaml";

const RULE_WIDTH: usize = 60;

/// Arguments for the `nlwp validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the TypeSpec-generated OpenAPI document.
    #[arg(long, value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Skip the per-property reference-shape check.
    #[arg(long)]
    pub skip_type_shape: bool,
}

/// Execute the validate subcommand.
///
/// Returns the process exit code: 0 when every evaluated model passes or
/// is not applicable, 1 when any model fails, 2 when a schema source
/// cannot be loaded.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path) -> Result<u8> {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("NLWeb Protocol Validation");
    println!("Comparing TypeSpec specification with the model implementation");
    println!("{}", "=".repeat(RULE_WIDTH));

    let spec_path = match &args.spec {
        Some(path) => crate::resolve_path(path, repo_root),
        None => repo_root.join(DEFAULT_SPEC_PATH),
    };

    let specification = match load_specification_schemas(&spec_path) {
        Ok(schemas) => schemas,
        Err(e) => return Ok(report_load_failure(&e)),
    };
    let implementation =
        match load_implementation_schemas(PROTOCOL_MODEL_NAMES, nlwp_models::model_schema) {
            Ok(schemas) => schemas,
            Err(e) => return Ok(report_load_failure(&e)),
        };

    println!("Specification models: {}", specification.len());
    println!("Implementation models: {}", implementation.schemas.len());
    for model in &implementation.skipped {
        println!("  {model} not found in the model library");
    }

    let options = CompareOptions {
        check_type_shape: !args.skip_type_shape,
    };
    let report = validate_protocol(
        &specification,
        &implementation.schemas,
        PROTOCOL_MODEL_NAMES,
        options,
    );

    print_report(&report);

    if report.overall_pass() {
        println!("All validations passed. Specification and implementation match.");
        Ok(0)
    } else {
        println!("Some validations failed. Review the differences above.");
        Ok(1)
    }
}

/// Print the fatal loading failure with its remediation and return the
/// operational-error exit code.
fn report_load_failure(error: &ConformanceError) -> u8 {
    println!("ERROR: {error}");
    if let Some(hint) = error.remediation() {
        println!("  {hint}");
    }
    2
}

fn print_report(report: &ValidationReport) {
    for model in &report.models {
        println!();
        println!("Validating {}...", model.model);
        for line in &model.trace {
            println!("  {line}");
        }
    }

    println!();
    println!("{}", "+".repeat(RULE_WIDTH));
    println!("SUMMARY");
    println!("{}", "+".repeat(RULE_WIDTH));
    // Not-applicable models already carry their diagnostic in the trace;
    // the table lists only what was actually compared.
    for model in report.evaluated() {
        let status = match model.verdict {
            Verdict::Pass => "PASS",
            _ => "FAIL",
        };
        println!("{status}: {}", model.model);
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}
