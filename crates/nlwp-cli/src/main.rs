//! # nlwp CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nlwp_cli::validate::{run_validate, ValidateArgs};

/// NLWeb protocol conformance toolchain.
///
/// Cross-validates the TypeSpec-generated OpenAPI specification against
/// the schemas derived from the implementation's protocol models, and
/// reports structural drift per message type.
#[derive(Parser, Debug)]
#[command(name = "nlwp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare the protocol specification with the model implementation.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve the repository root: walk up from the CWD looking for the
    // TypeSpec output directory.
    let repo_root = resolve_repo_root().unwrap_or_else(|| {
        tracing::warn!("could not locate repository root; using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Walk up from the current directory to find the repository root,
/// identified by the presence of a `tsp-output/` directory.
fn resolve_repo_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join("tsp-output").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
