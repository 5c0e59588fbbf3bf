//! # Validate CLI
//!
//! `natlas validate` checks the active catalog, or a JSON file holding one
//! nation document or an array of them. Files are validated as raw
//! documents, so records that would not load into a catalog are still
//! reported field by field.
//!
//! ```bash
//! natlas validate
//! natlas validate data/nations.json --json
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use natlas_validate::{
    validate_documents, validate_nations, validation_summary, ValidationResult, ValidationSummary,
};

use crate::config::AppContext;
use crate::{write_json, EXIT_FAILURE, EXIT_OK};

#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// JSON file to validate instead of the active catalog.
    pub path: Option<PathBuf>,

    /// Print the failures and summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport<'a> {
    checked: usize,
    results: &'a BTreeMap<String, ValidationResult>,
    summary: ValidationSummary,
}

/// Read a file holding one nation document or an array of them.
pub fn load_documents(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading nation file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing nation file: {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![value]),
        _ => bail!(
            "{}: expected a nation document or an array of them",
            path.display()
        ),
    }
}

/// Execute the validate subcommand. Exits with `1` if anything is invalid.
pub fn run_validate(args: &ValidateArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let (checked, results) = match &args.path {
        Some(path) => {
            let docs = load_documents(path)?;
            (docs.len(), validate_documents(&docs))
        }
        None => (ctx.catalog.len(), validate_nations(ctx.catalog.nations())),
    };
    let summary = validation_summary(&results);

    if args.json {
        let report = ValidationReport {
            checked,
            results: &results,
            summary,
        };
        write_json(out, &report)?;
    } else {
        for (key, result) in &results {
            for error in &result.errors {
                writeln!(out, "{key}: {error}")?;
            }
        }
        writeln!(
            out,
            "checked: {checked}  invalid: {}  errors: {}",
            summary.invalid, summary.error_count
        )?;
    }

    if results.is_empty() {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_FAILURE)
    }
}
