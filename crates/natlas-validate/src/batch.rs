//! # Batch Validation
//!
//! Validates many records and keeps only the failures, keyed by nation
//! code in a `BTreeMap` so reports list nations alphabetically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use natlas_core::Nation;

use crate::result::ValidationResult;
use crate::rules::{validate_nation, validate_nation_document};

/// Counts over a map of failing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Number of entries in the map. Equal to `invalid`, since the map
    /// holds failures only.
    pub total: usize,
    pub invalid: usize,
    /// Errors summed across every entry.
    pub error_count: usize,
}

/// Validate every nation; the map holds only those that failed.
pub fn validate_nations(nations: &[Nation]) -> BTreeMap<String, ValidationResult> {
    let failures: BTreeMap<String, ValidationResult> = nations
        .iter()
        .map(|nation| (nation.code.to_string(), validate_nation(nation)))
        .filter(|(_, result)| !result.valid)
        .collect();

    tracing::info!(
        checked = nations.len(),
        invalid = failures.len(),
        "validated nations"
    );
    failures
}

/// Validate untyped documents; the map holds only those that failed.
///
/// A document is keyed by its `code` string when it has a non-empty one,
/// otherwise by `#<index>`. A key already taken by an earlier document gets
/// `#<index>` appended.
pub fn validate_documents(documents: &[Value]) -> BTreeMap<String, ValidationResult> {
    let mut failures = BTreeMap::new();
    for (index, doc) in documents.iter().enumerate() {
        let result = validate_nation_document(doc);
        if result.valid {
            continue;
        }
        let mut key = match doc.get("code").and_then(Value::as_str) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => format!("#{index}"),
        };
        if failures.contains_key(&key) {
            key = format!("{key}#{index}");
        }
        failures.insert(key, result);
    }

    tracing::info!(
        checked = documents.len(),
        invalid = failures.len(),
        "validated nation documents"
    );
    failures
}

/// Summarize a map produced by [`validate_nations`] or
/// [`validate_documents`].
pub fn validation_summary(results: &BTreeMap<String, ValidationResult>) -> ValidationSummary {
    ValidationSummary {
        total: results.len(),
        invalid: results.len(),
        error_count: results.values().map(|r| r.errors.len()).sum(),
    }
}
