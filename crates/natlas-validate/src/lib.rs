//! # natlas-validate: Nation Record Validation
//!
//! Checks nation records for data integrity and reports every violation
//! found, with the JSON path of the offending field.
//!
//! ## Validation Layers
//!
//! 1. **Document rules** ([`rules`]): a walk over the JSON document form of a
//!    nation. Required text, numeric ranges, array shapes, booleans, code
//!    formats, enum membership, and the `lastUpdated` date.
//! 2. **Typed entry point**: [`validate_nation`] serializes a [`Nation`] and
//!    runs the same walk, so typed and untyped records share one rule set.
//! 3. **Batches** ([`batch`]): many records at once, keeping only the
//!    failures, plus a count summary.
//!
//! ## Crate Policy
//!
//! - Validation never fails. Problems are data in a [`ValidationResult`].
//! - Checks never short-circuit, except that a missing sub-record skips the
//!   checks nested inside it.
//!
//! [`Nation`]: natlas_core::Nation

pub mod batch;
pub mod result;
pub mod rules;

pub use batch::{validate_documents, validate_nations, validation_summary, ValidationSummary};
pub use result::{ValidationError, ValidationResult};
pub use rules::{validate_nation, validate_nation_document};
