//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types shared by the natlas crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Query parse failures ([`QueryError`]) are client errors. They carry a
//!   human-readable message and always map to status 400.
//! - Catalog construction failures ([`CatalogError`]) name the offending
//!   record or file.
//! - Lookup misses are not errors anywhere in the stack. They surface as
//!   `Option::None`, empty collections, or `false`.
//! - Dataset validation never produces an error value; the validator returns
//!   structured results instead.

use thiserror::Error;

/// Status code attached to every [`QueryError`].
pub const INVALID_QUERY_STATUS: u16 = 400;

/// Top-level error type for natlas.
#[derive(Error, Debug)]
pub enum NatlasError {
    /// A query parameter or nation code was malformed.
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    /// The catalog could not be built.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A malformed or unrecognized query parameter.
///
/// Raised only by the parse step of the query engine and by nation code
/// assertion. Never retried and never recovered internally; boundary code
/// translates it into a client error using [`QueryError::status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `region` did not match any [`Region`](crate::Region) value.
    #[error("Invalid region parameter: {0}")]
    InvalidRegion(String),

    /// `alliance` did not match any [`AllianceAffiliation`](crate::AllianceAffiliation) value.
    #[error("Invalid alliance parameter: {0}")]
    InvalidAlliance(String),

    /// `sort` is not one of the sortable fields.
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    /// `order` is neither `asc` nor `desc`.
    #[error("Invalid order parameter: {0}")]
    InvalidOrder(String),

    /// `limit` is not a positive integer.
    #[error("Invalid \"limit\" parameter. Expected a positive integer.")]
    InvalidLimit(String),

    /// A nation code is not three ASCII letters after normalization.
    #[error("Invalid nation code format. Expected a 3-letter ISO code.")]
    InvalidNationCode(String),
}

impl QueryError {
    /// HTTP-style status code for this error. Always 400.
    pub fn status(&self) -> u16 {
        INVALID_QUERY_STATUS
    }

    /// The raw input value that was rejected.
    pub fn raw_value(&self) -> &str {
        match self {
            Self::InvalidRegion(v)
            | Self::InvalidAlliance(v)
            | Self::InvalidSortField(v)
            | Self::InvalidOrder(v)
            | Self::InvalidLimit(v)
            | Self::InvalidNationCode(v) => v,
        }
    }
}

/// Error building a nation catalog from records.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two records share the same nation code.
    #[error("duplicate nation code in catalog: {0}")]
    DuplicateCode(String),

    /// The dataset could not be decoded.
    #[error("failed to decode nation dataset: {0}")]
    Decode(#[from] serde_json::Error),

    /// The dataset file could not be read.
    #[error("failed to read nation dataset {path}: {source}")]
    Read {
        /// Path that was being read.
        path: String,
        /// Underlying IO failure.
        source: std::io::Error,
    },
}

/// A string that does not name any variant of a closed taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    /// Name of the taxonomy (e.g. "region").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Error parsing an ISO-8601 date or date-time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid ISO-8601 date {0:?}")]
pub struct DateParseError(pub String);
