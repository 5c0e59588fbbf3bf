//! # Nation Codes
//!
//! [`NationCode`] is the identity of a nation: an ISO 3166-1 alpha-3 code,
//! exactly three uppercase ASCII letters. Codes are validated at
//! construction and at deserialization, so a `NationCode` held anywhere in
//! the stack is always well-formed.
//!
//! Inbound codes from callers go through [`assert_nation_code`], which
//! trims and upper-cases before checking the format. Well-formed does not
//! mean present: whether a code resolves to a nation is a catalog lookup.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// An ISO 3166-1 alpha-3 nation code (e.g. `USA`, `GBR`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NationCode(String);

impl<'de> Deserialize<'de> for NationCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl NationCode {
    /// Create a nation code, requiring exactly three uppercase ASCII letters.
    ///
    /// No normalization is applied; use [`assert_nation_code`] for
    /// caller-supplied input.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidNationCode`] if the value does not match
    /// `^[A-Z]{3}$`.
    pub fn new(value: impl Into<String>) -> Result<Self, QueryError> {
        let value = value.into();
        if !is_nation_code(&value) {
            return Err(QueryError::InvalidNationCode(value));
        }
        Ok(Self(value))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NationCode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NationCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NationCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returns `true` if `value` matches `^[A-Z]{3}$`.
pub fn is_nation_code(value: &str) -> bool {
    value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase())
}

/// Trim surrounding whitespace and upper-case. Performs no validation.
pub fn normalize_nation_code(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Normalize caller input and require a well-formed nation code.
///
/// # Errors
///
/// Returns [`QueryError::InvalidNationCode`] (status 400) carrying the raw
/// input if the normalized value is not three ASCII letters.
pub fn assert_nation_code(input: &str) -> Result<NationCode, QueryError> {
    let normalized = normalize_nation_code(input);
    if !is_nation_code(&normalized) {
        return Err(QueryError::InvalidNationCode(input.to_string()));
    }
    Ok(NationCode(normalized))
}
