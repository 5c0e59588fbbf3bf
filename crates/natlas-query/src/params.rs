//! # Query Parameters
//!
//! Turns raw key/value pairs (a URL query string, CLI flags, or anything
//! else that yields string pairs) into a validated [`NationListQuery`].
//!
//! ## Recognized keys
//!
//! | Key | Accepts | Failure |
//! |-----|---------|---------|
//! | `search` | any text, trimmed | never |
//! | `region` | a region value, any case | `Invalid region parameter: <raw>` |
//! | `alliance` | an alliance value, any case | `Invalid alliance parameter: <raw>` |
//! | `sort` | a sort field, any case | `Invalid sort field: <raw>` |
//! | `order` | `asc` / `desc`, any case | `Invalid order parameter: <raw>` |
//! | `limit` | leading positive integer | `Invalid "limit" parameter. ...` |
//!
//! Only the first occurrence of a recognized key counts, and an empty value
//! means the key was not given. Every other key is passed through into
//! [`NationListQuery::additional_filters`] without interpretation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use natlas_core::{AllianceAffiliation, QueryError, Region};

use crate::sort::{SortField, SortOrder};

/// Recognized parameter keys.
pub const KNOWN_QUERY_KEYS: [&str; 6] = ["search", "region", "alliance", "sort", "order", "limit"];

/// A pass-through filter value: one value, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// Add another occurrence of the same key.
    fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => *self = Self::Many(vec![std::mem::take(first), value]),
            Self::Many(values) => values.push(value),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// A validated nation list query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationListQuery {
    /// Trimmed, non-empty search text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance: Option<AllianceAffiliation>,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub order: SortOrder,
    /// Positive maximum number of items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Unrecognized parameters, kept verbatim.
    #[serde(default)]
    pub additional_filters: BTreeMap<String, FilterValue>,
}

/// Parse raw parameters into a [`NationListQuery`].
///
/// # Errors
///
/// Returns the [`QueryError`] for the first recognized parameter (in the
/// order `region`, `alliance`, `sort`, `order`, `limit`) whose value is
/// invalid.
pub fn parse_nation_list_query<I, K, V>(params: I) -> Result<NationListQuery, QueryError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut first: BTreeMap<&'static str, String> = BTreeMap::new();
    let mut additional_filters: BTreeMap<String, FilterValue> = BTreeMap::new();

    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        match KNOWN_QUERY_KEYS.iter().find(|known| **known == key) {
            Some(known) => {
                first.entry(*known).or_insert_with(|| value.to_string());
            }
            None => match additional_filters.get_mut(key) {
                Some(existing) => existing.push(value.to_string()),
                None => {
                    additional_filters.insert(key.to_string(), FilterValue::from(value));
                }
            },
        }
    }

    // A recognized key whose first value is empty counts as absent.
    let param = |key: &str| first.get(key).map(String::as_str).filter(|v| !v.is_empty());

    let mut query = NationListQuery {
        additional_filters,
        ..NationListQuery::default()
    };

    if let Some(search) = param("search") {
        let trimmed = search.trim();
        if !trimmed.is_empty() {
            query.search = Some(trimmed.to_string());
        }
    }

    if let Some(raw) = param("region") {
        query.region = Some(
            Region::parse_ignore_case(raw)
                .ok_or_else(|| QueryError::InvalidRegion(raw.to_string()))?,
        );
    }

    if let Some(raw) = param("alliance") {
        query.alliance = Some(
            AllianceAffiliation::parse_ignore_case(raw)
                .ok_or_else(|| QueryError::InvalidAlliance(raw.to_string()))?,
        );
    }

    if let Some(raw) = param("sort") {
        query.sort = SortField::parse_ignore_case(raw)
            .ok_or_else(|| QueryError::InvalidSortField(raw.to_string()))?;
    }

    if let Some(raw) = param("order") {
        query.order = SortOrder::parse_ignore_case(raw)
            .ok_or_else(|| QueryError::InvalidOrder(raw.to_string()))?;
    }

    if let Some(raw) = param("limit") {
        query.limit = Some(parse_limit(raw)?);
    }

    tracing::debug!(
        search = ?query.search,
        region = ?query.region,
        alliance = ?query.alliance,
        sort = %query.sort,
        order = %query.order,
        limit = ?query.limit,
        passthrough = query.additional_filters.len(),
        "parsed nation list query"
    );

    Ok(query)
}

/// Parse a `limit` value the lenient way: optional leading whitespace and
/// sign, then decimal digits; anything after the digits is ignored.
/// `"10"`, `" 10"`, `"+10"`, `"10abc"` and `"10.9"` all yield 10.
///
/// # Errors
///
/// [`QueryError::InvalidLimit`] when there are no leading digits or the
/// value is not positive.
pub fn parse_limit(raw: &str) -> Result<usize, QueryError> {
    let invalid = || QueryError::InvalidLimit(raw.to_string());

    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(invalid());
    }
    let digits = &unsigned[..digits_len];
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(invalid());
    }
    // Out-of-range limits are still positive; they just never truncate.
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}
