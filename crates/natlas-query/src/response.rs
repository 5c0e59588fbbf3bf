//! # Response Envelopes
//!
//! The JSON shapes a front end receives: a list envelope wrapping a
//! [`NationListResult`], a detail envelope for one nation, and a flat error
//! body.
//!
//! ```json
//! { "data": [...], "meta": { "total": 29, "filtered": 4, "count": 3,
//!   "hasMore": true, "limit": 3, "sort": { "field": "population", "order": "desc" },
//!   "filters": { "region": "asia" } } }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use natlas_core::{Nation, NationCode, QueryError};

use crate::engine::{build_filter_summary, NationListResult};
use crate::params::FilterValue;
use crate::sort::{SortField, SortOrder};

/// Status code for a well-formed code that names no nation.
pub const NOT_FOUND_STATUS: u16 = 404;

#[derive(Debug, Clone, Serialize)]
pub struct NationListResponse<'a> {
    pub data: Vec<&'a Nation>,
    pub meta: ListMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total: usize,
    pub filtered: usize,
    pub count: usize,
    pub has_more: bool,
    /// Always present; `null` when no limit was requested.
    pub limit: Option<usize>,
    pub sort: SortMeta,
    pub filters: BTreeMap<String, FilterValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortMeta {
    pub field: SortField,
    pub order: SortOrder,
}

impl<'a> From<NationListResult<'a>> for NationListResponse<'a> {
    fn from(result: NationListResult<'a>) -> Self {
        let meta = ListMeta {
            total: result.total,
            filtered: result.filtered_total,
            count: result.items.len(),
            has_more: result.has_more,
            limit: result.query.limit,
            sort: SortMeta {
                field: result.query.sort,
                order: result.query.order,
            },
            filters: build_filter_summary(&result.query),
        };
        Self {
            data: result.items,
            meta,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NationDetailResponse<'a> {
    pub data: &'a Nation,
    pub meta: DetailMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailMeta {
    pub code: NationCode,
}

impl<'a> From<&'a Nation> for NationDetailResponse<'a> {
    fn from(nation: &'a Nation) -> Self {
        Self {
            data: nation,
            meta: DetailMeta {
                code: nation.code.clone(),
            },
        }
    }
}

/// Error body returned in place of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: u16,
    pub error: String,
}

impl ErrorResponse {
    /// A well-formed code with no matching nation.
    pub fn not_found(code: &NationCode) -> Self {
        Self {
            status: NOT_FOUND_STATUS,
            error: format!("Nation with code {code} was not found."),
        }
    }
}

impl From<&QueryError> for ErrorResponse {
    fn from(err: &QueryError) -> Self {
        Self {
            status: err.status(),
            error: err.to_string(),
        }
    }
}
