//! # natlas-query: Nation List Query Engine
//!
//! Parses untrusted key/value parameters into a [`NationListQuery`],
//! executes it against a [`Catalog`](natlas_catalog::Catalog), and wraps
//! the result in the JSON envelopes a front end consumes.
//!
//! ## Pipeline
//!
//! ```text
//! (key, value) pairs ──parse──▶ NationListQuery ──list──▶ NationListResult ──▶ NationListResponse
//!                         │
//!                         └─ QueryError (status 400)
//! ```
//!
//! Parsing is the only fallible step. Execution over a valid query always
//! succeeds, and an empty match set is a normal result.
//!
//! ## Modules
//!
//! - [`params`]: parameter parsing, pass-through filters, `limit` parsing.
//! - [`sort`]: [`SortField`] and [`SortOrder`].
//! - [`engine`]: [`list_nations`], [`build_filter_summary`], [`find_nation`].
//! - [`response`]: list, detail, and error envelopes.

pub mod engine;
pub mod params;
pub mod response;
pub mod sort;

pub use engine::{build_filter_summary, find_nation, list_nations, NationListResult};
pub use params::{
    parse_limit, parse_nation_list_query, FilterValue, NationListQuery, KNOWN_QUERY_KEYS,
};
pub use response::{
    DetailMeta, ErrorResponse, ListMeta, NationDetailResponse, NationListResponse, SortMeta,
    NOT_FOUND_STATUS,
};
pub use sort::{compare_names, SortField, SortOrder};
