//! # List Execution
//!
//! Runs a parsed [`NationListQuery`] against a [`Catalog`]:
//! filter, count, stable-sort, truncate.
//!
//! Filters apply in a fixed order (search, region, alliance) and every
//! filter narrows; there is no OR across parameters. `filtered_total` is
//! taken after filtering and before the limit, so `has_more` tells a caller
//! whether a larger limit would return more.

use std::collections::BTreeMap;

use natlas_catalog::Catalog;
use natlas_core::{assert_nation_code, Nation, QueryError};

use crate::params::{FilterValue, NationListQuery};

/// Outcome of [`list_nations`].
#[derive(Debug, Clone, PartialEq)]
pub struct NationListResult<'a> {
    /// Matching nations, sorted and truncated.
    pub items: Vec<&'a Nation>,
    /// Size of the whole catalog.
    pub total: usize,
    /// Matches before the limit was applied.
    pub filtered_total: usize,
    /// Whether the limit cut off matching nations.
    pub has_more: bool,
    /// The query that produced this result.
    pub query: NationListQuery,
}

/// Execute `query` against `catalog`.
///
/// Never fails: a query that matches nothing yields an empty `items`.
pub fn list_nations<'a>(query: &NationListQuery, catalog: &'a Catalog) -> NationListResult<'a> {
    let total = catalog.len();
    let needle = query.search.as_deref().map(str::to_lowercase);

    let mut items: Vec<&Nation> = catalog
        .iter()
        .filter(|n| needle.as_deref().map_or(true, |s| n.matches_search(s)))
        .filter(|n| query.region.map_or(true, |r| n.geography.region == r))
        .filter(|n| query.alliance.map_or(true, |a| n.is_member_of(a)))
        .collect();

    let filtered_total = items.len();

    // `sort_by` is stable, so ties keep catalog order.
    items.sort_by(|a, b| query.order.apply(query.sort.compare(a, b)));

    if let Some(limit) = query.limit {
        items.truncate(limit);
    }
    let has_more = query.limit.is_some_and(|limit| limit < filtered_total);

    tracing::debug!(
        total,
        filtered = filtered_total,
        returned = items.len(),
        has_more,
        "executed nation list query"
    );

    NationListResult {
        items,
        total,
        filtered_total,
        has_more,
        query: query.clone(),
    }
}

/// Flatten the applied filters into one map: `search`, `region`, and
/// `alliance` when set, plus every pass-through filter verbatim.
pub fn build_filter_summary(query: &NationListQuery) -> BTreeMap<String, FilterValue> {
    let mut filters = BTreeMap::new();
    if let Some(search) = &query.search {
        filters.insert("search".to_string(), FilterValue::Single(search.clone()));
    }
    if let Some(region) = query.region {
        filters.insert("region".to_string(), FilterValue::from(region.as_str()));
    }
    if let Some(alliance) = query.alliance {
        filters.insert("alliance".to_string(), FilterValue::from(alliance.as_str()));
    }
    for (key, value) in &query.additional_filters {
        filters.insert(key.clone(), value.clone());
    }
    filters
}

/// Resolve caller input to a nation.
///
/// # Errors
///
/// [`QueryError::InvalidNationCode`] when `raw_code` is not a nation code
/// after trimming and upper-casing. A well-formed code that is not in the
/// catalog is `Ok(None)`.
pub fn find_nation<'a>(
    catalog: &'a Catalog,
    raw_code: &str,
) -> Result<Option<&'a Nation>, QueryError> {
    let code = assert_nation_code(raw_code)?;
    Ok(catalog.get(code.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::parse_nation_list_query;
    use crate::sort::{compare_names, SortField, SortOrder};
    use natlas_core::{AllianceAffiliation, Region};

    fn catalog() -> Catalog {
        Catalog::builtin().expect("built-in dataset must load")
    }

    fn run<'a>(catalog: &'a Catalog, pairs: &[(&str, &str)]) -> NationListResult<'a> {
        let query = parse_nation_list_query(pairs.iter().copied()).unwrap();
        list_nations(&query, catalog)
    }

    #[test]
    fn default_query_returns_everything_by_name() {
        let catalog = catalog();
        let result = run(&catalog, &[]);
        assert_eq!(result.items.len(), catalog.len());
        assert_eq!(result.total, catalog.len());
        assert_eq!(result.filtered_total, catalog.len());
        assert!(!result.has_more);
        assert!(result
            .items
            .windows(2)
            .all(|w| compare_names(&w[0].name, &w[1].name).is_le()));
    }

    #[test]
    fn name_sort_ignores_accents() {
        let builtin = catalog();
        let renamed = |code: &str, name: &str| {
            let mut nation = builtin.get(code).unwrap().clone();
            nation.name = name.to_string();
            nation
        };
        let catalog = Catalog::from_nations(vec![
            renamed("USA", "Tuvalu"),
            renamed("CHN", "Türkiye"),
            renamed("FRA", "Cuba"),
            renamed("DEU", "Côte d'Ivoire"),
        ])
        .unwrap();

        let names: Vec<&str> = run(&catalog, &[])
            .items
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, ["Côte d'Ivoire", "Cuba", "Türkiye", "Tuvalu"]);

        let names: Vec<&str> = run(&catalog, &[("order", "desc")])
            .items
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, ["Tuvalu", "Türkiye", "Cuba", "Côte d'Ivoire"]);
    }

    #[test]
    fn search_matches_name_official_name_or_code() {
        let catalog = catalog();
        let result = run(&catalog, &[("search", "United")]);
        assert!(!result.items.is_empty());
        for nation in &result.items {
            assert!(nation.matches_search("united"), "{}", nation.code);
        }
        assert_eq!(result.total, catalog.len());
        assert_eq!(result.filtered_total, result.items.len());
    }

    #[test]
    fn region_sort_and_limit_compose() {
        let catalog = catalog();
        let result = run(
            &catalog,
            &[("region", "asia"), ("sort", "population"), ("order", "desc"), ("limit", "3")],
        );
        assert_eq!(result.items.len(), 3);
        assert!(result.items.iter().all(|n| n.geography.region == Region::Asia));
        assert!(result
            .items
            .windows(2)
            .all(|w| w[0].demographics.population >= w[1].demographics.population));
        assert!(result.filtered_total > 3);
        assert!(result.has_more);
        assert_eq!(result.query.limit, Some(3));
    }

    #[test]
    fn alliance_filter_narrows() {
        let catalog = catalog();
        let result = run(&catalog, &[("alliance", "g7")]);
        assert!(!result.items.is_empty());
        assert!(result
            .items
            .iter()
            .all(|n| n.is_member_of(AllianceAffiliation::G7)));
    }

    #[test]
    fn filters_intersect() {
        let catalog = catalog();
        let result = run(&catalog, &[("region", "europe"), ("alliance", "BRICS")]);
        let codes: Vec<&str> = result.items.iter().map(|n| n.code.as_str()).collect();
        assert_eq!(codes, ["RUS"]);
    }

    #[test]
    fn no_matches_is_success() {
        let catalog = catalog();
        let result = run(&catalog, &[("search", "Atlantis")]);
        assert!(result.items.is_empty());
        assert_eq!(result.filtered_total, 0);
        assert!(!result.has_more);

        let result = run(&catalog, &[("search", "Atlantis"), ("limit", "5")]);
        assert!(!result.has_more);
    }

    #[test]
    fn limit_at_or_above_filtered_total_has_no_more() {
        let catalog = catalog();
        let all = catalog.len().to_string();
        let result = run(&catalog, &[("limit", all.as_str())]);
        assert_eq!(result.items.len(), catalog.len());
        assert!(!result.has_more);
    }

    #[test]
    fn descending_sort_keeps_ties_in_catalog_order() {
        let catalog = catalog();
        let query = NationListQuery {
            sort: SortField::Stability,
            order: SortOrder::Desc,
            ..NationListQuery::default()
        };
        let result = list_nations(&query, &catalog);
        for pair in result.items.windows(2) {
            assert!(pair[0].stability >= pair[1].stability);
            if pair[0].stability == pair[1].stability {
                let pos = |code: &str| catalog.iter().position(|n| n.code == code).unwrap();
                assert!(pos(pair[0].code.as_str()) < pos(pair[1].code.as_str()));
            }
        }
    }

    #[test]
    fn every_sort_field_orders_its_values() {
        let catalog = catalog();
        for field in SortField::all() {
            let query = NationListQuery {
                sort: *field,
                ..NationListQuery::default()
            };
            let result = list_nations(&query, &catalog);
            assert!(
                result
                    .items
                    .windows(2)
                    .all(|w| field.compare(w[0], w[1]).is_le()),
                "{field}"
            );
        }
    }

    #[test]
    fn filter_summary_flattens_known_and_passthrough() {
        let query = parse_nation_list_query([
            ("search", "United"),
            ("region", "EUROPE"),
            ("alliance", "nato"),
            ("tag", "x"),
            ("tag", "y"),
        ])
        .unwrap();
        let summary = build_filter_summary(&query);
        assert_eq!(summary.get("search"), Some(&FilterValue::from("United")));
        assert_eq!(summary.get("region"), Some(&FilterValue::from("europe")));
        assert_eq!(summary.get("alliance"), Some(&FilterValue::from("NATO")));
        assert_eq!(
            summary.get("tag"),
            Some(&FilterValue::Many(vec!["x".into(), "y".into()]))
        );
        assert!(!summary.contains_key("sort"));
    }

    #[test]
    fn empty_query_has_empty_summary() {
        assert!(build_filter_summary(&NationListQuery::default()).is_empty());
    }

    #[test]
    fn find_nation_distinguishes_malformed_from_missing() {
        let catalog = catalog();
        assert_eq!(find_nation(&catalog, "usa").unwrap().unwrap().code, "USA");
        assert_eq!(find_nation(&catalog, " gbr ").unwrap().unwrap().code, "GBR");
        assert!(find_nation(&catalog, "ZZZ").unwrap().is_none());

        let err = find_nation(&catalog, "us").unwrap_err();
        assert!(err.to_string().contains("Invalid nation code format"));
        assert_eq!(err.status(), 400);
    }
}
