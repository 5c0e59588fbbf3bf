//! # Built-in Dataset Integration Tests
//!
//! Checks the shape and plausibility of the compiled-in `data/nations.json`:
//! identity, ranges, reference formats, and the real-world facts the rest
//! of the stack and its tests rely on.

use std::collections::HashSet;

use natlas_catalog::Catalog;
use natlas_core::{is_nation_code, AllianceAffiliation, Nation};
use natlas_metrics::compute_nation_metrics;

/// Helper: load the built-in catalog.
fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in dataset must load")
}

fn codes_where(catalog: &Catalog, pred: impl Fn(&Nation) -> bool) -> Vec<&str> {
    catalog
        .iter()
        .filter(|n| pred(n))
        .map(|n| n.code.as_str())
        .collect()
}

// -- Identity -----------------------------------------------------------------

#[test]
fn test_at_least_twenty_nations() {
    assert!(catalog().len() >= 20);
}

#[test]
fn test_codes_are_unique_and_well_formed() {
    let catalog = catalog();
    let codes: HashSet<&str> = catalog.iter().map(|n| n.code.as_str()).collect();
    assert_eq!(codes.len(), catalog.len());
    assert!(codes.iter().all(|c| is_nation_code(c)));
}

#[test]
fn test_index_matches_records() {
    let catalog = catalog();
    for nation in &catalog {
        assert_eq!(catalog.get(nation.code.as_str()), Some(nation));
    }
    let listed: Vec<&str> = catalog.codes().iter().map(|c| c.as_str()).collect();
    let ordered: Vec<&str> = catalog.iter().map(|n| n.code.as_str()).collect();
    assert_eq!(listed, ordered);
}

#[test]
fn test_united_states_leads_the_catalog() {
    let catalog = catalog();
    let usa = &catalog.nations()[0];
    assert_eq!(usa.code, "USA");
    assert_eq!(usa.name, "United States");
}

// -- Required fields and ranges -----------------------------------------------

#[test]
fn test_base_fields_are_present() {
    for n in &catalog() {
        for (label, value) in [
            ("name", &n.name),
            ("officialName", &n.official_name),
            ("flag", &n.flag),
            ("headOfState", &n.head_of_state),
            ("headOfGovernment", &n.head_of_government),
            ("capital", &n.geography.capital),
            ("currency", &n.economy.currency),
        ] {
            assert!(!value.trim().is_empty(), "{}: {label} is blank", n.code);
        }
        assert!(!n.geography.major_cities.is_empty(), "{}", n.code);
        assert!(!n.economy.major_industries.is_empty(), "{}", n.code);
        assert!(!n.demographics.languages.is_empty(), "{}", n.code);
    }
}

#[test]
fn test_numeric_ranges_are_plausible() {
    for n in &catalog() {
        let g = &n.geography;
        assert!(g.area > 0.0, "{}", n.code);
        assert!(g.coastline >= 0.0, "{}", n.code);
        assert!((-90.0..=90.0).contains(&g.coordinates.latitude), "{}", n.code);
        assert!((-180.0..=180.0).contains(&g.coordinates.longitude), "{}", n.code);

        let e = &n.economy;
        assert!(e.gdp > 0.0, "{}", n.code);
        assert!(e.gdp_growth_rate > -50.0 && e.gdp_growth_rate < 50.0, "{}", n.code);
        assert!(e.unemployment >= 0.0 && e.unemployment < 100.0, "{}", n.code);
        assert!(e.inflation > -20.0 && e.inflation < 200.0, "{}", n.code);
        assert!(e.public_debt >= 0.0, "{}", n.code);

        let d = &n.demographics;
        assert!(d.population > 0, "{}", n.code);
        assert!(d.population_growth_rate > -10.0 && d.population_growth_rate < 10.0);
        assert!(d.median_age > 0.0 && d.median_age < 100.0, "{}", n.code);
        assert!((0.0..=100.0).contains(&d.urbanization_rate), "{}", n.code);
        assert!((0.0..=100.0).contains(&d.literacy_rate), "{}", n.code);
        assert!(d.life_expectancy > 40.0 && d.life_expectancy < 120.0, "{}", n.code);
        for share in d.ethnic_groups.iter().chain(&d.religions) {
            assert!(!share.name.is_empty(), "{}", n.code);
            assert!(share.percentage > 0.0 && share.percentage <= 100.0, "{}", n.code);
        }

        let m = &n.military;
        assert!(m.defense >= 0.0, "{}", n.code);
        assert!(
            m.defense_as_percent_gdp >= 0.0 && m.defense_as_percent_gdp < 20.0,
            "{}",
            n.code
        );

        assert!((0.0..=100.0).contains(&n.diplomacy.soft_power), "{}", n.code);
        for index in [n.stability, n.corruption, n.freedom_index] {
            assert!((0.0..=100.0).contains(&index), "{}", n.code);
        }
        assert!(n.last_updated_at().is_some(), "{}", n.code);
    }
}

#[test]
fn test_reference_codes_are_well_formed() {
    for n in &catalog() {
        for code in &n.geography.land_borders {
            assert!(is_nation_code(code.as_str()), "{} border {code}", n.code);
        }
        for relation in &n.diplomacy.relations {
            assert!(is_nation_code(relation.nation_code.as_str()));
            assert_ne!(relation.nation_code, n.code, "{} relates to itself", n.code);
        }
    }
}

// -- Real-world facts ---------------------------------------------------------

#[test]
fn test_exactly_five_permanent_security_council_members() {
    let catalog = catalog();
    let mut members = codes_where(&catalog, |n| n.diplomacy.un_security_council_member);
    members.sort_unstable();
    assert_eq!(members, ["CHN", "FRA", "GBR", "RUS", "USA"]);
}

#[test]
fn test_nuclear_states_are_realistic() {
    let catalog = catalog();
    let nuclear = codes_where(&catalog, |n| n.military.nuclear_weapons);
    assert!(!nuclear.is_empty() && nuclear.len() < 15);
    for code in ["USA", "RUS", "CHN", "GBR", "FRA"] {
        assert!(nuclear.contains(&code), "{code} should be nuclear");
    }
}

#[test]
fn test_covers_at_least_five_regions() {
    let regions: HashSet<_> = catalog().iter().map(|n| n.geography.region).collect();
    assert!(regions.len() >= 5);
}

#[test]
fn test_major_alliances_are_represented() {
    let catalog = catalog();
    for alliance in [
        AllianceAffiliation::Nato,
        AllianceAffiliation::G7,
        AllianceAffiliation::G20,
        AllianceAffiliation::Brics,
    ] {
        assert!(
            !catalog.nations_by_alliance(alliance).is_empty(),
            "no {alliance} members"
        );
    }
    assert!(catalog.nations_by_alliance(AllianceAffiliation::G7).len() <= 7);
}

#[test]
fn test_usa_borders_and_relations() {
    let catalog = catalog();
    let usa = catalog.get("USA").unwrap();
    let borders: Vec<&str> = usa.geography.land_borders.iter().map(|c| c.as_str()).collect();
    assert!(borders.contains(&"CAN") && borders.contains(&"MEX"));
    assert!(catalog.get("AUS").unwrap().geography.land_borders.is_empty());
    assert_eq!(
        catalog.diplomatic_stance("USA", "GBR").map(|s| s.as_str()),
        Some("allied")
    );
}

// -- Derived metrics over the catalog -------------------------------------------

#[test]
fn test_power_indices_are_bounded_for_every_nation() {
    for n in &catalog() {
        let m = compute_nation_metrics(n);
        for index in [
            m.economic_power_index,
            m.military_power_index,
            m.overall_power_index,
        ] {
            assert!((0.0..=100.0).contains(&index), "{}: {index}", n.code);
        }
        assert!(m.gdp_per_capita > 0.0, "{}", n.code);
    }
}

#[test]
fn test_larger_economy_scores_higher() {
    let catalog = catalog();
    let usa = compute_nation_metrics(catalog.get("USA").unwrap());
    let mex = compute_nation_metrics(catalog.get("MEX").unwrap());
    assert!(mex.economic_power_index < usa.economic_power_index);
    assert!(usa.overall_power_index > mex.overall_power_index);
}
