//! # Relations & Comparison
//!
//! Geographic and diplomatic links between catalog nations.
//!
//! Diplomatic relations are directed edges: `A → B` records how A regards
//! B, and B may record something different about A or nothing at all.
//! Lookups here never infer the reverse edge.
//!
//! Border and relation codes may name nations absent from the catalog.
//! Such references are dropped silently by [`Catalog::neighbors`] and
//! simply miss in the relation lookups.

use serde::Serialize;

use natlas_core::{Coordinates, DiplomaticRelation, DiplomaticStance, Nation};
use natlas_metrics::{compute_nation_metrics, NationMetrics};

use crate::catalog::Catalog;

/// Mean earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points (haversine).
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal points just past 1.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance in kilometres between two nations' capitals.
pub fn calculate_distance(a: &Nation, b: &Nation) -> f64 {
    haversine_km(a.geography.coordinates, b.geography.coordinates)
}

/// Side-by-side view of two nations.
///
/// The diplomatic fields describe `nation_a`'s view of `nation_b` only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationComparison<'a> {
    pub nation_a: &'a Nation,
    pub nation_b: &'a Nation,
    pub metrics_a: NationMetrics,
    pub metrics_b: NationMetrics,
    /// Capital-to-capital distance in km.
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diplomatic_stance: Option<DiplomaticStance>,
    pub trade_agreement: bool,
    pub defense_pact: bool,
}

impl Catalog {
    /// Nations sharing a land border with `nation`, in border-list order.
    /// Border codes not present in the catalog are skipped.
    pub fn neighbors(&self, nation: &Nation) -> Vec<&Nation> {
        nation
            .geography
            .land_borders
            .iter()
            .filter_map(|code| self.get(code.as_str()))
            .collect()
    }

    /// The relation `code_a` records toward `code_b`.
    ///
    /// `code_a` is resolved case-insensitively; `code_b` must match the
    /// stored code exactly.
    pub fn relation(&self, code_a: &str, code_b: &str) -> Option<&DiplomaticRelation> {
        self.get(code_a)?.relation_to(code_b)
    }

    /// How `code_a` regards `code_b`, if it records a relation at all.
    pub fn diplomatic_stance(&self, code_a: &str, code_b: &str) -> Option<DiplomaticStance> {
        self.relation(code_a, code_b).map(|r| r.stance)
    }

    /// Whether `code_a` records a trade agreement with `code_b`.
    pub fn have_trade_agreement(&self, code_a: &str, code_b: &str) -> bool {
        self.relation(code_a, code_b)
            .is_some_and(|r| r.trade_agreement)
    }

    /// Whether `code_a` records a defense pact with `code_b`.
    pub fn have_defense_pact(&self, code_a: &str, code_b: &str) -> bool {
        self.relation(code_a, code_b).is_some_and(|r| r.defense_pact)
    }

    /// Compare two nations. `None` if either code is unknown.
    ///
    /// Both codes are resolved case-insensitively, and the relation lookup
    /// uses the resolved code of the second nation.
    pub fn compare_nations(&self, code_a: &str, code_b: &str) -> Option<NationComparison<'_>> {
        let nation_a = self.get(code_a)?;
        let nation_b = self.get(code_b)?;
        let relation = nation_a.relation_to(nation_b.code.as_str());

        Some(NationComparison {
            nation_a,
            nation_b,
            metrics_a: compute_nation_metrics(nation_a),
            metrics_b: compute_nation_metrics(nation_b),
            distance: calculate_distance(nation_a, nation_b),
            diplomatic_stance: relation.map(|r| r.stance),
            trade_agreement: relation.is_some_and(|r| r.trade_agreement),
            defense_pact: relation.is_some_and(|r| r.defense_pact),
        })
    }
}
