//! # Catalog
//!
//! An immutable, ordered set of nation records with a code index.
//!
//! Order is preserved from the source (the built-in dataset or the loaded
//! file). Every helper that returns several nations returns them in
//! catalog order unless it explicitly ranks them.

use std::collections::HashMap;
use std::path::Path;

use natlas_core::{
    normalize_nation_code, AllianceAffiliation, CatalogError, Nation, NationCode, Region,
};

/// The dataset compiled into the crate.
const BUILTIN_DATASET: &str = include_str!("../data/nations.json");

/// An immutable collection of nations, indexed by code.
#[derive(Debug, Clone)]
pub struct Catalog {
    nations: Vec<Nation>,
    index: HashMap<NationCode, usize>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Catalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCode`] if two records share a code.
    pub fn from_nations(nations: Vec<Nation>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(nations.len());
        for (position, nation) in nations.iter().enumerate() {
            if index.insert(nation.code.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCode(nation.code.to_string()));
            }
        }
        tracing::debug!(nations = nations.len(), "nation catalog built");
        Ok(Self { nations, index })
    }

    /// Decode a JSON array of nation records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] for malformed JSON, including
    /// malformed nation codes and unknown taxonomy values, and
    /// [`CatalogError::DuplicateCode`] for repeated codes.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let nations: Vec<Nation> = serde_json::from_str(json)?;
        Self::from_nations(nations)
    }

    /// Read and decode a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read, otherwise
    /// the errors of [`Catalog::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            nations = catalog.len(),
            "loaded nation catalog from file"
        );
        Ok(catalog)
    }

    /// The built-in dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded dataset is corrupt, which the crate's
    /// tests rule out.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_DATASET)
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

impl Catalog {
    /// All nations in catalog order.
    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    /// Iterate nations in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Nation> {
        self.nations.iter()
    }

    /// All codes in catalog order.
    pub fn codes(&self) -> Vec<&NationCode> {
        self.nations.iter().map(|n| &n.code).collect()
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }

    /// Look up a nation by code, ignoring case and surrounding whitespace.
    ///
    /// Input that cannot be a nation code simply misses.
    pub fn get(&self, code: &str) -> Option<&Nation> {
        let code = NationCode::new(normalize_nation_code(code)).ok()?;
        self.index.get(&code).map(|&position| &self.nations[position])
    }

    /// Whether `code` (any case) names a nation in this catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Nation;
    type IntoIter = std::slice::Iter<'a, Nation>;

    fn into_iter(self) -> Self::IntoIter {
        self.nations.iter()
    }
}

// ---------------------------------------------------------------------------
// Grouping, ranking, and search
// ---------------------------------------------------------------------------

impl Catalog {
    pub fn nations_by_region(&self, region: Region) -> Vec<&Nation> {
        self.iter()
            .filter(|n| n.geography.region == region)
            .collect()
    }

    pub fn nations_by_alliance(&self, alliance: AllianceAffiliation) -> Vec<&Nation> {
        self.iter().filter(|n| n.is_member_of(alliance)).collect()
    }

    pub fn nuclear_nations(&self) -> Vec<&Nation> {
        self.iter().filter(|n| n.military.nuclear_weapons).collect()
    }

    /// The `count` largest economies, GDP descending. Ties keep catalog order.
    pub fn top_by_gdp(&self, count: usize) -> Vec<&Nation> {
        self.top_by(count, |n| n.economy.gdp)
    }

    /// The `count` most populous nations, descending.
    pub fn top_by_population(&self, count: usize) -> Vec<&Nation> {
        self.top_by(count, |n| n.demographics.population as f64)
    }

    /// The `count` largest defense budgets, descending.
    pub fn top_by_defense_spending(&self, count: usize) -> Vec<&Nation> {
        self.top_by(count, |n| n.military.defense)
    }

    fn top_by(&self, count: usize, key: impl Fn(&Nation) -> f64) -> Vec<&Nation> {
        let mut ranked: Vec<&Nation> = self.iter().collect();
        ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
        ranked.truncate(count);
        ranked
    }

    /// Case-insensitive substring match on name, official name, or code,
    /// in catalog order. An empty query matches every nation.
    pub fn search_by_name(&self, query: &str) -> Vec<&Nation> {
        let needle = query.to_lowercase();
        self.iter().filter(|n| n.matches_search(&needle)).collect()
    }
}
