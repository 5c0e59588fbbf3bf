//! Sort fields and sort order for nation listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use natlas_core::Nation;

/// A field nation listings can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "population")]
    Population,
    #[serde(rename = "gdp")]
    Gdp,
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "stability")]
    Stability,
    #[serde(rename = "freedomIndex")]
    FreedomIndex,
    #[serde(rename = "softPower")]
    SoftPower,
}

impl SortField {
    /// All sortable fields.
    pub fn all() -> &'static [SortField] {
        &[
            Self::Name,
            Self::Population,
            Self::Gdp,
            Self::Area,
            Self::Stability,
            Self::FreedomIndex,
            Self::SoftPower,
        ]
    }

    /// The parameter value naming this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Population => "population",
            Self::Gdp => "gdp",
            Self::Area => "area",
            Self::Stability => "stability",
            Self::FreedomIndex => "freedomIndex",
            Self::SoftPower => "softPower",
        }
    }

    /// Match a parameter value, ignoring ASCII case.
    pub fn parse_ignore_case(input: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(input))
    }

    /// Ascending comparison of two nations on this field.
    ///
    /// Names compare ignoring case and accents; numeric fields compare by
    /// value.
    pub fn compare(&self, a: &Nation, b: &Nation) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::Population => a.demographics.population.cmp(&b.demographics.population),
            Self::Gdp => a.economy.gdp.total_cmp(&b.economy.gdp),
            Self::Area => a.geography.area.total_cmp(&b.geography.area),
            Self::Stability => a.stability.total_cmp(&b.stability),
            Self::FreedomIndex => a.freedom_index.total_cmp(&b.freedom_index),
            Self::SoftPower => a.diplomacy.soft_power.total_cmp(&b.diplomacy.soft_power),
        }
    }
}

/// Base-letter comparison of two names: `"Türkiye"` and `"turkiye"` are
/// equal, and both order before `"Tuvalu"`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a).cmp(base_letters(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Match `asc` or `desc`, ignoring case.
    pub fn parse_ignore_case(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Orient an ascending comparison. Equal stays equal, so a stable sort
    /// keeps ties in their original order in both directions.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
