//! # Nation Data Model
//!
//! A [`Nation`] is one immutable catalog record, identified by its
//! [`NationCode`]. Attributes are grouped into five sub-records
//! ([`Geography`], [`Economy`], [`Demographics`], [`Military`],
//! [`Diplomacy`]) plus three 0–100 indices and a `lastUpdated` date.
//!
//! The JSON form uses camelCase field names and the wire values of the
//! taxonomy enums; it is the shape of the built-in dataset and of the
//! documents accepted by the validator.
//!
//! Range invariants (area > 0, latitude within ±90, and so on) are not
//! enforced by these types. They are checked by the validator so that a
//! bad record yields every violation at once instead of the first one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::code::NationCode;
use crate::taxonomy::{
    AllianceAffiliation, DiplomaticStance, EconomicSystem, GovernmentType, MilitaryPosture, Region,
};
use crate::temporal::parse_iso8601;

/// Latitude/longitude of a nation's capital, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Physical geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geography {
    pub region: Region,
    /// Total area in km².
    pub area: f64,
    /// Codes of nations sharing a land border. May name nations absent from
    /// the catalog.
    pub land_borders: Vec<NationCode>,
    /// Coastline length in km.
    pub coastline: f64,
    pub capital: String,
    pub major_cities: Vec<String>,
    pub coordinates: Coordinates,
}

/// Macroeconomic indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economy {
    /// Total GDP in billions of USD.
    pub gdp: f64,
    /// Annual GDP growth, percent.
    pub gdp_growth_rate: f64,
    /// Optional authored value; the metrics engine always recomputes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_per_capita: Option<f64>,
    /// Unemployment, percent.
    pub unemployment: f64,
    /// Inflation, percent.
    pub inflation: f64,
    /// Public debt, percent of GDP.
    pub public_debt: f64,
    /// Trade balance in billions of USD. Negative is a deficit.
    pub trade_balance: f64,
    pub economic_system: EconomicSystem,
    pub currency: String,
    pub major_industries: Vec<String>,
}

/// A named share of the population (ethnic group or religion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationShare {
    pub name: String,
    /// Percent of the population.
    pub percentage: f64,
}

/// Population statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub population: u64,
    /// Annual population growth, percent.
    pub population_growth_rate: f64,
    /// Median age in years.
    pub median_age: f64,
    /// Urban share of the population, percent.
    pub urbanization_rate: f64,
    /// Literate share of the population, percent.
    pub literacy_rate: f64,
    /// Life expectancy at birth in years.
    pub life_expectancy: f64,
    pub ethnic_groups: Vec<PopulationShare>,
    pub languages: Vec<String>,
    pub religions: Vec<PopulationShare>,
}

/// Armed forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Military {
    /// Active duty personnel.
    pub active_duty: u64,
    /// Reserve personnel.
    pub reserves: u64,
    /// Annual defense spending in billions of USD.
    pub defense: f64,
    #[serde(rename = "defenseAsPercentGDP")]
    pub defense_as_percent_gdp: f64,
    pub nuclear_weapons: bool,
    pub military_posture: MilitaryPosture,
    pub major_weapon_systems: Vec<String>,
}

/// One directed edge of the diplomatic graph: how the owning nation regards
/// `nation_code`. The target nation need not record a reciprocal edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiplomaticRelation {
    pub nation_code: NationCode,
    pub stance: DiplomaticStance,
    pub trade_agreement: bool,
    pub defense_pact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Foreign relations and international standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diplomacy {
    pub alliances: Vec<AllianceAffiliation>,
    pub relations: Vec<DiplomaticRelation>,
    /// Soft power index, 0–100.
    pub soft_power: f64,
    pub diplomatic_missions: u32,
    pub un_security_council_member: bool,
}

/// A complete nation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nation {
    pub code: NationCode,
    pub name: String,
    pub official_name: String,
    /// Emoji flag or flag image URL.
    pub flag: String,
    pub government_type: GovernmentType,
    pub head_of_state: String,
    pub head_of_government: String,
    /// Year of founding or independence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<i32>,
    pub geography: Geography,
    pub economy: Economy,
    pub demographics: Demographics,
    pub military: Military,
    pub diplomacy: Diplomacy,
    /// Political stability index, 0–100.
    pub stability: f64,
    /// Corruption perception, 0–100 (higher is less corrupt).
    pub corruption: f64,
    /// Freedom index, 0–100 (higher is more free).
    pub freedom_index: f64,
    /// ISO-8601 date of the last data revision.
    pub last_updated: String,
}

impl Nation {
    /// Parsed `last_updated`, or `None` if the stored string is not ISO-8601.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_iso8601(&self.last_updated).ok()
    }

    /// The recorded relation toward `code`, if any. Exact, case-sensitive
    /// match on the target code.
    pub fn relation_to(&self, code: &str) -> Option<&DiplomaticRelation> {
        self.diplomacy
            .relations
            .iter()
            .find(|r| r.nation_code.as_str() == code)
    }

    /// Whether this nation belongs to `alliance`.
    pub fn is_member_of(&self, alliance: AllianceAffiliation) -> bool {
        self.diplomacy.alliances.contains(&alliance)
    }

    /// Whether `needle` (already lower-cased) occurs in the name, official
    /// name, or code, ignoring case.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        [
            self.name.as_str(),
            self.official_name.as_str(),
            self.code.as_str(),
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle_lower))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A small, fully valid nation used by unit tests across this crate.

    use super::*;

    pub fn sample_nation() -> Nation {
        serde_json::from_value(serde_json::json!({
            "code": "TST",
            "name": "Testland",
            "officialName": "Republic of Testland",
            "flag": "🏳",
            "governmentType": "republic",
            "headOfState": "President Example",
            "headOfGovernment": "Prime Minister Example",
            "founded": 1901,
            "geography": {
                "region": "europe",
                "area": 120000.0,
                "landBorders": ["AAA", "BBB"],
                "coastline": 450.0,
                "capital": "Testville",
                "majorCities": ["Testville", "Sampleton"],
                "coordinates": { "latitude": 48.5, "longitude": 11.25 }
            },
            "economy": {
                "gdp": 500.0,
                "gdpGrowthRate": 2.1,
                "unemployment": 5.5,
                "inflation": 2.9,
                "publicDebt": 60.0,
                "tradeBalance": 12.0,
                "economicSystem": "mixed",
                "currency": "TSD",
                "majorIndustries": ["machinery", "tourism"]
            },
            "demographics": {
                "population": 10000000u64,
                "populationGrowthRate": 0.3,
                "medianAge": 41.0,
                "urbanizationRate": 72.0,
                "literacyRate": 99.0,
                "lifeExpectancy": 81.0,
                "ethnicGroups": [{ "name": "Testish", "percentage": 90.0 }],
                "languages": ["Testish"],
                "religions": [{ "name": "None", "percentage": 55.0 }]
            },
            "military": {
                "activeDuty": 30000u64,
                "reserves": 20000u64,
                "defense": 10.0,
                "defenseAsPercentGDP": 2.0,
                "nuclearWeapons": false,
                "militaryPosture": "defensive",
                "majorWeaponSystems": ["patrol boats"]
            },
            "diplomacy": {
                "alliances": ["EU", "NATO"],
                "relations": [
                    { "nationCode": "AAA", "stance": "allied", "tradeAgreement": true, "defensePact": true }
                ],
                "softPower": 40.0,
                "diplomaticMissions": 90,
                "unSecurityCouncilMember": false
            },
            "stability": 80.0,
            "corruption": 75.0,
            "freedomIndex": 90.0,
            "lastUpdated": "2024-01-15"
        }))
        .expect("fixture nation must deserialize")
    }
}
