//! # Nation Document Rules
//!
//! Walks the JSON form of a nation and records every rule violation.
//!
//! ## Walk Order
//!
//! 1. Identity: `code`, `name`, `officialName`.
//! 2. Sub-records: `geography`, `economy`, `demographics`, `military`,
//!    `diplomacy`. A missing (or non-object) sub-record yields one
//!    "<X> data is required" error and its nested checks are skipped.
//! 3. Indices: `stability`, `corruption`, `freedomIndex`.
//! 4. `lastUpdated`.
//!
//! A numeric field that is absent is not checked. One that is present but
//! not a number is reported as "<Label> must be a number". Enum-valued
//! fields are checked against the wire values of their taxonomy when
//! present.

use serde_json::{Map, Value};

use natlas_core::{
    is_iso8601, is_nation_code, AllianceAffiliation, DiplomaticStance, EconomicSystem,
    MilitaryPosture, Nation, Region,
};

use crate::result::{ValidationError, ValidationResult};

/// Validate a typed nation.
///
/// The nation is serialized to its document form and checked by
/// [`validate_nation_document`]. Non-finite floats serialize as `null` and
/// are reported as non-numbers.
pub fn validate_nation(nation: &Nation) -> ValidationResult {
    match serde_json::to_value(nation) {
        Ok(doc) => validate_nation_document(&doc),
        Err(err) => {
            tracing::warn!(code = %nation.code, error = %err, "nation could not be serialized");
            ValidationResult::from_errors(vec![ValidationError::new(
                "$",
                format!("Nation could not be serialized: {err}"),
            )])
        }
    }
}

/// Validate an untyped nation document.
pub fn validate_nation_document(doc: &Value) -> ValidationResult {
    let mut walk = Walk::default();
    match doc.as_object() {
        Some(root) => walk.nation(root),
        None => walk.fail("$", "Nation document must be a JSON object", Some(doc)),
    }

    let result = ValidationResult::from_errors(walk.errors);
    if !result.valid {
        tracing::debug!(
            code = doc.get("code").and_then(serde_json::Value::as_str).unwrap_or("?"),
            errors = result.errors.len(),
            "nation document failed validation"
        );
    }
    result
}

// ---------------------------------------------------------------------------
// Numeric bounds
// ---------------------------------------------------------------------------

/// Accepted range of a numeric field. Each bound renders its own message.
#[derive(Debug, Clone, Copy)]
enum Bound {
    /// `> 0`
    Positive,
    /// `>= 0`
    NonNegative,
    /// `lo <= v <= hi`
    Between(f64, f64),
    /// `0 < v <= hi`
    AboveZeroUpTo(f64),
}

impl Bound {
    fn admits(self, v: f64) -> bool {
        match self {
            Self::Positive => v > 0.0,
            Self::NonNegative => v >= 0.0,
            Self::Between(lo, hi) => (lo..=hi).contains(&v),
            Self::AboveZeroUpTo(hi) => v > 0.0 && v <= hi,
        }
    }

    fn message(self, label: &str) -> String {
        match self {
            Self::Positive => format!("{label} must be greater than 0"),
            Self::NonNegative => format!("{label} cannot be negative"),
            Self::Between(lo, hi) => format!("{label} must be between {lo} and {hi}"),
            Self::AboveZeroUpTo(hi) => format!("{label} must be between 0 and {hi}"),
        }
    }
}

const PERCENT: Bound = Bound::Between(0.0, 100.0);

const GEOGRAPHY_NUMBERS: &[(&str, &str, Bound)] = &[
    ("area", "Area", Bound::Positive),
    ("coastline", "Coastline", Bound::NonNegative),
];

const COORDINATE_NUMBERS: &[(&str, &str, Bound)] = &[
    ("latitude", "Latitude", Bound::Between(-90.0, 90.0)),
    ("longitude", "Longitude", Bound::Between(-180.0, 180.0)),
];

const ECONOMY_NUMBERS: &[(&str, &str, Bound)] = &[
    ("gdp", "GDP", Bound::Positive),
    ("gdpGrowthRate", "GDP growth rate", Bound::Between(-50.0, 50.0)),
    ("unemployment", "Unemployment", PERCENT),
    ("publicDebt", "Public debt", Bound::NonNegative),
];

const DEMOGRAPHICS_NUMBERS: &[(&str, &str, Bound)] = &[
    ("population", "Population", Bound::Positive),
    ("medianAge", "Median age", Bound::AboveZeroUpTo(100.0)),
    ("urbanizationRate", "Urbanization rate", PERCENT),
    ("literacyRate", "Literacy rate", PERCENT),
    ("lifeExpectancy", "Life expectancy", Bound::Between(40.0, 120.0)),
];

const MILITARY_NUMBERS: &[(&str, &str, Bound)] = &[
    ("activeDuty", "Active duty personnel", Bound::NonNegative),
    ("reserves", "Reserve personnel", Bound::NonNegative),
    ("defense", "Defense spending", Bound::NonNegative),
    ("defenseAsPercentGDP", "Defense as percent GDP", Bound::Between(0.0, 20.0)),
];

const DIPLOMACY_NUMBERS: &[(&str, &str, Bound)] = &[
    ("softPower", "Soft power", PERCENT),
    ("diplomaticMissions", "Diplomatic missions", Bound::NonNegative),
];

const INDEX_NUMBERS: &[(&str, &str, Bound)] = &[
    ("stability", "Stability", PERCENT),
    ("corruption", "Corruption", PERCENT),
    ("freedomIndex", "Freedom index", PERCENT),
];

const CODE_MESSAGE: &str = "Code must be a 3-letter uppercase ISO code";
const RELATION_CODE_MESSAGE: &str = "Relation nation code must be a 3-letter uppercase ISO code";
const INVALID_DATE_MESSAGE: &str = "Last updated must be a valid ISO date string";

fn wire_values<T>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// An object being checked and the path that leads to it.
struct Scope<'v> {
    obj: &'v Map<String, Value>,
    prefix: String,
}

impl<'v> Scope<'v> {
    fn root(obj: &'v Map<String, Value>) -> Self {
        Self {
            obj,
            prefix: String::new(),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.prefix)
        }
    }

    fn get(&self, key: &str) -> Option<&'v Value> {
        self.obj.get(key)
    }
}

fn is_filled_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

#[derive(Default)]
struct Walk {
    errors: Vec<ValidationError>,
}

impl Walk {
    fn fail(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<&Value>,
    ) {
        self.errors.push(ValidationError::new(field, message).with_value(value));
    }

    /// Enter a nested object, or report it as required.
    fn section<'v>(&mut self, scope: &Scope<'v>, key: &str, label: &str) -> Option<Scope<'v>> {
        match scope.get(key).and_then(Value::as_object) {
            Some(obj) => Some(Scope {
                obj,
                prefix: scope.path(key),
            }),
            None => {
                self.fail(scope.path(key), format!("{label} data is required"), None);
                None
            }
        }
    }

    fn numbers(&mut self, scope: &Scope<'_>, table: &[(&str, &str, Bound)]) {
        for &(key, label, bound) in table {
            self.number(scope, key, label, bound);
        }
    }

    fn number(&mut self, scope: &Scope<'_>, key: &str, label: &str, bound: Bound) {
        let Some(value) = scope.get(key) else {
            return;
        };
        match value.as_f64() {
            Some(v) if bound.admits(v) => {}
            Some(_) => self.fail(scope.path(key), bound.message(label), Some(value)),
            None => self.fail(
                scope.path(key),
                format!("{label} must be a number"),
                Some(value),
            ),
        }
    }

    fn text(&mut self, scope: &Scope<'_>, key: &str, message: &str) {
        let value = scope.get(key);
        if !is_filled_text(value) {
            self.fail(scope.path(key), message, value);
        }
    }

    fn boolean(&mut self, scope: &Scope<'_>, key: &str, message: &str) {
        let value = scope.get(key);
        if !value.is_some_and(Value::is_boolean) {
            self.fail(scope.path(key), message, value);
        }
    }

    fn code(&mut self, scope: &Scope<'_>, key: &str, message: &str) {
        let value = scope.get(key);
        if !value.and_then(Value::as_str).is_some_and(is_nation_code) {
            self.fail(scope.path(key), message, value);
        }
    }

    fn array<'v>(
        &mut self,
        scope: &Scope<'v>,
        key: &str,
        message: &str,
    ) -> Option<&'v [Value]> {
        let value = scope.get(key);
        match value.and_then(Value::as_array) {
            Some(items) => Some(items.as_slice()),
            None => {
                self.fail(scope.path(key), message, value);
                None
            }
        }
    }

    fn non_empty_array(&mut self, scope: &Scope<'_>, key: &str, message: &str) {
        let value = scope.get(key);
        if !value.and_then(Value::as_array).is_some_and(|a| !a.is_empty()) {
            self.fail(scope.path(key), message, value);
        }
    }

    /// Check an enum-valued field, if present.
    fn one_of(&mut self, field: String, value: Option<&Value>, label: &str, allowed: &[&str]) {
        let Some(value) = value else {
            return;
        };
        if !value.as_str().is_some_and(|s| allowed.contains(&s)) {
            self.fail(
                field,
                format!("{label} must be one of: {}", allowed.join(", ")),
                Some(value),
            );
        }
    }

    // -- Record sections ----------------------------------------------------

    fn nation(&mut self, root: &Map<String, Value>) {
        let scope = Scope::root(root);

        self.code(&scope, "code", CODE_MESSAGE);
        self.text(&scope, "name", "Name is required");
        self.text(&scope, "officialName", "Official name is required");

        if let Some(geography) = self.section(&scope, "geography", "Geography") {
            self.geography(&geography);
        }
        if let Some(economy) = self.section(&scope, "economy", "Economy") {
            self.economy(&economy);
        }
        if let Some(demographics) = self.section(&scope, "demographics", "Demographics") {
            self.demographics(&demographics);
        }
        if let Some(military) = self.section(&scope, "military", "Military") {
            self.military(&military);
        }
        if let Some(diplomacy) = self.section(&scope, "diplomacy", "Diplomacy") {
            self.diplomacy(&diplomacy);
        }

        self.numbers(&scope, INDEX_NUMBERS);
        self.last_updated(&scope);
    }

    fn geography(&mut self, scope: &Scope<'_>) {
        self.one_of(
            scope.path("region"),
            scope.get("region"),
            "Region",
            &wire_values(Region::all(), Region::as_str),
        );
        self.numbers(scope, GEOGRAPHY_NUMBERS);
        if let Some(coordinates) = self.section(scope, "coordinates", "Coordinates") {
            self.numbers(&coordinates, COORDINATE_NUMBERS);
        }
        self.text(scope, "capital", "Capital is required");
        self.non_empty_array(scope, "majorCities", "At least one major city is required");
        self.array(scope, "landBorders", "Land borders must be an array");
    }

    fn economy(&mut self, scope: &Scope<'_>) {
        self.numbers(scope, ECONOMY_NUMBERS);
        self.text(scope, "currency", "Currency is required");
        self.non_empty_array(
            scope,
            "majorIndustries",
            "At least one major industry is required",
        );
        self.one_of(
            scope.path("economicSystem"),
            scope.get("economicSystem"),
            "Economic system",
            &wire_values(EconomicSystem::all(), EconomicSystem::as_str),
        );
    }

    fn demographics(&mut self, scope: &Scope<'_>) {
        self.numbers(scope, DEMOGRAPHICS_NUMBERS);
        self.non_empty_array(scope, "languages", "At least one language is required");
        self.shares(scope, "ethnicGroups", "Ethnic group", "Ethnic groups");
        self.shares(scope, "religions", "Religion", "Religions");
    }

    /// Named population shares. The list itself is optional.
    fn shares(&mut self, scope: &Scope<'_>, key: &str, singular: &str, plural: &str) {
        let Some(value) = scope.get(key) else {
            return;
        };
        let Some(items) = value.as_array() else {
            self.fail(scope.path(key), format!("{plural} must be an array"), Some(value));
            return;
        };

        for (index, item) in items.iter().enumerate() {
            let prefix = format!("{}[{index}]", scope.path(key));
            let Some(obj) = item.as_object() else {
                self.fail(prefix, format!("{singular} entry must be an object"), Some(item));
                continue;
            };
            let entry = Scope { obj, prefix };
            if !is_filled_text(entry.get("name")) {
                self.fail(entry.path("name"), format!("{singular} name is required"), None);
            }
            self.number(
                &entry,
                "percentage",
                &format!("{singular} percentage"),
                Bound::AboveZeroUpTo(100.0),
            );
        }
    }

    fn military(&mut self, scope: &Scope<'_>) {
        self.numbers(scope, MILITARY_NUMBERS);
        self.boolean(scope, "nuclearWeapons", "Nuclear weapons must be a boolean");
        self.one_of(
            scope.path("militaryPosture"),
            scope.get("militaryPosture"),
            "Military posture",
            &wire_values(MilitaryPosture::all(), MilitaryPosture::as_str),
        );
    }

    fn diplomacy(&mut self, scope: &Scope<'_>) {
        if let Some(alliances) = self.array(scope, "alliances", "Alliances must be an array") {
            let allowed = wire_values(AllianceAffiliation::all(), AllianceAffiliation::as_str);
            for (index, alliance) in alliances.iter().enumerate() {
                self.one_of(
                    format!("{}[{index}]", scope.path("alliances")),
                    Some(alliance),
                    "Alliance",
                    &allowed,
                );
            }
        }

        if let Some(relations) = self.array(scope, "relations", "Relations must be an array") {
            let stances = wire_values(DiplomaticStance::all(), DiplomaticStance::as_str);
            for (index, relation) in relations.iter().enumerate() {
                let prefix = format!("{}[{index}]", scope.path("relations"));
                let Some(obj) = relation.as_object() else {
                    self.fail(prefix, "Relation entry must be an object", Some(relation));
                    continue;
                };
                let entry = Scope { obj, prefix };
                self.code(&entry, "nationCode", RELATION_CODE_MESSAGE);
                self.boolean(&entry, "tradeAgreement", "Trade agreement must be a boolean");
                self.boolean(&entry, "defensePact", "Defense pact must be a boolean");
                self.one_of(entry.path("stance"), entry.get("stance"), "Stance", &stances);
            }
        }

        self.numbers(scope, DIPLOMACY_NUMBERS);
        self.boolean(
            scope,
            "unSecurityCouncilMember",
            "UN Security Council member must be a boolean",
        );
    }

    fn last_updated(&mut self, scope: &Scope<'_>) {
        let field = scope.path("lastUpdated");
        match scope.get("lastUpdated") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                self.fail(field, "Last updated date is required", None);
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.fail(field, "Last updated date is required", None);
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                self.fail(field, "Last updated date is required", None);
            }
            Some(Value::String(s)) if is_iso8601(s) => {}
            Some(other) => self.fail(field, INVALID_DATE_MESSAGE, Some(other)),
        }
    }
}
