//! # Closed Taxonomies
//!
//! The enumerated vocabularies of the nation model: regions, alliances,
//! government types, economic systems, military postures, and diplomatic
//! stances. Each is a closed enum so every `match` over it is exhaustive.
//!
//! The wire value of each variant (its serde name) is also what
//! [`as_str`](Region::as_str) returns and what `FromStr` accepts. Query
//! parsing uses the case-insensitive [`parse_ignore_case`](Region::parse_ignore_case).

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Defines a string-valued enum with `all()`, `as_str()`, `parse_ignore_case()`,
/// `Display`, and exact-match `FromStr`, keeping the serde name, the display
/// string, and the accepted input in one place.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            /// All variants in declaration order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// The wire value of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            /// Match `input` against the wire values, ignoring ASCII case.
            pub fn parse_ignore_case(input: &str) -> Option<Self> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(input))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

string_enum! {
    /// Geographic region a nation belongs to.
    pub enum Region ("region") {
        NorthAmerica => "north_america",
        SouthAmerica => "south_america",
        Europe => "europe",
        Africa => "africa",
        MiddleEast => "middle_east",
        Asia => "asia",
        Oceania => "oceania",
        CentralAmerica => "central_america",
    }
}

string_enum! {
    /// International bloc or forum membership.
    pub enum AllianceAffiliation ("alliance") {
        Nato => "NATO",
        Eu => "EU",
        AfricanUnion => "African Union",
        Asean => "ASEAN",
        ArabLeague => "Arab League",
        Brics => "BRICS",
        G7 => "G7",
        G20 => "G20",
        Unaligned => "Unaligned",
    }
}

string_enum! {
    /// Form of government.
    pub enum GovernmentType ("government type") {
        Democracy => "democracy",
        Autocracy => "autocracy",
        Monarchy => "monarchy",
        Theocracy => "theocracy",
        Communist => "communist",
        MilitaryJunta => "military_junta",
        Federation => "federation",
        Republic => "republic",
        Parliamentary => "parliamentary",
        Presidential => "presidential",
    }
}

string_enum! {
    /// Organizing principle of a national economy.
    pub enum EconomicSystem ("economic system") {
        Capitalist => "capitalist",
        Socialist => "socialist",
        Mixed => "mixed",
        Command => "command",
        Traditional => "traditional",
    }
}

string_enum! {
    /// Declared strategic stance of a nation's armed forces.
    pub enum MilitaryPosture ("military posture") {
        Aggressive => "aggressive",
        Defensive => "defensive",
        Neutral => "neutral",
        Expansionist => "expansionist",
        Isolationist => "isolationist",
    }
}

string_enum! {
    /// Qualitative relationship one nation records toward another.
    pub enum DiplomaticStance ("diplomatic stance") {
        Allied => "allied",
        Friendly => "friendly",
        Neutral => "neutral",
        Unfriendly => "unfriendly",
        Hostile => "hostile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn region_has_eight_values() {
        assert_eq!(Region::all().len(), 8);
    }

    #[test]
    fn wire_values_match_serde() {
        for region in Region::all() {
            let json = serde_json::to_string(region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
        for alliance in AllianceAffiliation::all() {
            let json = serde_json::to_string(alliance).unwrap();
            assert_eq!(json, format!("\"{}\"", alliance.as_str()));
        }
    }

    #[test]
    fn parse_ignore_case_matches_wire_values() {
        assert_eq!(Region::parse_ignore_case("ASIA"), Some(Region::Asia));
        assert_eq!(
            Region::parse_ignore_case("Middle_East"),
            Some(Region::MiddleEast)
        );
        assert_eq!(
            AllianceAffiliation::parse_ignore_case("african union"),
            Some(AllianceAffiliation::AfricanUnion)
        );
        assert_eq!(
            AllianceAffiliation::parse_ignore_case("nato"),
            Some(AllianceAffiliation::Nato)
        );
        assert_eq!(Region::parse_ignore_case("atlantis"), None);
    }

    #[test]
    fn from_str_is_exact() {
        assert_eq!(Region::from_str("europe").unwrap(), Region::Europe);
        let err = Region::from_str("Europe").unwrap_err();
        assert_eq!(err.kind, "region");
        assert_eq!(err.value, "Europe");
    }

    #[test]
    fn display_uses_wire_value() {
        assert_eq!(AllianceAffiliation::ArabLeague.to_string(), "Arab League");
        assert_eq!(MilitaryPosture::Isolationist.to_string(), "isolationist");
        assert_eq!(GovernmentType::MilitaryJunta.to_string(), "military_junta");
    }

    #[test]
    fn deserialize_rejects_unknown_stance() {
        assert!(serde_json::from_str::<DiplomaticStance>("\"frenemy\"").is_err());
        assert_eq!(
            serde_json::from_str::<DiplomaticStance>("\"hostile\"").unwrap(),
            DiplomaticStance::Hostile
        );
    }
}
