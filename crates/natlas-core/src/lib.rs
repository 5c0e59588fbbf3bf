//! # natlas-core: Foundational Types
//!
//! This crate defines the nation data model and the primitives every other
//! natlas crate builds on. It depends on no other `natlas-*` crate.
//!
//! ## Key Design Principles
//!
//! 1. **Validated identifiers.** [`NationCode`] can only hold a well-formed
//!    ISO 3166-1 alpha-3 code; deserialization routes through the same check.
//!
//! 2. **Closed taxonomies.** Regions, alliances, postures, stances, economic
//!    systems, and government types are enums with a single wire value per
//!    variant, so every consumer matches exhaustively.
//!
//! 3. **Immutable records.** A [`Nation`] is plain data. Catalogs hand out
//!    shared references and never mutate.
//!
//! 4. **Two error kinds only.** [`QueryError`] for malformed caller input;
//!    everything that is merely absent is an `Option`.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod code;
pub mod error;
pub mod nation;
pub mod taxonomy;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use code::{assert_nation_code, is_nation_code, normalize_nation_code, NationCode};
pub use error::{
    CatalogError, DateParseError, NatlasError, QueryError, UnknownVariant, INVALID_QUERY_STATUS,
};
pub use nation::{
    Coordinates, Demographics, Diplomacy, DiplomaticRelation, Economy, Geography, Military, Nation,
    PopulationShare,
};
pub use taxonomy::{
    AllianceAffiliation, DiplomaticStance, EconomicSystem, GovernmentType, MilitaryPosture, Region,
};
pub use temporal::{is_iso8601, parse_iso8601};
