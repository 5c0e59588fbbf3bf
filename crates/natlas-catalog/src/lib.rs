//! # natlas-catalog: The Nation Catalog
//!
//! Owns the set of [`Nation`](natlas_core::Nation) records every other
//! component reads from.
//!
//! - [`Catalog`]: an immutable, ordered collection with a code index.
//!   Build it once ([`Catalog::builtin`], [`Catalog::from_path`], ...) and
//!   share it by reference or behind an `Arc`.
//! - [`relations`]: neighbors, capital-to-capital distance, directional
//!   diplomatic lookups, and [`NationComparison`].
//!
//! ## Built-in Dataset
//!
//! `data/nations.json` is compiled into the crate. Catalog order is the
//! order of that file and is observable: search results and default
//! listings follow it.
//!
//! ## Crate Policy
//!
//! - Lookups never fail. A miss is `None`, an empty `Vec`, or `false`.
//! - Only the constructors return errors ([`CatalogError`]).
//! - No interior mutability; `Catalog` is `Send + Sync`.

pub mod catalog;
pub mod relations;

pub use catalog::Catalog;
pub use natlas_core::CatalogError;
pub use relations::{calculate_distance, haversine_km, NationComparison, EARTH_RADIUS_KM};
