// src/taxonomy/mod.rs
//! Location taxonomy: the embedded gazetteer, the substring heuristic used for names
//! it does not list, and the builder that turns both into seedable records.

pub mod builder;
pub mod gazetteer;
pub mod heuristic;

pub use builder::{
    ClassificationSource, PlannedLocation, ProvinceScope, Taxonomy, TaxonomyBuilder,
};
pub use gazetteer::{Divergence, Gazetteer, PlaceEntry, ProvinceRecord};
pub use heuristic::HeuristicTables;
