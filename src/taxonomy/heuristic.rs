// src/taxonomy/heuristic.rs

use serde::Deserialize;

use crate::models::LocationType;

const SUBURB_PREFIXES: [&str; 2] = ["Kwa", "Ga-"];
const SUBURB_MARKERS: [&str; 2] = ["Township", "Location"];

/// Fallback membership lists for place names with no explicit gazetteer entry.
///
/// Matching is a case-sensitive substring test in both directions, so
/// "Johannesburg North" counts as the city "Johannesburg" and "Kloof" also
/// captures "Kloof Central". Lowercase "Magoebaskloof" does not match "Kloof".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeuristicTables {
    pub major_cities: Vec<String>,
    pub known_suburbs: Vec<String>,
}

fn matches_either_way(name: &str, entry: &str) -> bool {
    name.contains(entry) || entry.contains(name)
}

fn looks_like_township(name: &str) -> bool {
    SUBURB_PREFIXES.iter().any(|p| name.starts_with(p))
        || SUBURB_MARKERS.iter().any(|m| name.contains(m))
}

impl HeuristicTables {
    /// Never returns `Province`; provinces are only assigned to the top-level names.
    pub fn classify(&self, name: &str) -> LocationType {
        if self
            .major_cities
            .iter()
            .any(|city| matches_either_way(name, city))
        {
            return LocationType::City;
        }
        if self
            .known_suburbs
            .iter()
            .any(|suburb| matches_either_way(name, suburb))
        {
            return LocationType::Suburb;
        }
        if looks_like_township(name) {
            return LocationType::Suburb;
        }
        LocationType::Town
    }
}
