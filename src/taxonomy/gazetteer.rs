// src/taxonomy/gazetteer.rs

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

use super::heuristic::HeuristicTables;
use crate::models::{CityInfo, LocationType, ProvinceInfo};
use crate::slug::slugify;

const SOUTH_AFRICA_JSON: &str = include_str!("../../data/south_africa.json");

static EMBEDDED: OnceCell<Gazetteer> = OnceCell::new();

/// Canonical classification for one place name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceEntry {
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Display name of the parent city, for suburbs.
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceRecord {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Place names seeded for this province, in source order.
    pub places: Vec<String>,
    #[serde(default)]
    pub entries: BTreeMap<String, PlaceEntry>,
    /// Landing-page cities.
    #[serde(default)]
    pub cities: Vec<CityInfo>,
}

impl ProvinceRecord {
    pub fn entry(&self, name: &str) -> Option<&PlaceEntry> {
        self.entries.get(name)
    }

    pub fn city(&self, city_slug: &str) -> Option<&CityInfo> {
        self.cities.iter().find(|c| c.slug == city_slug)
    }

    pub fn to_info(&self) -> ProvinceInfo {
        ProvinceInfo {
            slug: self.slug.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            cities: self.cities.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGazetteer {
    version: u32,
    heuristics: HeuristicTables,
    provinces: Vec<ProvinceRecord>,
}

/// A place whose explicit entry disagrees with what the heuristic would have said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub province_slug: String,
    pub name: String,
    pub explicit: LocationType,
    pub heuristic: LocationType,
}

/// South African places keyed by province, loaded from one JSON resource.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    pub version: u32,
    pub heuristics: HeuristicTables,
    provinces: Vec<ProvinceRecord>,
}

impl Gazetteer {
    /// The copy compiled into the binary, parsed once per process.
    pub fn embedded() -> Result<&'static Gazetteer> {
        EMBEDDED.get_or_try_init(|| {
            Gazetteer::from_json(SOUTH_AFRICA_JSON).context("Embedded gazetteer is invalid")
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawGazetteer =
            serde_json::from_str(json).context("Failed to parse gazetteer JSON")?;
        let mut provinces = raw.provinces;

        let mut seen = HashSet::new();
        for province in provinces.iter_mut() {
            let expected = slugify(&province.name);
            if province.slug != expected {
                bail!(
                    "Province '{}' has slug '{}', expected '{}'",
                    province.name,
                    province.slug,
                    expected
                );
            }
            if !seen.insert(province.slug.clone()) {
                bail!("Province '{}' is listed twice", province.name);
            }
            for city in province.cities.iter_mut() {
                city.province = province.name.clone();
            }
            for (name, entry) in &province.entries {
                if entry.location_type == LocationType::Province {
                    bail!("Entry '{}' in {} cannot be a PROVINCE", name, province.name);
                }
                if let Some(parent) = &entry.parent {
                    if !province.places.iter().any(|p| p == parent) {
                        warn!(
                            "Parent '{}' of '{}' is not a place in {}; it will stay unlinked",
                            parent, name, province.name
                        );
                    }
                }
            }
            debug!(
                "Gazetteer province {}: {} places, {} explicit entries, {} landing cities",
                province.name,
                province.places.len(),
                province.entries.len(),
                province.cities.len()
            );
        }

        Ok(Self {
            version: raw.version,
            heuristics: raw.heuristics,
            provinces,
        })
    }

    pub fn provinces(&self) -> &[ProvinceRecord] {
        &self.provinces
    }

    pub fn province(&self, province_slug: &str) -> Option<&ProvinceRecord> {
        self.provinces.iter().find(|p| p.slug == province_slug)
    }

    pub fn city(&self, province_slug: &str, city_slug: &str) -> Option<&CityInfo> {
        self.province(province_slug)?.city(city_slug)
    }

    pub fn province_infos(&self) -> Vec<ProvinceInfo> {
        self.provinces.iter().map(ProvinceRecord::to_info).collect()
    }

    /// Population of a landing city, when the gazetteer knows it.
    pub fn population_of(&self, province_slug: &str, slug: &str) -> Option<u64> {
        self.city(province_slug, slug)?.population
    }

    /// Explicit entries that the heuristic would classify differently.
    /// These mark where the old per-script tables disagreed.
    pub fn divergences(&self) -> Vec<Divergence> {
        let mut out = Vec::new();
        for province in &self.provinces {
            for (name, entry) in &province.entries {
                let heuristic = self.heuristics.classify(name);
                if heuristic != entry.location_type {
                    out.push(Divergence {
                        province_slug: province.slug.clone(),
                        name: name.clone(),
                        explicit: entry.location_type,
                        heuristic,
                    });
                }
            }
        }
        out
    }

    /// Reports every divergence. Explicit entries are used; the list is for a domain owner to settle.
    pub fn log_divergences(&self) {
        let divergences = self.divergences();
        if divergences.is_empty() {
            return;
        }
        warn!(
            "{} gazetteer entries disagree with the name heuristic; using the explicit classification",
            divergences.len()
        );
        for d in &divergences {
            warn!(
                "  {} ({}): {} (heuristic: {})",
                d.name, d.province_slug, d.explicit, d.heuristic
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_gazetteer_loads() {
        let g = Gazetteer::embedded().unwrap();
        assert_eq!(g.provinces().len(), 9);
        assert!(g.province("gauteng").is_some());
        assert!(g.province("kwazulu-natal").is_some());
        assert!(!g.heuristics.major_cities.is_empty());
    }

    #[test]
    fn test_place_slugs_are_unique_and_non_empty_per_province() {
        let g = Gazetteer::embedded().unwrap();
        for province in g.provinces() {
            let mut seen = HashSet::new();
            for place in &province.places {
                let slug = slugify(place);
                assert!(!slug.is_empty(), "empty slug for {}", place);
                assert!(seen.insert(slug.clone()), "duplicate slug {} in {}", slug, province.name);
            }
        }
    }

    #[test]
    fn test_landing_cities_carry_province_name() {
        let g = Gazetteer::embedded().unwrap();
        let jhb = g.city("gauteng", "johannesburg").unwrap();
        assert_eq!(jhb.province, "Gauteng");
        assert!(g.population_of("gauteng", "johannesburg").unwrap() > 1_000_000);
        assert!(g.city("gauteng", "cape-town").is_none());
    }

    #[test]
    fn test_springs_divergence_is_reported() {
        let g = Gazetteer::embedded().unwrap();
        let springs = g
            .divergences()
            .into_iter()
            .find(|d| d.province_slug == "gauteng" && d.name == "Springs")
            .unwrap();
        assert_eq!(springs.explicit, LocationType::Suburb);
        assert_eq!(springs.heuristic, LocationType::Town);
    }

    #[test]
    fn test_rejects_mismatched_province_slug() {
        let json = r#"{"version":1,"heuristics":{"major_cities":[],"known_suburbs":[]},
            "provinces":[{"name":"Free State","slug":"freestate","places":[]}]}"#;
        assert!(Gazetteer::from_json(json).is_err());
    }
}
