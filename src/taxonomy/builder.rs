// src/taxonomy/builder.rs

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::HashSet;

use super::gazetteer::{Gazetteer, ProvinceRecord};
use crate::models::{LocationType, NewLocation};
use crate::slug::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Explicit,
    Heuristic,
}

/// Which provinces a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvinceScope {
    All,
    Only(String),
}

impl ProvinceScope {
    pub fn from_arg(province: Option<String>) -> Self {
        match province {
            Some(slug) => ProvinceScope::Only(slugify(&slug)),
            None => ProvinceScope::All,
        }
    }
}

/// A city, town or suburb with the slug of the city it hangs under, if any.
#[derive(Debug, Clone)]
pub struct PlannedLocation {
    pub location: NewLocation,
    pub parent_slug: Option<String>,
    pub source: ClassificationSource,
}

/// Everything one seeding run will write, in dependency order.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub provinces: Vec<NewLocation>,
    pub places: Vec<PlannedLocation>,
}

impl Taxonomy {
    pub fn cities_and_towns(&self) -> impl Iterator<Item = &PlannedLocation> {
        self.places.iter().filter(|p| {
            matches!(
                p.location.location_type,
                LocationType::City | LocationType::Town
            )
        })
    }

    pub fn suburbs(&self) -> impl Iterator<Item = &PlannedLocation> {
        self.places
            .iter()
            .filter(|p| p.location.location_type == LocationType::Suburb)
    }

    pub fn count_of(&self, location_type: LocationType) -> usize {
        if location_type == LocationType::Province {
            return self.provinces.len();
        }
        self.places
            .iter()
            .filter(|p| p.location.location_type == location_type)
            .count()
    }
}

pub struct TaxonomyBuilder<'g> {
    gazetteer: &'g Gazetteer,
}

impl<'g> TaxonomyBuilder<'g> {
    pub fn new(gazetteer: &'g Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Explicit gazetteer entry first, then the substring heuristic.
    pub fn classify(
        &self,
        province: &ProvinceRecord,
        name: &str,
    ) -> (LocationType, ClassificationSource) {
        match province.entry(name) {
            Some(entry) => (entry.location_type, ClassificationSource::Explicit),
            None => (
                self.gazetteer.heuristics.classify(name),
                ClassificationSource::Heuristic,
            ),
        }
    }

    /// Slug of the CITY this suburb belongs to, looked up by name within the same province.
    /// Unmapped names, or parents that are not a CITY here, give `None`.
    pub fn resolve_parent(
        &self,
        province: &ProvinceRecord,
        name: &str,
        all_locations: &[NewLocation],
    ) -> Option<String> {
        let parent_name = province.entry(name)?.parent.as_deref()?;
        all_locations
            .iter()
            .find(|loc| {
                loc.name == parent_name
                    && loc.province_slug == province.slug
                    && loc.location_type == LocationType::City
            })
            .map(|loc| loc.slug.clone())
    }

    pub fn build(&self, scope: &ProvinceScope) -> Result<Taxonomy> {
        let provinces: Vec<&ProvinceRecord> = match scope {
            ProvinceScope::All => self.gazetteer.provinces().iter().collect(),
            ProvinceScope::Only(slug) => vec![self
                .gazetteer
                .province(slug)
                .ok_or_else(|| anyhow!("Unknown province '{}'", slug))?],
        };

        let mut taxonomy = Taxonomy::default();
        let mut all_locations: Vec<NewLocation> = Vec::new();

        for province in &provinces {
            let province_loc = NewLocation {
                name: province.name.clone(),
                slug: province.slug.clone(),
                location_type: LocationType::Province,
                province: province.name.clone(),
                province_slug: province.slug.clone(),
            };
            all_locations.push(province_loc.clone());
            taxonomy.provinces.push(province_loc);
        }

        let mut classified: Vec<(NewLocation, ClassificationSource)> = Vec::new();
        for province in &provinces {
            let mut seen = HashSet::new();
            for name in &province.places {
                let (location_type, source) = self.classify(province, name);
                let slug = slugify(name);
                if slug.is_empty() {
                    warn!(
                        "Place '{}' in {} produces an empty slug; keeping it as-is",
                        name, province.name
                    );
                }
                if !seen.insert(slug.clone()) {
                    warn!(
                        "Place '{}' in {} collides with an earlier slug '{}'",
                        name, province.name, slug
                    );
                }
                let location = NewLocation {
                    name: name.clone(),
                    slug,
                    location_type,
                    province: province.name.clone(),
                    province_slug: province.slug.clone(),
                };
                all_locations.push(location.clone());
                classified.push((location, source));
            }
        }

        for (location, source) in classified {
            let parent_slug = if location.location_type == LocationType::Suburb {
                let province = provinces
                    .iter()
                    .find(|p| p.slug == location.province_slug)
                    .copied();
                let parent = province
                    .and_then(|p| self.resolve_parent(p, &location.name, &all_locations));
                if parent.is_none() {
                    debug!("Suburb '{}' has no parent city", location.name);
                }
                parent
            } else {
                None
            };
            taxonomy.places.push(PlannedLocation {
                location,
                parent_slug,
                source,
            });
        }

        info!(
            "Taxonomy built: {} provinces, {} cities, {} towns, {} suburbs",
            taxonomy.count_of(LocationType::Province),
            taxonomy.count_of(LocationType::City),
            taxonomy.count_of(LocationType::Town),
            taxonomy.count_of(LocationType::Suburb)
        );
        Ok(taxonomy)
    }
}
