// src/seeder/locations.rs
//! Three ordered passes: provinces, then cities and towns, then suburbs.
//! Suburb parents are resolved against ids collected in the earlier passes.

use anyhow::Result;
use indicatif::ProgressBar;
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

use super::logging::{SeedLogger, SeedTarget};
use super::store::SeoStore;
use super::SeedStats;
use crate::models::NewLocation;
use crate::taxonomy::Taxonomy;
use crate::utils::constants::SEED_PROGRESS_INTERVAL;
use crate::utils::progress_config::ProgressConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSeedReport {
    pub provinces: SeedStats,
    pub cities_and_towns: SeedStats,
    pub suburbs: SeedStats,
    pub suburbs_with_parent: usize,
    pub orphaned_suburbs: usize,
}

impl LocationSeedReport {
    pub fn total(&self) -> SeedStats {
        let mut total = SeedStats::default();
        total.merge(&self.provinces);
        total.merge(&self.cities_and_towns);
        total.merge(&self.suburbs);
        total
    }
}

enum Outcome {
    Created(Uuid),
    Updated(Uuid),
    Unchanged(Uuid),
}

impl Outcome {
    fn id(&self) -> Uuid {
        match self {
            Outcome::Created(id) | Outcome::Updated(id) | Outcome::Unchanged(id) => *id,
        }
    }
}

fn id_key(province_slug: &str, slug: &str) -> String {
    format!("{}:{}", province_slug, slug)
}

/// Looks the row up by `(slug, province_slug)`; inserts when absent, refreshes when it differs.
/// An unresolved parent (`None`) leaves the stored parent link untouched.
async fn upsert_location(
    store: &dyn SeoStore,
    location: &NewLocation,
    parent_id: Option<Uuid>,
) -> Result<Outcome> {
    match store.find_location(&location.slug, &location.province_slug).await? {
        Some(existing) => {
            let unchanged = existing.name == location.name
                && existing.location_type == location.location_type
                && existing.province == location.province
                && (parent_id.is_none() || existing.parent_location_id == parent_id);
            if unchanged {
                Ok(Outcome::Unchanged(existing.id))
            } else {
                store.update_location(existing.id, location, parent_id).await?;
                Ok(Outcome::Updated(existing.id))
            }
        }
        None => Ok(Outcome::Created(store.insert_location(location, parent_id).await?)),
    }
}

struct PassContext<'a> {
    store: &'a dyn SeoStore,
    logger: &'a SeedLogger,
    bar: Option<&'a ProgressBar>,
    ids: HashMap<String, Uuid>,
    processed: usize,
    total: usize,
}

impl PassContext<'_> {
    async fn seed_one(&mut self, location: &NewLocation, parent_id: Option<Uuid>, stats: &mut SeedStats) {
        match upsert_location(self.store, location, parent_id).await {
            Ok(outcome) => {
                self.ids
                    .insert(id_key(&location.province_slug, &location.slug), outcome.id());
                match outcome {
                    Outcome::Created(_) => stats.created += 1,
                    Outcome::Updated(_) => stats.updated += 1,
                    Outcome::Unchanged(_) => stats.skipped += 1,
                }
            }
            Err(e) => {
                self.logger.log_record_error(&location.name, &e);
                stats.errored += 1;
            }
        }

        self.processed += 1;
        if let Some(pb) = self.bar {
            pb.inc(1);
        }
        if self.processed % SEED_PROGRESS_INTERVAL == 0 {
            self.logger.log_progress(self.processed, self.total);
        }
    }
}

/// Writes the taxonomy to `store`. Per-record failures are logged and counted; the run continues.
pub async fn seed_locations(
    store: &dyn SeoStore,
    taxonomy: &Taxonomy,
    progress: &ProgressConfig,
    dry_run: bool,
) -> LocationSeedReport {
    let logger = SeedLogger::new(SeedTarget::Locations);
    let total = taxonomy.provinces.len() + taxonomy.places.len();
    logger.log_start(total, dry_run);

    let mp = progress.create_multi_progress();
    let bar = progress.add_bar(mp.as_ref(), total as u64, "Seeding locations");

    let mut ctx = PassContext {
        store,
        logger: &logger,
        bar: bar.as_ref(),
        ids: HashMap::new(),
        processed: 0,
        total,
    };
    let mut report = LocationSeedReport::default();

    logger.log_phase("provinces", Some(&format!("{} records", taxonomy.provinces.len())));
    for province in &taxonomy.provinces {
        ctx.seed_one(province, None, &mut report.provinces).await;
    }

    let cities_and_towns: Vec<_> = taxonomy.cities_and_towns().collect();
    logger.log_phase("cities and towns", Some(&format!("{} records", cities_and_towns.len())));
    for planned in cities_and_towns {
        ctx.seed_one(&planned.location, None, &mut report.cities_and_towns).await;
    }

    let suburbs: Vec<_> = taxonomy.suburbs().collect();
    logger.log_phase("suburbs", Some(&format!("{} records", suburbs.len())));
    for planned in suburbs {
        let parent_id = planned
            .parent_slug
            .as_deref()
            .and_then(|parent| ctx.ids.get(&id_key(&planned.location.province_slug, parent)).copied());
        if parent_id.is_some() {
            report.suburbs_with_parent += 1;
        } else {
            debug!(
                "Suburb '{}' in {} seeded without a parent",
                planned.location.name, planned.location.province
            );
            report.orphaned_suburbs += 1;
        }
        ctx.seed_one(&planned.location, parent_id, &mut report.suburbs).await;
    }

    if let Some(pb) = &bar {
        pb.finish_with_message("Locations seeded");
    }
    logger.log_phase(
        "parent links",
        Some(&format!(
            "{} suburbs linked, {} without a parent city",
            report.suburbs_with_parent, report.orphaned_suburbs
        )),
    );
    logger.log_summary(&report.total());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keyword, Location, LocationType, NewKeyword};
    use crate::seeder::InMemoryStore;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use crate::taxonomy::{Gazetteer, ProvinceScope, TaxonomyBuilder};

    fn taxonomy(scope: ProvinceScope) -> Taxonomy {
        TaxonomyBuilder::new(Gazetteer::embedded().unwrap())
            .build(&scope)
            .unwrap()
    }

    #[tokio::test]
    async fn test_second_run_creates_nothing() {
        let taxonomy = taxonomy(ProvinceScope::All);
        let store = InMemoryStore::new();
        let progress = ProgressConfig::disabled();

        let first = seed_locations(&store, &taxonomy, &progress, true).await;
        let count_after_first = store.count_locations().await.unwrap();
        let second = seed_locations(&store, &taxonomy, &progress, true).await;
        let count_after_second = store.count_locations().await.unwrap();

        assert_eq!(count_after_first, count_after_second);
        assert_eq!(first.total().errored, 0);
        assert_eq!(second.total().created, 0);
        assert_eq!(second.total().updated, 0);
        assert_eq!(second.total().processed(), first.total().processed());
    }

    #[tokio::test]
    async fn test_suburb_parents_are_cities_in_same_province() {
        let taxonomy = taxonomy(ProvinceScope::All);
        let store = InMemoryStore::new();
        let report = seed_locations(&store, &taxonomy, &ProgressConfig::disabled(), true).await;
        assert!(report.suburbs_with_parent > 0);

        let rows = store.locations().unwrap();
        for row in rows.iter().filter(|r| r.parent_location_id.is_some()) {
            assert_eq!(row.location_type, LocationType::Suburb);
            let parent = rows
                .iter()
                .find(|p| Some(p.id) == row.parent_location_id)
                .unwrap();
            assert_eq!(parent.location_type, LocationType::City);
            assert_eq!(parent.province_slug, row.province_slug);
        }
        for row in rows.iter().filter(|r| r.location_type == LocationType::Province) {
            assert!(row.parent_location_id.is_none());
        }

        let soweto = rows
            .iter()
            .find(|r| r.slug == "soweto" && r.province_slug == "gauteng")
            .unwrap();
        let jhb = rows
            .iter()
            .find(|r| r.slug == "johannesburg" && r.province_slug == "gauteng")
            .unwrap();
        assert_eq!(soweto.parent_location_id, Some(jhb.id));
    }

    #[tokio::test]
    async fn test_record_failures_are_counted_and_skipped() {
        let taxonomy = taxonomy(ProvinceScope::Only("gauteng".into()));
        let store = InMemoryStore::with_failing_slugs(["sandton"]);
        let report = seed_locations(&store, &taxonomy, &ProgressConfig::disabled(), true).await;

        assert_eq!(report.total().errored, 1);
        let expected = (taxonomy.provinces.len() + taxonomy.places.len() - 1) as i64;
        assert_eq!(store.count_locations().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_existing_rows_are_updated_in_place() {
        let taxonomy = taxonomy(ProvinceScope::Only("gauteng".into()));
        let store = InMemoryStore::new();
        let stale = NewLocation {
            name: "Old Name".into(),
            slug: "johannesburg".into(),
            location_type: LocationType::Town,
            province: "Gauteng".into(),
            province_slug: "gauteng".into(),
        };
        store.insert_location(&stale, None).await.unwrap();

        let report = seed_locations(&store, &taxonomy, &ProgressConfig::disabled(), true).await;
        assert_eq!(report.cities_and_towns.updated, 1);

        let rows = store.locations().unwrap();
        let jhb: Vec<_> = rows.iter().filter(|r| r.slug == "johannesburg").collect();
        assert_eq!(jhb.len(), 1);
        assert_eq!(jhb[0].name, "Johannesburg");
        assert_eq!(jhb[0].location_type, LocationType::City);
    }

    /// Delegates to an inner store but fails lookups of one slug.
    struct FailingLookup<'a> {
        inner: &'a InMemoryStore,
        slug: &'static str,
    }

    #[async_trait]
    impl SeoStore for FailingLookup<'_> {
        async fn ensure_schema(&self) -> Result<()> {
            self.inner.ensure_schema().await
        }

        async fn find_location(&self, slug: &str, province_slug: &str) -> Result<Option<Location>> {
            if slug == self.slug {
                return Err(anyhow!("lookup of '{}' unavailable", slug));
            }
            self.inner.find_location(slug, province_slug).await
        }

        async fn insert_location(&self, location: &NewLocation, parent_id: Option<Uuid>) -> Result<Uuid> {
            self.inner.insert_location(location, parent_id).await
        }

        async fn update_location(&self, id: Uuid, location: &NewLocation, parent_id: Option<Uuid>) -> Result<()> {
            self.inner.update_location(id, location, parent_id).await
        }

        async fn find_keyword_by_slug(&self, slug: &str) -> Result<Option<Keyword>> {
            self.inner.find_keyword_by_slug(slug).await
        }

        async fn insert_keyword(&self, keyword: &NewKeyword) -> Result<Uuid> {
            self.inner.insert_keyword(keyword).await
        }

        async fn count_locations(&self) -> Result<i64> {
            self.inner.count_locations().await
        }

        async fn count_keywords(&self) -> Result<i64> {
            self.inner.count_keywords().await
        }
    }

    #[tokio::test]
    async fn test_unresolved_parent_keeps_stored_link() {
        let taxonomy = taxonomy(ProvinceScope::Only("gauteng".into()));
        let store = InMemoryStore::new();
        let progress = ProgressConfig::disabled();
        seed_locations(&store, &taxonomy, &progress, true).await;

        fn soweto_parent(store: &InMemoryStore) -> Option<Uuid> {
            store
                .locations()
                .unwrap()
                .iter()
                .find(|r| r.slug == "soweto" && r.province_slug == "gauteng")
                .and_then(|r| r.parent_location_id)
        }
        let before = soweto_parent(&store);
        assert!(before.is_some());

        let flaky = FailingLookup {
            inner: &store,
            slug: "johannesburg",
        };
        let second = seed_locations(&flaky, &taxonomy, &progress, true).await;

        assert_eq!(second.cities_and_towns.errored, 1);
        assert_eq!(second.suburbs.updated, 0);
        assert_eq!(soweto_parent(&store), before);
    }
}
