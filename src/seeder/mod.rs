// src/seeder/mod.rs
//! Idempotent seeding of `seo_locations` and `seo_keywords`.

pub mod keywords;
pub mod locations;
pub mod logging;
pub mod memory;
pub mod postgres;
pub mod store;

pub use keywords::seed_keyword_rows;
pub use locations::{seed_locations, LocationSeedReport};
pub use logging::{SeedLogger, SeedTarget};
pub use memory::InMemoryStore;
pub use postgres::PgSeoStore;
pub use store::SeoStore;

/// Per-record outcome counts for one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub created: usize,
    pub updated: usize,
    /// Already present and unchanged.
    pub skipped: usize,
    pub errored: usize,
}

impl SeedStats {
    pub fn processed(&self) -> usize {
        self.created + self.updated + self.skipped + self.errored
    }

    pub fn merge(&mut self, other: &SeedStats) {
        self.created += other.created;
        self.updated += other.updated;
        self.skipped += other.skipped;
        self.errored += other.errored;
    }
}

/// In-memory store for dry runs, PostgreSQL otherwise. The schema is ensured before returning.
pub async fn open_store(dry_run: bool) -> anyhow::Result<Box<dyn SeoStore>> {
    use anyhow::Context;

    let store: Box<dyn SeoStore> = if dry_run {
        log::info!("Dry run: writing to an in-memory store");
        Box::new(InMemoryStore::new())
    } else {
        let pool = crate::utils::db_connect::connect()
            .await
            .context("Failed to connect to database")?;
        Box::new(PgSeoStore::new(pool))
    };
    store.ensure_schema().await?;
    Ok(store)
}
