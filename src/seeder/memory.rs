// src/seeder/memory.rs
//! In-process `SeoStore` used by `--dry-run` and the tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::store::SeoStore;
use crate::models::{Keyword, Location, NewKeyword, NewLocation};

#[derive(Default)]
struct Tables {
    locations: Vec<Location>,
    keywords: Vec<Keyword>,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    /// Writes for these slugs fail, to exercise per-record error handling.
    failing_slugs: HashSet<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: Mutex::default(),
            failing_slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("In-memory store lock poisoned"))
    }

    fn check_writable(&self, slug: &str) -> Result<()> {
        if self.failing_slugs.contains(slug) {
            return Err(anyhow!("Simulated write failure for '{}'", slug));
        }
        Ok(())
    }

    pub fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.lock()?.locations.clone())
    }

    pub fn keywords(&self) -> Result<Vec<Keyword>> {
        Ok(self.lock()?.keywords.clone())
    }
}

#[async_trait]
impl SeoStore for InMemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn find_location(&self, slug: &str, province_slug: &str) -> Result<Option<Location>> {
        Ok(self
            .lock()?
            .locations
            .iter()
            .find(|l| l.slug == slug && l.province_slug == province_slug)
            .cloned())
    }

    async fn insert_location(&self, location: &NewLocation, parent_id: Option<Uuid>) -> Result<Uuid> {
        self.check_writable(&location.slug)?;
        let mut tables = self.lock()?;
        if tables
            .locations
            .iter()
            .any(|l| l.slug == location.slug && l.province_slug == location.province_slug)
        {
            return Err(anyhow!(
                "Duplicate key (slug, province_slug) = ({}, {})",
                location.slug,
                location.province_slug
            ));
        }
        let now = Utc::now();
        let id = Uuid::new_v4();
        tables.locations.push(Location {
            id,
            name: location.name.clone(),
            slug: location.slug.clone(),
            location_type: location.location_type,
            province: location.province.clone(),
            province_slug: location.province_slug.clone(),
            parent_location_id: parent_id,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn update_location(&self, id: Uuid, location: &NewLocation, parent_id: Option<Uuid>) -> Result<()> {
        self.check_writable(&location.slug)?;
        let mut tables = self.lock()?;
        let row = tables
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| anyhow!("No location with id {}", id))?;
        row.name = location.name.clone();
        row.location_type = location.location_type;
        row.province = location.province.clone();
        if parent_id.is_some() {
            row.parent_location_id = parent_id;
        }
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn find_keyword_by_slug(&self, slug: &str) -> Result<Option<Keyword>> {
        Ok(self.lock()?.keywords.iter().find(|k| k.slug == slug).cloned())
    }

    async fn insert_keyword(&self, keyword: &NewKeyword) -> Result<Uuid> {
        self.check_writable(&keyword.slug)?;
        let mut tables = self.lock()?;
        if tables.keywords.iter().any(|k| k.slug == keyword.slug) {
            return Err(anyhow!("Duplicate keyword slug '{}'", keyword.slug));
        }
        let now = Utc::now();
        let id = Uuid::new_v4();
        tables.keywords.push(Keyword {
            id,
            keyword: keyword.keyword.clone(),
            slug: keyword.slug.clone(),
            category: keyword.category,
            priority: keyword.priority,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn count_locations(&self) -> Result<i64> {
        Ok(self.lock()?.locations.len() as i64)
    }

    async fn count_keywords(&self) -> Result<i64> {
        Ok(self.lock()?.keywords.len() as i64)
    }
}
