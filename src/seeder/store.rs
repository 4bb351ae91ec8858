// src/seeder/store.rs

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Keyword, Location, NewKeyword, NewLocation};

/// Persistence seam for the seeder. Every call is awaited before the next one is issued.
#[async_trait]
pub trait SeoStore: Send + Sync {
    /// Creates the backing tables if they do not exist yet.
    async fn ensure_schema(&self) -> Result<()>;

    async fn find_location(&self, slug: &str, province_slug: &str) -> Result<Option<Location>>;

    async fn insert_location(&self, location: &NewLocation, parent_id: Option<Uuid>) -> Result<Uuid>;

    /// Refreshes name, type, province and parent of an existing row. A `None` parent keeps the stored one.
    async fn update_location(&self, id: Uuid, location: &NewLocation, parent_id: Option<Uuid>) -> Result<()>;

    async fn find_keyword_by_slug(&self, slug: &str) -> Result<Option<Keyword>>;

    async fn insert_keyword(&self, keyword: &NewKeyword) -> Result<Uuid>;

    async fn count_locations(&self) -> Result<i64>;

    async fn count_keywords(&self) -> Result<i64>;
}
