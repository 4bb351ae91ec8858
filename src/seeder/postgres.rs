// src/seeder/postgres.rs
//! `SeoStore` over a bb8 PostgreSQL pool.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use tokio_postgres::GenericClient;
use uuid::Uuid;

use super::store::SeoStore;
use crate::models::{Keyword, Location, NewKeyword, NewLocation};
use crate::utils::db_connect::PgPool;

const CREATE_LOCATIONS_SQL: &str = "
    CREATE TABLE IF NOT EXISTS seo_locations (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        slug TEXT NOT NULL,
        type TEXT NOT NULL,
        province TEXT NOT NULL,
        province_slug TEXT NOT NULL,
        parent_location_id UUID REFERENCES seo_locations(id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        UNIQUE (slug, province_slug)
    )";

const CREATE_KEYWORDS_SQL: &str = "
    CREATE TABLE IF NOT EXISTS seo_keywords (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        keyword TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        category TEXT NOT NULL,
        priority INTEGER NOT NULL DEFAULT 1,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )";

const FIND_LOCATION_SQL: &str = "
    SELECT id, name, slug, type, province, province_slug, parent_location_id, created_at, updated_at
    FROM seo_locations
    WHERE slug = $1 AND province_slug = $2
    LIMIT 1";

const INSERT_LOCATION_SQL: &str = "
    INSERT INTO seo_locations (name, slug, type, province, province_slug, parent_location_id)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id";

const UPDATE_LOCATION_SQL: &str = "
    UPDATE seo_locations
    SET name = $1, type = $2, province = $3, parent_location_id = COALESCE($4, parent_location_id), updated_at = now()
    WHERE id = $5";

const FIND_KEYWORD_SQL: &str = "
    SELECT id, keyword, slug, category, priority, created_at, updated_at
    FROM seo_keywords
    WHERE slug = $1
    LIMIT 1";

const INSERT_KEYWORD_SQL: &str = "
    INSERT INTO seo_keywords (keyword, slug, category, priority)
    VALUES ($1, $2, $3, $4)
    RETURNING id";

pub struct PgSeoStore {
    pool: PgPool,
}

impl PgSeoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn find_location_with(
    conn: &(impl GenericClient + Sync),
    slug: &str,
    province_slug: &str,
) -> Result<Option<Location>> {
    let row = conn
        .query_opt(FIND_LOCATION_SQL, &[&slug, &province_slug])
        .await
        .with_context(|| format!("Failed to look up location {}/{}", province_slug, slug))?;
    row.as_ref().map(Location::from_row).transpose()
}

async fn insert_location_with(
    conn: &(impl GenericClient + Sync),
    location: &NewLocation,
    parent_id: Option<Uuid>,
) -> Result<Uuid> {
    let row = conn
        .query_one(
            INSERT_LOCATION_SQL,
            &[
                &location.name,
                &location.slug,
                &location.location_type.as_str(),
                &location.province,
                &location.province_slug,
                &parent_id,
            ],
        )
        .await
        .with_context(|| format!("Failed to insert location '{}'", location.name))?;
    row.try_get(0).context("Failed to read inserted location id")
}

#[async_trait]
impl SeoStore for PgSeoStore {
    async fn ensure_schema(&self) -> Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for ensure_schema")?;
        conn.batch_execute(CREATE_LOCATIONS_SQL)
            .await
            .context("Failed to create seo_locations table")?;
        conn.batch_execute(CREATE_KEYWORDS_SQL)
            .await
            .context("Failed to create seo_keywords table")?;
        info!("SEO tables are present.");
        Ok(())
    }

    async fn find_location(&self, slug: &str, province_slug: &str) -> Result<Option<Location>> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for find_location")?;
        find_location_with(&*conn, slug, province_slug).await
    }

    async fn insert_location(&self, location: &NewLocation, parent_id: Option<Uuid>) -> Result<Uuid> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for insert_location")?;
        insert_location_with(&*conn, location, parent_id).await
    }

    async fn update_location(&self, id: Uuid, location: &NewLocation, parent_id: Option<Uuid>) -> Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for update_location")?;
        conn.execute(
            UPDATE_LOCATION_SQL,
            &[
                &location.name,
                &location.location_type.as_str(),
                &location.province,
                &parent_id,
                &id,
            ],
        )
        .await
        .with_context(|| format!("Failed to update location '{}'", location.name))?;
        Ok(())
    }

    async fn find_keyword_by_slug(&self, slug: &str) -> Result<Option<Keyword>> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for find_keyword_by_slug")?;
        let row = conn
            .query_opt(FIND_KEYWORD_SQL, &[&slug])
            .await
            .with_context(|| format!("Failed to look up keyword '{}'", slug))?;
        row.as_ref().map(Keyword::from_row).transpose()
    }

    async fn insert_keyword(&self, keyword: &NewKeyword) -> Result<Uuid> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for insert_keyword")?;
        let row = conn
            .query_one(
                INSERT_KEYWORD_SQL,
                &[
                    &keyword.keyword,
                    &keyword.slug,
                    &keyword.category.as_str(),
                    &keyword.priority,
                ],
            )
            .await
            .with_context(|| format!("Failed to insert keyword '{}'", keyword.keyword))?;
        row.try_get(0).context("Failed to read inserted keyword id")
    }

    async fn count_locations(&self) -> Result<i64> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for count_locations")?;
        let row = conn
            .query_one("SELECT COUNT(*) FROM seo_locations", &[])
            .await
            .context("Failed to count seo_locations")?;
        Ok(row.get(0))
    }

    async fn count_keywords(&self) -> Result<i64> {
        let conn = self
            .pool
            .get()
            .await
            .context("Failed to get DB connection for count_keywords")?;
        let row = conn
            .query_one("SELECT COUNT(*) FROM seo_keywords", &[])
            .await
            .context("Failed to count seo_keywords")?;
        Ok(row.get(0))
    }
}
