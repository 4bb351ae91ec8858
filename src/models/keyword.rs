// src/models/keyword.rs

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio_postgres::Row;
use uuid::Uuid;

/// Coarse tag stored in `seo_keywords.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeywordCategory {
    Hair,
    Nails,
    Lashes,
    Spa,
    General,
    MensGrooming,
    Brows,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Hair => "HAIR",
            KeywordCategory::Nails => "NAILS",
            KeywordCategory::Lashes => "LASHES",
            KeywordCategory::Spa => "SPA",
            KeywordCategory::General => "GENERAL",
            KeywordCategory::MensGrooming => "MENS_GROOMING",
            KeywordCategory::Brows => "BROWS",
        }
    }

    /// Maps a free-form heading such as "Hair Salon" or "Men's Grooming" to a tag.
    /// Headings that mention none of the known verticals become `General`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| label.contains(n));
        let mens = label
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .any(|w| matches!(w, "men" | "men's" | "mens"));
        if has(&["brow"]) {
            KeywordCategory::Brows
        } else if has(&["lash"]) {
            KeywordCategory::Lashes
        } else if has(&["nail", "manicure", "pedicure"]) {
            KeywordCategory::Nails
        } else if mens || has(&["barber", "groom", "beard"]) {
            KeywordCategory::MensGrooming
        } else if has(&["spa", "massage", "facial", "skin", "wax", "wellness"]) {
            KeywordCategory::Spa
        } else if has(&["hair", "braid", "weave", "wig", "locs", "twist"]) {
            KeywordCategory::Hair
        } else {
            KeywordCategory::General
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeywordCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HAIR" => Ok(KeywordCategory::Hair),
            "NAILS" => Ok(KeywordCategory::Nails),
            "LASHES" => Ok(KeywordCategory::Lashes),
            "SPA" => Ok(KeywordCategory::Spa),
            "GENERAL" => Ok(KeywordCategory::General),
            "MENS_GROOMING" => Ok(KeywordCategory::MensGrooming),
            "BROWS" => Ok(KeywordCategory::Brows),
            other => Err(anyhow!("Unknown keyword category '{}'", other)),
        }
    }
}

/// A keyword waiting to be inserted into `seo_keywords`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKeyword {
    pub keyword: String,
    pub slug: String,
    pub category: KeywordCategory,
    pub priority: i32,
}

impl NewKeyword {
    pub fn new(keyword: &str, category: KeywordCategory, priority: i32) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            slug: crate::slug::slugify(keyword),
            category,
            priority,
        }
    }
}

/// A persisted row of `seo_keywords`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub id: Uuid,
    pub keyword: String,
    pub slug: String,
    pub category: KeywordCategory,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyword {
    pub fn from_row(row: &Row) -> Result<Self> {
        let category: String = row.try_get("category").context("Missing 'category' column")?;
        Ok(Self {
            id: row.try_get("id").context("Missing 'id' column")?,
            keyword: row.try_get("keyword").context("Missing 'keyword' column")?,
            slug: row.try_get("slug").context("Missing 'slug' column")?,
            category: category.parse()?,
            priority: row.try_get("priority").context("Missing 'priority' column")?,
            created_at: row.try_get("created_at").context("Missing 'created_at' column")?,
            updated_at: row.try_get("updated_at").context("Missing 'updated_at' column")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(KeywordCategory::from_label("Hair Salon"), KeywordCategory::Hair);
        assert_eq!(KeywordCategory::from_label("Nail Care"), KeywordCategory::Nails);
        assert_eq!(KeywordCategory::from_label("Eyebrow Threading"), KeywordCategory::Brows);
        assert_eq!(KeywordCategory::from_label("Lash Extensions"), KeywordCategory::Lashes);
        assert_eq!(KeywordCategory::from_label("Men's Grooming"), KeywordCategory::MensGrooming);
        assert_eq!(KeywordCategory::from_label("Women's Spa"), KeywordCategory::Spa);
        assert_eq!(KeywordCategory::from_label("General"), KeywordCategory::General);
    }

    #[test]
    fn test_new_keyword_derives_slug() {
        let kw = NewKeyword::new("  Boho Knotless Braids ", KeywordCategory::Hair, 1);
        assert_eq!(kw.keyword, "Boho Knotless Braids");
        assert_eq!(kw.slug, "boho-knotless-braids");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("mens_grooming".parse::<KeywordCategory>().unwrap(), KeywordCategory::MensGrooming);
        assert!("MAKEUP".parse::<KeywordCategory>().is_err());
    }
}
