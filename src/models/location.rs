// src/models/location.rs

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio_postgres::Row;
use uuid::Uuid;

/// Level of a place in the province / city / town / suburb hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationType {
    Province,
    City,
    Town,
    Suburb,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Province => "PROVINCE",
            LocationType::City => "CITY",
            LocationType::Town => "TOWN",
            LocationType::Suburb => "SUBURB",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROVINCE" => Ok(LocationType::Province),
            "CITY" => Ok(LocationType::City),
            "TOWN" => Ok(LocationType::Town),
            "SUBURB" => Ok(LocationType::Suburb),
            other => Err(anyhow!("Unknown location type '{}'", other)),
        }
    }
}

/// A classified place ready to be written to `seo_locations`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub slug: String,
    pub location_type: LocationType,
    pub province: String,
    pub province_slug: String,
}

impl NewLocation {
    /// Key that must be unique in the store.
    pub fn key(&self) -> (&str, &str) {
        (&self.slug, &self.province_slug)
    }
}

/// A persisted row of `seo_locations`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub province: String,
    pub province_slug: String,
    pub parent_location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn from_row(row: &Row) -> Result<Self> {
        let type_str: String = row.try_get("type").context("Missing 'type' column")?;
        Ok(Self {
            id: row.try_get("id").context("Missing 'id' column")?,
            name: row.try_get("name").context("Missing 'name' column")?,
            slug: row.try_get("slug").context("Missing 'slug' column")?,
            location_type: type_str.parse()?,
            province: row.try_get("province").context("Missing 'province' column")?,
            province_slug: row
                .try_get("province_slug")
                .context("Missing 'province_slug' column")?,
            parent_location_id: row
                .try_get("parent_location_id")
                .context("Missing 'parent_location_id' column")?,
            created_at: row.try_get("created_at").context("Missing 'created_at' column")?,
            updated_at: row.try_get("updated_at").context("Missing 'updated_at' column")?,
        })
    }
}

/// Landing-page data for a city served under `/salons/location/{province}/{city}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    pub slug: String,
    pub name: String,
    /// Filled in from the owning province when the gazetteer is loaded.
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub popular_areas: Vec<String>,
}

impl CityInfo {
    pub fn description_or_default(&self) -> String {
        match &self.description {
            Some(d) => d.clone(),
            None => format!(
                "Find the best hair salons, nail salons, spas, and beauty services near you in {}, {}.",
                self.name, self.province
            ),
        }
    }
}

/// Province-level landing data plus the city pages it owns.
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceInfo {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub cities: Vec<CityInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_type_round_trips_through_str() {
        for t in [
            LocationType::Province,
            LocationType::City,
            LocationType::Town,
            LocationType::Suburb,
        ] {
            assert_eq!(t.as_str().parse::<LocationType>().unwrap(), t);
        }
        assert_eq!("suburb".parse::<LocationType>().unwrap(), LocationType::Suburb);
        assert!("VILLAGE".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_city_description_fallback() {
        let city = CityInfo {
            slug: "kuruman".into(),
            name: "Kuruman".into(),
            province: "Northern Cape".into(),
            description: None,
            keywords: vec![],
            population: None,
            popular_areas: vec![],
        };
        assert!(city.description_or_default().contains("Kuruman, Northern Cape"));
    }
}
