// src/models/sitemap.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One crawlable page. Serializes to the `{url, lastModified, changeFrequency, priority}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

impl SitemapEntry {
    pub fn new(url: String, change_frequency: ChangeFrequency, priority: f64) -> Self {
        Self {
            url,
            last_modified: None,
            change_frequency,
            priority,
        }
    }

    pub fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_to_metadata_route_shape() {
        let entry = SitemapEntry::new("https://example.test/".into(), ChangeFrequency::Daily, 1.0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["url"], "https://example.test/");
        assert_eq!(json["changeFrequency"], "daily");
        assert_eq!(json["priority"], 1.0);
        assert!(json.get("lastModified").is_none());
    }
}
