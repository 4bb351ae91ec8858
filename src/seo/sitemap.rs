// src/seo/sitemap.rs
//! Sitemap entry producer, dynamic entity fetch and XML rendering.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::models::{
    ChangeFrequency, LocationType, NewKeyword, NewLocation, ProvinceInfo, SitemapEntry, SERVICE_CATEGORIES,
};
use crate::taxonomy::Gazetteer;
use crate::utils::constants::URLS_PER_SITEMAP;
use crate::utils::env::env_usize;

/// City slugs that always count as major, whatever their position in the province list.
pub const MAJOR_CITY_SLUGS: [&str; 16] = [
    "johannesburg",
    "cape-town",
    "durban",
    "pretoria",
    "sandton",
    "gqeberha",
    "port-elizabeth",
    "bloemfontein",
    "east-london",
    "pietermaritzburg",
    "polokwane",
    "mbombela",
    "nelspruit",
    "kimberley",
    "rustenburg",
    "umhlanga",
];

/// Cities listed this early in their province are treated as major.
const MAJOR_CITY_INDEX: usize = 4;

const HIGH_PRIORITY_PROVINCES: [&str; 3] = ["gauteng", "western-cape", "kwazulu-natal"];

const STATIC_PAGES: [(&str, f64, ChangeFrequency); 12] = [
    ("/", 1.0, ChangeFrequency::Daily),
    ("/salons", 0.9, ChangeFrequency::Daily),
    ("/services", 0.9, ChangeFrequency::Daily),
    ("/products", 0.8, ChangeFrequency::Weekly),
    ("/prices", 0.7, ChangeFrequency::Monthly),
    ("/about", 0.6, ChangeFrequency::Monthly),
    ("/contact", 0.6, ChangeFrequency::Monthly),
    ("/how-it-works", 0.6, ChangeFrequency::Monthly),
    ("/faq", 0.6, ChangeFrequency::Monthly),
    ("/advice", 0.5, ChangeFrequency::Weekly),
    ("/blog", 0.5, ChangeFrequency::Weekly),
    ("/careers", 0.4, ChangeFrequency::Monthly),
];

pub fn is_major_city(city_slug: &str, index_in_province: usize) -> bool {
    index_in_province < MAJOR_CITY_INDEX || MAJOR_CITY_SLUGS.contains(&city_slug)
}

pub fn static_entries(site_url: &str) -> Vec<SitemapEntry> {
    STATIC_PAGES
        .iter()
        .map(|(path, priority, freq)| SitemapEntry::new(format!("{}{}", site_url, path), *freq, *priority))
        .collect()
}

pub fn category_entries(site_url: &str) -> Vec<SitemapEntry> {
    SERVICE_CATEGORIES
        .iter()
        .map(|c| SitemapEntry::new(format!("{}/services/{}", site_url, c.slug), ChangeFrequency::Weekly, 0.9))
        .collect()
}

pub fn province_entries(site_url: &str, provinces: &[ProvinceInfo]) -> Vec<SitemapEntry> {
    provinces
        .iter()
        .map(|p| {
            let priority = if HIGH_PRIORITY_PROVINCES.contains(&p.slug.as_str()) {
                0.85
            } else {
                0.8
            };
            SitemapEntry::new(
                format!("{}/salons/location/{}", site_url, p.slug),
                ChangeFrequency::Weekly,
                priority,
            )
        })
        .collect()
}

/// Every category × province × city landing page.
pub fn service_location_entries(site_url: &str, provinces: &[ProvinceInfo]) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();
    for category in SERVICE_CATEGORIES.iter() {
        for province in provinces {
            for (index, city) in province.cities.iter().enumerate() {
                let (priority, freq) = if is_major_city(&city.slug, index) {
                    (0.8, ChangeFrequency::Daily)
                } else {
                    (0.6, ChangeFrequency::Weekly)
                };
                entries.push(SitemapEntry::new(
                    format!(
                        "{}/services/{}/location/{}/{}",
                        site_url, category.slug, province.slug, city.slug
                    ),
                    freq,
                    priority,
                ));
            }
        }
    }
    entries
}

pub fn salon_city_entries(site_url: &str, provinces: &[ProvinceInfo]) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();
    for province in provinces {
        for (index, city) in province.cities.iter().enumerate() {
            let (priority, freq) = if is_major_city(&city.slug, index) {
                (0.75, ChangeFrequency::Daily)
            } else {
                (0.6, ChangeFrequency::Weekly)
            };
            entries.push(SitemapEntry::new(
                format!("{}/salons/location/{}/{}", site_url, province.slug, city.slug),
                freq,
                priority,
            ));
        }
    }
    entries
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Priority of a keyword landing page: base 0.5 plus tier, location-type and population bonuses.
pub fn keyword_location_priority(tier: i32, location_type: LocationType, population: Option<u64>) -> f64 {
    let tier_bonus: f64 = match tier {
        1 => 0.3,
        2 => 0.2,
        _ => 0.1,
    };
    let type_bonus = match location_type {
        LocationType::Province => 0.1,
        LocationType::City | LocationType::Town => 0.05,
        LocationType::Suburb => 0.0,
    };
    let population_bonus = match population.unwrap_or(0) {
        p if p > 1_000_000 => 0.05,
        p if p > 100_000 => 0.03,
        _ => 0.0,
    };
    round2((0.5 + tier_bonus + type_bonus + population_bonus).min(1.0))
}

pub fn keyword_location_change_frequency(
    tier: i32,
    location_type: LocationType,
    population: Option<u64>,
) -> ChangeFrequency {
    match tier {
        1 if location_type == LocationType::Province || population.unwrap_or(0) > 500_000 => {
            ChangeFrequency::Daily
        }
        1 | 2 => ChangeFrequency::Weekly,
        _ => ChangeFrequency::Monthly,
    }
}

pub fn keyword_location_url(site_url: &str, keyword_slug: &str, location: &NewLocation) -> String {
    if location.location_type == LocationType::Province {
        format!("{}/{}/{}", site_url, keyword_slug, location.province_slug)
    } else {
        format!(
            "{}/{}/{}/{}",
            site_url, keyword_slug, location.province_slug, location.slug
        )
    }
}

/// One entry per keyword and location pair. Keywords with an empty slug are skipped.
pub fn keyword_location_entries(
    site_url: &str,
    keywords: &[NewKeyword],
    locations: &[NewLocation],
    gazetteer: &Gazetteer,
) -> Vec<SitemapEntry> {
    let populations: Vec<Option<u64>> = locations
        .iter()
        .map(|l| gazetteer.population_of(&l.province_slug, &l.slug))
        .collect();

    let mut entries = Vec::with_capacity(keywords.len() * locations.len());
    for keyword in keywords.iter().filter(|k| !k.slug.is_empty()) {
        for (location, population) in locations.iter().zip(&populations) {
            entries.push(SitemapEntry::new(
                keyword_location_url(site_url, &keyword.slug, location),
                keyword_location_change_frequency(keyword.priority, location.location_type, *population),
                keyword_location_priority(keyword.priority, location.location_type, *population),
            ));
        }
    }
    entries
}

#[derive(Debug, Deserialize)]
struct ApprovedEntity {
    #[serde(default)]
    id: Value,
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ApprovedEntity {
    fn id_string(&self) -> Option<String> {
        match &self.id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApprovedPayload {
    List(Vec<ApprovedEntity>),
    Wrapped { data: Vec<ApprovedEntity> },
}

impl ApprovedPayload {
    fn into_entities(self) -> Vec<ApprovedEntity> {
        match self {
            ApprovedPayload::List(items) => items,
            ApprovedPayload::Wrapped { data } => data,
        }
    }
}

/// Where salon and seller detail pages are discovered.
#[derive(Debug, Clone)]
pub struct DynamicSource {
    pub api_base: Option<Url>,
    pub timeout: Duration,
}

impl DynamicSource {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        let trimmed = api_base.trim();
        let api_base = if trimmed.is_empty() {
            None
        } else {
            match Url::parse(trimmed) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Ignoring invalid API base URL '{}': {}", trimmed, e);
                    None
                }
            }
        };
        Self { api_base, timeout }
    }

    /// NEXT_PUBLIC_API_URL, else NEXT_PUBLIC_BASE_PATH. Timeout from SITEMAP_FETCH_TIMEOUT_SECS.
    pub fn from_env() -> Self {
        let base = std::env::var("NEXT_PUBLIC_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var("NEXT_PUBLIC_BASE_PATH").ok())
            .unwrap_or_default();
        let timeout = Duration::from_secs(env_usize("SITEMAP_FETCH_TIMEOUT_SECS", 10) as u64);
        Self::new(&base, timeout)
    }

    pub fn disabled() -> Self {
        Self {
            api_base: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client for sitemap fetches")
    }

    fn endpoint(&self, path: &str) -> Option<Result<Url>> {
        let base = self.api_base.as_ref()?;
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Some(base.join(path).with_context(|| format!("Invalid endpoint path '{}'", path)))
    }
}

async fn fetch_approved(client: &Client, endpoint: Url) -> Result<Vec<ApprovedEntity>> {
    let response = client
        .get(endpoint.clone())
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", endpoint))?;

    if !response.status().is_success() {
        return Err(anyhow!("{} returned status: {}", endpoint, response.status()));
    }

    let payload: ApprovedPayload = response
        .json()
        .await
        .with_context(|| format!("Failed to parse response from {}", endpoint))?;
    Ok(payload.into_entities())
}

/// Detail pages for one entity kind. Any failure yields an empty list.
async fn entity_entries(
    client: &Client,
    source: &DynamicSource,
    site_url: &str,
    api_path: &str,
    page_prefix: &str,
) -> Vec<SitemapEntry> {
    let endpoint = match source.endpoint(api_path) {
        None => {
            warn!("No API base URL configured; skipping {} entries", page_prefix);
            return Vec::new();
        }
        Some(Err(e)) => {
            warn!("Skipping {} entries: {:#}", page_prefix, e);
            return Vec::new();
        }
        Some(Ok(url)) => url,
    };

    match fetch_approved(client, endpoint).await {
        Ok(entities) => {
            let entries: Vec<SitemapEntry> = entities
                .iter()
                .filter_map(|e| {
                    e.id_string().map(|id| {
                        SitemapEntry::new(
                            format!("{}/{}/{}", site_url, page_prefix, id),
                            ChangeFrequency::Weekly,
                            0.7,
                        )
                        .with_last_modified(e.updated_at)
                    })
                })
                .collect();
            debug!("Fetched {} {} entries", entries.len(), page_prefix);
            entries
        }
        Err(e) => {
            warn!("Error fetching {} for sitemap, continuing without them: {:#}", page_prefix, e);
            Vec::new()
        }
    }
}

/// Salon and seller detail pages, fetched concurrently. Each fails open on its own.
pub async fn dynamic_entries(
    client: &Client,
    source: &DynamicSource,
    site_url: &str,
) -> (Vec<SitemapEntry>, Vec<SitemapEntry>) {
    futures::join!(
        entity_entries(client, source, site_url, "api/salons/approved", "salons"),
        entity_entries(client, source, site_url, "api/sellers/approved", "sellers"),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapStats {
    pub static_pages: usize,
    pub categories: usize,
    pub provinces: usize,
    pub service_locations: usize,
    pub salon_cities: usize,
    pub salons: usize,
    pub sellers: usize,
    pub keyword_locations: usize,
    pub total: usize,
    pub chunks: usize,
}

impl SitemapStats {
    pub fn log_summary(&self) {
        info!("=== Sitemap Summary ===");
        info!("Static pages: {}", self.static_pages);
        info!("Category pages: {}", self.categories);
        info!("Province pages: {}", self.provinces);
        info!("Service location pages: {}", self.service_locations);
        info!("Salon city pages: {}", self.salon_cities);
        info!("Salon detail pages: {}", self.salons);
        info!("Seller detail pages: {}", self.sellers);
        info!("Keyword location pages: {}", self.keyword_locations);
        info!("Total URLs: {} across {} sitemap file(s)", self.total, self.chunks);
    }
}

/// Collects every sitemap section for one site.
pub struct SitemapAssembler<'g> {
    site_url: String,
    gazetteer: &'g Gazetteer,
    source: DynamicSource,
}

impl<'g> SitemapAssembler<'g> {
    pub fn new(site_url: &str, gazetteer: &'g Gazetteer, source: DynamicSource) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            gazetteer,
            source,
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Entries that need no network access.
    pub fn static_sections(&self, stats: &mut SitemapStats) -> Vec<SitemapEntry> {
        let provinces = self.gazetteer.province_infos();
        let mut entries = static_entries(&self.site_url);
        stats.static_pages = entries.len();

        let categories = category_entries(&self.site_url);
        stats.categories = categories.len();
        entries.extend(categories);

        let province_pages = province_entries(&self.site_url, &provinces);
        stats.provinces = province_pages.len();
        entries.extend(province_pages);

        let service_pages = service_location_entries(&self.site_url, &provinces);
        stats.service_locations = service_pages.len();
        entries.extend(service_pages);

        let salon_pages = salon_city_entries(&self.site_url, &provinces);
        stats.salon_cities = salon_pages.len();
        entries.extend(salon_pages);
        entries
    }

    /// Static sections followed by whatever dynamic entries could be fetched.
    pub async fn assemble(&self) -> Result<(Vec<SitemapEntry>, SitemapStats)> {
        let mut stats = SitemapStats::default();
        let mut entries = self.static_sections(&mut stats);

        let client = self.source.client()?;
        let (salons, sellers) = dynamic_entries(&client, &self.source, &self.site_url).await;
        stats.salons = salons.len();
        stats.sellers = sellers.len();
        entries.extend(salons);
        entries.extend(sellers);

        stats.total = entries.len();
        stats.chunks = chunk_count(entries.len());
        Ok((entries, stats))
    }

    pub fn append_keyword_locations(
        &self,
        entries: &mut Vec<SitemapEntry>,
        stats: &mut SitemapStats,
        keywords: &[NewKeyword],
        locations: &[NewLocation],
    ) {
        let keyword_pages = keyword_location_entries(&self.site_url, keywords, locations, self.gazetteer);
        stats.keyword_locations = keyword_pages.len();
        entries.extend(keyword_pages);
        stats.total = entries.len();
        stats.chunks = chunk_count(entries.len());
    }
}

pub fn chunk_count(total: usize) -> usize {
    total.div_ceil(URLS_PER_SITEMAP).max(1)
}

pub fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_urlset(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.url)));
        if let Some(modified) = entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", modified.format("%Y-%m-%d")));
        }
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_frequency));
        xml.push_str(&format!("    <priority>{:.2}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_index(site_url: &str, chunks: usize, generated_at: DateTime<Utc>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    let lastmod = generated_at.format("%Y-%m-%d");
    for i in 0..chunks {
        xml.push_str("  <sitemap>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            xml_escape(&format!("{}/sitemap-{}.xml", site_url, i))
        ));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str("  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>\n");
    xml
}

/// Writes `sitemap-{i}.xml` chunks and the `sitemap.xml` index. Returns the written paths.
pub fn write_sitemaps(out_dir: &Path, site_url: &str, entries: &[SitemapEntry]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    let chunks: Vec<&[SitemapEntry]> = if entries.is_empty() {
        vec![entries]
    } else {
        entries.chunks(URLS_PER_SITEMAP).collect()
    };
    for (i, chunk) in chunks.iter().enumerate() {
        let path = out_dir.join(format!("sitemap-{}.xml", i));
        fs::write(&path, render_urlset(chunk))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} URLs to {}", chunk.len(), path.display());
        written.push(path);
    }

    let index_path = out_dir.join("sitemap.xml");
    fs::write(&index_path, render_index(site_url, chunks.len(), Utc::now()))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    written.push(index_path);
    Ok(written)
}
