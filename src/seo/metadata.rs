// src/seo/metadata.rs
//! Page metadata for the service-by-location and salon-city landing pages.
//!
//! Lookups that miss fall back to generic metadata. Nothing in here returns an error:
//! a page with unknown slugs still renders with the fallback.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use super::schema;
use crate::models::{find_category, CategoryInfo, CityInfo};
use crate::taxonomy::Gazetteer;
use crate::utils::constants::{MAX_PAGE_KEYWORDS, SITE_NAME};

const OG_IMAGE_PATH: &str = "logo-transparent.png";
const OG_IMAGE_WIDTH: u32 = 800;
const OG_IMAGE_HEIGHT: u32 = 600;
const OG_LOCALE: &str = "en_ZA";

pub const FALLBACK_SERVICES_TITLE: &str = "Services | Stylr SA";
pub const FALLBACK_SERVICES_DESCRIPTION: &str = "Find and book professional beauty services in South Africa";
pub const FALLBACK_SALONS_TITLE: &str = "Salons & Beauty Services Near Me";
pub const FALLBACK_SALONS_DESCRIPTION: &str =
    "Find the best salons and beauty professionals near you in South Africa";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OpenGraphImage>,
    pub locale: String,
    #[serde(rename = "type")]
    pub og_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Serializes to the `{title, description, keywords, alternates, openGraph, twitter}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub alternates: Alternates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

impl PageMetadata {
    pub fn canonical(&self) -> &str {
        &self.alternates.canonical
    }

    fn fallback(title: &str, description: &str, canonical: String) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: Vec::new(),
            alternates: Alternates { canonical },
            open_graph: None,
            twitter: None,
        }
    }

    fn with_social(
        site_url: &str,
        title: String,
        description: String,
        keywords: Vec<String>,
        canonical: String,
        image_alt: String,
    ) -> Self {
        let image_url = format!("{}/{}", site_url, OG_IMAGE_PATH);
        Self {
            open_graph: Some(OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: canonical.clone(),
                site_name: SITE_NAME.to_string(),
                images: vec![OpenGraphImage {
                    url: image_url.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: image_alt,
                }],
                locale: OG_LOCALE.to_string(),
                og_type: "website".to_string(),
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title: title.clone(),
                description: description.clone(),
                images: vec![image_url],
            }),
            title,
            description,
            keywords,
            alternates: Alternates { canonical },
        }
    }
}

/// Metadata plus JSON-LD blocks for `/services/{category}/location/{province}/{city}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocationPage {
    pub metadata: PageMetadata,
    /// Empty when the page fell back to generic metadata.
    pub structured_data: Vec<Value>,
}

impl ServiceLocationPage {
    pub fn is_fallback(&self) -> bool {
        self.structured_data.is_empty()
    }
}

/// Candidate titles for a category page. Only the first is served.
pub fn title_candidates(category: &CategoryInfo, city: &CityInfo) -> [String; 4] {
    [
        format!(
            "{} in {}, {} | Book {} Services",
            category.name, city.name, city.province, category.service_name
        ),
        format!(
            "Best {} in {} | {} | {}",
            category.service_name, city.name, category.name, SITE_NAME
        ),
        format!(
            "{} {} Near Me | Top-Rated {} Professionals",
            city.name, category.name, category.service_name
        ),
        format!("Book {} in {} Today | {}", category.name, city.name, SITE_NAME),
    ]
}

pub fn page_description(category: &CategoryInfo, city: &CityInfo) -> String {
    format!(
        "{} in {}, {}. Find the best {} professionals and book appointments near you.",
        category.description_base, city.name, city.province, category.service_name
    )
}

/// Expands the category base keywords against the city and province, drops case-insensitive
/// duplicates keeping the first spelling, and caps the list at `MAX_PAGE_KEYWORDS`.
pub fn page_keywords(category: &CategoryInfo, city: &CityInfo) -> Vec<String> {
    let location = city.name.as_str();
    let province = city.province.as_str();
    let service = category.service_name;
    let mut candidates: Vec<String> = Vec::new();

    for k in category.keywords_base {
        candidates.push(format!("{} {}", k, location));
        candidates.push(format!("{} near me {}", k, location));
        candidates.push(format!("{} in {}", k, location));
        candidates.push(format!("best {} {}", k, location));
        candidates.push(format!("affordable {} {}", k, location));
        candidates.push(format!("{} {} prices", k, location));
        candidates.push(format!("{} near me", k));
    }
    candidates.push(format!("{} {}", service, location));
    candidates.push(format!("{} {}", service, province));
    candidates.push(format!("top-rated {} in {}", service, location));

    let base_lower: Vec<String> = category.keywords_base.iter().map(|k| k.to_lowercase()).collect();
    candidates.extend(
        city.keywords
            .iter()
            .filter(|ck| {
                let lowered = ck.to_lowercase();
                base_lower.iter().any(|k| lowered.contains(k.as_str()))
            })
            .cloned(),
    );

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|k| seen.insert(k.to_lowercase()))
        .take(MAX_PAGE_KEYWORDS)
        .collect()
}

pub fn service_location_url(site_url: &str, category_slug: &str, province_slug: &str, city_slug: &str) -> String {
    format!(
        "{}/services/{}/location/{}/{}",
        site_url, category_slug, province_slug, city_slug
    )
}

/// Builds metadata and JSON-LD for a `(category, province, city)` triple.
pub fn service_location_page(
    site_url: &str,
    category_slug: &str,
    province_slug: &str,
    city_slug: &str,
    gazetteer: &Gazetteer,
) -> ServiceLocationPage {
    let (category, city) = match (find_category(category_slug), gazetteer.city(province_slug, city_slug)) {
        (Some(category), Some(city)) => (category, city),
        _ => {
            debug!(
                "No metadata for {}/{}/{}; serving fallback",
                category_slug, province_slug, city_slug
            );
            return ServiceLocationPage {
                metadata: PageMetadata::fallback(
                    FALLBACK_SERVICES_TITLE,
                    FALLBACK_SERVICES_DESCRIPTION,
                    format!("{}/services", site_url),
                ),
                structured_data: Vec::new(),
            };
        }
    };

    let canonical = service_location_url(site_url, category.slug, province_slug, &city.slug);
    let [title, ..] = title_candidates(category, city);
    let description = page_description(category, city);
    let metadata = PageMetadata::with_social(
        site_url,
        title,
        description.clone(),
        page_keywords(category, city),
        canonical.clone(),
        format!("{} in {}", category.name, city.name),
    );

    let structured_data = vec![
        schema::breadcrumb_list(site_url, category, city, &canonical),
        schema::service(site_url, category, city, &description, &canonical),
        schema::local_business(category, city, &description, &canonical),
    ];
    ServiceLocationPage {
        metadata,
        structured_data,
    }
}

/// Metadata for `/salons/location/{province}/{city}`.
pub fn salon_city_metadata(
    site_url: &str,
    province_slug: &str,
    city_slug: &str,
    gazetteer: &Gazetteer,
) -> PageMetadata {
    let Some(city) = gazetteer.city(province_slug, city_slug) else {
        return PageMetadata::fallback(
            FALLBACK_SALONS_TITLE,
            FALLBACK_SALONS_DESCRIPTION,
            format!("{}/salons", site_url),
        );
    };
    let keywords: Vec<String> = city.keywords.iter().take(MAX_PAGE_KEYWORDS).cloned().collect();
    PageMetadata::with_social(
        site_url,
        format!("{} Salons Near Me | Hair, Nails, Spa & Beauty Services", city.name),
        city.description_or_default(),
        keywords,
        format!("{}/salons/location/{}/{}", site_url, province_slug, city.slug),
        format!("Salons in {}", city.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://www.stylrsa.co.za";

    fn gazetteer() -> &'static Gazetteer {
        Gazetteer::embedded().unwrap()
    }

    #[test]
    fn test_known_triple_builds_full_metadata() {
        let page = service_location_page(SITE, "nail-care", "gauteng", "johannesburg", gazetteer());
        assert!(!page.is_fallback());
        let meta = &page.metadata;
        assert_eq!(meta.title, "Nail Care in Johannesburg, Gauteng | Book nail salon Services");
        assert_eq!(
            meta.canonical(),
            "https://www.stylrsa.co.za/services/nail-care/location/gauteng/johannesburg"
        );
        assert!(meta.description.starts_with("Find professional nail services in Johannesburg, Gauteng."));
        assert!(meta.keywords.contains(&"nail salon Johannesburg".to_string()));
        assert!(meta.keywords.contains(&"top-rated nail salon in Johannesburg".to_string()));
        let og = meta.open_graph.as_ref().unwrap();
        assert_eq!(og.locale, "en_ZA");
        assert_eq!(og.images[0].alt, "Nail Care in Johannesburg");
        assert_eq!(page.structured_data.len(), 3);
    }

    #[test]
    fn test_unknown_triple_falls_back() {
        for (cat, prov, city) in [
            ("foo", "bar", "baz"),
            ("not-a-category", "gauteng", "johannesburg"),
            ("nail-care", "gauteng", "atlantis"),
            ("nail-care", "western-cape", "johannesburg"),
        ] {
            let page = service_location_page(SITE, cat, prov, city, gazetteer());
            assert!(page.is_fallback());
            assert_eq!(page.metadata.title, FALLBACK_SERVICES_TITLE);
            assert_eq!(page.metadata.description, FALLBACK_SERVICES_DESCRIPTION);
            assert!(page.metadata.keywords.is_empty());
            assert_eq!(page.metadata.canonical(), "https://www.stylrsa.co.za/services");
        }
    }

    #[test]
    fn test_keywords_are_unique_and_bounded() {
        for province in gazetteer().provinces() {
            for city in &province.cities {
                for category in crate::models::SERVICE_CATEGORIES.iter() {
                    let keywords = page_keywords(category, city);
                    assert!(keywords.len() <= MAX_PAGE_KEYWORDS);
                    let lowered: HashSet<_> = keywords.iter().map(|k| k.to_lowercase()).collect();
                    assert_eq!(lowered.len(), keywords.len());
                }
            }
        }
    }

    #[test]
    fn test_large_base_keyword_list_is_truncated() {
        let base: Vec<&'static str> = (0..60)
            .map(|i| &*Box::leak(format!("service {}", i).into_boxed_str()))
            .collect();
        let category = CategoryInfo {
            slug: "big",
            name: "Big",
            service_name: "salon",
            description_base: "Big",
            keywords_base: Box::leak(base.into_boxed_slice()),
        };
        let city = gazetteer().city("gauteng", "johannesburg").unwrap();
        let keywords = page_keywords(&category, city);
        assert_eq!(keywords.len(), MAX_PAGE_KEYWORDS);
        assert_eq!(keywords[0], "service 0 Johannesburg");
    }

    #[test]
    fn test_keyword_dedup_keeps_first_spelling() {
        let category = CategoryInfo {
            slug: "test",
            name: "Test",
            service_name: "spa",
            description_base: "Test",
            keywords_base: &["spa"],
        };
        let city = CityInfo {
            slug: "durban".into(),
            name: "Durban".into(),
            province: "KwaZulu-Natal".into(),
            description: None,
            keywords: vec!["SPA Durban".into(), "beaches durban".into(), "day spa umhlanga".into()],
            population: None,
            popular_areas: vec![],
        };
        let keywords = page_keywords(&category, &city);
        // "spa Durban" from the first pattern wins over the later "spa Durban" and "SPA Durban".
        assert_eq!(keywords.iter().filter(|k| k.eq_ignore_ascii_case("spa durban")).count(), 1);
        assert_eq!(keywords[0], "spa Durban");
        assert!(keywords.contains(&"day spa umhlanga".to_string()));
        assert!(!keywords.contains(&"beaches durban".to_string()));
    }

    #[test]
    fn test_title_candidates_first_is_served() {
        let city = gazetteer().city("western-cape", "cape-town").unwrap();
        let category = find_category("haircuts-styling").unwrap();
        let titles = title_candidates(category, city);
        let page = service_location_page(SITE, "haircuts-styling", "western-cape", "cape-town", gazetteer());
        assert_eq!(page.metadata.title, titles[0]);
        assert_eq!(titles[3], "Book Haircuts & Styling in Cape Town Today | Stylr SA");
    }

    #[test]
    fn test_salon_city_metadata() {
        let meta = salon_city_metadata(SITE, "gauteng", "johannesburg", gazetteer());
        assert_eq!(meta.title, "Johannesburg Salons Near Me | Hair, Nails, Spa & Beauty Services");
        assert_eq!(
            meta.canonical(),
            "https://www.stylrsa.co.za/salons/location/gauteng/johannesburg"
        );

        let missing = salon_city_metadata(SITE, "gauteng", "nowhere", gazetteer());
        assert_eq!(missing.title, FALLBACK_SALONS_TITLE);
        assert_eq!(missing.description, FALLBACK_SALONS_DESCRIPTION);
    }

    #[test]
    fn test_serialized_shape() {
        let page = service_location_page(SITE, "nail-care", "gauteng", "johannesburg", gazetteer());
        let json = serde_json::to_value(&page.metadata).unwrap();
        assert!(json["alternates"]["canonical"].is_string());
        assert_eq!(json["openGraph"]["siteName"], "Stylr SA");
        assert_eq!(json["openGraph"]["type"], "website");
        assert_eq!(json["twitter"]["card"], "summary_large_image");
    }
}
