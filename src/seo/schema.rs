// src/seo/schema.rs
//! schema.org JSON-LD blocks for service landing pages.

use serde_json::{json, Value};

use crate::models::{CategoryInfo, CityInfo};
use crate::utils::constants::SITE_NAME;

pub fn breadcrumb_list(site_url: &str, category: &CategoryInfo, city: &CityInfo, page_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home", "item": site_url },
            { "@type": "ListItem", "position": 2, "name": "Services", "item": format!("{}/services", site_url) },
            {
                "@type": "ListItem",
                "position": 3,
                "name": category.name,
                "item": format!("{}/services/{}", site_url, category.slug)
            },
            {
                "@type": "ListItem",
                "position": 4,
                "name": format!("{} in {}", category.name, city.name),
                "item": page_url
            }
        ]
    })
}

pub fn service(site_url: &str, category: &CategoryInfo, city: &CityInfo, description: &str, page_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": category.name,
        "name": format!("{} in {}", category.name, city.name),
        "description": description,
        "provider": {
            "@type": "Organization",
            "name": SITE_NAME,
            "url": site_url
        },
        "areaServed": {
            "@type": "City",
            "name": city.name,
            "containedInPlace": {
                "@type": "State",
                "name": city.province
            }
        },
        "availableChannel": {
            "@type": "ServiceChannel",
            "serviceUrl": page_url
        }
    })
}

pub fn local_business(category: &CategoryInfo, city: &CityInfo, description: &str, page_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": page_url,
        "url": page_url,
        "name": format!("{} {} - {}", city.name, category.name, SITE_NAME),
        "description": description,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": city.name,
            "addressRegion": city.province,
            "addressCountry": "ZA"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_category;
    use crate::taxonomy::Gazetteer;

    #[test]
    fn test_schema_blocks() {
        let gazetteer = Gazetteer::embedded().unwrap();
        let city = gazetteer.city("kwazulu-natal", "durban").unwrap();
        let category = find_category("braiding-weaving").unwrap();
        let url = "https://x.test/services/braiding-weaving/location/kwazulu-natal/durban";

        let crumbs = breadcrumb_list("https://x.test", category, city, url);
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3]["item"], url);
        assert_eq!(items[1]["item"], "https://x.test/services");

        let svc = service("https://x.test", category, city, "desc", url);
        assert_eq!(svc["@type"], "Service");
        assert_eq!(svc["areaServed"]["containedInPlace"]["name"], "KwaZulu-Natal");
        assert_eq!(svc["availableChannel"]["serviceUrl"], url);

        let biz = local_business(category, city, "desc", url);
        assert_eq!(biz["@id"], url);
        assert_eq!(biz["address"]["addressCountry"], "ZA");
        assert_eq!(biz["address"]["addressLocality"], "Durban");
    }
}
