// tests/sitemap_output.rs
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use seo_lib::keywords::seed_keywords;
use seo_lib::models::NewLocation;
use seo_lib::seo::sitemap::write_sitemaps;
use seo_lib::seo::{service_location_page, DynamicSource, SitemapAssembler};
use seo_lib::taxonomy::{Gazetteer, ProvinceScope, TaxonomyBuilder};
use seo_lib::utils::constants::URLS_PER_SITEMAP;

const SITE: &str = "https://www.stylrsa.co.za";

#[tokio::test]
async fn keyword_sitemap_is_chunked_and_indexed() {
    let gazetteer = Gazetteer::embedded().unwrap();
    let assembler = SitemapAssembler::new(SITE, gazetteer, DynamicSource::disabled());
    let (mut entries, mut stats) = assembler.assemble().await.unwrap();

    let taxonomy = TaxonomyBuilder::new(gazetteer).build(&ProvinceScope::All).unwrap();
    let locations: Vec<NewLocation> = taxonomy
        .provinces
        .iter()
        .cloned()
        .chain(taxonomy.places.iter().map(|p| p.location.clone()))
        .collect();
    let keywords = seed_keywords();
    assembler.append_keyword_locations(&mut entries, &mut stats, &keywords, &locations);
    assert_eq!(stats.keyword_locations, keywords.len() * locations.len());
    assert!(entries.iter().all(|e| e.priority > 0.0 && e.priority <= 1.0));

    let stamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let out_dir = std::env::temp_dir().join(format!("stylr-sitemap-test-{}", stamp));
    let written = write_sitemaps(&out_dir, SITE, &entries).unwrap();

    let chunk_files = written.len() - 1;
    assert_eq!(chunk_files, entries.len().div_ceil(URLS_PER_SITEMAP));
    let index = fs::read_to_string(out_dir.join("sitemap.xml")).unwrap();
    for i in 0..chunk_files {
        assert!(index.contains(&format!("{}/sitemap-{}.xml", SITE, i)));
    }
    let first = fs::read_to_string(out_dir.join("sitemap-0.xml")).unwrap();
    assert!(first.starts_with("<?xml"));
    assert!(first.contains("<loc>https://www.stylrsa.co.za/</loc>"));

    fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn every_service_location_sitemap_url_has_metadata() {
    let gazetteer = Gazetteer::embedded().unwrap();
    let provinces = gazetteer.province_infos();
    for entry in seo_lib::seo::sitemap::service_location_entries(SITE, &provinces) {
        let path = entry.url.trim_start_matches(SITE);
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        // services/{category}/location/{province}/{city}
        assert_eq!(parts.len(), 5);
        let page = service_location_page(SITE, parts[1], parts[3], parts[4], gazetteer);
        assert!(!page.is_fallback(), "no metadata for {}", entry.url);
        assert_eq!(page.metadata.canonical(), entry.url);
    }
}
