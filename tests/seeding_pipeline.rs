// tests/seeding_pipeline.rs
use std::collections::HashMap;

use seo_lib::keywords::{parse_keyword_markdown, seed_keywords};
use seo_lib::models::LocationType;
use seo_lib::seeder::{seed_keyword_rows, seed_locations, InMemoryStore, SeoStore};
use seo_lib::slug::slugify;
use seo_lib::taxonomy::{Gazetteer, ProvinceScope, TaxonomyBuilder};
use seo_lib::utils::progress_config::ProgressConfig;

#[tokio::test]
async fn full_seed_is_idempotent_and_consistent() {
    let gazetteer = Gazetteer::embedded().unwrap();
    let taxonomy = TaxonomyBuilder::new(gazetteer).build(&ProvinceScope::All).unwrap();
    let store = InMemoryStore::new();
    let progress = ProgressConfig::disabled();

    let mut keywords = seed_keywords();
    keywords.extend(
        parse_keyword_markdown("## Braiding Keywords (1-2)\n1. knotless braids soweto\n2. French Curl Braids\n")
            .iter()
            .map(|k| k.to_new_keyword()),
    );

    for _ in 0..2 {
        seed_locations(&store, &taxonomy, &progress, true).await;
        seed_keyword_rows(&store, &keywords, &progress, true).await;
    }

    let rows = store.locations().unwrap();
    assert_eq!(rows.len(), taxonomy.provinces.len() + taxonomy.places.len());
    // "French Curl Braids" is also a built-in keyword.
    assert_eq!(store.count_keywords().await.unwrap() as usize, keywords.len() - 1);

    let by_id: HashMap<_, _> = rows.iter().map(|r| (r.id, r)).collect();
    for row in &rows {
        assert_eq!(row.slug, slugify(&row.name));
        assert!(row.slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        if let Some(parent_id) = row.parent_location_id {
            let parent = by_id[&parent_id];
            assert_eq!(row.location_type, LocationType::Suburb);
            assert_eq!(parent.location_type, LocationType::City);
            assert_eq!(parent.province_slug, row.province_slug);
        }
    }
}

#[tokio::test]
async fn province_scoped_seed_only_touches_that_province() {
    let gazetteer = Gazetteer::embedded().unwrap();
    let taxonomy = TaxonomyBuilder::new(gazetteer)
        .build(&ProvinceScope::from_arg(Some("Gauteng".to_string())))
        .unwrap();
    let store = InMemoryStore::new();
    seed_locations(&store, &taxonomy, &ProgressConfig::disabled(), true).await;

    let rows = store.locations().unwrap();
    assert!(rows.iter().all(|r| r.province_slug == "gauteng"));
    let springs = rows.iter().find(|r| r.slug == "springs").unwrap();
    assert_eq!(springs.location_type, LocationType::Suburb);
}
