// src/seo/mod.rs
//! Landing-page metadata, JSON-LD and sitemaps.

pub mod metadata;
pub mod schema;
pub mod sitemap;

pub use metadata::{salon_city_metadata, service_location_page, PageMetadata, ServiceLocationPage};
pub use sitemap::{DynamicSource, SitemapAssembler, SitemapStats};
