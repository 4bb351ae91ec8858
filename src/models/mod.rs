// src/models/mod.rs
pub mod category;
pub mod keyword;
pub mod location;
pub mod sitemap;

pub use category::{find_category, CategoryInfo, SERVICE_CATEGORIES};
pub use keyword::{Keyword, KeywordCategory, NewKeyword};
pub use location::{CityInfo, Location, LocationType, NewLocation, ProvinceInfo};
pub use sitemap::{ChangeFrequency, SitemapEntry};
