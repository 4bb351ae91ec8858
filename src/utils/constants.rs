// src/utils/constants.rs

/// Brand name used in titles, OpenGraph and JSON-LD provider blocks.
pub const SITE_NAME: &str = "Stylr SA";

/// Public site origin used when NEXT_PUBLIC_SITE_URL is not set.
pub const DEFAULT_SITE_URL: &str = "https://www.stylrsa.co.za";

/// Upper bound on keywords emitted for one landing page.
pub const MAX_PAGE_KEYWORDS: usize = 200;

/// Upper bound on a generated keyword phrase, in characters.
pub const MAX_KEYWORD_LENGTH: usize = 200;

/// Stay under the 50,000 URL limit search engines apply per sitemap file.
pub const URLS_PER_SITEMAP: usize = 45_000;

/// Log a progress line every N records during seeding.
pub const SEED_PROGRESS_INTERVAL: usize = 50;

/// Site origin from the environment, without a trailing slash.
pub fn site_url() -> String {
    std::env::var("NEXT_PUBLIC_SITE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}
