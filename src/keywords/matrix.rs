// src/keywords/matrix.rs
//! Keyword matrix generation.
//!
//! Each shape draws from declared slices of its inputs. Shapes 1 through 4 take full
//! cross products; the high-value, competitor and variation shapes only read the first
//! N locations, which is what keeps the output in the low millions.

use log::{debug, info};
use std::collections::BTreeSet;

use super::catalog::{COMPETITORS, SERVICE_VARIATIONS};
use crate::utils::constants::{MAX_KEYWORD_LENGTH, SITE_NAME};
use crate::utils::env::env_usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordShape {
    ServiceInLocation,
    PrefixServiceInLocation,
    ServiceSuffix,
    ServiceLocationSuffix,
    HighValue,
    Competitor,
    Variation,
}

impl KeywordShape {
    pub const ALL: [KeywordShape; 7] = [
        KeywordShape::ServiceInLocation,
        KeywordShape::PrefixServiceInLocation,
        KeywordShape::ServiceSuffix,
        KeywordShape::ServiceLocationSuffix,
        KeywordShape::HighValue,
        KeywordShape::Competitor,
        KeywordShape::Variation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KeywordShape::ServiceInLocation => "[Service] in [Location]",
            KeywordShape::PrefixServiceInLocation => "[Modifier] [Service] in [Location]",
            KeywordShape::ServiceSuffix => "[Service] [Suffix]",
            KeywordShape::ServiceLocationSuffix => "[Service] [Location] [Suffix]",
            KeywordShape::HighValue => "[Modifier] [Service] [Location] [Suffix] (selective)",
            KeywordShape::Competitor => "Competitor keywords",
            KeywordShape::Variation => "Service-specific variations",
        }
    }
}

/// Axis selection for the bounded shapes.
#[derive(Debug, Clone)]
pub struct KeywordShapeConfig {
    pub high_value_prefixes: Vec<String>,
    pub high_value_suffixes: Vec<String>,
    /// Locations read by the high-value shape.
    pub high_value_locations: usize,
    pub competitors: Vec<String>,
    /// Locations read by the competitor shape.
    pub competitor_locations: usize,
    /// Base service and its variations. Every variation is emitted, listed service or not.
    pub variations: Vec<(String, Vec<String>)>,
    /// Locations read by the variation shape.
    pub variation_locations: usize,
    pub max_keyword_length: usize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KeywordShapeConfig {
    fn default() -> Self {
        Self {
            high_value_prefixes: owned(&["best", "top-rated", "affordable", "cheap", "find a", "book a"]),
            high_value_suffixes: owned(&["near me", "prices", "cost", "reviews", "open now", "booking"]),
            high_value_locations: 50,
            competitors: owned(&COMPETITORS),
            competitor_locations: 30,
            variations: SERVICE_VARIATIONS
                .iter()
                .map(|(base, vars)| (base.to_string(), owned(*vars)))
                .collect(),
            variation_locations: 40,
            max_keyword_length: MAX_KEYWORD_LENGTH,
        }
    }
}

impl KeywordShapeConfig {
    /// Defaults with the location slice sizes overridable from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            high_value_locations: env_usize("KEYWORD_SHAPE5_LOCATIONS", defaults.high_value_locations),
            competitor_locations: env_usize("KEYWORD_SHAPE6_LOCATIONS", defaults.competitor_locations),
            variation_locations: env_usize("KEYWORD_SHAPE7_LOCATIONS", defaults.variation_locations),
            ..defaults
        }
    }

    pub fn log_config(&self) {
        info!("🔧 Keyword shape configuration:");
        info!(
            "   High-value: {} prefixes x {} suffixes over first {} locations",
            self.high_value_prefixes.len(),
            self.high_value_suffixes.len(),
            self.high_value_locations
        );
        info!(
            "   Competitors: {} over first {} locations",
            self.competitors.len(),
            self.competitor_locations
        );
        info!(
            "   Variations: {} base services over first {} locations",
            self.variations.len(),
            self.variation_locations
        );
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatrixReport {
    /// Phrases produced per shape, before deduplication.
    pub per_shape: Vec<(KeywordShape, usize)>,
    pub dropped_too_long: usize,
}

impl MatrixReport {
    pub fn attempted(&self, shape: KeywordShape) -> usize {
        self.per_shape
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

struct Collector {
    keywords: BTreeSet<String>,
    max_len: usize,
    attempted: usize,
    dropped_too_long: usize,
}

impl Collector {
    fn add(&mut self, keyword: String) {
        self.attempted += 1;
        if self.attempted % 100_000 == 0 {
            debug!("  Progress: {} keywords...", self.attempted);
        }
        if keyword.chars().count() > self.max_len {
            self.dropped_too_long += 1;
            return;
        }
        self.keywords.insert(keyword);
    }
}

pub struct KeywordMatrix {
    config: KeywordShapeConfig,
}

impl KeywordMatrix {
    pub fn new(config: KeywordShapeConfig) -> Self {
        Self { config }
    }

    /// Expands the inputs into a sorted, deduplicated keyword set.
    pub fn generate<S: AsRef<str>>(
        &self,
        services: &[S],
        locations: &[S],
        prefixes: &[S],
        suffixes: &[S],
    ) -> (BTreeSet<String>, MatrixReport) {
        let services: Vec<&str> = services.iter().map(AsRef::as_ref).collect();
        let locations: Vec<&str> = locations.iter().map(AsRef::as_ref).collect();
        let prefixes: Vec<&str> = prefixes.iter().map(AsRef::as_ref).collect();
        let suffixes: Vec<&str> = suffixes.iter().map(AsRef::as_ref).collect();
        let cfg = &self.config;

        let mut c = Collector {
            keywords: BTreeSet::new(),
            max_len: cfg.max_keyword_length,
            attempted: 0,
            dropped_too_long: 0,
        };
        let mut report = MatrixReport::default();

        for shape in KeywordShape::ALL {
            let before = c.attempted;
            match shape {
                KeywordShape::ServiceInLocation => {
                    for service in &services {
                        for location in &locations {
                            c.add(format!("{} in {}", service, location));
                        }
                    }
                }
                KeywordShape::PrefixServiceInLocation => {
                    for prefix in &prefixes {
                        for service in &services {
                            for location in &locations {
                                c.add(format!("{} {} in {}", prefix, service, location));
                            }
                        }
                    }
                }
                KeywordShape::ServiceSuffix => {
                    for service in &services {
                        for suffix in &suffixes {
                            c.add(format!("{} {}", service, suffix));
                        }
                    }
                }
                KeywordShape::ServiceLocationSuffix => {
                    for service in &services {
                        for location in &locations {
                            for suffix in &suffixes {
                                c.add(format!("{} {} {}", service, location, suffix));
                            }
                        }
                    }
                }
                KeywordShape::HighValue => {
                    let top = &locations[..cfg.high_value_locations.min(locations.len())];
                    for prefix in &cfg.high_value_prefixes {
                        for service in &services {
                            for location in top {
                                for suffix in &cfg.high_value_suffixes {
                                    c.add(format!("{} {} {} {}", prefix, service, location, suffix));
                                }
                            }
                        }
                    }
                }
                KeywordShape::Competitor => {
                    let top = &locations[..cfg.competitor_locations.min(locations.len())];
                    for competitor in &cfg.competitors {
                        c.add(format!("{} alternative South Africa", competitor));
                        c.add(format!("{} vs {}", SITE_NAME, competitor));
                        c.add(format!("better than {} South Africa", competitor));
                        for location in top {
                            c.add(format!("{} {}", competitor, location));
                            c.add(format!("{} alternative {}", competitor, location));
                        }
                    }
                }
                KeywordShape::Variation => {
                    let top = &locations[..cfg.variation_locations.min(locations.len())];
                    for (_, variations) in &cfg.variations {
                        for variation in variations {
                            for location in top {
                                c.add(format!("{} {}", variation, location));
                                c.add(format!("{} near me {}", variation, location));
                            }
                        }
                    }
                }
            }
            let produced = c.attempted - before;
            debug!("{}: generated {} keywords", shape.label(), produced);
            report.per_shape.push((shape, produced));
        }

        report.dropped_too_long = c.dropped_too_long;
        info!(
            "Keyword matrix: {} unique keywords from {} generated ({} over length limit)",
            c.keywords.len(),
            c.attempted,
            c.dropped_too_long
        );
        (c.keywords, report)
    }
}

/// Generates with the default shape configuration.
pub fn generate<S: AsRef<str>>(
    services: &[S],
    locations: &[S],
    prefixes: &[S],
    suffixes: &[S],
) -> BTreeSet<String> {
    KeywordMatrix::new(KeywordShapeConfig::default())
        .generate(services, locations, prefixes, suffixes)
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::catalog::{LOCATIONS, PREFIX_MODIFIERS, SERVICES, SUFFIX_MODIFIERS};

    fn small_config() -> KeywordShapeConfig {
        KeywordShapeConfig {
            high_value_prefixes: vec!["best".into()],
            high_value_suffixes: vec!["near me".into()],
            high_value_locations: 1,
            competitors: vec!["Booksy".into()],
            competitor_locations: 1,
            variations: vec![("spa".into(), vec!["day spa".into()])],
            variation_locations: 2,
            max_keyword_length: MAX_KEYWORD_LENGTH,
        }
    }

    #[test]
    fn test_shape_counts_on_small_inputs() {
        let matrix = KeywordMatrix::new(small_config());
        let (set, report) = matrix.generate(
            &["spa", "barber"],
            &["Sandton", "Soweto"],
            &["affordable"],
            &["prices"],
        );
        assert_eq!(report.attempted(KeywordShape::ServiceInLocation), 4);
        assert_eq!(report.attempted(KeywordShape::PrefixServiceInLocation), 4);
        assert_eq!(report.attempted(KeywordShape::ServiceSuffix), 2);
        assert_eq!(report.attempted(KeywordShape::ServiceLocationSuffix), 4);
        assert_eq!(report.attempted(KeywordShape::HighValue), 2);
        assert_eq!(report.attempted(KeywordShape::Competitor), 5);
        assert_eq!(report.attempted(KeywordShape::Variation), 4);

        assert!(set.contains("spa in Sandton"));
        assert!(set.contains("affordable barber in Soweto"));
        assert!(set.contains("spa prices"));
        assert!(set.contains("barber Soweto prices"));
        assert!(set.contains("Stylr SA vs Booksy"));
        assert!(set.contains("day spa near me Soweto"));
    }

    #[test]
    fn test_bounded_shapes_respect_location_slices() {
        let matrix = KeywordMatrix::new(small_config());
        let (set, _) = matrix.generate(&["spa"], &["Sandton", "Soweto"], &[], &[]);
        assert!(set.contains("best spa Sandton near me"));
        assert!(!set.contains("best spa Soweto near me"));
        assert!(set.contains("Booksy Sandton"));
        assert!(!set.contains("Booksy Soweto"));
    }

    #[test]
    fn test_variations_do_not_depend_on_service_list() {
        let matrix = KeywordMatrix::new(small_config());
        let (set, report) = matrix.generate(&["barber"], &["Sandton"], &[], &[]);
        assert_eq!(report.attempted(KeywordShape::Variation), 2);
        assert!(set.contains("day spa Sandton"));
        assert!(set.contains("day spa near me Sandton"));
    }

    #[test]
    fn test_duplicate_inputs_collapse() {
        let set = generate(&["spa", "spa"], &["Sandton", "Sandton"], &[], &[]);
        let count = set.iter().filter(|k| k.as_str() == "spa in Sandton").count();
        assert_eq!(count, 1);
        let as_vec: Vec<_> = set.iter().cloned().collect();
        let mut sorted = as_vec.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(as_vec, sorted);
    }

    #[test]
    fn test_length_bound_on_catalog_slice() {
        let (set, report) = KeywordMatrix::new(KeywordShapeConfig::default()).generate(
            &SERVICES[..8],
            &LOCATIONS[..60],
            &PREFIX_MODIFIERS[..],
            &SUFFIX_MODIFIERS[..],
        );
        assert!(!set.is_empty());
        assert!(set.iter().all(|k| k.chars().count() <= MAX_KEYWORD_LENGTH));
        assert_eq!(report.dropped_too_long, 0);
    }

    #[test]
    fn test_overlong_phrases_are_dropped() {
        let mut config = small_config();
        config.max_keyword_length = 12;
        let (set, report) = KeywordMatrix::new(config).generate(&["spa"], &["Sandton"], &[], &[]);
        assert!(set.iter().all(|k| k.chars().count() <= 12));
        assert!(report.dropped_too_long > 0);
    }
}
