// src/keywords/stats.rs

use log::info;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordStats {
    pub total: usize,
    /// Mean phrase length in characters, rounded to one decimal.
    pub average_length: f64,
    pub location_based: usize,
    pub service_based: usize,
    pub near_me: usize,
    pub price_related: usize,
}

impl KeywordStats {
    /// Location and service counts only probe the first ten entries of each list.
    pub fn compute<S: AsRef<str>>(keywords: &BTreeSet<String>, services: &[S], locations: &[S]) -> Self {
        if keywords.is_empty() {
            return Self::default();
        }
        let sample_locations: Vec<&str> = locations.iter().take(10).map(AsRef::as_ref).collect();
        let sample_services: Vec<String> = services
            .iter()
            .take(10)
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        let mut stats = Self {
            total: keywords.len(),
            ..Self::default()
        };
        let mut total_chars = 0usize;
        for keyword in keywords {
            total_chars += keyword.chars().count();
            let lowered = keyword.to_lowercase();
            if sample_locations.iter().any(|l| keyword.contains(l)) {
                stats.location_based += 1;
            }
            if sample_services.iter().any(|s| lowered.contains(s.as_str())) {
                stats.service_based += 1;
            }
            if lowered.contains("near me") {
                stats.near_me += 1;
            }
            if lowered.contains("price") || lowered.contains("cost") {
                stats.price_related += 1;
            }
        }
        let mean = total_chars as f64 / keywords.len() as f64;
        stats.average_length = (mean * 10.0).round() / 10.0;
        stats
    }

    pub fn log_summary(&self) {
        info!("📈 Keyword statistics:");
        info!("   Total keywords: {}", self.total);
        info!("   Average length: {:.1} characters", self.average_length);
        info!("   Location-based: {}", self.location_based);
        info!("   Service-based: {}", self.service_based);
        info!("   'Near me' keywords: {}", self.near_me);
        info!("   Price-related: {}", self.price_related);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_counts() {
        let keywords: BTreeSet<String> = ["spa in Sandton", "barber near me", "spa prices", "Booksy alternative South Africa"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stats = KeywordStats::compute(&keywords, &["spa", "barber"], &["Sandton"]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.location_based, 1);
        assert_eq!(stats.service_based, 3);
        assert_eq!(stats.near_me, 1);
        assert_eq!(stats.price_related, 1);
        // (14 + 14 + 10 + 31) / 4 = 17.25
        assert_eq!(stats.average_length, 17.3);
    }

    #[test]
    fn test_empty_set() {
        let stats = KeywordStats::compute::<&str>(&BTreeSet::new(), &[], &[]);
        assert_eq!(stats, KeywordStats::default());
    }
}
