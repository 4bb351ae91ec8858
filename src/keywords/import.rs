// src/keywords/import.rs
//! Keyword sources for the seeder: the built-in catalogue and numbered markdown lists.

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::catalog::SEED_KEYWORDS;
use crate::models::{KeywordCategory, NewKeyword};

static CATEGORY_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^##\s+(.+?)\s+Keywords\s+\((\d+)-(\d+)\)").unwrap());
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

const DEFAULT_CATEGORY_LABEL: &str = "General";

/// One keyword line read from a markdown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyword {
    pub keyword: String,
    /// Heading text the keyword appeared under, e.g. "Hair Salon".
    pub category_label: String,
    pub priority: i32,
}

impl ParsedKeyword {
    pub fn category(&self) -> KeywordCategory {
        KeywordCategory::from_label(&self.category_label)
    }

    pub fn to_new_keyword(&self) -> NewKeyword {
        NewKeyword::new(&self.keyword, self.category(), self.priority)
    }
}

/// Priority tier for the n-th keyword of a file (1-based).
fn priority_for_position(position: usize) -> i32 {
    if position <= 600 {
        1
    } else if position <= 900 {
        2
    } else {
        3
    }
}

/// Parses a markdown keyword list.
///
/// `## Hair Salon Keywords (1-150)` style headings switch the current category; lines such as
/// `12. box braids near me` produce keywords. Anything else is ignored.
pub fn parse_keyword_markdown(content: &str) -> Vec<ParsedKeyword> {
    let mut current_label = DEFAULT_CATEGORY_LABEL.to_string();
    let mut parsed = Vec::new();

    for line in content.lines().map(str::trim) {
        if let Some(caps) = CATEGORY_HEADER.captures(line) {
            current_label = caps[1].trim().to_string();
            debug!("Keyword section '{}' ({}-{})", current_label, &caps[2], &caps[3]);
            continue;
        }
        if let Some(caps) = NUMBERED_LINE.captures(line) {
            let keyword = caps[1].trim();
            if keyword.is_empty() {
                continue;
            }
            parsed.push(ParsedKeyword {
                keyword: keyword.to_string(),
                category_label: current_label.clone(),
                priority: priority_for_position(parsed.len() + 1),
            });
        }
    }
    parsed
}

pub fn read_keyword_file(path: &Path) -> Result<Vec<ParsedKeyword>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword file {}", path.display()))?;
    let parsed = parse_keyword_markdown(&content);
    info!("Parsed {} keywords from {}", parsed.len(), path.display());
    Ok(parsed)
}

/// The built-in keyword list, ready for insertion.
pub fn seed_keywords() -> Vec<NewKeyword> {
    SEED_KEYWORDS
        .iter()
        .map(|(keyword, category, priority)| NewKeyword::new(keyword, *category, *priority))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SAMPLE: &str = "# Stylr SA keyword research\n\
        \n\
        1. beauty near me\n\
        ## Hair Salon Keywords (1-3)\n\
        2. box braids johannesburg\n\
        3.   knotless braids durban  \n\
        not a keyword line\n\
        ## Nail Care keywords (4-5)\n\
        4. gel nails sandton\n";

    #[test]
    fn test_parse_sections_and_default_category() {
        let parsed = parse_keyword_markdown(SAMPLE);
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[0].category_label, "General");
        assert_eq!(parsed[0].category(), KeywordCategory::General);
        assert_eq!(parsed[1].category_label, "Hair Salon");
        assert_eq!(parsed[2].keyword, "knotless braids durban");
        assert_eq!(parsed[3].category(), KeywordCategory::Nails);
        assert!(parsed.iter().all(|k| k.priority == 1));
    }

    #[test]
    fn test_priority_tiers_follow_position() {
        let content: String = (1..=950).map(|i| format!("{}. keyword {}\n", i, i)).collect();
        let parsed = parse_keyword_markdown(&content);
        assert_eq!(parsed[599].priority, 1);
        assert_eq!(parsed[600].priority, 2);
        assert_eq!(parsed[899].priority, 2);
        assert_eq!(parsed[900].priority, 3);
    }

    #[test]
    fn test_seed_keywords_have_unique_slugs() {
        let keywords = seed_keywords();
        assert!(!keywords.is_empty());
        let slugs: HashSet<_> = keywords.iter().map(|k| k.slug.as_str()).collect();
        assert_eq!(slugs.len(), keywords.len());
        assert!(keywords.iter().all(|k| !k.slug.is_empty()));
    }

    #[test]
    fn test_to_new_keyword_slug() {
        let parsed = parse_keyword_markdown("## Men's Grooming Keywords (1-1)\n1. Fade Haircut Cape Town\n");
        let kw = parsed[0].to_new_keyword();
        assert_eq!(kw.slug, "fade-haircut-cape-town");
        assert_eq!(kw.category, KeywordCategory::MensGrooming);
    }
}
