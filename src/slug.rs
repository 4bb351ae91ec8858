// src/slug.rs
//! URL-safe identifiers for locations and keywords.

use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-]+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").unwrap());

/// Normalizes a display name into a slug: lowercase, parenthesized text removed,
/// whitespace runs turned into single hyphens, everything outside `[a-z0-9-]` dropped,
/// hyphen runs collapsed and trimmed from both ends.
///
/// A name made only of punctuation or parenthetical text yields an empty string.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = PARENTHETICAL.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// Best-effort display name for a slug ("kempton-park" -> "Kempton Park").
pub fn slug_to_name(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
