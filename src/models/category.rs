// src/models/category.rs

/// A beauty-service vertical with the phrases used to build its landing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub slug: &'static str,
    pub name: &'static str,
    /// Generic noun used inside sentence templates ("nail salon", "barber").
    pub service_name: &'static str,
    pub description_base: &'static str,
    pub keywords_base: &'static [&'static str],
}

pub static SERVICE_CATEGORIES: [CategoryInfo; 10] = [
    CategoryInfo {
        slug: "nail-care",
        name: "Nail Care",
        service_name: "nail salon",
        description_base: "Find professional nail services",
        keywords_base: &["nail salon", "manicure", "pedicure", "gel nails", "nail art"],
    },
    CategoryInfo {
        slug: "massage-body-treatments",
        name: "Massage & Body Treatments",
        service_name: "massage spa",
        description_base: "Book relaxing massage therapy and body treatments",
        keywords_base: &["massage", "spa", "massage therapy", "body treatment", "wellness"],
    },
    CategoryInfo {
        slug: "skin-care-facials",
        name: "Skin Care & Facials",
        service_name: "spa",
        description_base: "Book professional facial treatments and skin care",
        keywords_base: &["facial", "spa", "skin care", "esthetician", "facial treatment"],
    },
    CategoryInfo {
        slug: "haircuts-styling",
        name: "Haircuts & Styling",
        service_name: "hair salon",
        description_base: "Find expert hairstylists for cuts and styling",
        keywords_base: &["haircut", "hair styling", "hairstylist", "hair salon"],
    },
    CategoryInfo {
        slug: "hair-color-treatments",
        name: "Hair Coloring & Treatments",
        service_name: "hair salon",
        description_base: "Professional hair coloring and treatment services",
        keywords_base: &["hair color", "balayage", "highlights", "hair treatment"],
    },
    CategoryInfo {
        slug: "makeup-beauty",
        name: "Makeup & Beauty",
        service_name: "makeup artist",
        description_base: "Book professional makeup artists",
        keywords_base: &["makeup artist", "beauty services", "bridal makeup", "professional makeup"],
    },
    CategoryInfo {
        slug: "waxing-hair-removal",
        name: "Waxing & Hair Removal",
        service_name: "waxing salon",
        description_base: "Book professional waxing and hair removal services",
        keywords_base: &["waxing", "hair removal", "Brazilian wax", "wax specialist"],
    },
    CategoryInfo {
        slug: "braiding-weaving",
        name: "Braiding & Weaving",
        service_name: "braiding salon",
        description_base: "Find professional braiding and weaving specialists",
        keywords_base: &["braiding", "hair braiding", "box braids", "weaving", "hair extensions"],
    },
    CategoryInfo {
        slug: "mens-grooming",
        name: "Men's Grooming",
        service_name: "barber",
        description_base: "Book professional men's grooming services",
        keywords_base: &["men's grooming", "barber", "men's haircut", "beard trim"],
    },
    CategoryInfo {
        slug: "bridal-services",
        name: "Bridal Services",
        service_name: "bridal beauty",
        description_base: "Book professional bridal hair and makeup services",
        keywords_base: &["bridal services", "wedding hair", "wedding makeup", "bridal makeup"],
    },
];

pub fn find_category(slug: &str) -> Option<&'static CategoryInfo> {
    SERVICE_CATEGORIES.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify;
    use std::collections::HashSet;

    #[test]
    fn test_category_slugs_are_unique_and_clean() {
        let slugs: HashSet<_> = SERVICE_CATEGORIES.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), SERVICE_CATEGORIES.len());
        for c in &SERVICE_CATEGORIES {
            assert_eq!(slugify(c.slug), c.slug);
            assert!(!c.keywords_base.is_empty());
        }
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("nail-care").map(|c| c.name), Some("Nail Care"));
        assert!(find_category("foo").is_none());
    }
}
