//! Element ids, class names and attributes the page markup provides

/// Element ids
pub mod ids {
    pub const FEATURED_DATA: &str = "featured-data";
    pub const FEATURED_GRID: &str = "featured-grid";
    pub const FILTER_BAR: &str = "filter-bar";
    pub const SITE_CONFIG: &str = "site-config";
    pub const PROSPECTIVE_TOGGLE: &str = "prospective-toggle";
    pub const PROSPECTIVE_CONTENT: &str = "prospective-content";
    pub const PROSPECTIVE_ARROW: &str = "prospective-arrow";
}

/// CSS selectors for element lookup
pub mod selectors {
    pub const NAV_HAMBURGER: &str = ".nav__hamburger";
    pub const NAV_LINKS: &str = ".nav__links";
    pub const NAV_LINK: &str = ".nav__link";
    pub const FILTER_BUTTON: &str = ".filter__btn";
    pub const PROJECT_CARD: &str = ".card--project";
    pub const YEAR_DIVIDER: &str = ".year-divider";
}

/// State classes toggled by the scripts
pub mod classes {
    pub const NAV_LINKS_OPEN: &str = "nav__links--open";
    pub const FILTER_BUTTON_ACTIVE: &str = "filter__btn--active";
    pub const PROSPECTIVE_CONTENT_OPEN: &str = "prospective__content--open";
    pub const PROSPECTIVE_ARROW_OPEN: &str = "prospective__arrow--open";
}

/// Data attributes read by the topic filter
pub mod attrs {
    pub const TOPIC: &str = "data-topic";
    pub const TOPICS: &str = "data-topics";
    pub const YEAR: &str = "data-year";
}

/// Global function name used by inline `onclick` handlers on bibtex links
pub const TOGGLE_BLOCK_GLOBAL: &str = "toggleblock";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_class_selectors() {
        let all = [
            selectors::NAV_HAMBURGER,
            selectors::NAV_LINKS,
            selectors::NAV_LINK,
            selectors::FILTER_BUTTON,
            selectors::PROJECT_CARD,
            selectors::YEAR_DIVIDER,
        ];
        assert!(all.iter().all(|s| s.starts_with('.')));
    }

    #[test]
    fn test_state_classes_are_bare_names() {
        let all = [
            classes::NAV_LINKS_OPEN,
            classes::FILTER_BUTTON_ACTIVE,
            classes::PROSPECTIVE_CONTENT_OPEN,
            classes::PROSPECTIVE_ARROW_OPEN,
        ];
        assert!(all.iter().all(|c| !c.starts_with('.') && !c.contains(' ')));
    }

    #[test]
    fn test_ids_unique() {
        let all = [
            ids::FEATURED_DATA,
            ids::FEATURED_GRID,
            ids::FILTER_BAR,
            ids::SITE_CONFIG,
            ids::PROSPECTIVE_TOGGLE,
            ids::PROSPECTIVE_CONTENT,
            ids::PROSPECTIVE_ARROW,
        ];
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}
