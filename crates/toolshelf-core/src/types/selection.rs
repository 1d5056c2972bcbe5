//! Transient UI selection state

/// Category selector: the "all" sentinel or an exact category name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        CategoryFilter::Named(category.into())
    }

    /// Exact, case-sensitive match
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Current selection, reset on every page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiSelection {
    pub current_category: CategoryFilter,
    pub showing_favorites: bool,
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches("anything"));
        assert!(CategoryFilter::named("X").matches("X"));
        assert!(!CategoryFilter::named("X").matches("x"));
    }

    #[test]
    fn test_selection_defaults() {
        let selection = UiSelection::default();
        assert!(selection.current_category.is_all());
        assert!(!selection.showing_favorites);
        assert!(selection.search_query.is_empty());
    }
}
