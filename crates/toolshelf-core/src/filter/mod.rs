//! Filter engine
//!
//! A view is the catalog narrowed by three independent per-tool predicates,
//! ANDed in a single pass:
//!
//! 1. category: the `All` sentinel keeps everything, a name keeps exact matches
//! 2. search: case-insensitive substring of name, description or category
//! 3. favorites: when enabled, keep only favorite ids
//!
//! Catalog order is preserved; nothing is re-sorted.

use crate::types::{Catalog, CategoryFilter, Tool};

/// The predicates that narrow the catalog into a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub category: CategoryFilter,
    /// Lowercased search text; empty matches everything
    pub search: String,
    pub favorites_only: bool,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, query: &str) -> Self {
        self.search = query.to_lowercase();
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    fn matches_search(&self, tool: &Tool) -> bool {
        if self.search.is_empty() {
            return true;
        }
        tool.name.to_lowercase().contains(&self.search)
            || tool
                .description_text()
                .is_some_and(|d| d.to_lowercase().contains(&self.search))
            || tool.category.to_lowercase().contains(&self.search)
    }

    /// Check if a tool passes all three predicates
    pub fn matches(&self, tool: &Tool, is_favorite: impl Fn(&str) -> bool) -> bool {
        if !self.category.matches(&tool.category) {
            return false;
        }

        if !self.matches_search(tool) {
            return false;
        }

        if self.favorites_only && !is_favorite(&tool.id) {
            return false;
        }

        true
    }
}

/// Catalog positions of the tools in the view, in catalog order
pub fn compute_view_indices(
    catalog: &Catalog,
    query: &ViewQuery,
    is_favorite: impl Fn(&str) -> bool,
) -> Vec<usize> {
    catalog
        .tools()
        .iter()
        .enumerate()
        .filter(|(_, tool)| query.matches(tool, &is_favorite))
        .map(|(index, _)| index)
        .collect()
}

/// Tools in the view, in catalog order
pub fn compute_view<'a>(
    catalog: &'a Catalog,
    query: &ViewQuery,
    is_favorite: impl Fn(&str) -> bool,
) -> Vec<&'a Tool> {
    catalog
        .tools()
        .iter()
        .filter(|tool| query.matches(tool, &is_favorite))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::from_tools(vec![
            Tool::new("a", "Alpha", "X", "u1"),
            Tool::new("b", "Beta", "Y", "u2").with_description("Vector editor"),
            Tool::new("c", "Gamma", "X", "u3").with_description("Notes"),
            Tool::new("d", "Delta", "Yarn", "u4"),
        ])
    }

    fn ids(tools: &[&Tool]) -> Vec<String> {
        tools.iter().map(|t| t.id.clone()).collect()
    }

    fn none(_: &str) -> bool {
        false
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = catalog();
        let view = compute_view(&catalog, &ViewQuery::new().category(CategoryFilter::named("Y")), none);
        assert_eq!(ids(&view), ["b"]);

        let view = compute_view(&catalog, &ViewQuery::new().category(CategoryFilter::named("x")), none);
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let catalog = catalog();
        assert_eq!(ids(&compute_view(&catalog, &ViewQuery::new().search("ALP"), none)), ["a"]);
        assert_eq!(ids(&compute_view(&catalog, &ViewQuery::new().search("vector"), none)), ["b"]);
        // "y" hits category "Y" and "Yarn"
        assert_eq!(ids(&compute_view(&catalog, &ViewQuery::new().search("y"), none)), ["b", "d"]);
        assert_eq!(compute_view(&catalog, &ViewQuery::new().search(""), none).len(), 4);
    }

    #[test]
    fn test_favorites_only() {
        let catalog = catalog();
        let favorites = ["c".to_string(), "b".to_string()];
        let is_favorite = |id: &str| favorites.iter().any(|f| f == id);

        let query = ViewQuery::new().favorites_only(true);
        assert_eq!(ids(&compute_view(&catalog, &query, is_favorite)), ["b", "c"]);

        let query = query.category(CategoryFilter::named("X"));
        assert_eq!(ids(&compute_view(&catalog, &query, is_favorite)), ["c"]);
    }

    #[test]
    fn test_indices_match_tools() {
        let catalog = catalog();
        let query = ViewQuery::new().category(CategoryFilter::named("X"));
        assert_eq!(compute_view_indices(&catalog, &query, none), vec![0, 2]);
    }

    fn arb_tool() -> impl Strategy<Value = Tool> {
        (
            "[a-z]{1,3}",
            "[A-Za-z ]{0,8}",
            proptest::option::of("[A-Za-z ]{0,8}"),
            prop::sample::select(vec!["X", "Y", "Zed"]),
        )
            .prop_map(|(id, name, description, category)| Tool {
                id,
                name,
                description,
                category: category.to_string(),
                url: "u".to_string(),
            })
    }

    proptest! {
        #[test]
        fn prop_search_result_is_ordered_subset(
            tools in prop::collection::vec(arb_tool(), 0..12),
            query in "[A-Za-z ]{0,3}",
            favorites_only in any::<bool>(),
        ) {
            let catalog = Catalog::from_tools(tools);
            let is_favorite = |id: &str| id.starts_with('a');
            let base = ViewQuery::new().favorites_only(favorites_only);

            let all = compute_view_indices(&catalog, &base, is_favorite);
            let narrowed = compute_view_indices(&catalog, &base.clone().search(&query), is_favorite);

            let mut rest = all.iter();
            for index in &narrowed {
                prop_assert!(rest.any(|i| i == index));
            }
        }

        #[test]
        fn prop_named_category_only_yields_that_category(
            tools in prop::collection::vec(arb_tool(), 0..12),
            category in prop::sample::select(vec!["X", "Y", "Zed"]),
            query in "[a-z]{0,2}",
        ) {
            let catalog = Catalog::from_tools(tools);
            let query = ViewQuery::new().search(&query);
            let named = query.clone().category(CategoryFilter::named(category));

            for tool in compute_view(&catalog, &named, |_| false) {
                prop_assert_eq!(tool.category.as_str(), category);
            }

            let all = compute_view(&catalog, &query.clone().category(CategoryFilter::All), |_| false);
            let unfiltered: Vec<&Tool> = catalog.tools().iter().filter(|t| query.matches(t, |_| false)).collect();
            prop_assert_eq!(all, unfiltered);
        }
    }
}
