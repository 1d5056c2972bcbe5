//! Projection of application state into page targets

use crate::app::{AppState, Event};
use crate::config::Labels;
use crate::types::{CategoryFilter, Theme, Tool};
use super::node::{Element, Node};

/// One fully rendered frame: every target's content, replaced as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Document `data-theme`
    pub theme: Theme,
    pub theme_toggle: Node,
    pub favorites_toggle: Node,
    pub header: Vec<Node>,
    pub category_list: Vec<Node>,
    pub tool_grid: Vec<Node>,
    /// Spinner while loading, empty otherwise
    pub loading: Vec<Node>,
    /// Error banner, empty when none is shown
    pub banner: Vec<Node>,
}

/// Build the page for the current state
pub fn build_page(state: &AppState, labels: &Labels) -> Page {
    let tools: Vec<&Tool> = state.visible_tools().collect();

    Page {
        theme: state.theme.get(),
        theme_toggle: theme_toggle(state.theme.get()),
        favorites_toggle: favorites_toggle(state.selection.showing_favorites),
        header: header(state, tools.len(), labels),
        category_list: category_list(state, labels),
        tool_grid: tool_grid(state, &tools, labels),
        loading: if state.loading.is_visible() {
            vec![Element::new("div").class("spinner").into()]
        } else {
            Vec::new()
        },
        banner: state
            .banner
            .current()
            .map(|banner| {
                Element::new("div")
                    .class("error-message")
                    .child(Node::icon("fas fa-exclamation-circle"))
                    .text(banner.message)
                    .into()
            })
            .into_iter()
            .collect(),
    }
}

fn theme_toggle(theme: Theme) -> Node {
    Element::new("button")
        .class("theme-toggle")
        .on_click(Event::ToggleTheme)
        .child(Node::icon(theme.toggle_icon()))
        .into()
}

fn favorites_toggle(active: bool) -> Node {
    Element::new("button")
        .class("favorites-toggle")
        .class_if(active, "active")
        .on_click(Event::ToggleFavoritesView)
        .child(Node::icon("fas fa-star"))
        .into()
}

fn header(state: &AppState, count: usize, labels: &Labels) -> Vec<Node> {
    let (icon, title) = if state.selection.showing_favorites {
        ("fas fa-star", labels.favorites_title.to_string())
    } else {
        match &state.selection.current_category {
            CategoryFilter::All => ("fas fa-globe", labels.all_categories.to_string()),
            CategoryFilter::Named(name) => (
                "fas fa-folder",
                format!("{}{}", labels.category_title_prefix, name),
            ),
        }
    };

    vec![
        Node::icon(icon),
        Node::text(format!(" {} ", title)),
        Element::new("span").text(format!("({})", count)).into(),
    ]
}

fn category_entry(icon: &str, name: &str, count: usize, active: bool, filter: CategoryFilter) -> Node {
    Element::new("li")
        .child(
            Element::new("button")
                .class_if(active, "active")
                .on_click(Event::SelectCategory(filter))
                .child(Node::icon(icon))
                .text(name)
                .child(Element::new("span").text(format!("({})", count))),
        )
        .into()
}

fn category_list(state: &AppState, labels: &Labels) -> Vec<Node> {
    let current = &state.selection.current_category;
    let catalog = &state.catalog;

    let mut entries = Vec::with_capacity(catalog.categories().len() + 1);
    entries.push(category_entry(
        "fas fa-globe",
        labels.all_categories,
        catalog.len(),
        current.is_all(),
        CategoryFilter::All,
    ));
    entries.extend(catalog.categories().iter().map(|name| {
        let filter = CategoryFilter::named(name.as_str());
        category_entry(
            "fas fa-folder",
            name,
            catalog.category_count(name),
            *current == filter,
            filter,
        )
    }));
    entries
}

fn tool_card(tool: &Tool, favorite: bool, labels: &Labels) -> Node {
    let body = Element::new("div")
        .child(
            Element::new("span")
                .class("category-tag")
                .child(Node::icon("fas fa-tag"))
                .text(tool.category.as_str()),
        )
        .child(Element::new("h3").text(tool.name.as_str()))
        .child(Element::new("p").text(tool.description_text().unwrap_or(labels.no_description)));

    let actions = Element::new("div")
        .class("tool-actions")
        .child(
            Element::new("a")
                .attr("href", tool.url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(Node::icon("fas fa-external-link-alt"))
                .text(labels.visit_site),
        )
        .child(
            Element::new("button")
                .class_if(favorite, "favorite")
                .attr(
                    "title",
                    if favorite { labels.remove_favorite } else { labels.add_favorite },
                )
                .on_click(Event::ToggleFavorite(tool.id.clone()))
                .child(Node::icon("fas fa-star")),
        );

    Element::new("div")
        .class("tool-card")
        .child(body)
        .child(actions)
        .into()
}

fn tool_grid(state: &AppState, tools: &[&Tool], labels: &Labels) -> Vec<Node> {
    if tools.is_empty() {
        return vec![Element::new("div")
            .class("no-tools")
            .child(Node::icon("fas fa-search"))
            .child(Element::new("p").text(labels.no_results))
            .into()];
    }

    tools
        .iter()
        .map(|tool| tool_card(tool, state.favorites.is_favorite(&tool.id), labels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::logging::NoOpLogger;
    use crate::preferences::{FavoritesStore, ThemeStore};
    use crate::storage::MemoryKeyValueStore;
    use crate::types::Catalog;

    fn state() -> AppState {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([("favorites", r#"["b"]"#)]));
        let favorites = FavoritesStore::load(storage.clone(), "favorites", Arc::new(NoOpLogger));
        let theme = ThemeStore::load(storage, "theme", Arc::new(NoOpLogger));
        let mut state = AppState::new(favorites, theme);
        state.catalog = Catalog::from_tools(vec![
            Tool::new("a", "Alpha", "X", "https://a.example"),
            Tool::new("b", "Beta", "Y", "https://b.example").with_description("Second"),
            Tool::new("c", "Gamma", "X", "https://c.example"),
        ]);
        state.visible = vec![0, 1, 2];
        state
    }

    fn element(node: &Node) -> &Element {
        node.as_element().unwrap()
    }

    #[test]
    fn test_category_list_counts_whole_catalog() {
        let mut state = state();
        state.selection.current_category = CategoryFilter::named("X");
        state.visible = vec![0];

        let page = build_page(&state, &Labels::EN);
        let texts: Vec<String> = page.category_list.iter().map(Node::text_content).collect();
        assert_eq!(texts, ["All(3)", "X(2)", "Y(1)"]);

        let active: Vec<bool> = page
            .category_list
            .iter()
            .map(|li| element(&element(li).children[0]).has_class("active"))
            .collect();
        assert_eq!(active, [false, true, false]);
    }

    #[test]
    fn test_tool_card_contents() {
        let page = build_page(&state(), &Labels::EN);
        assert_eq!(page.tool_grid.len(), 3);

        let alpha = element(&page.tool_grid[0]);
        assert_eq!(alpha.find_class("category-tag").map(|e| Node::Element(e.clone()).text_content()), Some("X".to_string()));
        assert!(Node::Element(alpha.clone()).text_content().contains("No description"));

        let actions = alpha.find_class("tool-actions").unwrap();
        let link = element(&actions.children[0]);
        assert_eq!(link.get_attr("href"), Some("https://a.example"));
        assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));

        let star = element(&actions.children[1]);
        assert!(!star.has_class("favorite"));
        assert_eq!(star.get_attr("title"), Some("Add to favorites"));
        assert_eq!(star.on_click, Some(Event::ToggleFavorite("a".into())));

        let beta = element(&page.tool_grid[1]);
        let beta_star = element(&beta.find_class("tool-actions").unwrap().children[1]);
        assert!(beta_star.has_class("favorite"));
        assert_eq!(beta_star.get_attr("title"), Some("Remove from favorites"));
    }

    #[test]
    fn test_empty_view_shows_placeholder() {
        let mut state = state();
        state.visible.clear();

        let page = build_page(&state, &Labels::EN);
        assert_eq!(page.tool_grid.len(), 1);
        assert!(element(&page.tool_grid[0]).has_class("no-tools"));
        assert_eq!(page.header[2].text_content(), "(0)");
    }

    #[test]
    fn test_header_variants() {
        let mut state = state();
        let page = build_page(&state, &Labels::EN);
        assert_eq!(element(&page.header[0]).classes, ["fas fa-globe"]);
        assert_eq!(page.header[1].text_content(), " All ");

        state.selection.current_category = CategoryFilter::named("X");
        state.visible = vec![0, 2];
        let page = build_page(&state, &Labels::EN);
        assert_eq!(page.header[1].text_content(), " Category: X ");
        assert_eq!(page.header[2].text_content(), "(2)");

        state.selection.showing_favorites = true;
        let page = build_page(&state, &Labels::ZH_CN);
        assert_eq!(element(&page.header[0]).classes, ["fas fa-star"]);
        assert_eq!(page.header[1].text_content(), " 收藏的工具 ");
        assert!(element(&page.favorites_toggle).has_class("active"));
    }

    #[test]
    fn test_loading_and_banner_targets() {
        let state = state();
        let page = build_page(&state, &Labels::EN);
        assert!(page.loading.is_empty());
        assert!(page.banner.is_empty());

        let _guard = state.loading.acquire();
        state.banner.show("Failed", std::time::Duration::from_secs(3));
        let page = build_page(&state, &Labels::EN);
        assert_eq!(page.loading.len(), 1);
        assert_eq!(page.banner[0].text_content(), "Failed");
    }
}
