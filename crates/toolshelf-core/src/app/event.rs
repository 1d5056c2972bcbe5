//! User events

use crate::types::CategoryFilter;

/// Something the user did on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Search box input changed
    Search(String),
    /// Category button clicked
    SelectCategory(CategoryFilter),
    /// Favorites-view toggle clicked
    ToggleFavoritesView,
    /// Star on a tool card clicked
    ToggleFavorite(String),
    /// Theme toggle clicked
    ToggleTheme,
}

impl Event {
    /// Wire form of the event: action name and optional argument
    ///
    /// Rendered markup carries these as `data-action` / `data-arg`, and the
    /// host sends them back through `from_action`.
    pub fn action(&self) -> (&'static str, Option<&str>) {
        match self {
            Event::Search(query) => ("search", Some(query.as_str())),
            Event::SelectCategory(CategoryFilter::All) => ("show-all", None),
            Event::SelectCategory(CategoryFilter::Named(name)) => ("select-category", Some(name.as_str())),
            Event::ToggleFavoritesView => ("toggle-favorites-view", None),
            Event::ToggleFavorite(id) => ("toggle-favorite", Some(id.as_str())),
            Event::ToggleTheme => ("toggle-theme", None),
        }
    }

    /// Decode an action sent back by the host
    pub fn from_action(action: &str, arg: Option<&str>) -> Option<Self> {
        let event = match (action, arg) {
            ("search", arg) => Event::Search(arg.unwrap_or_default().to_string()),
            ("show-all", _) => Event::SelectCategory(CategoryFilter::All),
            ("select-category", Some(name)) => Event::SelectCategory(CategoryFilter::named(name)),
            ("toggle-favorites-view", _) => Event::ToggleFavoritesView,
            ("toggle-favorite", Some(id)) => Event::ToggleFavorite(id.to_string()),
            ("toggle-theme", _) => Event::ToggleTheme,
            _ => return None,
        };
        Some(event)
    }
}
