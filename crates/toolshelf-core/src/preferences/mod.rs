//! User preferences that survive reloads: favorites and theme

mod favorites;
mod theme;

pub use favorites::FavoritesStore;
pub use theme::ThemeStore;
