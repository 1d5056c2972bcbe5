//! In-memory document that mirrors the host page

use std::collections::BTreeMap;

use crate::view::Page;
use super::html::HtmlRenderer;
use super::RenderBackend;

/// Named regions of the host page whose content is replaced on render
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    ThemeToggle,
    FavoritesToggle,
    Header,
    CategoryList,
    ToolGrid,
    Loading,
    Banner,
}

impl Target {
    pub const ALL: [Target; 7] = [
        Target::ThemeToggle,
        Target::FavoritesToggle,
        Target::Header,
        Target::CategoryList,
        Target::ToolGrid,
        Target::Loading,
        Target::Banner,
    ];

    /// Element id of the region in the host page
    pub fn element_id(&self) -> &'static str {
        match self {
            Target::ThemeToggle => "themeToggle",
            Target::FavoritesToggle => "showFavorites",
            Target::Header => "toolsTitle",
            Target::CategoryList => "categoryList",
            Target::ToolGrid => "toolsGrid",
            Target::Loading => "loading",
            Target::Banner => "errorBanner",
        }
    }
}

/// Keeps the last markup written to each target, like `innerHTML`
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    renderer: HtmlRenderer,
    data_theme: Option<String>,
    targets: BTreeMap<Target, String>,
    renders: usize,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup of `target`; empty before the first render
    pub fn inner_html(&self, target: Target) -> &str {
        self.targets.get(&target).map(String::as_str).unwrap_or("")
    }

    /// Root `data-theme` attribute
    pub fn data_theme(&self) -> Option<&str> {
        self.data_theme.as_deref()
    }

    /// Number of renders applied so far
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// The whole document as one string, targets in a fixed order
    pub fn snapshot(&self) -> String {
        let mut out = format!("<html data-theme=\"{}\">", self.data_theme.as_deref().unwrap_or(""));
        for target in Target::ALL {
            out.push_str(&format!(
                "<div id=\"{}\">{}</div>",
                target.element_id(),
                self.inner_html(target)
            ));
        }
        out.push_str("</html>");
        out
    }
}

impl RenderBackend for HtmlDocument {
    type Output = ();

    fn render(&mut self, page: &Page) {
        let rendered = self.renderer.render(page);
        self.data_theme = Some(rendered.theme);

        self.targets.insert(Target::ThemeToggle, rendered.theme_toggle);
        self.targets.insert(Target::FavoritesToggle, rendered.favorites_toggle);
        self.targets.insert(Target::Header, rendered.header);
        self.targets.insert(Target::CategoryList, rendered.category_list);
        self.targets.insert(Target::ToolGrid, rendered.tool_grid);
        self.targets.insert(Target::Loading, rendered.loading);
        self.targets.insert(Target::Banner, rendered.banner);
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let document = HtmlDocument::new();
        assert_eq!(document.inner_html(Target::ToolGrid), "");
        assert_eq!(document.data_theme(), None);
        assert_eq!(document.renders(), 0);
        assert!(document.snapshot().contains("id=\"toolsGrid\""));
    }
}
