//! HTML serialization of view nodes

use std::fmt::Write;

use crate::view::{Element, Node, Page};
use super::{RenderBackend, RenderedPage};

/// Serializes nodes to HTML
///
/// Output is deterministic: classes, then attributes in insertion order, then
/// the click binding as `data-action` / `data-arg`. Text and attribute values
/// are escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.write_node(&mut out, node);
        }
        out
    }

    pub fn render_node(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node);
        out
    }

    fn write_node(&self, out: &mut String, node: &Node) {
        match node {
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Element(element) => self.write_element(out, element),
        }
    }

    fn write_attr(out: &mut String, name: &str, value: &str) {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(value)
        );
    }

    fn write_element(&self, out: &mut String, element: &Element) {
        out.push('<');
        out.push_str(element.tag);

        if !element.classes.is_empty() {
            Self::write_attr(out, "class", &element.classes.join(" "));
        }
        for (name, value) in &element.attrs {
            Self::write_attr(out, name, value);
        }
        if let Some(event) = &element.on_click {
            let (action, arg) = event.action();
            Self::write_attr(out, "data-action", action);
            if let Some(arg) = arg {
                Self::write_attr(out, "data-arg", arg);
            }
        }
        out.push('>');

        for child in &element.children {
            self.write_node(out, child);
        }

        out.push_str("</");
        out.push_str(element.tag);
        out.push('>');
    }
}

impl RenderBackend for HtmlRenderer {
    type Output = RenderedPage;

    fn render(&mut self, page: &Page) -> RenderedPage {
        RenderedPage {
            theme: page.theme.as_str().to_string(),
            theme_toggle: self.render_node(&page.theme_toggle),
            favorites_toggle: self.render_node(&page.favorites_toggle),
            header: self.render_nodes(&page.header),
            category_list: self.render_nodes(&page.category_list),
            tool_grid: self.render_nodes(&page.tool_grid),
            loading: self.render_nodes(&page.loading),
            banner: self.render_nodes(&page.banner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Event;
    use crate::types::CategoryFilter;

    #[test]
    fn test_element_serialization() {
        let node: Node = Element::new("button")
            .class("active")
            .attr("title", "Add")
            .on_click(Event::SelectCategory(CategoryFilter::named("Design")))
            .child(Node::icon("fas fa-folder"))
            .text("Design")
            .into();

        assert_eq!(
            HtmlRenderer::new().render_node(&node),
            r#"<button class="active" title="Add" data-action="select-category" data-arg="Design"><i class="fas fa-folder"></i>Design</button>"#
        );
    }

    #[test]
    fn test_escaping() {
        let node: Node = Element::new("a")
            .attr("href", "https://x.io/?a=1&b=\"2\"")
            .text("<script>alert(1)</script>")
            .into();

        let html = HtmlRenderer::new().render_node(&node);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;2&quot;"));
    }

    #[test]
    fn test_event_without_argument() {
        let node: Node = Element::new("button").on_click(Event::ToggleTheme).into();
        assert_eq!(
            HtmlRenderer::new().render_node(&node),
            r#"<button data-action="toggle-theme"></button>"#
        );
    }
}
