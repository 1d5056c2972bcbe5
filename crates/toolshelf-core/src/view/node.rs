//! Typed render nodes

use crate::app::Event;

/// A node in the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Font icon: `<i class="...">`
    pub fn icon(class: &str) -> Self {
        Element::new("i").class(class).into()
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

/// An element with classes, attributes, an optional click binding and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub on_click: Option<Event>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Add a class; empty strings are ignored
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Add a class only when `condition` holds
    pub fn class_if(self, condition: bool, class: &str) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn on_click(mut self, event: Event) -> Self {
        self.on_click = Some(event);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the first descendant element with `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.children.iter().filter_map(Node::as_element).find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_class(class)
            }
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_queries() {
        let node: Node = Element::new("button")
            .class("active")
            .class("")
            .class_if(false, "favorite")
            .attr("title", "Add")
            .on_click(Event::ToggleTheme)
            .child(Node::icon("fas fa-moon"))
            .text(" Theme ")
            .child(Element::new("span").class("count").text("(3)"))
            .into();

        let element = node.as_element().unwrap();
        assert_eq!(element.classes, vec!["active".to_string()]);
        assert_eq!(element.get_attr("title"), Some("Add"));
        assert_eq!(element.on_click, Some(Event::ToggleTheme));
        assert_eq!(node.text_content(), " Theme (3)");
        assert_eq!(element.find_class("count").map(|e| e.tag), Some("span"));
    }
}
