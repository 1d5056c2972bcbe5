//! Tool records and the loaded catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One catalog entry: a linked external resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Identifier, unique within a catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category tag
    pub category: String,
    /// Outbound link
    pub url: String,
}

impl Tool {
    /// Create a tool without a description
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: category.into(),
            url: url.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description when present and non-empty
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Immutable, ordered list of tools plus the derived category set
///
/// Tool ids are assumed unique; duplicates are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog (the degraded state after a failed load)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, deriving categories in first-seen order
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        let mut categories = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for tool in &tools {
            if tool.category.is_empty() {
                continue;
            }
            let count = counts.entry(tool.category.clone()).or_insert(0);
            if *count == 0 {
                categories.push(tool.category.clone());
            }
            *count += 1;
        }

        Self {
            tools,
            categories,
            counts,
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    /// Position of the first tool with `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tools.iter().position(|t| t.id == id)
    }

    /// Distinct non-empty categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of tools in `category` across the whole catalog
    pub fn category_count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_deserialize_optional_description() {
        let with: Tool = serde_json::from_str(
            r#"{"id":"1","name":"Figma","description":"Design","category":"Design","url":"https://figma.com"}"#,
        )
        .unwrap();
        assert_eq!(with.description.as_deref(), Some("Design"));

        let without: Tool = serde_json::from_str(
            r#"{"id":"2","name":"Notion","category":"Docs","url":"https://notion.so"}"#,
        )
        .unwrap();
        assert!(without.description.is_none());

        let null: Tool = serde_json::from_str(
            r#"{"id":"3","name":"Canva","description":null,"category":"Design","url":"u"}"#,
        )
        .unwrap();
        assert!(null.description.is_none());
    }

    #[test]
    fn test_description_text_treats_empty_as_absent() {
        let tool = Tool::new("1", "a", "c", "u").with_description("");
        assert_eq!(tool.description_text(), None);
    }

    #[test]
    fn test_categories_first_seen_order_and_counts() {
        let catalog = Catalog::from_tools(vec![
            Tool::new("1", "a", "Y", "u"),
            Tool::new("2", "b", "X", "u"),
            Tool::new("3", "c", "Y", "u"),
            Tool::new("4", "d", "", "u"),
        ]);

        assert_eq!(catalog.categories(), &["Y".to_string(), "X".to_string()]);
        assert_eq!(catalog.category_count("Y"), 2);
        assert_eq!(catalog.category_count("X"), 1);
        assert_eq!(catalog.category_count(""), 0);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.position("3"), Some(2));
    }
}
