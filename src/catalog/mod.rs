//! Criteria catalog
//!
//! The static list of filterable categories shown in the match-criteria
//! panel, in panel order. Each category carries the text the panel needs
//! (placeholder, search suggestions, explorer groups) and the flags that
//! decide which affordances a layout may show for it.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};

/// Category the explorer falls back to when a category has no groups of its own
pub const EXPLORER_FALLBACK: &str = "Job Title";

/// Suggestions offered by the attribute search bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestions {
    /// Search input placeholder
    pub placeholder: String,
    /// Heading above the suggestion list
    pub header: String,
    /// Recommended attributes, in display order
    #[serde(default)]
    pub items: Vec<String>,
}

/// One filterable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier and display title
    pub name: String,

    /// Placeholder shown on the empty add button
    pub placeholder: String,

    /// Whether the attribute explorer ("Browse all") is available
    #[serde(default)]
    pub supports_browse: bool,

    /// Whether the AND/OR boolean builder is available
    #[serde(default)]
    pub supports_boolean: bool,

    /// Noun used by the boolean builder ("skill", "job title", ...)
    #[serde(default = "default_term_noun")]
    pub term_noun: String,

    /// Search bar suggestions
    pub search: SearchSuggestions,

    /// Explorer sub-categories; empty means use the fallback category's
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explorer_groups: Vec<String>,
}

fn default_term_noun() -> String {
    "skill".to_string()
}

impl Category {
    /// Placeholder for a boolean builder input
    pub fn term_placeholder(&self) -> String {
        format!("Enter {}...", self.term_noun)
    }
}

/// Ordered, immutable set of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting empty or duplicate-named category lists
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(CriteriaError::Config(
                "catalog must define at least one category".into(),
            ));
        }
        for (i, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CriteriaError::Config(format!(
                    "category #{} has an empty name",
                    i + 1
                )));
            }
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(CriteriaError::Config(format!(
                    "duplicate category: {}",
                    category.name
                )));
            }
        }
        Ok(Self { categories })
    }

    /// The panel's built-in categories
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a category or fail with [`CriteriaError::UnknownCategory`]
    pub fn require(&self, name: &str) -> Result<&Category> {
        self.get(name)
            .ok_or_else(|| CriteriaError::UnknownCategory(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Recommended items for `name` whose text contains `query`, case-insensitively
    pub fn suggest(&self, name: &str, query: &str) -> Result<Vec<&str>> {
        let category = self.require(name)?;
        let needle = query.trim().to_lowercase();
        Ok(category
            .search
            .items
            .iter()
            .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect())
    }

    /// Explorer sub-categories for `name`
    ///
    /// Categories without their own groups borrow the fallback category's.
    pub fn explorer_groups(&self, name: &str) -> Result<&[String]> {
        let category = self.require(name)?;
        if !category.explorer_groups.is_empty() {
            return Ok(&category.explorer_groups);
        }
        Ok(self
            .get(EXPLORER_FALLBACK)
            .map(|c| c.explorer_groups.as_slice())
            .unwrap_or(&[]))
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
