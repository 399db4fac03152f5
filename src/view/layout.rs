//! Variant view trait
//!
//! All layouts render the same panel state. A [`VariantView`] only decides
//! where the affordances go and how groups are captioned; the shared
//! [`render`](super::render) walks the state.

use serde::Serialize;

use super::variant::Variant;
use crate::catalog::Category;
use crate::qualifier::{Qualifier, QualifierMode};

/// A clickable control attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affordance {
    /// Open the attribute search bar
    Add,
    /// Open the attribute explorer
    BrowseAll,
    /// Open the boolean builder
    Boolean,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::Add => "Add",
            Affordance::BrowseAll => "Browse all",
            Affordance::Boolean => "Boolean",
        }
    }
}

/// Layout strategy - implement once per variant
pub trait VariantView: Send + Sync {
    /// The variant this view draws
    fn variant(&self) -> Variant;

    /// Qualifier family of the layout
    fn mode(&self) -> QualifierMode {
        self.variant().mode()
    }

    /// Controls next to the category title
    fn header_actions(&self, category: &Category) -> Vec<Affordance>;

    /// Controls below the selections
    fn footer_actions(&self, category: &Category) -> Vec<Affordance> {
        let _ = category;
        Vec::new()
    }

    /// Show the category placeholder as an add button while nothing is selected
    fn placeholder_when_empty(&self) -> bool {
        false
    }

    /// Append an add button to the last qualifier group
    fn trailing_add(&self) -> bool {
        false
    }

    /// Extra buttons at the bottom of the open search bar
    fn search_actions(&self, category: &Category) -> Vec<Affordance> {
        let _ = category;
        Vec::new()
    }

    /// Show applied boolean expressions under the category
    fn shows_booleans(&self) -> bool {
        false
    }

    /// Caption under a group's tier dropdown
    fn caption(&self, category: &Category, qualifier: Qualifier) -> String {
        format!(
            "{} {}",
            qualifier.to_string().to_lowercase(),
            category.name.to_lowercase()
        )
    }

    /// Qualifier badge in the explorer header
    fn explorer_label(&self) -> &'static str {
        "Past/current"
    }
}
