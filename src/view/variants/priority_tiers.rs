//! V5: selections grouped by priority tier, recency shown per chip

use super::browse;
use crate::catalog::Category;
use crate::qualifier::Qualifier;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct PriorityTierView;

impl VariantView for PriorityTierView {
    fn variant(&self) -> Variant {
        Variant::V5
    }

    fn header_actions(&self, category: &Category) -> Vec<Affordance> {
        browse(category).into_iter().collect()
    }

    fn placeholder_when_empty(&self) -> bool {
        true
    }

    fn trailing_add(&self) -> bool {
        true
    }

    fn caption(&self, category: &Category, _qualifier: Qualifier) -> String {
        category.name.to_lowercase()
    }

    fn explorer_label(&self) -> &'static str {
        "Must Have"
    }
}
