//! V6: V2's header link plus the AND/OR boolean builder

use super::browse;
use crate::catalog::Category;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct BooleanBuilderView;

impl VariantView for BooleanBuilderView {
    fn variant(&self) -> Variant {
        Variant::V6
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

    fn search_actions(&self, category: &Category) -> Vec<Affordance> {
        category
            .supports_boolean
            .then_some(Affordance::Boolean)
            .into_iter()
            .collect()
    }

    fn shows_booleans(&self) -> bool {
        true
    }
}
