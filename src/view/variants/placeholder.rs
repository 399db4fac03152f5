//! V1: plain headers, explorer reached from inside the search bar

use super::browse;
use crate::catalog::Category;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct PlaceholderView;

impl VariantView for PlaceholderView {
    fn variant(&self) -> Variant {
        Variant::V1
    }

    fn header_actions(&self, _category: &Category) -> Vec<Affordance> {
        Vec::new()
    }

    fn placeholder_when_empty(&self) -> bool {
        true
    }

    fn trailing_add(&self) -> bool {
        true
    }

    fn search_actions(&self, category: &Category) -> Vec<Affordance> {
        browse(category).into_iter().collect()
    }
}
