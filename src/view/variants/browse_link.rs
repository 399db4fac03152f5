//! V2: the category header doubles as a "Browse all" link

use super::browse;
use crate::catalog::Category;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct BrowseLinkView;

impl VariantView for BrowseLinkView {
    fn variant(&self) -> Variant {
        Variant::V2
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
}
