//! V3: add and browse icons inline with the category title

use super::browse;
use crate::catalog::Category;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct InlineButtonsView;

impl VariantView for InlineButtonsView {
    fn variant(&self) -> Variant {
        Variant::V3
    }

    fn header_actions(&self, category: &Category) -> Vec<Affordance> {
        std::iter::once(Affordance::Add).chain(browse(category)).collect()
    }
}
