//! V4: Add / Browse all buttons under the selections

use super::browse;
use crate::catalog::Category;
use crate::view::layout::{Affordance, VariantView};
use crate::view::variant::Variant;

pub struct FooterButtonsView;

impl VariantView for FooterButtonsView {
    fn variant(&self) -> Variant {
        Variant::V4
    }

    fn header_actions(&self, _category: &Category) -> Vec<Affordance> {
        Vec::new()
    }

    fn footer_actions(&self, category: &Category) -> Vec<Affordance> {
        std::iter::once(Affordance::Add).chain(browse(category)).collect()
    }
}
