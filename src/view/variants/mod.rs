//! Built-in layout strategies, one per [`Variant`](super::Variant)

mod boolean_builder;
mod browse_link;
mod footer_buttons;
mod inline_buttons;
mod placeholder;
mod priority_tiers;

pub use boolean_builder::BooleanBuilderView;
pub use browse_link::BrowseLinkView;
pub use footer_buttons::FooterButtonsView;
pub use inline_buttons::InlineButtonsView;
pub use placeholder::PlaceholderView;
pub use priority_tiers::PriorityTierView;

use super::layout::Affordance;
use crate::catalog::Category;

/// `Browse all` when the category has an explorer
fn browse(category: &Category) -> Option<Affordance> {
    category.supports_browse.then_some(Affordance::BrowseAll)
}
