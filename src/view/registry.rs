//! Variant → layout strategy lookup

use std::collections::HashMap;

use super::layout::VariantView;
use super::variant::Variant;
use super::variants::{
    BooleanBuilderView, BrowseLinkView, FooterButtonsView, InlineButtonsView, PlaceholderView,
    PriorityTierView,
};
use crate::error::{CriteriaError, Result};

/// Holds one [`VariantView`] per variant
pub struct ViewRegistry {
    views: HashMap<Variant, Box<dyn VariantView>>,
}

impl ViewRegistry {
    /// Registry with all built-in layouts
    pub fn new() -> Self {
        let mut views: HashMap<Variant, Box<dyn VariantView>> = HashMap::new();

        views.insert(Variant::V1, Box::new(PlaceholderView));
        views.insert(Variant::V2, Box::new(BrowseLinkView));
        views.insert(Variant::V3, Box::new(InlineButtonsView));
        views.insert(Variant::V4, Box::new(FooterButtonsView));
        views.insert(Variant::V5, Box::new(PriorityTierView));
        views.insert(Variant::V6, Box::new(BooleanBuilderView));

        Self { views }
    }

    /// Replace the layout for the view's own variant
    pub fn register(&mut self, view: Box<dyn VariantView>) {
        self.views.insert(view.variant(), view);
    }

    pub fn get(&self, variant: Variant) -> Result<&dyn VariantView> {
        self.views
            .get(&variant)
            .map(|view| &**view)
            .ok_or_else(|| CriteriaError::UnknownVariant(variant.to_string()))
    }

    /// Registered variants in toggle order
    pub fn variants(&self) -> Vec<Variant> {
        Variant::all()
            .iter()
            .copied()
            .filter(|v| self.views.contains_key(v))
            .collect()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("variants", &self.variants())
            .finish()
    }
}
