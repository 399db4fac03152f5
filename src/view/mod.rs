//! Presentation model
//!
//! Six layouts share one panel state. Each layout is a [`VariantView`]
//! registered in a [`ViewRegistry`]; [`render`] walks the state once and
//! asks the view where affordances go, producing a [`PanelView`] that a
//! front end (or the CLI's text renderer) draws.

pub mod chips;
pub mod layout;
pub mod registry;
pub mod render;
pub mod variant;
pub mod variants;

pub use chips::{chips, Chip};
pub use layout::{Affordance, VariantView};
pub use registry::ViewRegistry;
pub use render::{
    render, BooleanEditorView, BooleanView, ChipView, ExplorerView, GroupView, PanelState,
    PanelView, SearchView, SectionView, BOOLEAN_ACTIVE_LABEL, BOOLEAN_NICE_TO_HAVE_LABEL,
};
pub use variant::Variant;
