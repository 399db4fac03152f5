#![forbid(unsafe_code)]

//! # Match Criteria
//!
//! State model for a recruiting-search match-criteria panel.
//!
//! Selections are filed per category under a qualifier: a recency
//! (`Current`, `Recent`, `Past`) in the legacy layouts, a priority tier
//! (`must-have`, `can-have`, `excluded`) in the tiered one. Boolean
//! AND-of-OR expressions can be built per category. No store ever holds an
//! empty bucket or an empty category.
//!
//! ## Example
//!
//! ```rust
//! use criteria::{Action, FilterPanel, TimeQualifier};
//!
//! let mut panel = FilterPanel::default();
//! panel.dispatch(Action::Select {
//!     category: "Skills".into(),
//!     label: "Rust".into(),
//!     qualifier: None,
//! })?;
//!
//! let bucket = panel.selections().bucket("Skills", TimeQualifier::Current).unwrap();
//! assert_eq!(bucket.attributes, vec!["Rust"]);
//! # Ok::<(), criteria::CriteriaError>(())
//! ```

pub mod boolean;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod overlay;
pub mod panel;
pub mod qualifier;
pub mod selection;
pub mod session;
pub mod view;

// Re-exports
pub use boolean::{
    AppliedBoolean, BooleanDraft, BooleanExpression, BooleanStore, DraftState, OrGroup,
};
pub use catalog::{Category, CategoryCatalog, SearchSuggestions};
pub use config::Config;
pub use error::{CriteriaError, Result};
pub use overlay::{CloseDelays, Dismissal, Overlay, OverlayRegister};
pub use panel::{Action, FilterPanel, PanelSnapshot};
pub use qualifier::{PriorityTier, Qualifier, QualifierMode, TimeQualifier};
pub use selection::{
    ActiveQualifiers, AttributeEntry, AttributeSelectionStore, PriorityStore, SelectionBucket,
    TierBucket,
};
pub use session::{replay, ReplayReport, SessionScript, StepRecord};
pub use view::{chips, render, Chip, PanelView, Variant, VariantView, ViewRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
