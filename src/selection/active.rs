//! Active qualifier per category
//!
//! The search bar remembers which qualifier the user last picked for a
//! category; new selections are filed under it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::qualifier::{Qualifier, QualifierMode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveQualifiers {
    by_category: BTreeMap<String, Qualifier>,
}

impl ActiveQualifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active qualifier for `category` in `mode`
    ///
    /// Falls back to the mode's default when nothing was picked, or when the
    /// remembered qualifier belongs to the other mode (after a layout switch).
    pub fn current(&self, category: &str, mode: QualifierMode) -> Qualifier {
        self.by_category
            .get(category)
            .filter(|q| q.mode() == mode)
            .copied()
            .unwrap_or_else(|| mode.default_qualifier())
    }

    pub fn set(&mut self, category: &str, qualifier: Qualifier) {
        self.by_category.insert(category.to_string(), qualifier);
    }
}
