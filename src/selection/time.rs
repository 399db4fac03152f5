//! Attribute selections keyed by recency
//!
//! Legacy layout state: `category → time qualifier → bucket`, each bucket an
//! ordered list of attribute labels plus a must-have/can-have flag.

use std::collections::BTreeMap;

use serde::Serialize;

use super::buckets::{BucketPayload, Buckets};
use crate::error::{CriteriaError, Result};
use crate::qualifier::TimeQualifier;

/// Attributes selected under one (category, time qualifier) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionBucket {
    /// `true` for must-have, `false` for can-have
    pub must_have: bool,
    /// Selected labels in selection order; duplicates are kept
    pub attributes: Vec<String>,
}

impl SelectionBucket {
    fn new() -> Self {
        Self {
            must_have: true,
            attributes: Vec::new(),
        }
    }

    /// Dropdown label for the bucket's flag
    pub fn tier_label(&self) -> &'static str {
        if self.must_have {
            "Must have"
        } else {
            "Can have"
        }
    }
}

impl BucketPayload for SelectionBucket {
    fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Selected attributes per category and time qualifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSelectionStore {
    buckets: Buckets<TimeQualifier, SelectionBucket>,
}

impl AttributeSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `attribute` to the (category, qualifier) bucket
    ///
    /// A new bucket starts as must-have. An existing bucket keeps its flag.
    pub fn select(
        &mut self,
        category: &str,
        qualifier: TimeQualifier,
        attribute: impl Into<String>,
    ) {
        let attribute = attribute.into();
        self.buckets
            .upsert(category, qualifier, SelectionBucket::new, |bucket| {
                bucket.attributes.push(attribute)
            });
    }

    /// Remove every entry labelled `attribute`; returns how many were removed
    ///
    /// Empty buckets and categories are pruned.
    pub fn remove(&mut self, category: &str, qualifier: TimeQualifier, attribute: &str) -> usize {
        self.buckets
            .update(category, qualifier, |bucket| {
                let before = bucket.attributes.len();
                bucket.attributes.retain(|a| a != attribute);
                before - bucket.attributes.len()
            })
            .unwrap_or(0)
    }

    /// Set the must-have flag of an existing bucket
    pub fn set_must_have(
        &mut self,
        category: &str,
        qualifier: TimeQualifier,
        value: bool,
    ) -> Result<()> {
        self.buckets
            .update(category, qualifier, |bucket| bucket.must_have = value)
            .ok_or_else(|| CriteriaError::MissingBucket {
                category: category.to_string(),
                qualifier: qualifier.to_string(),
            })
    }

    pub fn bucket(&self, category: &str, qualifier: TimeQualifier) -> Option<&SelectionBucket> {
        self.buckets.get(category, qualifier)
    }

    /// Buckets of a category in display precedence (Current, Recent, Past)
    pub fn category(&self, category: &str) -> Option<&BTreeMap<TimeQualifier, SelectionBucket>> {
        self.buckets.category(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.buckets.contains_category(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<TimeQualifier, SelectionBucket>)> {
        self.buckets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.bucket_count()
    }
}
