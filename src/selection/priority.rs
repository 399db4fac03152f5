//! Attribute selections keyed by priority tier
//!
//! Tiered layout state: `category → tier → entries`. Recency moves from the
//! bucket key onto each entry, so an entry can be re-tiered or re-dated
//! without touching its siblings.
//!
//! Every entry carries the store-wide sequence number it was selected with
//! and buckets stay sorted by it. Moving an entry out of a tier and back
//! therefore puts it back where it was.

use std::collections::BTreeMap;

use serde::Serialize;

use super::buckets::{BucketPayload, Buckets};
use crate::error::{CriteriaError, Result};
use crate::qualifier::{PriorityTier, TimeQualifier};

/// One selected attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_qualifier: Option<TimeQualifier>,
    #[serde(skip)]
    order: u64,
}

impl AttributeEntry {
    fn matches(&self, label: &str, time_qualifier: Option<TimeQualifier>) -> bool {
        self.label == label && self.time_qualifier == time_qualifier
    }
}

/// Entries under one (category, tier) pair, sorted by selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierBucket {
    entries: Vec<AttributeEntry>,
}

impl TierBucket {
    pub fn entries(&self) -> &[AttributeEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_ordered(&mut self, entry: AttributeEntry) {
        let pos = self.entries.partition_point(|e| e.order < entry.order);
        self.entries.insert(pos, entry);
    }
}

impl BucketPayload for TierBucket {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Selected attributes per category and priority tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriorityStore {
    buckets: Buckets<PriorityTier, TierBucket>,
    #[serde(skip)]
    next_order: u64,
}

impl PriorityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute to the (category, tier) bucket
    pub fn select(
        &mut self,
        category: &str,
        tier: PriorityTier,
        label: impl Into<String>,
        time_qualifier: Option<TimeQualifier>,
    ) {
        let entry = AttributeEntry {
            label: label.into(),
            time_qualifier,
            order: self.next_order,
        };
        self.next_order += 1;
        self.buckets
            .upsert(category, tier, TierBucket::default, |bucket| {
                bucket.insert_ordered(entry)
            });
    }

    /// Remove every entry labelled `label`; returns how many were removed
    pub fn remove(&mut self, category: &str, tier: PriorityTier, label: &str) -> usize {
        self.buckets
            .update(category, tier, |bucket| {
                let before = bucket.entries.len();
                bucket.entries.retain(|e| e.label != label);
                before - bucket.entries.len()
            })
            .unwrap_or(0)
    }

    /// Move one entry from `from` to `to`, keeping its time qualifier
    ///
    /// The first entry matching both `label` and `time_qualifier` moves. The
    /// source bucket is pruned if it empties. Moving within the same tier
    /// only checks that the entry exists.
    pub fn change_priority(
        &mut self,
        category: &str,
        from: PriorityTier,
        label: &str,
        time_qualifier: Option<TimeQualifier>,
        to: PriorityTier,
    ) -> Result<()> {
        let index = self.find(category, from, label, |e| e.matches(label, time_qualifier))?;
        if from == to {
            return Ok(());
        }

        let entry = self
            .buckets
            .update(category, from, |bucket| bucket.entries.remove(index))
            .ok_or_else(|| missing_bucket(category, from))?;
        tracing::debug!(category, label, %from, %to, "entry re-tiered");
        self.buckets
            .upsert(category, to, TierBucket::default, |bucket| {
                bucket.insert_ordered(entry)
            });
        Ok(())
    }

    /// Rewrite the time qualifier of the first entry labelled `label`
    pub fn change_time_qualifier(
        &mut self,
        category: &str,
        tier: PriorityTier,
        label: &str,
        time_qualifier: TimeQualifier,
    ) -> Result<()> {
        let index = self.find(category, tier, label, |e| e.label == label)?;
        self.buckets
            .update(category, tier, |bucket| {
                bucket.entries[index].time_qualifier = Some(time_qualifier)
            })
            .ok_or_else(|| missing_bucket(category, tier))
    }

    pub fn bucket(&self, category: &str, tier: PriorityTier) -> Option<&TierBucket> {
        self.buckets.get(category, tier)
    }

    /// Buckets of a category in tier precedence
    pub fn category(&self, category: &str) -> Option<&BTreeMap<PriorityTier, TierBucket>> {
        self.buckets.category(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.buckets.contains_category(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<PriorityTier, TierBucket>)> {
        self.buckets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn find(
        &self,
        category: &str,
        tier: PriorityTier,
        label: &str,
        pred: impl Fn(&AttributeEntry) -> bool,
    ) -> Result<usize> {
        let bucket = self
            .buckets
            .get(category, tier)
            .ok_or_else(|| missing_bucket(category, tier))?;
        bucket.entries.iter().position(pred).ok_or_else(|| {
            CriteriaError::MissingEntry {
                category: category.to_string(),
                qualifier: tier.to_string(),
                label: label.to_string(),
            }
        })
    }
}

fn missing_bucket(category: &str, tier: PriorityTier) -> CriteriaError {
    CriteriaError::MissingBucket {
        category: category.to_string(),
        qualifier: tier.to_string(),
    }
}
