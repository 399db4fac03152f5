//! Two-level bucket map with the prune-on-empty invariant
//!
//! `category → qualifier → payload`. A qualifier key exists only while its
//! payload is non-empty and a category key exists only while it has at least
//! one qualifier. Every mutation that can empty a payload goes through
//! [`Buckets::upsert`], [`Buckets::update`] or [`Buckets::remove`], which
//! restore the invariant before returning.

use std::collections::BTreeMap;

use serde::Serialize;

/// Payload stored under one (category, qualifier) pair
pub trait BucketPayload {
    /// An empty payload is pruned from the map
    fn is_empty(&self) -> bool;
}

/// Ordered `category → qualifier → payload` map that never holds empty containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Buckets<Q: Ord, P> {
    inner: BTreeMap<String, BTreeMap<Q, P>>,
}

impl<Q: Ord, P> Default for Buckets<Q, P> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl<Q: Ord + Copy + std::fmt::Debug, P: BucketPayload> Buckets<Q, P> {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload under (category, qualifier)
    pub fn get(&self, category: &str, qualifier: Q) -> Option<&P> {
        self.inner.get(category).and_then(|q| q.get(&qualifier))
    }

    /// All buckets of a category, in qualifier precedence
    pub fn category(&self, category: &str) -> Option<&BTreeMap<Q, P>> {
        self.inner.get(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.inner.contains_key(category)
    }

    /// Categories in name order with their buckets
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<Q, P>)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of (category, qualifier) buckets
    pub fn bucket_count(&self) -> usize {
        self.inner.values().map(BTreeMap::len).sum()
    }

    /// Apply `f` to the bucket, creating it with `init` when missing
    pub fn upsert<R>(
        &mut self,
        category: &str,
        qualifier: Q,
        init: impl FnOnce() -> P,
        f: impl FnOnce(&mut P) -> R,
    ) -> R {
        let qualifiers = self.inner.entry(category.to_string()).or_default();
        let payload = qualifiers.entry(qualifier).or_insert_with(|| {
            tracing::debug!(category, ?qualifier, "bucket created");
            init()
        });
        let out = f(payload);
        self.prune(category, qualifier);
        out
    }

    /// Apply `f` to an existing bucket; `None` when there is no such bucket
    pub fn update<R>(
        &mut self,
        category: &str,
        qualifier: Q,
        f: impl FnOnce(&mut P) -> R,
    ) -> Option<R> {
        let payload = self.inner.get_mut(category)?.get_mut(&qualifier)?;
        let out = f(payload);
        self.prune(category, qualifier);
        Some(out)
    }

    /// Remove a whole bucket
    pub fn remove(&mut self, category: &str, qualifier: Q) -> Option<P> {
        let qualifiers = self.inner.get_mut(category)?;
        let removed = qualifiers.remove(&qualifier);
        if qualifiers.is_empty() {
            self.inner.remove(category);
            tracing::debug!(category, "category pruned");
        }
        removed
    }

    fn prune(&mut self, category: &str, qualifier: Q) {
        let Some(qualifiers) = self.inner.get_mut(category) else {
            return;
        };
        if qualifiers.get(&qualifier).is_some_and(BucketPayload::is_empty) {
            qualifiers.remove(&qualifier);
            tracing::debug!(category, ?qualifier, "bucket pruned");
        }
        if qualifiers.is_empty() {
            self.inner.remove(category);
            tracing::debug!(category, "category pruned");
        }
    }
}

impl<T> BucketPayload for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
