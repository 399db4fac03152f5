//! Applied boolean expressions
//!
//! `category → qualifier → expression`, sharing the selection stores'
//! pruning: an expression that loses its last term is removed together with
//! its qualifier key, and an emptied category goes with it.

use std::collections::BTreeMap;

use serde::Serialize;

use super::BooleanExpression;
use crate::error::{CriteriaError, Result};
use crate::qualifier::Qualifier;
use crate::selection::{BucketPayload, Buckets};

/// A committed expression and whether it is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedBoolean {
    pub expression: BooleanExpression,
    pub must_have: bool,
}

impl Default for AppliedBoolean {
    fn default() -> Self {
        Self {
            expression: BooleanExpression::default(),
            must_have: true,
        }
    }
}

impl BucketPayload for AppliedBoolean {
    fn is_empty(&self) -> bool {
        self.expression.or_groups.is_empty()
    }
}

/// Applied expressions keyed by category and qualifier
///
/// Each entry starts out must-have; [`BooleanStore::set_must_have`] demotes it
/// to nice-to-have without touching the expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BooleanStore {
    buckets: Buckets<Qualifier, AppliedBoolean>,
}

impl BooleanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit an expression under (category, qualifier)
    ///
    /// Blank terms and empty groups are stripped first. Returns `false`, and
    /// leaves the store alone, when nothing is left to commit. An existing
    /// expression under the same key is replaced and keeps its must-have flag.
    pub fn apply(
        &mut self,
        category: &str,
        qualifier: Qualifier,
        expression: &BooleanExpression,
    ) -> bool {
        let filtered = expression.blank_filtered();
        if filtered.is_empty() {
            return false;
        }
        self.buckets
            .upsert(category, qualifier, AppliedBoolean::default, |slot| {
                slot.expression = filtered
            });
        true
    }

    /// Drop the whole expression
    pub fn remove_group(
        &mut self,
        category: &str,
        qualifier: Qualifier,
    ) -> Option<BooleanExpression> {
        self.buckets
            .remove(category, qualifier)
            .map(|applied| applied.expression)
    }

    /// Replace an existing expression; an expression with no terms removes it
    pub fn update_group(
        &mut self,
        category: &str,
        qualifier: Qualifier,
        expression: &BooleanExpression,
    ) -> Result<()> {
        let filtered = expression.blank_filtered();
        self.buckets
            .update(category, qualifier, |slot| slot.expression = filtered)
            .ok_or_else(|| missing_bucket(category, qualifier))
    }

    /// Remove one term from an applied expression
    ///
    /// Emptied groups are dropped; removing the last term removes the
    /// expression.
    pub fn remove_term(
        &mut self,
        category: &str,
        qualifier: Qualifier,
        group: usize,
        term: usize,
    ) -> Result<()> {
        self.get(category, qualifier)
            .ok_or_else(|| missing_bucket(category, qualifier))?
            .check_term(group, term)?;
        self.buckets
            .update(category, qualifier, |slot| {
                slot.expression.remove_term_unchecked(group, term)
            })
            .ok_or_else(|| missing_bucket(category, qualifier))
    }

    /// Toggle an applied expression between must-have and nice-to-have
    pub fn set_must_have(
        &mut self,
        category: &str,
        qualifier: Qualifier,
        must_have: bool,
    ) -> Result<()> {
        self.buckets
            .update(category, qualifier, |slot| slot.must_have = must_have)
            .ok_or_else(|| missing_bucket(category, qualifier))
    }

    pub fn get(&self, category: &str, qualifier: Qualifier) -> Option<&BooleanExpression> {
        self.entry(category, qualifier).map(|applied| &applied.expression)
    }

    pub fn entry(&self, category: &str, qualifier: Qualifier) -> Option<&AppliedBoolean> {
        self.buckets.get(category, qualifier)
    }

    pub fn category(&self, category: &str) -> Option<&BTreeMap<Qualifier, AppliedBoolean>> {
        self.buckets.category(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<Qualifier, AppliedBoolean>)> {
        self.buckets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn missing_bucket(category: &str, qualifier: Qualifier) -> CriteriaError {
    CriteriaError::MissingBucket {
        category: category.to_string(),
        qualifier: qualifier.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualifier::TimeQualifier;

    const CURRENT: Qualifier = Qualifier::Time(TimeQualifier::Current);

    #[test]
    fn test_apply_commits_filtered_expression() {
        let mut store = BooleanStore::new();
        let draft = BooleanExpression::from(vec![vec!["Go", ""], vec![""]]);
        assert!(store.apply("Skills", CURRENT, &draft));
        assert_eq!(
            store.get("Skills", CURRENT),
            Some(&BooleanExpression::from(vec![vec!["Go"]]))
        );
    }

    #[test]
    fn test_apply_blank_is_noop() {
        let mut store = BooleanStore::new();
        let draft = BooleanExpression::from(vec![vec![""], vec![""]]);
        assert!(!store.apply("Skills", CURRENT, &draft));
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_replaces_existing() {
        let mut store = BooleanStore::new();
        store.apply("Skills", CURRENT, &BooleanExpression::from(vec![vec!["Go"]]));
        store.apply("Skills", CURRENT, &BooleanExpression::from(vec![vec!["Rust"]]));
        assert_eq!(
            store.get("Skills", CURRENT),
            Some(&BooleanExpression::from(vec![vec!["Rust"]]))
        );
    }

    #[test]
    fn test_remove_term_prunes_entry_when_last_term_goes() {
        let mut store = BooleanStore::new();
        store.apply(
            "Skills",
            CURRENT,
            &BooleanExpression::from(vec![vec!["Go", "Rust"], vec!["SQL"]]),
        );

        store.remove_term("Skills", CURRENT, 1, 0).unwrap();
        assert_eq!(
            store.get("Skills", CURRENT),
            Some(&BooleanExpression::from(vec![vec!["Go", "Rust"]]))
        );

        store.remove_term("Skills", CURRENT, 0, 0).unwrap();
        store.remove_term("Skills", CURRENT, 0, 0).unwrap();
        assert!(store.category("Skills").is_none());
    }

    #[test]
    fn test_update_group_with_empty_expression_prunes() {
        let mut store = BooleanStore::new();
        store.apply(
            "Companies",
            CURRENT,
            &BooleanExpression::from(vec![vec!["Stripe"]]),
        );
        store
            .update_group("Companies", CURRENT, &BooleanExpression::default())
            .unwrap();
        assert!(store.is_empty());

        let meta = BooleanExpression::from(vec![vec!["Meta"]]);
        assert!(store.update_group("Companies", CURRENT, &meta).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_group() {
        let mut store = BooleanStore::new();
        store.apply("Job Title", CURRENT, &BooleanExpression::from(vec![vec!["SRE"]]));
        assert!(store.remove_group("Job Title", CURRENT).is_some());
        assert!(store.remove_group("Job Title", CURRENT).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_must_have_flag_defaults_on_and_survives_edits() {
        let mut store = BooleanStore::new();
        store.apply(
            "Skills",
            CURRENT,
            &BooleanExpression::from(vec![vec!["Go", "Rust"]]),
        );
        assert!(store.entry("Skills", CURRENT).unwrap().must_have);

        store.set_must_have("Skills", CURRENT, false).unwrap();
        store.remove_term("Skills", CURRENT, 0, 0).unwrap();
        store.apply("Skills", CURRENT, &BooleanExpression::from(vec![vec!["Zig"]]));

        let applied = store.entry("Skills", CURRENT).unwrap();
        assert!(!applied.must_have);
        assert_eq!(applied.expression, BooleanExpression::from(vec![vec!["Zig"]]));
    }

    #[test]
    fn test_set_must_have_requires_entry() {
        let mut store = BooleanStore::new();
        assert!(matches!(
            store.set_must_have("Skills", CURRENT, false),
            Err(CriteriaError::MissingBucket { .. })
        ));
        assert!(store.is_empty());
    }
}
