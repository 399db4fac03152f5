//! Boolean AND-of-OR expressions
//!
//! An expression is a list of [`OrGroup`]s joined by AND; the terms inside a
//! group are joined by OR. Position is meaning: the Nth group is the Nth
//! AND clause and nothing is ever re-sorted.
//!
//! Two containers hold expressions and they prune differently:
//!
//! - [`BooleanDraft`]: the builder's editable copy. It always keeps at least
//!   one group with one (possibly blank) term, so there is an input to type in.
//! - [`BooleanStore`]: applied expressions. Blank terms never get in and an
//!   expression that loses its last term disappears along with its key.

pub mod draft;
pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use draft::{BooleanDraft, DraftState};
pub use store::{AppliedBoolean, BooleanStore};

/// Alternative terms, any one of which satisfies the clause
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrGroup(Vec<String>);

impl OrGroup {
    pub fn new(terms: Vec<String>) -> Self {
        Self(terms)
    }

    /// A group holding one blank term
    pub fn stub() -> Self {
        Self(vec![String::new()])
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn terms_mut(&mut self) -> &mut Vec<String> {
        &mut self.0
    }

    fn without_blanks(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|t| !t.trim().is_empty())
                .cloned()
                .collect(),
        )
    }
}

/// `(a OR b) AND (c OR d) AND ...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanExpression {
    pub or_groups: Vec<OrGroup>,
}

impl BooleanExpression {
    pub fn new(or_groups: Vec<OrGroup>) -> Self {
        Self { or_groups }
    }

    /// The editor's starting point: one group with one blank term
    pub fn stub() -> Self {
        Self {
            or_groups: vec![OrGroup::stub()],
        }
    }

    /// Copy with blank terms dropped, then empty groups dropped
    pub fn blank_filtered(&self) -> Self {
        Self {
            or_groups: self
                .or_groups
                .iter()
                .map(OrGroup::without_blanks)
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }

    /// No groups at all
    pub fn is_empty(&self) -> bool {
        self.or_groups.is_empty()
    }

    pub fn is_stub(&self) -> bool {
        self.or_groups.len() == 1 && self.or_groups[0].terms() == [String::new()]
    }

    pub fn term_count(&self) -> usize {
        self.or_groups.iter().map(OrGroup::len).sum()
    }

    pub(crate) fn check_term(&self, group: usize, term: usize) -> crate::Result<()> {
        let g = self
            .or_groups
            .get(group)
            .ok_or(crate::CriteriaError::IndexOutOfRange {
                what: "group",
                index: group,
                len: self.or_groups.len(),
            })?;
        if term >= g.len() {
            return Err(crate::CriteriaError::IndexOutOfRange {
                what: "term",
                index: term,
                len: g.len(),
            });
        }
        Ok(())
    }

    /// Remove one term and drop the group if it empties
    pub(crate) fn remove_term_unchecked(&mut self, group: usize, term: usize) {
        self.or_groups[group].terms_mut().remove(term);
        if self.or_groups[group].is_empty() {
            self.or_groups.remove(group);
        }
    }
}

impl<S: Into<String>> From<Vec<Vec<S>>> for BooleanExpression {
    fn from(groups: Vec<Vec<S>>) -> Self {
        Self {
            or_groups: groups
                .into_iter()
                .map(|g| OrGroup::new(g.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

impl fmt::Display for BooleanExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.or_groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "({})", group.terms().join(" OR "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filtered_drops_blank_terms_and_groups() {
        let draft = BooleanExpression::from(vec![vec!["Go", ""], vec![""]]);
        assert_eq!(draft.blank_filtered(), BooleanExpression::from(vec![vec!["Go"]]));

        let blank = BooleanExpression::from(vec![vec![""], vec!["   "]]);
        assert!(blank.blank_filtered().is_empty());
    }

    #[test]
    fn test_display_is_conjunctive_normal_form() {
        let expr = BooleanExpression::from(vec![vec!["React", "Vue"], vec!["TypeScript"]]);
        assert_eq!(expr.to_string(), "(React OR Vue) AND (TypeScript)");
    }

    #[test]
    fn test_serialized_shape_matches_builder_payload() {
        let expr = BooleanExpression::from(vec![vec!["Go", "Rust"], vec!["SQL"]]);
        assert_eq!(
            serde_json::to_value(&expr).unwrap(),
            serde_json::json!({ "orGroups": [["Go", "Rust"], ["SQL"]] })
        );
    }

    #[test]
    fn test_stub() {
        let stub = BooleanExpression::stub();
        assert!(stub.is_stub());
        assert_eq!(stub.term_count(), 1);
        assert!(!stub.is_empty());
    }
}
