//! Boolean builder draft
//!
//! The editable copy of an expression while the builder is open. A draft is
//! created from the stub, edited in place, and consumed by either
//! [`BooleanDraft::apply`] or [`BooleanDraft::cancel`]; the next time the
//! builder opens it starts from the stub again.
//!
//! ```text
//! Empty ──edit──▶ Editing ──apply──▶ (blank-filtered expression)
//!   ▲               │    └──cancel─▶ (nothing)
//!   └─remove last───┘
//! ```

use serde::Serialize;

use super::{BooleanExpression, OrGroup};
use crate::error::{CriteriaError, Result};
use crate::qualifier::Qualifier;

/// Where a draft is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftState {
    /// Exactly one blank term
    Empty,
    /// Anything else
    Editing,
}

/// An open boolean builder for one category and qualifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanDraft {
    category: String,
    qualifier: Qualifier,
    expression: BooleanExpression,
}

impl BooleanDraft {
    pub fn new(category: impl Into<String>, qualifier: Qualifier) -> Self {
        Self {
            category: category.into(),
            qualifier,
            expression: BooleanExpression::stub(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn expression(&self) -> &BooleanExpression {
        &self.expression
    }

    pub fn state(&self) -> DraftState {
        if self.expression.is_stub() {
            DraftState::Empty
        } else {
            DraftState::Editing
        }
    }

    /// Append a blank OR term to group `group`
    ///
    /// `group == len` opens a new group holding the blank term.
    pub fn add_or_term(&mut self, group: usize) -> Result<()> {
        let len = self.expression.or_groups.len();
        match group.cmp(&len) {
            std::cmp::Ordering::Less => {
                self.expression.or_groups[group].terms_mut().push(String::new())
            }
            std::cmp::Ordering::Equal => self.expression.or_groups.push(OrGroup::stub()),
            std::cmp::Ordering::Greater => {
                return Err(CriteriaError::IndexOutOfRange {
                    what: "group",
                    index: group,
                    len,
                })
            }
        }
        Ok(())
    }

    /// Append a new AND group holding one blank term
    pub fn add_and_group(&mut self) {
        self.expression.or_groups.push(OrGroup::stub());
    }

    /// Replace the text of one term
    pub fn set_term(&mut self, group: usize, term: usize, value: impl Into<String>) -> Result<()> {
        self.expression.check_term(group, term)?;
        self.expression.or_groups[group].terms_mut()[term] = value.into();
        Ok(())
    }

    /// Remove one term
    ///
    /// An emptied group is dropped. If no group is left the draft goes back
    /// to the stub, so the builder always has an input.
    pub fn remove_term(&mut self, group: usize, term: usize) -> Result<()> {
        self.expression.check_term(group, term)?;
        self.expression.remove_term_unchecked(group, term);
        if self.expression.is_empty() {
            self.expression = BooleanExpression::stub();
        }
        Ok(())
    }

    /// Close the builder, returning the blank-filtered expression
    ///
    /// `None` when no non-blank term was entered.
    pub fn apply(self) -> Option<BooleanExpression> {
        let filtered = self.expression.blank_filtered();
        if filtered.is_empty() {
            tracing::info!(category = %self.category, "boolean draft applied with no terms");
            None
        } else {
            tracing::info!(
                category = %self.category,
                expression = %filtered,
                "boolean draft applied"
            );
            Some(filtered)
        }
    }

    /// Close the builder without committing anything
    pub fn cancel(self) {
        tracing::info!(category = %self.category, "boolean draft cancelled");
    }
}
