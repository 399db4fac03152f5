//! Match-criteria panel
//!
//! [`FilterPanel`] owns every piece of panel state and is changed only
//! through [`FilterPanel::dispatch`]. A rejected action leaves the panel
//! exactly as it was.

mod action;

pub use action::Action;

use serde::Serialize;

use crate::boolean::{BooleanDraft, BooleanStore};
use crate::catalog::CategoryCatalog;
use crate::error::{CriteriaError, Result};
use crate::overlay::{CloseDelays, Dismissal, Overlay, OverlayRegister};
use crate::qualifier::{Qualifier, QualifierMode, TimeQualifier};
use crate::selection::{ActiveQualifiers, AttributeSelectionStore, PriorityStore};
use crate::view::{self, PanelState, PanelView, Variant, ViewRegistry};

/// Read-only, serializable copy of the panel state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot<'a> {
    pub variant: Variant,
    pub mode: QualifierMode,
    pub collapsed: bool,
    pub selections: &'a AttributeSelectionStore,
    pub priorities: &'a PriorityStore,
    pub booleans: &'a BooleanStore,
    pub active_qualifiers: &'a ActiveQualifiers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<&'a Overlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<&'a BooleanDraft>,
}

/// The match-criteria panel: catalog, layout, stores and open overlay
#[derive(Debug)]
pub struct FilterPanel {
    catalog: CategoryCatalog,
    views: ViewRegistry,
    variant: Variant,
    selections: AttributeSelectionStore,
    priorities: PriorityStore,
    booleans: BooleanStore,
    active: ActiveQualifiers,
    overlay: OverlayRegister,
    draft: Option<BooleanDraft>,
    collapsed: bool,
}

impl FilterPanel {
    pub fn new(catalog: CategoryCatalog, variant: Variant, delays: CloseDelays) -> Self {
        Self {
            catalog,
            views: ViewRegistry::new(),
            variant,
            selections: AttributeSelectionStore::new(),
            priorities: PriorityStore::new(),
            booleans: BooleanStore::new(),
            active: ActiveQualifiers::new(),
            overlay: OverlayRegister::new(delays),
            draft: None,
            collapsed: false,
        }
    }

    /// Apply one action
    ///
    /// Returns the overlay the action closed, if any.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Dismissal>> {
        let name = action.name();
        match self.apply(action) {
            Ok(dismissal) => {
                tracing::debug!(action = name, variant = %self.variant, "action applied");
                Ok(dismissal)
            }
            Err(err) => {
                tracing::warn!(action = name, error = %err, "action rejected");
                Err(err)
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<Option<Dismissal>> {
        if let Some(category) = action.category() {
            self.catalog.require(category)?;
        }

        match action {
            Action::SetVariant { variant } => {
                self.views.get(variant)?;
                self.variant = variant;
                Ok(self.close_overlay())
            }
            Action::ToggleCollapsed => {
                self.collapsed = !self.collapsed;
                Ok(None)
            }

            Action::OpenSearch { category } => Ok(self.open(Overlay::SearchBar { category })),
            Action::BrowseAll { category } => {
                if !self.catalog.require(&category)?.supports_browse {
                    return Err(CriteriaError::Unsupported {
                        category,
                        feature: "attribute explorer",
                    });
                }
                Ok(self.open(Overlay::Explorer {
                    category,
                    group: None,
                }))
            }
            Action::SelectExplorerGroup { group } => {
                let Some(Overlay::Explorer { category, .. }) = self.overlay.current() else {
                    return Err(CriteriaError::OverlayClosed("attribute explorer"));
                };
                if !self.catalog.explorer_groups(category)?.contains(&group) {
                    return Err(CriteriaError::UnknownGroup {
                        category: category.clone(),
                        group,
                    });
                }
                if let Some(Overlay::Explorer {
                    group: selected, ..
                }) = self.overlay.current_mut()
                {
                    *selected = Some(group);
                }
                Ok(None)
            }
            Action::OpenQualifierMenu {
                category,
                qualifier,
            } => {
                qualifier.expect_mode(self.mode())?;
                Ok(self.open(Overlay::QualifierMenu {
                    category,
                    qualifier,
                }))
            }
            Action::CloseOverlay => Ok(self.close_overlay()),
            Action::ClickOutside { target } => {
                let dismissal = self.overlay.dismiss_outside(target.as_ref());
                Ok(self.after_close(dismissal))
            }

            Action::SetQualifier {
                category,
                qualifier,
            } => {
                qualifier.expect_mode(self.mode())?;
                self.active.set(&category, qualifier);
                Ok(None)
            }
            Action::Select {
                category,
                label,
                qualifier,
            } => {
                let qualifier = match qualifier {
                    Some(q) => {
                        q.expect_mode(self.mode())?;
                        q
                    }
                    None => self.active.current(&category, self.mode()),
                };
                match qualifier {
                    Qualifier::Time(time) => self.selections.select(&category, time, label),
                    Qualifier::Priority(tier) => {
                        self.priorities
                            .select(&category, tier, label, Some(TimeQualifier::Current))
                    }
                }
                Ok(None)
            }
            Action::Remove {
                category,
                qualifier,
                label,
            } => {
                qualifier.expect_mode(self.mode())?;
                let removed = match qualifier {
                    Qualifier::Time(time) => self.selections.remove(&category, time, &label),
                    Qualifier::Priority(tier) => self.priorities.remove(&category, tier, &label),
                };
                if removed == 0 {
                    tracing::debug!(category = %category, label = %label, "nothing to remove");
                }
                Ok(None)
            }
            Action::SetMustHave {
                category,
                qualifier,
                must_have,
            } => {
                Qualifier::from(qualifier).expect_mode(self.mode())?;
                self.selections.set_must_have(&category, qualifier, must_have)?;
                Ok(None)
            }
            Action::ChangePriority {
                category,
                from,
                label,
                time_qualifier,
                to,
            } => {
                Qualifier::from(from).expect_mode(self.mode())?;
                self.priorities
                    .change_priority(&category, from, &label, time_qualifier, to)?;
                Ok(None)
            }
            Action::ChangeTimeQualifier {
                category,
                tier,
                label,
                time_qualifier,
            } => {
                Qualifier::from(tier).expect_mode(self.mode())?;
                self.priorities
                    .change_time_qualifier(&category, tier, &label, time_qualifier)?;
                Ok(None)
            }

            Action::OpenBoolean {
                category,
                qualifier,
            } => {
                let supported = self.catalog.require(&category)?.supports_boolean
                    && self.views.get(self.variant)?.shows_booleans();
                if !supported {
                    return Err(CriteriaError::Unsupported {
                        category,
                        feature: "boolean builder",
                    });
                }
                let qualifier = match qualifier {
                    Some(q) => {
                        q.expect_mode(self.mode())?;
                        q
                    }
                    None => self.active.current(&category, self.mode()),
                };
                let dismissal = self.open(Overlay::BooleanEditor {
                    category: category.clone(),
                    qualifier,
                });
                self.draft = Some(BooleanDraft::new(category, qualifier));
                Ok(dismissal)
            }
            Action::AddOrTerm { group } => self.draft_mut()?.add_or_term(group).map(|_| None),
            Action::AddAndGroup => {
                self.draft_mut()?.add_and_group();
                Ok(None)
            }
            Action::SetTerm { group, term, value } => {
                self.draft_mut()?.set_term(group, term, value).map(|_| None)
            }
            Action::RemoveTerm { group, term } => {
                self.draft_mut()?.remove_term(group, term).map(|_| None)
            }
            Action::ApplyBoolean => {
                let draft = self.draft.take().ok_or(CriteriaError::NoDraft)?;
                let (category, qualifier) = (draft.category().to_string(), draft.qualifier());
                if let Some(expression) = draft.apply() {
                    self.booleans.apply(&category, qualifier, &expression);
                }
                Ok(self.close_overlay())
            }
            Action::CancelBoolean => {
                self.draft.take().ok_or(CriteriaError::NoDraft)?.cancel();
                Ok(self.close_overlay())
            }
            Action::UpdateBoolean {
                category,
                qualifier,
                expression,
            } => {
                self.booleans.update_group(&category, qualifier, &expression)?;
                Ok(None)
            }
            Action::RemoveBooleanTerm {
                category,
                qualifier,
                group,
                term,
            } => {
                self.booleans.remove_term(&category, qualifier, group, term)?;
                Ok(None)
            }
            Action::RemoveBoolean {
                category,
                qualifier,
            } => {
                if self.booleans.remove_group(&category, qualifier).is_none() {
                    tracing::debug!(
                        category = %category,
                        %qualifier,
                        "no boolean expression to remove"
                    );
                }
                Ok(None)
            }
            Action::SetBooleanMustHave {
                category,
                qualifier,
                must_have,
            } => {
                self.booleans.set_must_have(&category, qualifier, must_have)?;
                Ok(None)
            }
        }
    }

    fn open(&mut self, overlay: Overlay) -> Option<Dismissal> {
        let dismissal = self.overlay.open(overlay);
        self.after_close(dismissal)
    }

    fn close_overlay(&mut self) -> Option<Dismissal> {
        let dismissal = self.overlay.close();
        self.after_close(dismissal)
    }

    /// A closed boolean editor takes its unapplied draft with it
    fn after_close(&mut self, dismissal: Option<Dismissal>) -> Option<Dismissal> {
        if let Some(Dismissal {
            overlay: Overlay::BooleanEditor { .. },
            ..
        }) = &dismissal
        {
            if let Some(draft) = self.draft.take() {
                draft.cancel();
            }
        }
        dismissal
    }

    fn draft_mut(&mut self) -> Result<&mut BooleanDraft> {
        self.draft.as_mut().ok_or(CriteriaError::NoDraft)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mode(&self) -> QualifierMode {
        self.variant.mode()
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn selections(&self) -> &AttributeSelectionStore {
        &self.selections
    }

    pub fn priorities(&self) -> &PriorityStore {
        &self.priorities
    }

    pub fn booleans(&self) -> &BooleanStore {
        &self.booleans
    }

    pub fn active_qualifiers(&self) -> &ActiveQualifiers {
        &self.active
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.current()
    }

    pub fn draft(&self) -> Option<&BooleanDraft> {
        self.draft.as_ref()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Layout registry, for swapping in custom views
    pub fn views_mut(&mut self) -> &mut ViewRegistry {
        &mut self.views
    }

    pub fn snapshot(&self) -> PanelSnapshot<'_> {
        PanelSnapshot {
            variant: self.variant,
            mode: self.mode(),
            collapsed: self.collapsed,
            selections: &self.selections,
            priorities: &self.priorities,
            booleans: &self.booleans,
            active_qualifiers: &self.active,
            overlay: self.overlay.current(),
            draft: self.draft.as_ref(),
        }
    }

    /// Render through the current variant's layout
    pub fn render(&self) -> Result<PanelView> {
        let layout = self.views.get(self.variant)?;
        let state = PanelState {
            catalog: &self.catalog,
            selections: &self.selections,
            priorities: &self.priorities,
            booleans: &self.booleans,
            active: &self.active,
            overlay: self.overlay.current(),
            draft: self.draft.as_ref(),
            collapsed: self.collapsed,
        };
        Ok(view::render(layout, &state))
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(
            CategoryCatalog::builtin(),
            Variant::default(),
            CloseDelays::default(),
        )
    }
}
