//! User actions understood by [`FilterPanel::dispatch`](super::FilterPanel::dispatch)
//!
//! Actions serialize as flat objects tagged by `action`:
//!
//! ```json
//! { "action": "select", "category": "Skills", "label": "Go" }
//! { "action": "change-priority", "category": "Skills", "from": "must-have",
//!   "label": "Go", "timeQualifier": "Current", "to": "excluded" }
//! ```

use serde::{Deserialize, Serialize};

use crate::boolean::BooleanExpression;
use crate::overlay::Overlay;
use crate::qualifier::{PriorityTier, Qualifier, TimeQualifier};
use crate::view::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Action {
    /// Switch the layout; selections are kept
    SetVariant { variant: Variant },
    ToggleCollapsed,

    OpenSearch { category: String },
    BrowseAll { category: String },
    SelectExplorerGroup { group: String },
    /// Open the tier dropdown of a selection group
    OpenQualifierMenu { category: String, qualifier: Qualifier },
    CloseOverlay,
    /// Pointer-down on `target`, or on nothing that owns focus
    ClickOutside {
        #[serde(default)]
        target: Option<Overlay>,
    },

    /// Pick the qualifier new selections in `category` are filed under
    SetQualifier { category: String, qualifier: Qualifier },
    /// Select an attribute under `qualifier`, or the active qualifier
    Select {
        category: String,
        label: String,
        #[serde(default)]
        qualifier: Option<Qualifier>,
    },
    Remove {
        category: String,
        qualifier: Qualifier,
        label: String,
    },
    SetMustHave {
        category: String,
        qualifier: TimeQualifier,
        must_have: bool,
    },
    ChangePriority {
        category: String,
        from: PriorityTier,
        label: String,
        #[serde(default)]
        time_qualifier: Option<TimeQualifier>,
        to: PriorityTier,
    },
    ChangeTimeQualifier {
        category: String,
        tier: PriorityTier,
        label: String,
        time_qualifier: TimeQualifier,
    },

    OpenBoolean {
        category: String,
        #[serde(default)]
        qualifier: Option<Qualifier>,
    },
    AddOrTerm { group: usize },
    AddAndGroup,
    SetTerm { group: usize, term: usize, value: String },
    RemoveTerm { group: usize, term: usize },
    ApplyBoolean,
    CancelBoolean,
    UpdateBoolean {
        category: String,
        qualifier: Qualifier,
        expression: BooleanExpression,
    },
    RemoveBooleanTerm {
        category: String,
        qualifier: Qualifier,
        group: usize,
        term: usize,
    },
    RemoveBoolean { category: String, qualifier: Qualifier },
    /// Toggle an applied expression between must-have and nice-to-have
    SetBooleanMustHave {
        category: String,
        qualifier: Qualifier,
        must_have: bool,
    },
}

impl Action {
    /// Tag name, as written in session scripts
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetVariant { .. } => "set-variant",
            Action::ToggleCollapsed => "toggle-collapsed",
            Action::OpenSearch { .. } => "open-search",
            Action::BrowseAll { .. } => "browse-all",
            Action::SelectExplorerGroup { .. } => "select-explorer-group",
            Action::OpenQualifierMenu { .. } => "open-qualifier-menu",
            Action::CloseOverlay => "close-overlay",
            Action::ClickOutside { .. } => "click-outside",
            Action::SetQualifier { .. } => "set-qualifier",
            Action::Select { .. } => "select",
            Action::Remove { .. } => "remove",
            Action::SetMustHave { .. } => "set-must-have",
            Action::ChangePriority { .. } => "change-priority",
            Action::ChangeTimeQualifier { .. } => "change-time-qualifier",
            Action::OpenBoolean { .. } => "open-boolean",
            Action::AddOrTerm { .. } => "add-or-term",
            Action::AddAndGroup => "add-and-group",
            Action::SetTerm { .. } => "set-term",
            Action::RemoveTerm { .. } => "remove-term",
            Action::ApplyBoolean => "apply-boolean",
            Action::CancelBoolean => "cancel-boolean",
            Action::UpdateBoolean { .. } => "update-boolean",
            Action::RemoveBooleanTerm { .. } => "remove-boolean-term",
            Action::RemoveBoolean { .. } => "remove-boolean",
            Action::SetBooleanMustHave { .. } => "set-boolean-must-have",
        }
    }

    /// Category the action targets, if any
    pub fn category(&self) -> Option<&str> {
        match self {
            Action::OpenSearch { category }
            | Action::BrowseAll { category }
            | Action::OpenQualifierMenu { category, .. }
            | Action::SetQualifier { category, .. }
            | Action::Select { category, .. }
            | Action::Remove { category, .. }
            | Action::SetMustHave { category, .. }
            | Action::ChangePriority { category, .. }
            | Action::ChangeTimeQualifier { category, .. }
            | Action::OpenBoolean { category, .. }
            | Action::UpdateBoolean { category, .. }
            | Action::RemoveBooleanTerm { category, .. }
            | Action::RemoveBoolean { category, .. }
            | Action::SetBooleanMustHave { category, .. } => Some(category),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tagged_actions() {
        let action: Action = serde_json::from_str(
            r#"{"action":"change-priority","category":"Skills","from":"must-have","label":"Go","timeQualifier":"Current","to":"excluded"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::ChangePriority {
                category: "Skills".into(),
                from: PriorityTier::MustHave,
                label: "Go".into(),
                time_qualifier: Some(TimeQualifier::Current),
                to: PriorityTier::Excluded,
            }
        );
        assert_eq!(action.name(), "change-priority");
        assert_eq!(action.category(), Some("Skills"));
    }

    #[test]
    fn test_optional_fields_default() {
        let action: Action =
            serde_json::from_str(r#"{"action":"select","category":"Skills","label":"Go"}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::Select {
                category: "Skills".into(),
                label: "Go".into(),
                qualifier: None,
            }
        );

        let action: Action = serde_json::from_str(r#"{"action":"click-outside"}"#).unwrap();
        assert_eq!(action, Action::ClickOutside { target: None });
    }

    #[test]
    fn test_unit_actions_and_nested_overlay() {
        let action: Action = serde_json::from_str(r#"{"action":"apply-boolean"}"#).unwrap();
        assert_eq!(action, Action::ApplyBoolean);

        let action: Action = serde_json::from_str(
            r#"{"action":"click-outside","target":{"kind":"search-bar","category":"Skills"}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::ClickOutside {
                target: Some(Overlay::SearchBar {
                    category: "Skills".into()
                })
            }
        );
    }

    #[test]
    fn test_name_matches_tag() {
        let action = Action::SetMustHave {
            category: "Skills".into(),
            qualifier: TimeQualifier::Past,
            must_have: false,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], action.name());
        assert_eq!(json["mustHave"], false);
    }

    #[test]
    fn test_parse_boolean_must_have_toggle() {
        let action: Action = serde_json::from_str(
            r#"{"action":"set-boolean-must-have","category":"Skills","qualifier":"Past","mustHave":false}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::SetBooleanMustHave {
                category: "Skills".into(),
                qualifier: Qualifier::Time(TimeQualifier::Past),
                must_have: false,
            }
        );
        assert_eq!(action.name(), "set-boolean-must-have");
    }
}
