//! Panel integration tests
//!
//! End-to-end action sequences through `FilterPanel::dispatch`, checked
//! against the stores and the rendered view.

use criteria::view::Affordance;
use criteria::{
    Action, CategoryCatalog, CloseDelays, CriteriaError, FilterPanel, Overlay, PriorityTier,
    Qualifier, TimeQualifier, Variant,
};

fn panel(variant: Variant) -> FilterPanel {
    FilterPanel::new(CategoryCatalog::builtin(), variant, CloseDelays::default())
}

fn select(category: &str, label: &str) -> Action {
    Action::Select {
        category: category.into(),
        label: label.into(),
        qualifier: None,
    }
}

fn select_as(category: &str, label: &str, qualifier: impl Into<Qualifier>) -> Action {
    Action::Select {
        category: category.into(),
        label: label.into(),
        qualifier: Some(qualifier.into()),
    }
}

// =============================================================================
// Recency-keyed selections
// =============================================================================

mod selection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_then_remove_everything_prunes_category() {
        let mut panel = panel(Variant::V1);
        panel.dispatch(select("Skills", "Go")).unwrap();
        panel.dispatch(select("Skills", "Rust")).unwrap();
        panel
            .dispatch(select_as("Skills", "Perl", TimeQualifier::Past))
            .unwrap();

        for (qualifier, label) in [
            (TimeQualifier::Current, "Go"),
            (TimeQualifier::Current, "Rust"),
            (TimeQualifier::Past, "Perl"),
        ] {
            panel
                .dispatch(Action::Remove {
                    category: "Skills".into(),
                    qualifier: qualifier.into(),
                    label: label.into(),
                })
                .unwrap();
        }

        assert!(panel.selections().is_empty());
        let view = panel.render().unwrap();
        let skills = view.section("Skills").unwrap();
        assert!(skills.groups.is_empty());
        assert_eq!(
            skills.placeholder.as_deref(),
            Some("Must-have and nice-to-have skills")
        );
    }

    #[test]
    fn test_must_have_flag_shows_as_tier_label() {
        let mut panel = panel(Variant::V2);
        panel
            .dispatch(select_as("Job Title", "Staff Engineer", TimeQualifier::Recent))
            .unwrap();
        panel
            .dispatch(Action::SetMustHave {
                category: "Job Title".into(),
                qualifier: TimeQualifier::Recent,
                must_have: false,
            })
            .unwrap();

        let view = panel.render().unwrap();
        let group = &view.section("Job Title").unwrap().groups[0];
        assert_eq!(group.tier_label, "Can have");
        assert_eq!(group.caption, "recent job title");
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut panel = panel(Variant::V2);
        panel.dispatch(select("Skills", "Go")).unwrap();
        let before = serde_json::to_value(panel.snapshot()).unwrap();

        let err = panel
            .dispatch(Action::SetMustHave {
                category: "Skills".into(),
                qualifier: TimeQualifier::Past,
                must_have: false,
            })
            .unwrap_err();
        assert!(matches!(err, CriteriaError::MissingBucket { .. }));

        let after = serde_json::to_value(panel.snapshot()).unwrap();
        assert_eq!(after, before);
    }
}

// =============================================================================
// Priority tiers
// =============================================================================

mod priority_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_move_to_excluded_and_back() {
        let mut panel = panel(Variant::V5);
        panel.dispatch(select("Skills", "Go")).unwrap();
        panel.dispatch(select("Skills", "Rust")).unwrap();
        panel.dispatch(select("Skills", "SQL")).unwrap();
        let before = serde_json::to_value(panel.snapshot()).unwrap();

        let change = |from: PriorityTier, to: PriorityTier| Action::ChangePriority {
            category: "Skills".into(),
            from,
            label: "Rust".into(),
            time_qualifier: Some(TimeQualifier::Current),
            to,
        };
        panel
            .dispatch(change(PriorityTier::MustHave, PriorityTier::Excluded))
            .unwrap();

        let view = panel.render().unwrap();
        let tiers: Vec<_> = view
            .section("Skills")
            .unwrap()
            .groups
            .iter()
            .map(|g| g.tier_label)
            .collect();
        assert_eq!(tiers, vec!["Must have", "Excluded"]);

        panel
            .dispatch(change(PriorityTier::Excluded, PriorityTier::MustHave))
            .unwrap();
        assert_eq!(serde_json::to_value(panel.snapshot()).unwrap(), before);
    }

    #[test]
    fn test_change_time_qualifier_shows_on_chip() {
        let mut panel = panel(Variant::V5);
        panel.dispatch(select("Companies", "Stripe")).unwrap();
        panel
            .dispatch(Action::ChangeTimeQualifier {
                category: "Companies".into(),
                tier: PriorityTier::MustHave,
                label: "Stripe".into(),
                time_qualifier: TimeQualifier::Past,
            })
            .unwrap();

        let view = panel.render().unwrap();
        let chip = &view.section("Companies").unwrap().groups[0].chips[0];
        assert_eq!(chip.label, "Stripe");
        assert_eq!(chip.time_qualifier, Some(TimeQualifier::Past));
    }

    #[test]
    fn test_tier_actions_rejected_in_time_layouts() {
        let mut panel = panel(Variant::V2);
        let err = panel
            .dispatch(Action::ChangePriority {
                category: "Skills".into(),
                from: PriorityTier::MustHave,
                label: "Go".into(),
                time_qualifier: None,
                to: PriorityTier::CanHave,
            })
            .unwrap_err();
        assert!(matches!(err, CriteriaError::QualifierMode { .. }));
    }

    #[test]
    fn test_layout_switch_keeps_both_stores() {
        let mut panel = panel(Variant::V2);
        panel.dispatch(select("Skills", "Go")).unwrap();
        panel
            .dispatch(Action::SetVariant {
                variant: Variant::V5,
            })
            .unwrap();
        panel.dispatch(select("Skills", "Rust")).unwrap();

        let v5 = panel.render().unwrap();
        assert_eq!(v5.section("Skills").unwrap().groups[0].chips[0].label, "Rust");

        panel
            .dispatch(Action::SetVariant {
                variant: Variant::V2,
            })
            .unwrap();
        let v2 = panel.render().unwrap();
        assert_eq!(v2.section("Skills").unwrap().groups[0].chips[0].label, "Go");
    }
}

// =============================================================================
// Boolean builder
// =============================================================================

mod boolean_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open_builder(panel: &mut FilterPanel, category: &str) {
        panel
            .dispatch(Action::OpenBoolean {
                category: category.into(),
                qualifier: None,
            })
            .unwrap();
    }

    fn set(group: usize, term: usize, value: &str) -> Action {
        Action::SetTerm {
            group,
            term,
            value: value.into(),
        }
    }

    #[test]
    fn test_build_apply_and_display() {
        let mut panel = panel(Variant::V6);
        open_builder(&mut panel, "Skills");
        panel.dispatch(set(0, 0, "React")).unwrap();
        panel.dispatch(Action::AddOrTerm { group: 0 }).unwrap();
        panel.dispatch(set(0, 1, "Vue")).unwrap();
        panel.dispatch(Action::AddOrTerm { group: 1 }).unwrap();
        panel.dispatch(set(1, 0, "TypeScript")).unwrap();

        let editor = panel.render().unwrap().boolean_editor.unwrap();
        assert_eq!(editor.title, "Boolean Skills - Current");
        assert_eq!(editor.add_or_label, "Add OR skill");

        panel.dispatch(Action::ApplyBoolean).unwrap();
        let view = panel.render().unwrap();
        assert!(view.boolean_editor.is_none());
        let booleans = &view.section("Skills").unwrap().booleans;
        assert_eq!(
            booleans[0].expression.to_string(),
            "(React OR Vue) AND (TypeScript)"
        );
    }

    #[test]
    fn test_removing_every_draft_term_resets_to_stub() {
        let mut panel = panel(Variant::V6);
        open_builder(&mut panel, "Job Title");
        panel.dispatch(set(0, 0, "Staff Engineer")).unwrap();
        panel
            .dispatch(Action::RemoveTerm { group: 0, term: 0 })
            .unwrap();

        let draft = panel.draft().unwrap();
        assert!(draft.expression().is_stub());
    }

    #[test]
    fn test_blank_only_draft_commits_nothing() {
        let mut panel = panel(Variant::V6);
        open_builder(&mut panel, "Companies");
        panel.dispatch(set(0, 0, "   ")).unwrap();
        panel.dispatch(Action::ApplyBoolean).unwrap();
        assert!(panel.booleans().is_empty());
    }

    #[test]
    fn test_removing_applied_terms_prunes_entry() {
        let mut panel = panel(Variant::V6);
        open_builder(&mut panel, "Skills");
        panel.dispatch(set(0, 0, "Go")).unwrap();
        panel.dispatch(Action::AddAndGroup).unwrap();
        panel.dispatch(set(1, 0, "SQL")).unwrap();
        panel.dispatch(Action::ApplyBoolean).unwrap();

        let remove = |group| Action::RemoveBooleanTerm {
            category: "Skills".into(),
            qualifier: TimeQualifier::Current.into(),
            group,
            term: 0,
        };
        panel.dispatch(remove(1)).unwrap();
        assert_eq!(
            panel
                .booleans()
                .get("Skills", TimeQualifier::Current.into())
                .unwrap()
                .to_string(),
            "(Go)"
        );
        panel.dispatch(remove(0)).unwrap();
        assert!(panel.booleans().is_empty());
    }

    #[test]
    fn test_search_bar_offers_boolean_only_where_supported() {
        let mut panel = panel(Variant::V6);
        panel
            .dispatch(Action::OpenSearch {
                category: "Skills".into(),
            })
            .unwrap();
        let view = panel.render().unwrap();
        let search = view.section("Skills").unwrap().search.clone().unwrap();
        assert_eq!(search.actions, vec![Affordance::Boolean]);

        panel
            .dispatch(Action::OpenSearch {
                category: "Location".into(),
            })
            .unwrap();
        let view = panel.render().unwrap();
        let search = view.section("Location").unwrap().search.clone().unwrap();
        assert!(search.actions.is_empty());
    }
}

// =============================================================================
// Overlays
// =============================================================================

mod overlay_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_overlay_at_a_time() {
        let mut panel = panel(Variant::V2);
        panel
            .dispatch(Action::OpenSearch {
                category: "Skills".into(),
            })
            .unwrap();
        panel
            .dispatch(Action::OpenSearch {
                category: "Location".into(),
            })
            .unwrap();

        let view = panel.render().unwrap();
        let open: Vec<_> = view
            .sections
            .iter()
            .filter(|s| s.search.is_some())
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(open, vec!["Location"]);
    }

    #[test]
    fn test_click_inside_keeps_click_outside_closes() {
        let mut panel = panel(Variant::V2);
        let search = Overlay::SearchBar {
            category: "Skills".into(),
        };
        panel
            .dispatch(Action::OpenSearch {
                category: "Skills".into(),
            })
            .unwrap();

        let kept = panel
            .dispatch(Action::ClickOutside {
                target: Some(search.clone()),
            })
            .unwrap();
        assert!(kept.is_none());
        assert_eq!(panel.overlay(), Some(&search));

        let closed = panel
            .dispatch(Action::ClickOutside { target: None })
            .unwrap()
            .unwrap();
        assert_eq!(closed.overlay, search);
        assert_eq!(closed.delay.as_millis(), 200);
        assert!(panel.overlay().is_none());
    }

    #[test]
    fn test_explorer_highlight() {
        let mut panel = panel(Variant::V2);
        panel
            .dispatch(Action::BrowseAll {
                category: "Industries".into(),
            })
            .unwrap();
        let view = panel.render().unwrap();
        let highlighted: Vec<_> = view
            .sections
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Industries"]);
        assert_eq!(
            view.explorer.unwrap().selected.as_deref(),
            Some("Software & Technology")
        );
    }
}
