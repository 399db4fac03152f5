//! Panel state → [`PanelView`]

use serde::Serialize;

use super::chips::{chips, Chip};
use super::layout::{Affordance, VariantView};
use super::variant::Variant;
use crate::boolean::{BooleanDraft, BooleanExpression, BooleanStore, DraftState};
use crate::catalog::{Category, CategoryCatalog};
use crate::overlay::Overlay;
use crate::qualifier::{Qualifier, TimeQualifier};
use crate::selection::{ActiveQualifiers, AttributeSelectionStore, PriorityStore};

/// Header shown over a required boolean expression
pub const BOOLEAN_ACTIVE_LABEL: &str = "Must-Have (Boolean Active)";
/// Header shown over a boolean expression demoted to a preference
pub const BOOLEAN_NICE_TO_HAVE_LABEL: &str = "Nice-to-Have";

/// Borrowed view of everything a layout draws from
#[derive(Debug, Clone, Copy)]
pub struct PanelState<'a> {
    pub catalog: &'a CategoryCatalog,
    pub selections: &'a AttributeSelectionStore,
    pub priorities: &'a PriorityStore,
    pub booleans: &'a BooleanStore,
    pub active: &'a ActiveQualifiers,
    pub overlay: Option<&'a Overlay>,
    pub draft: Option<&'a BooleanDraft>,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub variant: Variant,
    pub collapsed: bool,
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer: Option<ExplorerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_editor: Option<BooleanEditorView>,
}

impl PanelView {
    pub fn section(&self, category: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.title == category)
    }
}

/// One category block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub title: String,
    /// The explorer is open on this category
    pub highlighted: bool,
    pub header: Vec<Affordance>,
    pub groups: Vec<GroupView>,
    /// Add button text while nothing is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub footer: Vec<Affordance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub booleans: Vec<BooleanView>,
}

/// Chips sharing one qualifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub qualifier: Qualifier,
    pub tier_label: &'static str,
    pub caption: String,
    pub chips: Vec<ChipView>,
    pub trailing_add: bool,
    /// Tier dropdown is open
    pub menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipView {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_qualifier: Option<TimeQualifier>,
}

/// The open attribute search bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub placeholder: String,
    pub header: String,
    pub items: Vec<String>,
    pub qualifier: Qualifier,
    pub options: Vec<Qualifier>,
    pub actions: Vec<Affordance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerView {
    pub category: String,
    pub qualifier_label: &'static str,
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

/// An applied boolean expression under its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanView {
    pub qualifier: Qualifier,
    pub label: &'static str,
    pub must_have: bool,
    pub expression: BooleanExpression,
}

/// The open boolean builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanEditorView {
    pub title: String,
    pub term_placeholder: String,
    pub add_or_label: String,
    pub state: DraftState,
    pub expression: BooleanExpression,
}

/// Render the panel through `view`
pub fn render(view: &dyn VariantView, state: &PanelState<'_>) -> PanelView {
    let sections = state
        .catalog
        .iter()
        .map(|category| render_section(view, state, category))
        .collect();

    PanelView {
        variant: view.variant(),
        collapsed: state.collapsed,
        sections,
        explorer: render_explorer(view, state),
        boolean_editor: render_boolean_editor(state),
    }
}

fn render_section(
    view: &dyn VariantView,
    state: &PanelState<'_>,
    category: &Category,
) -> SectionView {
    let mode = view.mode();
    let chips = chips(state.selections, state.priorities, &category.name, mode);
    let mut groups = group_chips(view, category, chips);
    if let Some(Overlay::QualifierMenu {
        category: open,
        qualifier,
    }) = state.overlay
    {
        if *open == category.name {
            for group in groups.iter_mut().filter(|g| g.qualifier == *qualifier) {
                group.menu_open = true;
            }
        }
    }

    let placeholder = (groups.is_empty() && view.placeholder_when_empty())
        .then(|| category.placeholder.clone());

    let highlighted = matches!(
        state.overlay,
        Some(Overlay::Explorer { category: open, .. }) if *open == category.name
    );

    let search = match state.overlay {
        Some(Overlay::SearchBar { category: open }) if *open == category.name => Some(SearchView {
            placeholder: category.search.placeholder.clone(),
            header: category.search.header.clone(),
            items: category.search.items.clone(),
            qualifier: state.active.current(&category.name, mode),
            options: mode.options(),
            actions: view.search_actions(category),
        }),
        _ => None,
    };

    let booleans = if view.shows_booleans() && category.supports_boolean {
        state
            .booleans
            .category(&category.name)
            .map(|applied| {
                applied
                    .iter()
                    .map(|(qualifier, applied)| BooleanView {
                        qualifier: *qualifier,
                        label: boolean_label(applied.must_have),
                        must_have: applied.must_have,
                        expression: applied.expression.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    SectionView {
        title: category.name.clone(),
        highlighted,
        header: view.header_actions(category),
        groups,
        placeholder,
        footer: view.footer_actions(category),
        search,
        booleans,
    }
}

fn boolean_label(must_have: bool) -> &'static str {
    if must_have {
        BOOLEAN_ACTIVE_LABEL
    } else {
        BOOLEAN_NICE_TO_HAVE_LABEL
    }
}

/// Fold a precedence-sorted chip list into consecutive qualifier groups
fn group_chips(view: &dyn VariantView, category: &Category, chips: Vec<Chip>) -> Vec<GroupView> {
    let mut groups: Vec<GroupView> = Vec::new();
    for chip in chips {
        let chip_view = ChipView {
            label: chip.label,
            time_qualifier: chip.time_qualifier,
        };
        match groups.last_mut() {
            Some(group) if group.qualifier == chip.qualifier => group.chips.push(chip_view),
            _ => groups.push(GroupView {
                qualifier: chip.qualifier,
                tier_label: tier_label(chip.qualifier, chip.must_have),
                caption: view.caption(category, chip.qualifier),
                chips: vec![chip_view],
                trailing_add: false,
                menu_open: false,
            }),
        }
    }
    if view.trailing_add() {
        if let Some(last) = groups.last_mut() {
            last.trailing_add = true;
        }
    }
    groups
}

fn tier_label(qualifier: Qualifier, must_have: Option<bool>) -> &'static str {
    match qualifier {
        Qualifier::Priority(tier) => tier.label(),
        Qualifier::Time(_) if must_have.unwrap_or(true) => "Must have",
        Qualifier::Time(_) => "Can have",
    }
}

fn render_explorer(view: &dyn VariantView, state: &PanelState<'_>) -> Option<ExplorerView> {
    let Some(Overlay::Explorer { category, group }) = state.overlay else {
        return None;
    };
    let groups = state
        .catalog
        .explorer_groups(category)
        .map(|groups| groups.to_vec())
        .unwrap_or_default();
    let selected = group.clone().or_else(|| groups.first().cloned());

    Some(ExplorerView {
        category: category.clone(),
        qualifier_label: view.explorer_label(),
        groups,
        selected,
    })
}

fn render_boolean_editor(state: &PanelState<'_>) -> Option<BooleanEditorView> {
    let Some(Overlay::BooleanEditor { .. }) = state.overlay else {
        return None;
    };
    let draft = state.draft?;
    let category = state.catalog.get(draft.category())?;

    Some(BooleanEditorView {
        title: format!("Boolean {} - {}", category.name, draft.qualifier()),
        term_placeholder: category.term_placeholder(),
        add_or_label: format!("Add OR {}", category.term_noun),
        state: draft.state(),
        expression: draft.expression().clone(),
    })
}
