//! Flat chip list derived from the selection stores

use serde::Serialize;

use crate::qualifier::{Qualifier, QualifierMode, TimeQualifier};
use crate::selection::{AttributeSelectionStore, PriorityStore};

/// One selected attribute as the panel displays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chip {
    pub category: String,
    pub qualifier: Qualifier,
    pub label: String,
    /// Bucket flag; recency-keyed chips only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_have: Option<bool>,
    /// Per-entry recency; tier-keyed chips only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_qualifier: Option<TimeQualifier>,
}

/// Chips of `category` from the store `mode` files selections in
///
/// Sorted by qualifier precedence (Current, Recent, Past or Must have, Can
/// have, Excluded), then by bucket order.
pub fn chips(
    selections: &AttributeSelectionStore,
    priorities: &PriorityStore,
    category: &str,
    mode: QualifierMode,
) -> Vec<Chip> {
    let mut chips = match mode {
        QualifierMode::Time => time_chips(selections, category),
        QualifierMode::Priority => priority_chips(priorities, category),
    };
    chips.sort_by_key(|chip| chip.qualifier);
    chips
}

fn time_chips(store: &AttributeSelectionStore, category: &str) -> Vec<Chip> {
    let Some(buckets) = store.category(category) else {
        return Vec::new();
    };
    buckets
        .iter()
        .flat_map(|(qualifier, bucket)| {
            bucket.attributes.iter().map(move |label| Chip {
                category: category.to_string(),
                qualifier: (*qualifier).into(),
                label: label.clone(),
                must_have: Some(bucket.must_have),
                time_qualifier: None,
            })
        })
        .collect()
}

fn priority_chips(store: &PriorityStore, category: &str) -> Vec<Chip> {
    let Some(buckets) = store.category(category) else {
        return Vec::new();
    };
    buckets
        .iter()
        .flat_map(|(tier, bucket)| {
            bucket.entries().iter().map(move |entry| Chip {
                category: category.to_string(),
                qualifier: (*tier).into(),
                label: entry.label.clone(),
                must_have: None,
                time_qualifier: entry.time_qualifier,
            })
        })
        .collect()
}
