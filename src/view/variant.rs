//! Panel layout variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;
use crate::qualifier::QualifierMode;

/// The six match-criteria panel layouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    V1,
    #[default]
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl Variant {
    /// All variants in toggle order
    pub fn all() -> &'static [Variant] {
        &[
            Variant::V1,
            Variant::V2,
            Variant::V3,
            Variant::V4,
            Variant::V5,
            Variant::V6,
        ]
    }

    /// Toggle label
    pub fn name(&self) -> &'static str {
        match self {
            Variant::V1 => "V1",
            Variant::V2 => "V2",
            Variant::V3 => "V3",
            Variant::V4 => "V4",
            Variant::V5 => "V5",
            Variant::V6 => "V6",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::V1 => "Placeholder add button, add appended to the last qualifier group",
            Variant::V2 => "\"Browse all\" link in the category header",
            Variant::V3 => "Inline add and browse buttons in the category header",
            Variant::V4 => "Add and Browse all buttons below the selections",
            Variant::V5 => "Priority tiers with per-attribute recency",
            Variant::V6 => "Header browse link plus AND/OR boolean builder",
        }
    }

    /// Qualifier family this layout files selections under
    pub fn mode(&self) -> QualifierMode {
        match self {
            Variant::V5 => QualifierMode::Priority,
            _ => QualifierMode::Time,
        }
    }

    /// Parse `v3`, `V3` or `3`
    pub fn from_name(name: &str) -> Option<Variant> {
        let trimmed = name.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match digits {
            "1" => Some(Variant::V1),
            "2" => Some(Variant::V2),
            "3" => Some(Variant::V3),
            "4" => Some(Variant::V4),
            "5" => Some(Variant::V5),
            "6" => Some(Variant::V6),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::from_name(s).ok_or_else(|| CriteriaError::UnknownVariant(s.to_string()))
    }
}
