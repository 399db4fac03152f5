//! Qualifiers
//!
//! A qualifier is the secondary dimension an attribute selection is filed
//! under. The legacy layouts qualify by recency ([`TimeQualifier`]); the
//! priority layout qualifies by tier ([`PriorityTier`]) and carries the
//! recency on each entry instead.
//!
//! Declaration order of both enums is their display precedence, so the
//! derived `Ord` is what the chip list and the ordered maps sort by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;

/// Recency of an attribute (current, recent or past role/skill/...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeQualifier {
    Current,
    Recent,
    Past,
}

impl TimeQualifier {
    /// All time qualifiers in display precedence
    pub fn all() -> &'static [TimeQualifier] {
        &[TimeQualifier::Current, TimeQualifier::Recent, TimeQualifier::Past]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeQualifier::Current => "Current",
            TimeQualifier::Recent => "Recent",
            TimeQualifier::Past => "Past",
        }
    }
}

impl fmt::Display for TimeQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeQualifier {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(TimeQualifier::Current),
            "recent" => Ok(TimeQualifier::Recent),
            "past" => Ok(TimeQualifier::Past),
            _ => Err(CriteriaError::UnknownQualifier(s.to_string())),
        }
    }
}

/// Priority tier of an attribute in the tiered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityTier {
    MustHave,
    CanHave,
    Excluded,
}

impl PriorityTier {
    /// All tiers in display precedence
    pub fn all() -> &'static [PriorityTier] {
        &[PriorityTier::MustHave, PriorityTier::CanHave, PriorityTier::Excluded]
    }

    /// Serialized identifier (`must-have`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::MustHave => "must-have",
            PriorityTier::CanHave => "can-have",
            PriorityTier::Excluded => "excluded",
        }
    }

    /// Human-readable label shown on the tier dropdown
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::MustHave => "Must have",
            PriorityTier::CanHave => "Can have",
            PriorityTier::Excluded => "Excluded",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityTier {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "must-have" => Ok(PriorityTier::MustHave),
            "can-have" => Ok(PriorityTier::CanHave),
            "excluded" => Ok(PriorityTier::Excluded),
            _ => Err(CriteriaError::UnknownQualifier(s.to_string())),
        }
    }
}

/// Which family of qualifiers a layout works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualifierMode {
    Time,
    Priority,
}

impl QualifierMode {
    /// Qualifier a category starts with before the user picks one
    pub fn default_qualifier(&self) -> Qualifier {
        match self {
            QualifierMode::Time => Qualifier::Time(TimeQualifier::Current),
            QualifierMode::Priority => Qualifier::Priority(PriorityTier::MustHave),
        }
    }

    /// Options offered by the search bar dropdown, in dropdown order
    pub fn options(&self) -> Vec<Qualifier> {
        match self {
            QualifierMode::Time => vec![
                Qualifier::Time(TimeQualifier::Current),
                Qualifier::Time(TimeQualifier::Past),
                Qualifier::Time(TimeQualifier::Recent),
            ],
            QualifierMode::Priority => PriorityTier::all()
                .iter()
                .copied()
                .map(Qualifier::Priority)
                .collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualifierMode::Time => "time",
            QualifierMode::Priority => "priority",
        }
    }
}

impl fmt::Display for QualifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A qualifier of either family
///
/// Serialized as its bare string (`"Current"`, `"must-have"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Qualifier {
    Time(TimeQualifier),
    Priority(PriorityTier),
}

impl Qualifier {
    pub fn mode(&self) -> QualifierMode {
        match self {
            Qualifier::Time(_) => QualifierMode::Time,
            Qualifier::Priority(_) => QualifierMode::Priority,
        }
    }

    /// Check the qualifier belongs to `mode`
    pub fn expect_mode(&self, mode: QualifierMode) -> crate::Result<()> {
        if self.mode() == mode {
            Ok(())
        } else {
            Err(CriteriaError::QualifierMode {
                qualifier: self.to_string(),
                mode: mode.to_string(),
            })
        }
    }
}

impl From<TimeQualifier> for Qualifier {
    fn from(value: TimeQualifier) -> Self {
        Qualifier::Time(value)
    }
}

impl From<PriorityTier> for Qualifier {
    fn from(value: PriorityTier) -> Self {
        Qualifier::Priority(value)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Time(t) => t.fmt(f),
            Qualifier::Priority(p) => p.fmt(f),
        }
    }
}

impl FromStr for Qualifier {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TimeQualifier>()
            .map(Qualifier::Time)
            .or_else(|_| s.parse::<PriorityTier>().map(Qualifier::Priority))
            .map_err(|_| CriteriaError::UnknownQualifier(s.to_string()))
    }
}
