//! Scripted panel sessions
//!
//! A session script is a list of [`Action`]s, optionally preceded by the
//! variant to start in. Scripts are JSON, or YAML when the file ends in
//! `.yaml`/`.yml`:
//!
//! ```yaml
//! variant: v5
//! actions:
//!   - action: select
//!     category: Skills
//!     label: Go
//!   - action: change-priority
//!     category: Skills
//!     from: must-have
//!     label: Go
//!     timeQualifier: Current
//!     to: excluded
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};
use crate::panel::{Action, FilterPanel};
use crate::view::Variant;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl SessionScript {
    /// Load a script, picking the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let script = if is_yaml(path) {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            steps = script.actions.len(),
            "session script loaded"
        );
        Ok(script)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Outcome of one replayed action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepRecord>,
}

impl ReplayReport {
    pub fn applied(&self) -> usize {
        self.steps.iter().filter(|s| s.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| !s.is_ok())
    }

    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(StepRecord::is_ok)
    }
}

/// Dispatch every action of `script` against `panel`
///
/// Without `keep_going` the first rejected action stops the replay and is
/// returned as [`CriteriaError::Step`]; the panel keeps every earlier step.
/// With it, rejections are recorded and the replay carries on.
pub fn replay(
    panel: &mut FilterPanel,
    script: &SessionScript,
    keep_going: bool,
) -> Result<ReplayReport> {
    if let Some(variant) = script.variant {
        panel.dispatch(Action::SetVariant { variant })?;
    }

    let mut report = ReplayReport::default();
    for (index, action) in script.actions.iter().enumerate() {
        let name = action.name();
        match panel.dispatch(action.clone()) {
            Ok(_) => report.steps.push(StepRecord {
                index,
                action: name,
                error: None,
            }),
            Err(err) if keep_going => report.steps.push(StepRecord {
                index,
                action: name,
                error: Some(err.to_string()),
            }),
            Err(err) => {
                return Err(CriteriaError::Step {
                    index,
                    action: name,
                    source: Box::new(err),
                })
            }
        }
    }

    tracing::info!(
        steps = report.steps.len(),
        applied = report.applied(),
        "session replayed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualifier::{PriorityTier, TimeQualifier};

    const SCRIPT: &str = r#"
variant: v5
actions:
  - action: select
    category: Skills
    label: Go
  - action: select
    category: Hobbies
    label: Chess
  - action: change-priority
    category: Skills
    from: must-have
    label: Go
    timeQualifier: Current
    to: excluded
"#;

    #[test]
    fn test_yaml_script_parses() {
        let script = SessionScript::from_yaml(SCRIPT).unwrap();
        assert_eq!(script.variant, Some(Variant::V5));
        assert_eq!(script.actions.len(), 3);
        assert_eq!(script.actions[2].name(), "change-priority");
    }

    #[test]
    fn test_replay_stops_at_first_failure() {
        let script = SessionScript::from_yaml(SCRIPT).unwrap();
        let mut panel = FilterPanel::default();

        let err = replay(&mut panel, &script, false).unwrap_err();
        match err {
            CriteriaError::Step { index, action, .. } => {
                assert_eq!(index, 1);
                assert_eq!(action, "select");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(panel
            .priorities()
            .bucket("Skills", PriorityTier::MustHave)
            .is_some());
    }

    #[test]
    fn test_replay_keep_going_records_failures() {
        let script = SessionScript::from_yaml(SCRIPT).unwrap();
        let mut panel = FilterPanel::default();

        let report = replay(&mut panel, &script, true).unwrap();
        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.applied(), 2);
        let failed: Vec<_> = report.failed().map(|s| s.index).collect();
        assert_eq!(failed, vec![1]);
        assert!(!report.is_clean());

        let excluded = panel
            .priorities()
            .bucket("Skills", PriorityTier::Excluded)
            .unwrap();
        assert_eq!(excluded.entries()[0].time_qualifier, Some(TimeQualifier::Current));
    }

    #[test]
    fn test_empty_script_is_clean() {
        let script = SessionScript::from_json(r#"{"actions": []}"#).unwrap();
        let mut panel = FilterPanel::default();
        let report = replay(&mut panel, &script, false).unwrap();
        assert!(report.is_clean());
        assert_eq!(panel.variant(), Variant::V2);
    }
}
