//! Overlay register
//!
//! Search bars, the attribute explorer, qualifier menus and the boolean
//! builder are mutually exclusive overlays. The register names the single
//! open one; opening another replaces it and a click anywhere else dismisses
//! it.
//!
//! Closing is immediate. The returned [`Dismissal`] carries the close
//! animation delay for the presentation layer to play; nothing waits on it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::qualifier::Qualifier;

/// An overlay that can own focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Overlay {
    SearchBar { category: String },
    Explorer { category: String, group: Option<String> },
    QualifierMenu { category: String, qualifier: Qualifier },
    BooleanEditor { category: String, qualifier: Qualifier },
}

impl Overlay {
    pub fn category(&self) -> &str {
        match self {
            Overlay::SearchBar { category }
            | Overlay::Explorer { category, .. }
            | Overlay::QualifierMenu { category, .. }
            | Overlay::BooleanEditor { category, .. } => category,
        }
    }

    /// Same overlay, ignoring transient sub-state such as the explorer group
    pub fn same_target(&self, other: &Overlay) -> bool {
        match (self, other) {
            (Overlay::Explorer { category: a, .. }, Overlay::Explorer { category: b, .. }) => {
                a == b
            }
            _ => self == other,
        }
    }
}

/// Close animation lengths per overlay kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseDelays {
    #[serde(default = "default_search_bar_ms")]
    pub search_bar_ms: u64,
    #[serde(default = "default_explorer_ms")]
    pub explorer_ms: u64,
    #[serde(default = "default_boolean_editor_ms")]
    pub boolean_editor_ms: u64,
}

fn default_search_bar_ms() -> u64 {
    200
}

fn default_explorer_ms() -> u64 {
    250
}

fn default_boolean_editor_ms() -> u64 {
    200
}

impl Default for CloseDelays {
    fn default() -> Self {
        Self {
            search_bar_ms: default_search_bar_ms(),
            explorer_ms: default_explorer_ms(),
            boolean_editor_ms: default_boolean_editor_ms(),
        }
    }
}

impl CloseDelays {
    pub fn for_overlay(&self, overlay: &Overlay) -> Duration {
        let ms = match overlay {
            Overlay::SearchBar { .. } | Overlay::QualifierMenu { .. } => self.search_bar_ms,
            Overlay::Explorer { .. } => self.explorer_ms,
            Overlay::BooleanEditor { .. } => self.boolean_editor_ms,
        };
        Duration::from_millis(ms)
    }
}

/// A closed overlay and how long its close animation runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    pub overlay: Overlay,
    pub delay: Duration,
}

/// Holds the one open overlay, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlayRegister {
    open: Option<Overlay>,
    #[serde(skip)]
    delays: CloseDelays,
}

impl OverlayRegister {
    pub fn new(delays: CloseDelays) -> Self {
        Self { open: None, delays }
    }

    pub fn current(&self) -> Option<&Overlay> {
        self.open.as_ref()
    }

    pub fn is_open(&self, overlay: &Overlay) -> bool {
        self.open.as_ref().is_some_and(|o| o.same_target(overlay))
    }

    /// Open `overlay`, dismissing whatever was open before
    pub fn open(&mut self, overlay: Overlay) -> Option<Dismissal> {
        let previous = self.close();
        tracing::debug!(?overlay, "overlay opened");
        self.open = Some(overlay);
        previous
    }

    /// Close the open overlay
    pub fn close(&mut self) -> Option<Dismissal> {
        self.open.take().map(|overlay| Dismissal {
            delay: self.delays.for_overlay(&overlay),
            overlay,
        })
    }

    /// A pointer-down landed on `target` (`None`: on nothing that owns focus)
    ///
    /// Clicks inside the open overlay keep it; anything else closes it.
    pub fn dismiss_outside(&mut self, target: Option<&Overlay>) -> Option<Dismissal> {
        let inside = matches!(
            (&self.open, target),
            (Some(open), Some(target)) if open.same_target(target)
        );
        if inside {
            None
        } else {
            self.close()
        }
    }

    /// Mutable access for sub-state updates that keep the same target
    pub(crate) fn current_mut(&mut self) -> Option<&mut Overlay> {
        self.open.as_mut()
    }
}
