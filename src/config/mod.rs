//! Configuration
//!
//! Read from `.criteria.config.json` in the working directory. Every field is
//! optional; a missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, CategoryCatalog};
use crate::error::Result;
use crate::overlay::CloseDelays;
use crate::view::Variant;

/// Default config file name
pub const CONFIG_FILE: &str = ".criteria.config.json";

fn default_config_schema() -> String {
    "https://match-criteria.dev/schemas/v1/config.schema.json".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON Schema URL for validation
    #[serde(rename = "$schema", default = "default_config_schema")]
    pub schema: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Layout the panel starts in
    #[serde(default)]
    pub variant: Variant,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Overlay close animation lengths
    #[serde(default)]
    pub close_delays: CloseDelays,

    /// Full replacement for the built-in category list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            version: default_version(),
            variant: Variant::default(),
            log_level: default_log_level(),
            close_delays: CloseDelays::default(),
            categories: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path`, or defaults when there is no file
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check the category override before it reaches the panel
    ///
    /// Unknown variant names are already rejected while parsing.
    pub fn validate(&self) -> Result<()> {
        self.catalog().map(|_| ())
    }

    /// Category override, or the built-in catalog
    pub fn catalog(&self) -> Result<CategoryCatalog> {
        match &self.categories {
            Some(categories) => CategoryCatalog::new(categories.clone()),
            None => Ok(CategoryCatalog::builtin()),
        }
    }
}
