//! Error types
//!
//! Every fallible operation in the library returns [`Result`]. Mutators that
//! reject their input leave the store exactly as it was.

use thiserror::Error;

/// Errors produced by the criteria model, its config and its session scripts
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("unknown qualifier: {0}")]
    UnknownQualifier(String),

    #[error("qualifier {qualifier} is not valid in {mode} mode")]
    QualifierMode { qualifier: String, mode: String },

    #[error("no bucket for {category} / {qualifier}")]
    MissingBucket { category: String, qualifier: String },

    #[error("no entry '{label}' in {category} / {qualifier}")]
    MissingEntry {
        category: String,
        qualifier: String,
        label: String,
    },

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("no boolean draft is open")]
    NoDraft,

    #[error("no {0} is open")]
    OverlayClosed(&'static str),

    #[error("{feature} is not available for {category}")]
    Unsupported {
        category: String,
        feature: &'static str,
    },

    #[error("unknown explorer group '{group}' for {category}")]
    UnknownGroup { category: String, group: String },

    #[error("step {index} ({action}) failed: {source}")]
    Step {
        index: usize,
        action: &'static str,
        #[source]
        source: Box<CriteriaError>,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for criteria operations
pub type Result<T> = std::result::Result<T, CriteriaError>;
