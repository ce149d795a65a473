use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a template file. Lookups themselves never fail.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON templates: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML templates: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported template file type: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },
}
