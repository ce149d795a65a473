//! Output formatting for CLI

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Render a serializable value for the machine-readable formats.
///
/// Returns `None` for [`OutputFormat::Table`], which each command renders itself.
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<Option<String>> {
    Ok(match format {
        OutputFormat::Table => None,
        OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
    })
}
