use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::TemplateError;

/// Narrative record attached to a computed result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
}

/// Read-only source of narrative templates.
///
/// Implementations are shared across concurrent scoring calls without
/// locking, so lookups must not mutate.
pub trait TemplateStore: Send + Sync {
    /// Template for a derived key, if one exists.
    fn get(&self, key: &str) -> Option<Template>;

    /// Number of templates available.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Templates held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryTemplateStore {
    templates: BTreeMap<String, Template>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, template: Template) -> Option<Template> {
        self.templates.insert(key.into(), template)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Template)> for InMemoryTemplateStore {
    fn from_iter<I: IntoIterator<Item = (String, Template)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn get(&self, key: &str) -> Option<Template> {
        self.templates.get(key).cloned()
    }

    fn len(&self) -> usize {
        self.templates.len()
    }
}

/// Serialization of a template file, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(TemplateFormat::Json),
            Some("yaml") | Some("yml") => Ok(TemplateFormat::Yaml),
            _ => Err(TemplateError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse a `key → template` map.
    pub fn parse(self, contents: &str) -> Result<BTreeMap<String, Template>, TemplateError> {
        Ok(match self {
            TemplateFormat::Json => serde_json::from_str(contents)?,
            TemplateFormat::Yaml => serde_yaml::from_str(contents)?,
        })
    }
}

/// Templates loaded once from a JSON or YAML file.
#[derive(Clone, Debug)]
pub struct FileTemplateStore {
    path: PathBuf,
    inner: InMemoryTemplateStore,
}

impl FileTemplateStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let format = TemplateFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let templates = format.parse(&contents)?;

        debug!(
            path = %path.display(),
            count = templates.len(),
            "loaded narrative templates"
        );

        Ok(Self {
            path: path.to_path_buf(),
            inner: InMemoryTemplateStore { templates },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateStore for FileTemplateStore {
    fn get(&self, key: &str) -> Option<Template> {
        self.inner.get(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
