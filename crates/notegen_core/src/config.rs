use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::template::{DEFAULT_BODY_TEMPLATE, DEFAULT_FILENAME_TEMPLATE};

/// Defaults and rendering behavior for a [`NoteRenderer`](crate::NoteRenderer).
///
/// Every field is optional in TOML:
///
/// ```toml
/// filename_template = "{{dateFormat \"%Y-%m-%d\" Date}}-{{TitleSlug}}.md"
/// strict = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Filename template used when a template has no `#` directive, or an empty one.
    pub filename_template: String,

    /// Body template used when no template file is given.
    pub body_template: String,

    /// Fail on fields that do not resolve instead of rendering them empty.
    pub strict: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            filename_template: DEFAULT_FILENAME_TEMPLATE.to_string(),
            body_template: DEFAULT_BODY_TEMPLATE.to_string(),
            strict: true,
        }
    }
}

impl TemplateConfig {
    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Serialize config to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

/// Errors from parsing or writing a [`TemplateConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[source] toml::de::Error),
    /// The config could not be serialized.
    #[error("Config serialize error: {0}")]
    Serialize(#[source] toml::ser::Error),
}
