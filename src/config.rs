//! Web shortcut filter settings.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The keyword delimiter used when none or an unsupported one is configured.
pub const DEFAULT_DELIMITER: char = ':';

/// Settings for [`SearchFilter`](crate::SearchFilter).
///
/// ```toml
/// keyword_delimiter = ":"
/// enable_web_shortcuts = true
/// default_search_engine = "google"
/// verbose = false
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Separates the shortcut key from the query, either `:` or a space.
    pub keyword_delimiter: char,
    /// Whether shortcuts like `gg:rust` are expanded at all.
    pub enable_web_shortcuts: bool,
    /// Desktop entry name of the provider used for input that is not a
    /// shortcut.
    pub default_search_engine: Option<String>,
    /// Logs every expanded shortcut at `info` instead of `debug` level.
    pub verbose: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keyword_delimiter: DEFAULT_DELIMITER,
            enable_web_shortcuts: true,
            default_search_engine: None,
            verbose: false,
        }
    }
}

impl FilterConfig {
    /// Parses settings from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// The effective keyword delimiter. Only `:` and a space are supported.
    #[must_use]
    pub fn delimiter(&self) -> char {
        match self.keyword_delimiter {
            c @ (':' | ' ') => c,
            _ => DEFAULT_DELIMITER,
        }
    }

    /// The configured default search engine, if any.
    #[must_use]
    pub fn default_engine(&self) -> Option<&str> {
        self.default_search_engine
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}
