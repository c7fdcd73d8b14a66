//! Search providers and their lookup by shortcut key.

use crate::{Error, Result, parser::validate_template};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A configured search target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProvider {
    /// Human readable name, e.g. `Google`.
    pub name: String,
    /// Identifier used to pick the default search engine, e.g. `google`.
    pub desktop_entry_name: String,
    /// Shortcut keys, e.g. `gg` and `google`.
    #[serde(default)]
    pub keys: Vec<String>,
    /// The query template.
    pub query: String,
    /// The charset the provider expects. Empty means the default.
    #[serde(default)]
    pub charset: String,
}

#[derive(Deserialize, Serialize)]
struct ProviderFile {
    #[serde(default, rename = "provider")]
    providers: Vec<SearchProvider>,
}

/// A set of providers, looked up by key or desktop entry name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderRegistry {
    providers: Vec<SearchProvider>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `[[provider]]` tables from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ProviderFile = toml::from_str(s)?;
        Ok(Self {
            providers: file.providers,
        })
    }

    /// Reads `[[provider]]` tables from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Adds a provider. A provider with the same desktop entry name is
    /// replaced.
    pub fn insert(&mut self, provider: SearchProvider) {
        match self
            .providers
            .iter_mut()
            .find(|p| p.desktop_entry_name == provider.desktop_entry_name)
        {
            Some(existing) => *existing = provider,
            None => self.providers.push(provider),
        }
    }

    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&SearchProvider> {
        self.providers
            .iter()
            .find(|p| p.keys.iter().any(|k| k == key))
    }

    #[must_use]
    pub fn find_by_desktop_name(&self, name: &str) -> Option<&SearchProvider> {
        self.providers
            .iter()
            .find(|p| p.desktop_entry_name == name)
    }

    /// Like [`find_by_desktop_name`](Self::find_by_desktop_name), but fails
    /// for unknown names.
    pub fn get(&self, name: &str) -> Result<&SearchProvider> {
        self.find_by_desktop_name(name)
            .ok_or_else(|| Error::UnknownProvider(name.to_string()))
    }

    /// Checks every provider's query template.
    pub fn validate(&self) -> Result<()> {
        for provider in &self.providers {
            validate_template(&provider.query).map_err(|err| Error::InvalidProvider {
                name: provider.name.clone(),
                source: Box::new(err),
            })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchProvider> {
        self.providers.iter()
    }
}
