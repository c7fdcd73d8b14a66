//! Turning typed location-bar input into search URLs.

use crate::{
    config::FilterConfig,
    engine::format_result,
    provider::{ProviderRegistry, SearchProvider},
};
use tracing::{debug, info};

/// URL schemes that are never mistaken for a shortcut key.
const KNOWN_PROTOCOLS: &[&str] = &[
    "about", "data", "file", "fish", "ftp", "ftps", "gopher", "help", "http", "https", "imap",
    "imaps", "info", "irc", "ldap", "ldaps", "mailto", "man", "news", "nfs", "nntp", "pop3",
    "pop3s", "sftp", "smb", "smtp", "smtps", "ssh", "telnet", "trash", "webdav", "webdavs",
];

/// Returns whether `scheme` names a protocol rather than a shortcut key.
#[must_use]
pub fn is_known_protocol(scheme: &str) -> bool {
    KNOWN_PROTOCOLS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(scheme))
}

/// Expands web shortcuts (`gg:rust`) and default searches with a set of
/// providers.
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    config: FilterConfig,
    registry: ProviderRegistry,
}

impl SearchFilter {
    #[must_use]
    pub fn new(config: FilterConfig, registry: ProviderRegistry) -> Self {
        Self { config, registry }
    }

    #[must_use]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Expands `typed` if it starts with a provider's shortcut key followed by
    /// the keyword delimiter. Returns an empty string otherwise.
    ///
    /// With a space delimiter, a lone key such as `gg` is searched for with
    /// its own provider.
    #[must_use]
    pub fn web_shortcut_query(&self, typed: &str) -> String {
        if !self.config.enable_web_shortcuts {
            return String::new();
        }

        let delimiter = self.config.delimiter();
        let (key, query) = match typed.find(delimiter) {
            Some(pos) => (&typed[..pos], &typed[pos + delimiter.len_utf8()..]),
            None if delimiter == ' ' => (typed, typed),
            None => return String::new(),
        };

        if key.is_empty() || is_known_protocol(key) {
            return String::new();
        }

        let Some(provider) = self.registry.find_by_key(key) else {
            debug!(key, "no search provider for shortcut key");
            return String::new();
        };

        self.expand(provider, query)
    }

    /// Searches for `typed` with the default search engine, unless it starts
    /// with a known URL scheme. Returns an empty string if no default engine
    /// is configured.
    #[must_use]
    pub fn auto_web_search_query(&self, typed: &str) -> String {
        if !self.config.enable_web_shortcuts {
            return String::new();
        }

        let Some(name) = self.config.default_engine() else {
            return String::new();
        };

        if let Some(pos) = typed.find(':')
            && is_known_protocol(&typed[..pos])
        {
            return String::new();
        }

        let Some(provider) = self.registry.find_by_desktop_name(name) else {
            debug!(name, "default search engine is not a known provider");
            return String::new();
        };

        self.expand(provider, typed)
    }

    /// Tries the web shortcut first, then the default search engine.
    #[must_use]
    pub fn filter(&self, typed: &str) -> Option<String> {
        let url = self.web_shortcut_query(typed);
        let url = if url.is_empty() {
            self.auto_web_search_query(typed)
        } else {
            url
        };
        (!url.is_empty()).then_some(url)
    }

    fn expand(&self, provider: &SearchProvider, query: &str) -> String {
        let url = format_result(&provider.query, &provider.charset, "", query, true);

        if self.config.verbose {
            info!(provider = provider.name, query, url, "expanded search query");
        } else {
            debug!(provider = provider.name, query, url, "expanded search query");
        }

        url
    }
}
