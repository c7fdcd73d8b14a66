//! Splitting a typed query into tokens and building the substitution map.

use std::collections::BTreeMap;
use tracing::trace;

/// Stands in for spaces inside quoted phrases while the query is split.
const SPACE_SENTINEL: &str = "%20";

/// The whitespace-separated words of a query.
///
/// Quoted phrases stay in one token, quotes included. Placeholders that use a
/// token blank it instead of removing it, so indices never shift and the rest
/// marker `\@` only expands to tokens nothing else has used.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// The number of tokens, blanked ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at the 1-based `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(String::as_str)
    }

    /// Blanks the token at the 1-based `index`. Returns `true` if the token
    /// still had content.
    pub fn blank(&mut self, index: usize) -> bool {
        match index.checked_sub(1).and_then(|i| self.tokens.get_mut(i)) {
            Some(token) if !token.is_empty() => {
                token.clear();
                true
            }
            _ => false,
        }
    }

    /// Blanks every token, returning how many still had content.
    pub fn blank_all(&mut self) -> usize {
        (1..=self.len()).filter(|&i| self.blank(i)).count()
    }

    /// Blanks the first token that assigns to `name` (`name=...`). Returns
    /// `true` if one was found.
    pub fn blank_named(&mut self, name: &str) -> bool {
        let found = self.tokens.iter().position(|token| {
            token
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('='))
        });
        found.is_some_and(|i| self.blank(i + 1))
    }

    /// The tokens not used by any placeholder, joined by single spaces.
    #[must_use]
    pub fn remaining(&self) -> String {
        simplify(&self.tokens.join(" "))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Values placeholders can refer to, keyed by position or by name.
///
/// Key `"0"` holds the whole query and `"1"`, `"2"`, ... the individual
/// tokens. A token of the form `name=value` additionally defines `name`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubstitutionMap {
    entries: BTreeMap<String, String>,
}

impl SubstitutionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Inserts an entry unless the query already defined the key.
    pub fn insert_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_insert_with(|| value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Splits `query` into tokens and builds the substitution map for it.
///
/// Spaces inside `"..."` phrases do not split tokens. The map receives the
/// whole query under `"0"`, each token under its 1-based index, and every
/// `name=value` token under `name` (with `%5C` turned back into `\`).
#[must_use]
pub fn build_substitution_map(query: &str) -> (TokenList, SubstitutionMap) {
    let protected = protect_quoted(query);

    let tokens = protected
        .split_whitespace()
        .map(|token| token.replace(SPACE_SENTINEL, " "))
        .collect::<Vec<_>>();

    let mut map = SubstitutionMap::new();
    map.insert("0", protected.replace(SPACE_SENTINEL, " "));

    for (i, token) in tokens.iter().enumerate() {
        map.insert((i + 1).to_string(), token.as_str());

        if let Some(pos) = token.find('=')
            && pos > 0
        {
            let (name, value) = (&token[..pos], &token[pos + 1..]);
            map.insert(name, value.replace("%5C", "\\"));
        }
    }

    for (key, value) in map.iter() {
        trace!(key, value, "substitution map entry");
    }

    (TokenList::new(tokens), map)
}

/// Replaces the spaces inside each `"..."` region with the sentinel. An
/// unmatched quote leaves the rest of the query untouched.
fn protect_quoted(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut rest = query;

    while let Some(open) = rest.find('"') {
        let Some(len) = rest[open + 1..].find('"') else {
            break;
        };
        let close = open + 1 + len;
        out.push_str(&rest[..open]);
        out.push_str(&rest[open..=close].replace(' ', SPACE_SENTINEL));
        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Trims `s` and collapses every run of whitespace into one space.
pub(crate) fn simplify(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
