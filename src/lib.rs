//! A web shortcut ("Internet keyword") query substitution library.
//!
//! A search provider describes its target URL with a query template such as
//! `https://example.org/search?q=\{@}&lang=\{lang,"en"}`. Given the text a
//! user typed, [`format_result`] splits it into tokens, builds a
//! [`SubstitutionMap`] and expands every placeholder in the template with
//! percent-encoded values.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod ast;
pub mod charset;
pub mod config;
pub mod engine;
pub mod filter;
pub mod lexer;
pub mod parser;
pub mod provider;
pub mod query;

use std::path::PathBuf;

pub use self::{
    ast::{AstRoot, Reference, TemplateNode},
    config::FilterConfig,
    engine::{
        Engine, Resolution, format_result, format_result_strict, resolve_placeholder,
        substitute_placeholders,
    },
    filter::SearchFilter,
    lexer::{Lexer, Token},
    parser::{parse_template, validate_template},
    provider::{ProviderRegistry, SearchProvider},
    query::{SubstitutionMap, TokenList, build_substitution_map},
};

/// How the engine treats templates it cannot fully expand.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Malformed syntax is emitted verbatim and unresolved placeholders expand
    /// to nothing.
    #[default]
    Lenient,
    /// Malformed syntax and unresolved placeholders are reported as errors.
    Strict,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `\{` placeholder opener was never closed by `}`.
    #[error("unterminated placeholder group at {pos}")]
    UnterminatedGroup { pos: usize },

    /// A placeholder group with nothing between the braces.
    #[error("empty placeholder group at {pos}")]
    EmptyGroup { pos: usize },

    /// A `\{` appeared inside another placeholder group.
    #[error("nested placeholder group at {pos}")]
    NestedGroup { pos: usize },

    /// Two commas in a row, or a comma at either end of a group.
    #[error("empty alternative in placeholder group at {pos}")]
    EmptyAlternative { pos: usize },

    /// A quoted default value was not closed before the end of its group.
    #[error("unterminated quoted literal at {pos}")]
    UnterminatedQuote { pos: usize },

    /// No alternative of a placeholder group produced a value.
    #[error("placeholder group '\\{{{group}}}' at {pos} did not resolve")]
    Unresolved { pos: usize, group: String },

    /// No search provider is registered under the given key or name.
    #[error("no search provider named '{0}'")]
    UnknownProvider(String),

    /// A provider definition carries a template that does not parse.
    #[error("invalid query template for provider '{name}': {source}")]
    InvalidProvider {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Substitution map key holding the provider's primary charset.
pub const IKW_CHARSET: &str = "ikw_charset";

/// Substitution map key holding the fallback charset.
pub const WSC_CHARSET: &str = "wsc_charset";
