use super::{
    Error, IKW_CHARSET, Mode, Result, WSC_CHARSET,
    ast::{Group, Reference, TemplateNode},
    charset::{decode_query, encode_fragment, normalize_charset},
    parser::parse_template,
    query::{SubstitutionMap, TokenList, build_substitution_map},
};
use state::State;
use tracing::debug;

mod state;

/// A piece of the expanded template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Already encoded text.
    Text(String),
    /// The rest marker, filled in once every group has been resolved.
    Rest,
}

/// The outcome of resolving one alternative of a placeholder group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The reference produced a value. Later alternatives are not tried.
    Found { value: String, consumed: usize },
    /// The reference produced a value that is only used if no later
    /// alternative is found.
    Fallback(Value),
    /// The reference names nothing in the substitution map.
    Unresolved,
}

/// Resolves a single reference against the map, blanking the tokens it uses.
pub fn resolve_placeholder(
    reference: &Reference,
    map: &SubstitutionMap,
    tokens: &mut TokenList,
) -> Resolution {
    State::new(map, tokens).resolve(reference)
}

/// Expands every placeholder in `template`. Malformed syntax is copied
/// through and unresolved groups expand to nothing.
#[must_use]
pub fn substitute_placeholders(
    template: &str,
    map: &SubstitutionMap,
    tokens: &mut TokenList,
) -> String {
    Engine::new(Mode::Lenient)
        .substitute(template, map, tokens)
        .unwrap_or_default()
}

/// Expands a provider query template for a typed query.
///
/// `raw_query` is percent-encoded. An empty string means "nothing to search
/// for": it is returned when the query is empty and the template has
/// placeholders, or when the query is empty and `allow_empty_query` is
/// `false`.
#[must_use]
pub fn format_result(
    template: &str,
    primary_charset: &str,
    fallback_charset: &str,
    raw_query: &str,
    allow_empty_query: bool,
) -> String {
    Engine::new(Mode::Lenient)
        .format_result(
            template,
            primary_charset,
            fallback_charset,
            raw_query,
            allow_empty_query,
        )
        .unwrap_or_default()
}

/// Like [`format_result`], but reports malformed templates and placeholder
/// groups that do not resolve.
pub fn format_result_strict(
    template: &str,
    primary_charset: &str,
    fallback_charset: &str,
    raw_query: &str,
    allow_empty_query: bool,
) -> Result<String> {
    Engine::new(Mode::Strict).format_result(
        template,
        primary_charset,
        fallback_charset,
        raw_query,
        allow_empty_query,
    )
}

/// The query substitution engine.
///
/// The engine holds no state between calls; every call builds its own token
/// list and substitution map.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Engine {
    mode: Mode,
}

impl Engine {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Expands `template` for the given query. See [`format_result`].
    ///
    /// # Errors
    ///
    /// Only in [`Mode::Strict`]: if the template is malformed or a
    /// placeholder group does not resolve, an [`Error`] is returned.
    pub fn format_result(
        &self,
        template: &str,
        primary_charset: &str,
        fallback_charset: &str,
        raw_query: &str,
        allow_empty_query: bool,
    ) -> Result<String> {
        if raw_query.is_empty() && (template.contains("\\{") || !allow_empty_query) {
            return Ok(String::new());
        }

        let query = decode_query(raw_query);
        debug!(query = %query, template, "formatting query");

        let (mut tokens, mut map) = build_substitution_map(&query);
        map.insert_default(IKW_CHARSET, normalize_charset(primary_charset));
        map.insert_default(WSC_CHARSET, normalize_charset(fallback_charset));

        self.substitute(template, &map, &mut tokens)
    }

    /// Expands every placeholder of `template` with values from `map`,
    /// blanking the tokens that get used. Groups are resolved left to right;
    /// `\@` is filled in last with whatever tokens remain.
    ///
    /// # Errors
    ///
    /// Only in [`Mode::Strict`]: see [`Engine::format_result`].
    pub fn substitute(
        &self,
        template: &str,
        map: &SubstitutionMap,
        tokens: &mut TokenList,
    ) -> Result<String> {
        let ast = parse_template(template, self.mode)?;
        let mut state = State::new(map, tokens);

        let mut pieces = Vec::with_capacity(ast.len());
        for node in ast.iter() {
            pieces.push(match node {
                TemplateNode::Text(text) => Value::Text(text.clone()),
                TemplateNode::Rest => Value::Rest,
                TemplateNode::Group(group) => self.resolve_group(&mut state, group)?,
            });
        }

        let rest = encode_fragment(&state.tokens.remaining());
        debug!(rest, "unused query tokens");

        let mut url = String::with_capacity(template.len());
        for piece in &pieces {
            match piece {
                Value::Text(text) => url.push_str(text),
                Value::Rest => url.push_str(&rest),
            }
        }

        debug!(url, "substituted query");
        Ok(url)
    }

    fn resolve_group(&self, state: &mut State<'_>, group: &Group) -> Result<Value> {
        let mut fallback = None;

        for reference in &group.alternatives {
            match state.resolve(reference) {
                Resolution::Found { value, .. } => return Ok(Value::Text(value)),
                Resolution::Fallback(value) => fallback = Some(value),
                Resolution::Unresolved => {}
            }
        }

        match (fallback, self.mode) {
            (Some(Value::Rest), _) => Ok(Value::Rest),
            (fallback, Mode::Lenient) => Ok(fallback.unwrap_or(Value::Text(String::new()))),
            (_, Mode::Strict) => Err(Error::Unresolved {
                pos: group.pos,
                group: group.source.clone(),
            }),
        }
    }
}
