use super::{Resolution, Value};
use crate::{
    ast::Reference,
    charset::encode_fragment,
    query::{SubstitutionMap, TokenList},
};
use tracing::trace;

/// The per-call substitution state: the map placeholders read from and the
/// tokens they consume.
pub struct State<'a> {
    pub map: &'a SubstitutionMap,
    pub tokens: &'a mut TokenList,
}

impl<'a> State<'a> {
    pub fn new(map: &'a SubstitutionMap, tokens: &'a mut TokenList) -> Self {
        Self { map, tokens }
    }

    pub fn resolve(&mut self, reference: &Reference) -> Resolution {
        let resolution = match reference {
            Reference::Range { first, last } => self.resolve_range(*first, *last),
            Reference::Quoted(text) => Resolution::Found {
                value: encode_fragment(text),
                consumed: 0,
            },
            Reference::Key(key) => self.resolve_key(key),
            Reference::Rest => Resolution::Fallback(Value::Rest),
        };
        trace!(?reference, ?resolution, "resolved reference");
        resolution
    }

    fn resolve_range(&mut self, first: Option<usize>, last: Option<usize>) -> Resolution {
        let count = self.tokens.len();
        let first = first.unwrap_or(1);
        let last = last.unwrap_or(count).min(count);

        let mut joined = String::new();
        let mut consumed = 0;
        for index in first..=last {
            joined.push_str(self.map.get(&index.to_string()).unwrap_or_default());
            joined.push(' ');
            if self.tokens.blank(index) {
                consumed += 1;
            }
        }

        let joined = joined.trim();
        if joined.is_empty() {
            Resolution::Fallback(Value::Text(String::new()))
        } else {
            Resolution::Found {
                value: encode_fragment(joined),
                consumed,
            }
        }
    }

    fn resolve_key(&mut self, key: &str) -> Resolution {
        let Some(value) = self.map.get(key) else {
            return Resolution::Unresolved;
        };

        let consumed = if key.bytes().all(|b| b.is_ascii_digit()) {
            match key.parse::<usize>() {
                // The whole query uses up every token.
                Ok(0) => self.tokens.blank_all(),
                Ok(index) => usize::from(self.tokens.blank(index)),
                Err(_) => 0,
            }
        } else {
            usize::from(self.tokens.blank_named(key))
        };

        // The encoder escapes a literal `+` as `%2B`, so it cannot be read
        // back as a space.
        Resolution::Found {
            value: encode_fragment(value),
            consumed,
        }
    }
}
