/// One alternative inside a placeholder group.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reference {
    /// `first-last`. `None` (or a written `0`) means the first respectively
    /// the last token.
    Range {
        first: Option<usize>,
        last: Option<usize>,
    },
    /// `"text"`, a default value taken literally.
    Quoted(String),
    /// A substitution map key, such as `1` or `lang`.
    Key(String),
    /// `@`, the tokens no other placeholder has used.
    Rest,
}

impl Reference {
    /// Classifies the raw text of an alternative.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Some((first, last)) = raw.split_once('-')
            && is_digits(first)
            && is_digits(last)
        {
            return Reference::Range {
                first: parse_index(first),
                last: parse_index(last),
            };
        }

        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Reference::Quoted(raw[1..raw.len() - 1].to_string());
        }

        if raw == "@" {
            Reference::Rest
        } else {
            Reference::Key(raw.to_string())
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Unparsable or zero indices mean "use the default".
fn parse_index(s: &str) -> Option<usize> {
    s.parse().ok().filter(|&n| n > 0)
}
