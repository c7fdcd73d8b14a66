use std::borrow::Cow;

/// A query template token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A plain character, inside or outside a placeholder group.
    Literal(char),
    /// `\{` opening a placeholder group that is closed later on.
    Open,
    /// `}` closing a placeholder group.
    Close,
    /// `,` separating alternatives inside a group.
    Comma,
    /// `"` inside a group. Commas between two quotes do not separate
    /// alternatives, so `\{"a,b"}` is the single default `a,b`.
    Quote,
    /// `\@` outside a group: the tokens no placeholder has used.
    Rest,
    /// `\1` outside a group, the legacy spelling of `\{@}`.
    LegacyRest,
    /// `\{}`.
    EmptyGroup,
    /// `\{` with no `}` anywhere after it.
    Unterminated,
    /// `\{` inside a group.
    NestedOpen,
}

impl Token {
    /// Returns the template text this token was read from.
    #[must_use]
    pub fn as_text(self) -> Cow<'static, str> {
        match self {
            Token::Literal(c) => Cow::Owned(c.to_string()),
            Token::Open | Token::Unterminated | Token::NestedOpen => Cow::Borrowed("\\{"),
            Token::Close => Cow::Borrowed("}"),
            Token::Comma => Cow::Borrowed(","),
            Token::Quote => Cow::Borrowed("\""),
            Token::Rest => Cow::Borrowed("\\@"),
            Token::LegacyRest => Cow::Borrowed("\\1"),
            Token::EmptyGroup => Cow::Borrowed("\\{}"),
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The byte offset of the token in the template string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
