pub mod token;

pub use token::{PosToken, Token};

/// Splits a query template into [`Token`]s.
///
/// Outside a placeholder group only `\{`, `\@` and `\1` are special. Inside a
/// group `}`, `,` and `"` are as well. Whether a `\{` opens a group is decided
/// up front: it must be followed by at least one character and a `}`.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    in_group: bool,
    in_quote: bool,
    peeked: Option<Option<PosToken>>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            in_group: false,
            in_quote: false,
            peeked: None,
        }
    }

    /// Returns the byte offset of the next unread character.
    #[must_use]
    pub fn tell(&self) -> usize {
        match self.peeked {
            Some(Some(PosToken { pos, .. })) => pos,
            _ => self.pos,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<PosToken> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_token());
        }
        self.peeked.flatten()
    }

    /// Consumes the next token if it is `token`.
    pub fn consume(&mut self, token: Token) -> bool {
        if self.peek().is_some_and(|next| next.token == token) {
            self.next();
            true
        } else {
            false
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn read_token(&mut self) -> Option<PosToken> {
        let pos = self.pos;
        let rest = self.rest();

        let token = if rest.starts_with("\\{") {
            self.pos += 2;
            if self.in_group {
                Token::NestedOpen
            } else {
                match self.rest().find('}') {
                    None => Token::Unterminated,
                    Some(0) => {
                        self.pos += 1;
                        Token::EmptyGroup
                    }
                    Some(_) => {
                        self.in_group = true;
                        Token::Open
                    }
                }
            }
        } else if !self.in_group && rest.starts_with("\\@") {
            self.pos += 2;
            Token::Rest
        } else if !self.in_group && rest.starts_with("\\1") {
            self.pos += 2;
            Token::LegacyRest
        } else {
            match self.advance()? {
                '}' if self.in_group => {
                    self.in_group = false;
                    self.in_quote = false;
                    Token::Close
                }
                '"' if self.in_group => {
                    self.in_quote = !self.in_quote;
                    Token::Quote
                }
                ',' if self.in_group && !self.in_quote => Token::Comma,
                c => Token::Literal(c),
            }
        };

        Some(PosToken { pos, token })
    }
}

impl Iterator for Lexer<'_> {
    type Item = PosToken;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.read_token(),
        }
    }
}
