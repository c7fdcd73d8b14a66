use super::{
    Error, Mode, Result,
    ast::{AstRoot, Group, Reference, TemplateNode},
    lexer::{Lexer, PosToken, Token},
};
use tracing::warn;

/// Parses a query template into an AST.
///
/// In [`Mode::Lenient`] malformed syntax is kept as template text, so parsing
/// never fails. In [`Mode::Strict`] it is reported.
///
/// # Errors
///
/// In strict mode, if the template contains an unterminated, empty or nested
/// placeholder group, an empty alternative or an unterminated quoted literal,
/// an [`Error`] is returned.
pub fn parse_template(template: &str, mode: Mode) -> Result<AstRoot> {
    Parser::new(template, mode).parse()
}

/// Checks that a provider template is well formed.
///
/// # Errors
///
/// Returns the first syntax error found in the template.
pub fn validate_template(template: &str) -> Result<()> {
    parse_template(template, Mode::Strict).map(drop)
}

/// Converts a template string into an AST.
struct Parser<'a> {
    lexer: Lexer<'a>,
    template: &'a str,
    mode: Mode,
    nodes: Vec<TemplateNode>,
    text: String,
}

impl<'a> Parser<'a> {
    fn new(template: &'a str, mode: Mode) -> Self {
        Parser {
            lexer: Lexer::new(template),
            template,
            mode,
            nodes: Vec::new(),
            text: String::new(),
        }
    }

    fn strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    /// Converts the template into an [`AstRoot`], consuming the parser.
    fn parse(mut self) -> Result<AstRoot> {
        let mut legacy = false;

        while let Some(PosToken { pos, token }) = self.lexer.next() {
            match token {
                Token::Literal(c) => self.text.push(c),
                Token::Rest => {
                    self.flush_text();
                    self.nodes.push(TemplateNode::Rest);
                }
                Token::LegacyRest => {
                    legacy = true;
                    self.flush_text();
                    self.nodes.push(TemplateNode::Group(Group {
                        pos,
                        source: "@".to_string(),
                        alternatives: vec![Reference::Rest],
                    }));
                }
                Token::Open => {
                    let group = self.parse_group(pos)?;
                    self.flush_text();
                    self.nodes.push(TemplateNode::Group(group));
                }
                Token::EmptyGroup if self.strict() => return Err(Error::EmptyGroup { pos }),
                Token::Unterminated if self.strict() => {
                    return Err(Error::UnterminatedGroup { pos });
                }
                other => self.text.push_str(&other.as_text()),
            }
        }

        if legacy {
            warn!(
                template = self.template,
                "query template uses the legacy '\\1' reference, use '\\{{@}}' instead"
            );
        }

        self.flush_text();
        Ok(AstRoot::new(self.nodes))
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.nodes
                .push(TemplateNode::Text(std::mem::take(&mut self.text)));
        }
    }

    fn parse_group(&mut self, open: usize) -> Result<Group> {
        let mut alternatives = Vec::new();
        let mut raw = String::new();
        let mut raw_start = self.lexer.tell();
        let mut quotes = 0_usize;
        let source_start = raw_start;

        loop {
            let Some(PosToken { pos, token }) = self.lexer.next() else {
                // The lexer only opens a group when a `}` follows.
                return Err(Error::UnterminatedGroup { pos: open });
            };

            match token {
                Token::Close | Token::Comma => {
                    self.push_alternative(&mut alternatives, &raw, raw_start, quotes)?;
                    raw.clear();
                    quotes = 0;
                    raw_start = self.lexer.tell();

                    if token == Token::Close {
                        return Ok(Group {
                            pos: open,
                            source: self.template[source_start..pos].to_string(),
                            alternatives,
                        });
                    }
                }
                Token::Quote => {
                    quotes += 1;
                    raw.push('"');
                }
                Token::NestedOpen if self.strict() => return Err(Error::NestedGroup { pos }),
                other => raw.push_str(&other.as_text()),
            }
        }
    }

    fn push_alternative(
        &self,
        alternatives: &mut Vec<Reference>,
        raw: &str,
        pos: usize,
        quotes: usize,
    ) -> Result<()> {
        if raw.is_empty() {
            return if self.strict() {
                Err(Error::EmptyAlternative { pos })
            } else {
                Ok(())
            };
        }

        if quotes % 2 == 1 && self.strict() {
            return Err(Error::UnterminatedQuote { pos });
        }

        alternatives.push(Reference::classify(raw));
        Ok(())
    }
}
