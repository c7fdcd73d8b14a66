use ikws::lexer::{Lexer, PosToken, Token};

fn lex_all(input: &str) -> Vec<Token> {
    Lexer::new(input).map(|t| t.token).collect()
}

fn lit(s: &str) -> Vec<Token> {
    s.chars().map(Token::Literal).collect()
}

#[test]
fn test_plain_text_lexer() {
    assert_eq!(lex_all("abc"), lit("abc"));
    assert_eq!(lex_all("a},\"b"), lit("a},\"b"));
    assert!(lex_all("").is_empty());
}

#[test]
fn test_group_lexer() {
    let mut expected = lit("a");
    expected.extend([Token::Open, Token::Literal('1'), Token::Close]);
    expected.extend(lit("b"));
    assert_eq!(lex_all("a\\{1}b"), expected);
}

#[test]
fn test_alternatives_lexer() {
    assert_eq!(
        lex_all("\\{a,\"x,y\"}"),
        vec![
            Token::Open,
            Token::Literal('a'),
            Token::Comma,
            Token::Quote,
            Token::Literal('x'),
            Token::Literal(','),
            Token::Literal('y'),
            Token::Quote,
            Token::Close,
        ]
    );
}

#[test]
fn test_markers_lexer() {
    assert_eq!(lex_all("q=\\@"), vec![Token::Literal('q'), Token::Literal('='), Token::Rest]);
    assert_eq!(lex_all("\\1"), vec![Token::LegacyRest]);
    assert_eq!(lex_all("\\12"), vec![Token::LegacyRest, Token::Literal('2')]);
    assert_eq!(lex_all("\\2"), lit("\\2"));
}

#[test]
fn test_markers_inside_group_are_plain() {
    assert_eq!(
        lex_all("\\{\\@}"),
        vec![
            Token::Open,
            Token::Literal('\\'),
            Token::Literal('@'),
            Token::Close
        ]
    );
}

#[test]
fn test_malformed_groups_lexer() {
    assert_eq!(lex_all("\\{}"), vec![Token::EmptyGroup]);

    let mut expected = vec![Token::Unterminated];
    expected.extend(lit("abc"));
    assert_eq!(lex_all("\\{abc"), expected);

    assert_eq!(
        lex_all("\\{a\\{b}"),
        vec![
            Token::Open,
            Token::Literal('a'),
            Token::NestedOpen,
            Token::Literal('b'),
            Token::Close
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = Lexer::new("ü\\{x}").collect::<Vec<_>>();
    assert_eq!(tokens[1].pos, 2);
    assert_eq!(*tokens[1], Token::Open);
    assert_eq!(tokens[3].pos, 5);
}

#[test]
fn test_peek_and_consume() {
    let mut lexer = Lexer::new("\\{a}");
    assert_eq!(lexer.tell(), 0);
    assert!(matches!(lexer.peek(), Some(PosToken { pos: 0, token: Token::Open })));
    assert!(lexer.consume(Token::Open));
    assert_eq!(lexer.tell(), 2);
    assert!(!lexer.consume(Token::Close));
    assert_eq!(lexer.next().map(|t| t.token), Some(Token::Literal('a')));
    assert!(lexer.consume(Token::Close));
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_token_text() {
    assert_eq!(Token::Open.as_text(), "\\{");
    assert_eq!(Token::EmptyGroup.as_text(), "\\{}");
    assert_eq!(Token::Literal('x').as_text(), "x");
}
