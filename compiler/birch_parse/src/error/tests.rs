use super::*;
use pretty_assertions::assert_eq;

fn token(kind: TokenKind, text: &str, column: u32) -> Token {
    let offset = column - 1;
    Token::new(
        kind,
        text,
        Position::new(1, column, offset),
        Span::new(offset, offset + u32::try_from(text.len()).unwrap()),
    )
}

fn error(kind: ParseErrorKind, found: &Token, context: Vec<Token>) -> ParseError {
    ParseError {
        kind,
        pos: found.pos,
        span: found.span,
        found: found.kind,
        found_text: found.text.clone(),
        context,
    }
}

#[test]
fn test_codes() {
    let found = token(TokenKind::Ident, "foo", 1);
    let cases = [
        (ParseErrorKind::Expected(TokenKind::Assign), ErrorCode::E1001),
        (
            ParseErrorKind::ExpectedOneOf(TokenSet::single(TokenKind::Ident)),
            ErrorCode::E1002,
        ),
        (
            ParseErrorKind::UnexpectedEof {
                expected: TokenSet::single(TokenKind::Ident),
            },
            ErrorCode::E1003,
        ),
        (
            ParseErrorKind::Message {
                code: ErrorCode::E1006,
                message: "bad".to_string(),
            },
            ErrorCode::E1006,
        ),
    ];
    for (kind, code) in cases {
        assert_eq!(error(kind, &found, Vec::new()).code(), code);
    }
}

#[test]
fn test_expected_message() {
    let found = token(TokenKind::Int, "42", 5);
    let err = error(ParseErrorKind::Expected(TokenKind::Assign), &found, Vec::new());
    assert_eq!(err.message(), "I was expecting `=`, but I found `42`.");
    assert_eq!(err.to_string(), "1:5: I was expecting `=`, but I found `42`.");
}

#[test]
fn test_expected_one_of_message() {
    let found = token(TokenKind::RParen, ")", 20);
    let err = error(
        ParseErrorKind::ExpectedOneOf(crate::recovery::EXPOSED_START),
        &found,
        Vec::new(),
    );
    assert_eq!(
        err.message(),
        "I was expecting an identifier or `..`, but I found `)`."
    );
}

#[test]
fn test_eof_message() {
    let found = Token::eof(Position::new(3, 1, 20));
    let err = error(
        ParseErrorKind::UnexpectedEof {
            expected: TokenSet::single(TokenKind::Assign),
        },
        &found,
        Vec::new(),
    );
    assert!(err.is_eof());
    assert_eq!(
        err.message(),
        "I reached the end of the file while I was expecting `=`."
    );
}

#[test]
fn test_diagnostic_carries_context() {
    let context = vec![
        token(TokenKind::Ident, "foo", 1),
        token(TokenKind::Colon, ":", 5),
        token(TokenKind::Int, "42", 7),
    ];
    let found = context[2].clone();
    let err = error(
        ParseErrorKind::ExpectedOneOf(crate::recovery::TYPE_START),
        &found,
        context,
    );
    assert_eq!(err.context_text(), "foo : 42");

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.primary_pos(), Some(Position::new(1, 7, 6)));
    assert_eq!(diag.notes, vec!["while reading: foo : 42".to_string()]);
}

#[test]
fn test_message_diagnostic_without_context() {
    let found = token(TokenKind::Ident, "bar", 3);
    let err = error(
        ParseErrorKind::Message {
            code: ErrorCode::E1004,
            message: "I was expecting an upper case name.".to_string(),
        },
        &found,
        Vec::new(),
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.message, "I was expecting an upper case name.");
    assert!(diag.notes.is_empty());
}
