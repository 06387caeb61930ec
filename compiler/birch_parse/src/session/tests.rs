use super::*;
use crate::ParseErrorKind;
use birch_ir::{Position, Span, TokenKind};
use pretty_assertions::assert_eq;

fn ident(n: u32) -> Token {
    Token::new(
        TokenKind::Ident,
        format!("t{n}"),
        Position::new(1, n + 1, n),
        Span::new(n, n + 1),
    )
}

fn texts(window: &ContextWindow) -> Vec<String> {
    window.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn test_window_keeps_last_tokens() {
    let mut window = ContextWindow::new();
    for n in 0..12 {
        window.push(ident(n));
    }
    assert_eq!(window.len(), CONTEXT_WINDOW);
    assert_eq!(
        texts(&window),
        vec!["t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11"]
    );
}

#[test]
fn test_reset_keeps_most_recent() {
    let mut window = ContextWindow::new();
    for n in 0..3 {
        window.push(ident(n));
    }
    window.reset();
    assert_eq!(texts(&window), vec!["t2"]);
    assert_eq!(window.last().map(|t| t.text.as_str()), Some("t2"));

    window.reset();
    assert_eq!(window.len(), 1);
}

#[test]
fn test_reset_empty_window() {
    let mut window = ContextWindow::new();
    window.reset();
    assert!(window.is_empty());
}

#[test]
fn test_snapshot_is_independent() {
    let mut window = ContextWindow::new();
    window.push(ident(0));
    let snapshot = window.snapshot();
    window.push(ident(1));
    assert_eq!(snapshot.len(), 1);
    assert_eq!(window.len(), 2);
}

#[test]
fn test_session_records_in_order() {
    let mut session = Session::new();
    for code in [
        birch_diagnostic::ErrorCode::E1004,
        birch_diagnostic::ErrorCode::E1010,
    ] {
        session.record(ParseError {
            kind: ParseErrorKind::Message {
                code,
                message: code.description().to_string(),
            },
            pos: Position::START,
            span: Span::DUMMY,
            found: TokenKind::Ident,
            found_text: "x".to_string(),
            context: Vec::new(),
        });
    }
    assert_eq!(session.error_count(), 2);
    let codes: Vec<_> = session.into_errors().iter().map(ParseError::code).collect();
    assert_eq!(
        codes,
        vec![
            birch_diagnostic::ErrorCode::E1004,
            birch_diagnostic::ErrorCode::E1010
        ]
    );
}
