use super::*;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, col: u32) -> Token {
    let offset = col - 1;
    Token::new(
        kind,
        text,
        Position::new(1, col, offset),
        Span::new(offset, offset + u32::try_from(text.len()).unwrap_or(0)),
    )
}

#[test]
fn test_token_kind_all_matches_discriminants() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(usize::from(kind.index()), i, "{kind:?}");
    }
    assert_eq!(TokenKind::ALL.len(), TokenKind::COUNT);
}

#[test]
fn test_token_kind_classification() {
    assert!(TokenKind::Int.is_literal());
    assert!(TokenKind::True.is_literal());
    assert!(!TokenKind::Ident.is_literal());
    assert!(TokenKind::Exposing.is_keyword());
    assert!(!TokenKind::Op.is_keyword());
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::DotDot.to_string(), "..");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}

#[test]
fn test_token_describe() {
    assert_eq!(tok(TokenKind::Ident, "foo", 1).describe(), "foo");
    assert_eq!(Token::eof(Position::START).describe(), "end of file");
}

#[test]
fn test_token_list_terminates_once() {
    let mut list = TokenList::from_tokens(vec![tok(TokenKind::Ident, "foo", 1)]);
    assert_eq!(list.kinds(), vec![TokenKind::Ident, TokenKind::Eof]);
    list.terminate();
    assert_eq!(list.len(), 2);

    let eof = list.get(1).map(|t| t.pos);
    assert_eq!(eof, Some(Position::new(1, 4, 3)));
}

#[test]
fn test_empty_token_list_gets_eof() {
    let list = TokenList::from_tokens(Vec::new());
    assert_eq!(list.kinds(), vec![TokenKind::Eof]);
}

#[test]
fn test_token_stream_repeats_eof() {
    let mut stream = TokenStream::new(vec![tok(TokenKind::Int, "1", 1)]);
    assert_eq!(stream.next_token().kind, TokenKind::Int);
    for _ in 0..3 {
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_token_source_through_mut_ref() {
    fn pull(source: &mut impl TokenSource) -> TokenKind {
        source.next_token().kind
    }
    let mut stream = TokenStream::new(vec![tok(TokenKind::Comma, ",", 1)]);
    let mut by_ref = &mut stream;
    assert_eq!(pull(&mut by_ref), TokenKind::Comma);
    assert_eq!(pull(&mut stream), TokenKind::Eof);
}
