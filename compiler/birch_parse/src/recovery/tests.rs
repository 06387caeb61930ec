use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Import).with(TokenKind::Eof);
    assert!(set.contains(TokenKind::Import));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::Module));
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
    assert!(TokenSet::new().is_empty());
}

#[test]
fn test_token_set_union() {
    let set = TokenSet::single(TokenKind::Ident).union(FIXITY);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![
            TokenKind::Infixl,
            TokenKind::Infixr,
            TokenKind::Infix,
            TokenKind::Ident
        ]
    );
}

#[test]
fn test_every_kind_fits() {
    for kind in TokenKind::ALL {
        assert!(TokenSet::single(kind).contains(kind));
        assert_eq!(TokenSet::from(kind).len(), 1);
    }
}

#[test]
fn test_format_expected() {
    assert_eq!(
        format_expected(TokenSet::single(TokenKind::Assign)),
        "`=`"
    );
    assert_eq!(format_expected(EXPOSED_START), "an identifier or `..`");
    assert_eq!(
        format_expected(DECL_START),
        "`import`, `type`, or an identifier"
    );
    assert_eq!(format_expected(TokenSet::new()), "nothing");
}

#[test]
fn test_describe_kind() {
    assert_eq!(describe_kind(TokenKind::Exposing), "`exposing`");
    assert_eq!(describe_kind(TokenKind::Int), "an integer");
    assert_eq!(describe_kind(TokenKind::Eof), "the end of the file");
}

#[test]
fn test_skip_to_line_start() {
    let tokens = birch_lexer::lex("foo = 1 2\n  3\nbar").tokens.into_stream();
    let mut cursor = Cursor::new(tokens);
    cursor.advance();
    assert_eq!(skip_to_line_start(&mut cursor), 4);
    assert_eq!(cursor.current().text, "bar");
    // Already at a line start: nothing to skip.
    assert_eq!(skip_to_line_start(&mut cursor), 0);
}

#[test]
fn test_skip_stops_at_eof() {
    let tokens = birch_lexer::lex("foo = 1").tokens.into_stream();
    let mut cursor = Cursor::new(tokens);
    cursor.advance();
    assert_eq!(skip_to_line_start(&mut cursor), 2);
    assert!(cursor.is_at_end());
}
