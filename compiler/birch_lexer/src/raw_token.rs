//! Raw tokenizer.
//!
//! The `RawToken` enum is the logos-derived token shape before it is mapped
//! onto the closed `TokenKind` set. Symbol runs are lexed as one token and
//! classified afterwards, so `:>` stays an operator while a lone `:` is
//! punctuation.

use birch_ir::TokenKind;
use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"--[^\n]*")]
    LineComment,

    #[token("{-", block_comment)]
    BlockComment,

    #[token("module")]
    Module,
    #[token("import")]
    Import,
    #[token("exposing")]
    Exposing,
    #[token("as")]
    As,
    #[token("type")]
    Type,
    #[token("alias")]
    Alias,
    #[token("infixl")]
    Infixl,
    #[token("infixr")]
    Infixr,
    #[token("infix")]
    Infix,

    #[token("True")]
    True,
    #[token("False")]
    False,

    #[regex(r"[0-9]+")]
    #[regex(r"0x[0-9a-fA-F]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)'")]
    Char,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,

    #[regex(r"[+\-*/<>=?:!&|^.%~$#@\\]+")]
    Symbol,

    #[regex(r"[\p{L}_][\p{L}\p{N}_']*")]
    Ident,
}

impl RawToken {
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::LineComment | RawToken::BlockComment => TokenKind::Comment,
            RawToken::Module => TokenKind::Module,
            RawToken::Import => TokenKind::Import,
            RawToken::Exposing => TokenKind::Exposing,
            RawToken::As => TokenKind::As,
            RawToken::Type => TokenKind::Type,
            RawToken::Alias => TokenKind::Alias,
            RawToken::Infixl => TokenKind::Infixl,
            RawToken::Infixr => TokenKind::Infixr,
            RawToken::Infix => TokenKind::Infix,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Int => TokenKind::Int,
            RawToken::Float => TokenKind::Float,
            RawToken::String => TokenKind::String,
            RawToken::Char => TokenKind::Char,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Symbol => symbol_kind(slice),
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

/// Reserved symbols are punctuation only when they make up the whole run.
pub(crate) fn symbol_kind(symbol: &str) -> TokenKind {
    match symbol {
        "." => TokenKind::Dot,
        ".." => TokenKind::DotDot,
        ":" => TokenKind::Colon,
        "=" => TokenKind::Assign,
        "|" => TokenKind::Pipe,
        "->" => TokenKind::Arrow,
        _ => TokenKind::Op,
    }
}

/// Consume a `{- ... -}` comment body, honoring nesting.
///
/// On a missing terminator the rest of the input is consumed and the token
/// becomes an error.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'{', Some(b'-')) => {
                depth += 1;
                i += 2;
            }
            (b'-', Some(b'}')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return true;
                }
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    false
}
