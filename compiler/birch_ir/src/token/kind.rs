//! The closed set of token kinds.

use std::fmt;

/// Token classification.
///
/// Fieldless on purpose: a token's text lives on [`super::Token`], so the
/// kind is a one-byte tag that can be matched exhaustively and stored in a
/// bitset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Module,
    Import,
    Exposing,
    As,
    Type,
    Alias,
    Infixl,
    Infixr,
    Infix,

    // Names
    /// Upper- or lower-case identifier; the parser checks the case.
    Ident,
    /// Symbolic operator such as `+`, `?` or `:>`.
    Op,

    // Literals
    True,
    False,
    Int,
    Float,
    String,
    Char,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `:`
    Colon,
    /// `=`
    Assign,
    /// `|`
    Pipe,
    /// `->`
    Arrow,

    // Special
    /// Line or block comment. Never reaches the grammar.
    Comment,
    /// Characters the lexer could not classify.
    Error,
    /// End of input, repeated forever once reached.
    Eof,
}

impl TokenKind {
    /// Number of variants.
    pub const COUNT: usize = 31;

    /// Every variant in declaration order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Module,
        TokenKind::Import,
        TokenKind::Exposing,
        TokenKind::As,
        TokenKind::Type,
        TokenKind::Alias,
        TokenKind::Infixl,
        TokenKind::Infixr,
        TokenKind::Infix,
        TokenKind::Ident,
        TokenKind::Op,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::DotDot,
        TokenKind::Colon,
        TokenKind::Assign,
        TokenKind::Pipe,
        TokenKind::Arrow,
        TokenKind::Comment,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// Dense index of this kind, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Literal kinds that can start an expression.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::True
                | TokenKind::False
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Char
        )
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Module
                | TokenKind::Import
                | TokenKind::Exposing
                | TokenKind::As
                | TokenKind::Type
                | TokenKind::Alias
                | TokenKind::Infixl
                | TokenKind::Infixr
                | TokenKind::Infix
        )
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Module => "module",
            TokenKind::Import => "import",
            TokenKind::Exposing => "exposing",
            TokenKind::As => "as",
            TokenKind::Type => "type",
            TokenKind::Alias => "alias",
            TokenKind::Infixl => "infixl",
            TokenKind::Infixr => "infixr",
            TokenKind::Infix => "infix",
            TokenKind::Ident => "identifier",
            TokenKind::Op => "operator",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Colon => ":",
            TokenKind::Assign => "=",
            TokenKind::Pipe => "|",
            TokenKind::Arrow => "->",
            TokenKind::Comment => "comment",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
