//! Token sets and resynchronization.
//!
//! [`TokenSet`] is a bitset over [`TokenKind::index`], so the sets below are
//! built at compile time and membership is a single AND.

use std::fmt;

use birch_ir::{TokenKind, TokenSource};
use tracing::trace;

use crate::cursor::Cursor;

/// A set of token kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::COUNT <= u64::BITS as usize);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet(1 << kind.index())
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1 << kind.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Members in declaration order of [`TokenKind`].
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        TokenSet::single(kind)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Tokens that may begin a top-level declaration, as reported when none
/// does.
pub const DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Import)
    .with(TokenKind::Type)
    .with(TokenKind::Ident);

/// What an exposing list may contain.
pub const EXPOSED_START: TokenSet = TokenSet::new()
    .with(TokenKind::DotDot)
    .with(TokenKind::Ident);

pub const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::LBrace)
    .with(TokenKind::Ident);

pub const FIXITY: TokenSet = TokenSet::new()
    .with(TokenKind::Infixl)
    .with(TokenKind::Infixr)
    .with(TokenKind::Infix);

pub const LITERAL: TokenSet = TokenSet::new()
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Int)
    .with(TokenKind::Float)
    .with(TokenKind::String)
    .with(TokenKind::Char);

/// How a kind is named inside a sentence.
///
/// Kinds with fixed spelling are quoted (`` `exposing` ``, `` `(` ``);
/// classes of tokens read as words ("an identifier").
pub fn describe_kind(kind: TokenKind) -> String {
    match kind {
        TokenKind::Ident => "an identifier".to_string(),
        TokenKind::Op => "an operator".to_string(),
        TokenKind::Int => "an integer".to_string(),
        TokenKind::Float => "a float".to_string(),
        TokenKind::String => "a string".to_string(),
        TokenKind::Char => "a character".to_string(),
        TokenKind::Comment => "a comment".to_string(),
        TokenKind::Error => "an invalid token".to_string(),
        TokenKind::Eof => "the end of the file".to_string(),
        _ => format!("`{}`", kind.display_name()),
    }
}

/// `a`, `a or b`, `a, b, or c`.
pub fn format_expected(set: TokenSet) -> String {
    let names: Vec<String> = set.iter().map(describe_kind).collect();
    match names.as_slice() {
        [] => "nothing".to_string(),
        [one] => one.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Skip tokens until one starts a line (column 1) or input ends.
///
/// Returns the number of tokens skipped. Skipped tokens are not checked
/// against the indentation floor and produce no diagnostics.
pub fn skip_to_line_start<S: TokenSource>(cursor: &mut Cursor<S>) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() && !cursor.at_line_start() {
        cursor.advance();
        skipped += 1;
    }
    trace!(skipped, "resynchronized at line start");
    skipped
}

#[cfg(test)]
mod tests;
