//! Tokens and token sources.
//!
//! The lexer produces [`Token`]s; the parser consumes them through the
//! [`TokenSource`] trait, one at a time, without ever looking at source
//! characters. A finished token sequence is kept in a [`TokenList`].

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::{Position, Span};

/// A token: kind, verbatim source text, and location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
            span,
        }
    }

    /// End-of-input token at `pos`.
    pub fn eof(pos: Position) -> Self {
        Token {
            kind: TokenKind::Eof,
            text: String::new(),
            pos,
            span: Span::point(pos.offset),
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Text to show a human: the source text, or the kind's name for
    /// tokens without text (end of input).
    pub fn describe(&self) -> &str {
        if self.text.is_empty() {
            self.kind.display_name()
        } else {
            &self.text
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.pos)
    }
}

/// Pull-based supplier of tokens.
///
/// Implementations must keep returning an `Eof` token once the input is
/// exhausted; the parser relies on that to terminate.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Tokens of one source file, always terminated by `Eof`.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Build a list from tokens, appending `Eof` after the last token when
    /// the sequence does not already end with one.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut list = TokenList { tokens };
        list.terminate();
        list
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Append `Eof` unless the list already ends with it.
    pub fn terminate(&mut self) {
        if self.tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            return;
        }
        let pos = self.tokens.last().map_or(Position::START, |last| {
            Position::new(
                last.pos.line,
                last.pos.column + u32::try_from(last.text.chars().count()).unwrap_or(0),
                last.span.end,
            )
        });
        self.tokens.push(Token::eof(pos));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds only, in order. Handy in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Turn the list into a [`TokenSource`].
    pub fn into_stream(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// In-memory [`TokenSource`] over an owned token vector.
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let list = TokenList::from_tokens(tokens);
        let eof = list
            .tokens
            .last()
            .cloned()
            .unwrap_or_else(|| Token::eof(Position::START));
        TokenStream {
            tokens: list.tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}

#[cfg(test)]
mod tests;
