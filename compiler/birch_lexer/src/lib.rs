//! Lexer for Birch using logos.
//!
//! [`Lexer`] is a streaming iterator of [`Token`]s: it never fails, turns
//! unrecognized input into `Error` tokens (recording a [`LexError`] for
//! each), keeps comments as `Comment` tokens, and ends with exactly one
//! `Eof`. [`lex`] collects a whole file; [`spawn_lexer`] runs the lexer on
//! its own thread and hands the parser a channel-backed token source.

mod channel;
mod lex_error;
mod line_tracker;
mod raw_token;

pub use channel::{spawn_lexer, ChannelSource, CHANNEL_CAPACITY};
pub use lex_error::LexError;

use birch_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::{debug, trace};

use line_tracker::LineTracker;
use raw_token::RawToken;

/// Result of lexing a whole file.
#[derive(Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Streaming lexer over one source text.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    lines: LineTracker<'a>,
    errors: Vec<LexError>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            inner: RawToken::lexer(source),
            lines: LineTracker::new(source),
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some(result) = self.inner.next() else {
            self.finished = true;
            let pos = self.lines.position(self.source.len());
            trace!(%pos, "eof");
            return Some(Token::eof(pos));
        };

        let range = self.inner.span();
        let slice = self.inner.slice();
        let pos = self.lines.position(range.start);
        let span = Span::from_range(range);
        let kind = match result {
            Ok(raw) => raw.kind(slice),
            Err(()) => {
                let error = LexError::classify(slice, pos, span);
                debug!(%pos, %error, "lex error");
                self.errors.push(error);
                TokenKind::Error
            }
        };
        trace!(%pos, kind = kind.display_name(), text = slice, "token");
        Some(Token::new(kind, slice, pos, span))
    }
}

/// Lex a whole source text.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let mut tokens = TokenList::new();
    for token in lexer.by_ref() {
        tokens.push(token);
    }
    debug!(
        tokens = tokens.len(),
        errors = lexer.errors().len(),
        "lexed"
    );
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}
