//! Single-token lookahead over a [`TokenSource`].
//!
//! The cursor owns the source and exactly one token of lookahead. Comments
//! are dropped as they are pulled. It also keeps the indentation floor: the
//! column a consumed token must lie to the right of. The parser checks the
//! floor when it consumes a token, not when the token is pulled, so the
//! column-1 token that opens the next declaration is judged against that
//! declaration's floor rather than the previous one's.

use std::mem;

use birch_ir::{Token, TokenKind, TokenSource};
use tracing::trace;

pub struct Cursor<S> {
    source: S,
    current: Token,
    /// Line of the last consumed token, 0 before the first.
    prev_line: u32,
    floor: u32,
    /// Floor to install once the current token has been consumed.
    pending_floor: Option<u32>,
}

impl<S: TokenSource> Cursor<S> {
    pub fn new(mut source: S) -> Self {
        let current = pull(&mut source);
        Cursor {
            source,
            current,
            prev_line: 0,
            floor: 0,
            pending_floor: None,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// The current token sits in column 1.
    ///
    /// End of input never counts as a line start, so a production waiting
    /// for more tokens reports the missing input instead of assuming a new
    /// declaration begins.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.current.pos.is_line_start() && !self.is_at_end()
    }

    /// The current token is the first on its line, whatever its column.
    #[inline]
    pub fn starts_line(&self) -> bool {
        self.current.pos.line > self.prev_line
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let next = pull(&mut self.source);
        if let Some(floor) = self.pending_floor.take() {
            self.floor = floor;
        }
        let consumed = mem::replace(&mut self.current, next);
        self.prev_line = consumed.pos.line;
        consumed
    }

    #[inline]
    pub fn indent_floor(&self) -> u32 {
        self.floor
    }

    /// Set the floor now, discarding any pending change.
    pub fn set_indent_floor(&mut self, column: u32) {
        self.floor = column;
        self.pending_floor = None;
    }

    /// Install `column` as the floor after the next [`Cursor::advance`].
    pub fn set_indent_floor_after_next(&mut self, column: u32) {
        self.pending_floor = Some(column);
    }

    /// Consuming the current token would break the indentation floor.
    pub fn violates_floor(&self) -> bool {
        !self.is_at_end() && self.current.pos.column <= self.floor
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

fn pull<S: TokenSource>(source: &mut S) -> Token {
    loop {
        let token = source.next_token();
        if !token.is(TokenKind::Comment) {
            return token;
        }
        trace!(pos = %token.pos, "skipping comment");
    }
}
