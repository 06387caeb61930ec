//! Recursive descent parser for Birch.
//!
//! The parser pulls tokens one at a time from a [`TokenSource`] and holds a
//! single token of lookahead. Most problems are recorded as [`ParseError`]s
//! and parsing carries on; a few leave nothing sensible to continue from
//! and abort the file with [`Fatal`], which every production propagates
//! with `?` up to [`Parser::parse_file`]. An aborted parse still reports
//! every error recorded before the abort, but produces no [`File`].
//!
//! Entry points: [`parse_tokens`] for any token source, [`parse_source`]
//! to lex and parse text, [`parse_threaded`] to lex on a producer thread
//! while parsing.

mod cursor;
mod error;
mod grammar;
mod outcome;
mod recovery;
mod session;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use outcome::{Fatal, PResult};
pub use recovery::{format_expected, TokenSet};
pub use session::{ContextWindow, Session, CONTEXT_WINDOW};

use birch_diagnostic::{Diagnostic, ErrorCode};
use birch_ir::{File, Position, Span, Token, TokenKind, TokenSource};
use birch_lexer::LexError;
use tracing::{debug, trace};

/// What the driver does with value definitions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Full,
    /// Skip definitions and their annotations, keeping imports, type and
    /// fixity declarations. Enough to build a module's fixity table.
    SkipDefinitions,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Require tokens after the first of a declaration to be indented.
    pub offside: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            mode: ParseMode::Full,
            offside: true,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn skip_definitions(mut self) -> Self {
        self.mode = ParseMode::SkipDefinitions;
        self
    }

    #[must_use]
    pub fn without_offside(mut self) -> Self {
        self.offside = false;
        self
    }
}

/// Result of parsing one file.
#[derive(Debug)]
pub struct ParseOutput {
    /// `None` when the parse aborted.
    pub file: Option<File>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.file.is_some()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Result of lexing and parsing source text.
#[derive(Debug)]
pub struct SourceOutput {
    pub lex_errors: Vec<LexError>,
    pub parse: ParseOutput,
}

impl SourceOutput {
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || self.parse.has_errors()
    }

    /// Lexer diagnostics first, then parser diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lex_errors
            .iter()
            .map(LexError::to_diagnostic)
            .chain(self.parse.errors.iter().map(ParseError::to_diagnostic))
            .collect()
    }
}

/// Parser state for one file.
///
/// Owns the token source, the lookahead token, and the diagnostics session.
/// Every production borrows it mutably; nothing is shared.
pub struct Parser<S> {
    cursor: Cursor<S>,
    session: Session,
    options: ParseOptions,
    file_name: String,
    /// Set while parsing the annotation of an operator.
    op_annotation: bool,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(file_name: impl Into<String>, source: S, options: ParseOptions) -> Self {
        let cursor = Cursor::new(source);
        let mut session = Session::new();
        session.push_context(cursor.current().clone());
        Parser {
            cursor,
            session,
            options,
            file_name: file_name.into(),
            op_annotation: false,
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // --- Token access ---

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    pub(crate) fn at_line_start(&self) -> bool {
        self.cursor.at_line_start()
    }

    /// Consume the current token, checking it against the indentation floor.
    pub(crate) fn advance(&mut self) -> Token {
        if self.cursor.violates_floor() {
            let token = self.cursor.current();
            let (pos, span) = (token.pos, token.span);
            self.error_at(pos, span, ErrorCode::E1010, "I was expecting a whitespace");
        }
        let token = self.cursor.advance();
        trace!(
            kind = token.kind.display_name(),
            line = token.pos.line,
            column = token.pos.column,
            "advance"
        );
        self.session.push_context(self.cursor.current().clone());
        token
    }

    /// Consume a token of `kind`.
    ///
    /// A mismatch is recorded and the token is consumed anyway; at end of
    /// input the mismatch is fatal.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        if !self.check(kind) {
            self.error_expected(kind)?;
        }
        Ok(self.advance())
    }

    /// [`Parser::expect`] for a set of acceptable kinds.
    pub(crate) fn expect_one_of(&mut self, set: TokenSet) -> PResult<Token> {
        if !set.contains(self.current_kind()) {
            self.error_expected_one_of(set)?;
        }
        Ok(self.advance())
    }

    // --- Indentation ---

    /// Start a top-level declaration at the current token.
    ///
    /// The declaration's first token may sit in column 1; with offside
    /// checking on, every later token must not.
    pub(crate) fn begin_declaration(&mut self) {
        self.cursor.set_indent_floor(0);
        if self.options.offside {
            self.cursor.set_indent_floor_after_next(1);
        }
    }

    /// Run `f` with the floor lowered to `floor`, then restore it.
    pub(crate) fn with_indent_floor<T>(&mut self, floor: u32, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.cursor.indent_floor();
        self.cursor.set_indent_floor(floor);
        let result = f(self);
        self.cursor.set_indent_floor(saved);
        result
    }

    // --- Diagnostics ---

    fn make_error(&self, kind: ParseErrorKind, pos: Position, span: Span) -> ParseError {
        let found = self.current();
        ParseError {
            kind,
            pos,
            span,
            found: found.kind,
            found_text: found.text.clone(),
            context: self.session.window().snapshot(),
        }
    }

    fn record_here(&mut self, kind: ParseErrorKind) {
        let token = self.current();
        let error = self.make_error(kind, token.pos, token.span);
        self.session.record(error);
    }

    /// Record that `kind` was expected here. Fatal at end of input.
    pub(crate) fn error_expected(&mut self, kind: TokenKind) -> PResult<()> {
        self.error_expected_one_of(TokenSet::single(kind))
    }

    /// Record that one of `set` was expected here. Fatal at end of input.
    pub(crate) fn error_expected_one_of(&mut self, set: TokenSet) -> PResult<()> {
        if self.cursor.is_at_end() {
            return Err(self.unexpected_eof(set));
        }
        let kind = match set.iter().next() {
            Some(kind) if set.len() == 1 => ParseErrorKind::Expected(kind),
            _ => ParseErrorKind::ExpectedOneOf(set),
        };
        self.record_here(kind);
        Ok(())
    }

    /// Record end of input where one of `expected` was required.
    pub(crate) fn unexpected_eof(&mut self, expected: TokenSet) -> Fatal {
        self.record_here(ParseErrorKind::UnexpectedEof { expected });
        Fatal {
            pos: self.current().pos,
        }
    }

    /// Record a rule violation and keep going.
    pub(crate) fn error_at(
        &mut self,
        pos: Position,
        span: Span,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let kind = ParseErrorKind::Message {
            code,
            message: message.into(),
        };
        let error = self.make_error(kind, pos, span);
        self.session.record(error);
    }

    /// Record a rule violation that ends the parse.
    pub(crate) fn fatal_at(
        &mut self,
        pos: Position,
        span: Span,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Fatal {
        self.error_at(pos, span, code, message);
        Fatal { pos }
    }

    /// Abort at the current token, whose diagnostic is already recorded.
    pub(crate) fn abort_here(&self) -> Fatal {
        Fatal {
            pos: self.current().pos,
        }
    }
}

/// Parse the tokens of one file.
#[tracing::instrument(level = "debug", skip(source, options), fields(mode = ?options.mode))]
pub fn parse_tokens<S: TokenSource>(name: &str, source: S, options: ParseOptions) -> ParseOutput {
    let output = Parser::new(name, source, options).parse_file();
    debug!(
        complete = output.is_complete(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}

/// Lex and parse source text.
pub fn parse_source(name: &str, text: &str, options: ParseOptions) -> SourceOutput {
    let lexed = birch_lexer::lex(text);
    let parse = parse_tokens(name, lexed.tokens.into_stream(), options);
    SourceOutput {
        lex_errors: lexed.errors,
        parse,
    }
}

/// Lex on a producer thread while the parser consumes its tokens.
///
/// Gives the same result as [`parse_source`] for input that parses
/// completely. After a fatal abort the producer is told to stop, so lex
/// errors past the abort point may be missing.
pub fn parse_threaded(name: &str, text: String, options: ParseOptions) -> SourceOutput {
    let mut channel = birch_lexer::spawn_lexer(text);
    let parse = parse_tokens(name, &mut channel, options);
    SourceOutput {
        lex_errors: channel.finish(),
        parse,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
