//! Parse errors.
//!
//! A [`ParseError`] records what went wrong, where, which token was found
//! there, and the tokens read just before it (the context window at the
//! time of the error). It converts to a [`Diagnostic`] for rendering.

use std::fmt;

use birch_diagnostic::{Diagnostic, ErrorCode};
use birch_ir::{Position, Span, Token, TokenKind};

use crate::recovery::{describe_kind, format_expected, TokenSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// One specific kind was required.
    Expected(TokenKind),
    /// Any of several kinds would have done.
    ExpectedOneOf(TokenSet),
    /// Input ended where a token was mandatory. Always fatal.
    UnexpectedEof { expected: TokenSet },
    /// Free-form rule violation: letter case, priority bounds, annotation
    /// pairing, indentation.
    Message { code: ErrorCode, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
    pub span: Span,
    /// Kind of the token the parser was looking at.
    pub found: TokenKind,
    pub found_text: String,
    /// Tokens read before the error, oldest first.
    pub context: Vec<Token>,
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Expected(_) => ErrorCode::E1001,
            ParseErrorKind::ExpectedOneOf(_) => ErrorCode::E1002,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1003,
            ParseErrorKind::Message { code, .. } => *code,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof { .. })
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::Expected(kind) => format!(
                "I was expecting {}, but I found {}.",
                describe_kind(*kind),
                self.found_description()
            ),
            ParseErrorKind::ExpectedOneOf(set) => format!(
                "I was expecting {}, but I found {}.",
                format_expected(*set),
                self.found_description()
            ),
            ParseErrorKind::UnexpectedEof { expected } => format!(
                "I reached the end of the file while I was expecting {}.",
                format_expected(*expected)
            ),
            ParseErrorKind::Message { message, .. } => message.clone(),
        }
    }

    fn found_description(&self) -> String {
        if self.found_text.is_empty() {
            describe_kind(self.found)
        } else {
            format!("`{}`", self.found_text)
        }
    }

    /// Text of the context tokens, space separated.
    pub fn context_text(&self) -> String {
        let texts: Vec<&str> = self.context.iter().map(Token::describe).collect();
        texts.join(" ")
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::Expected(_) | ParseErrorKind::ExpectedOneOf(_) => {
                format!("found {}", self.found_description())
            }
            ParseErrorKind::UnexpectedEof { .. } => "file ends here".to_string(),
            ParseErrorKind::Message { .. } => String::new(),
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label_at(self.pos, self.span, label);
        if self.context.is_empty() {
            diag
        } else {
            diag.with_note(format!("while reading: {}", self.context_text()))
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
