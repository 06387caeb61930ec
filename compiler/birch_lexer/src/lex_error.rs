//! Lexer errors (E0xxx).

use birch_diagnostic::{Diagnostic, ErrorCode};
use birch_ir::{Position, Span};
use thiserror::Error;

/// A stretch of input that produced no valid token.
///
/// The lexer never stops on these: it emits an `Error` token for the bad
/// slice and keeps going, so the parser still sees the rest of the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { pos: Position, span: Span },

    #[error("unterminated or malformed character literal")]
    UnterminatedChar { pos: Position, span: Span },

    #[error("unterminated block comment")]
    UnterminatedComment { pos: Position, span: Span },

    #[error("unexpected character `{ch}`")]
    UnexpectedChar { ch: char, pos: Position, span: Span },
}

impl LexError {
    /// Classify a slice logos rejected by its first characters.
    pub(crate) fn classify(slice: &str, pos: Position, span: Span) -> Self {
        if slice.starts_with("{-") {
            return LexError::UnterminatedComment { pos, span };
        }
        match slice.chars().next() {
            Some('"') => LexError::UnterminatedString { pos, span },
            Some('\'') => LexError::UnterminatedChar { pos, span },
            ch => LexError::UnexpectedChar {
                ch: ch.unwrap_or('\0'),
                pos,
                span,
            },
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            LexError::UnterminatedString { pos, .. }
            | LexError::UnterminatedChar { pos, .. }
            | LexError::UnterminatedComment { pos, .. }
            | LexError::UnexpectedChar { pos, .. } => *pos,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span, .. }
            | LexError::UnterminatedChar { span, .. }
            | LexError::UnterminatedComment { span, .. }
            | LexError::UnexpectedChar { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedChar { .. } => ErrorCode::E0002,
            LexError::UnterminatedChar { .. } => ErrorCode::E0003,
            LexError::UnterminatedComment { .. } => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self {
            LexError::UnterminatedString { .. } => "string starts here",
            LexError::UnterminatedChar { .. } => "character literal starts here",
            LexError::UnterminatedComment { .. } => "comment starts here",
            LexError::UnexpectedChar { .. } => "not part of any token",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label_at(self.pos(), self.span(), label);
        match self {
            LexError::UnterminatedString { .. } => {
                diag.with_suggestion("add a closing `\"` before the end of the line")
            }
            LexError::UnterminatedComment { .. } => {
                diag.with_suggestion("close the comment with `-}`")
            }
            LexError::UnterminatedChar { .. } | LexError::UnexpectedChar { .. } => diag,
        }
    }
}
