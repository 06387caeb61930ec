//! Diagnostics session: recorded errors plus the rolling context window.

use std::collections::VecDeque;

use birch_ir::Token;
use tracing::debug;

use crate::ParseError;

/// Tokens kept for error messages.
pub const CONTEXT_WINDOW: usize = 8;

/// The last [`CONTEXT_WINDOW`] tokens the parser looked at, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ContextWindow {
    tokens: VecDeque<Token>,
}

impl ContextWindow {
    pub fn new() -> Self {
        ContextWindow {
            tokens: VecDeque::with_capacity(CONTEXT_WINDOW),
        }
    }

    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == CONTEXT_WINDOW {
            self.tokens.pop_front();
        }
        self.tokens.push_back(token);
    }

    /// Keep only the most recent token.
    pub fn reset(&mut self) {
        let stale = self.tokens.len().saturating_sub(1);
        self.tokens.drain(..stale);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens.iter().cloned().collect()
    }
}

/// Errors recorded while parsing one file, in the order they were found.
#[derive(Debug, Default)]
pub struct Session {
    errors: Vec<ParseError>,
    window: ContextWindow,
}

impl Session {
    pub fn new() -> Self {
        Session {
            errors: Vec::new(),
            window: ContextWindow::new(),
        }
    }

    pub fn record(&mut self, error: ParseError) {
        debug!(
            code = %error.code(),
            pos = %error.pos,
            message = %error.message(),
            "parse error"
        );
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn window(&self) -> &ContextWindow {
        &self.window
    }

    pub fn push_context(&mut self, token: Token) {
        self.window.push(token);
    }

    pub fn reset_context(&mut self) {
        self.window.reset();
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

#[cfg(test)]
mod tests;
