//! Expressions.
//!
//! Only literals for now. Definitions reach expressions through
//! [`Parser::parse_expr`] alone, so applications and operators can be added
//! here without touching the definition rule.

use birch_diagnostic::ErrorCode;
use birch_ir::{Expr, Literal, LiteralKind, TokenKind, TokenSource};

use crate::recovery::LITERAL;
use crate::{PResult, Parser};

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        let kind = match self.current_kind() {
            TokenKind::True | TokenKind::False => LiteralKind::Bool,
            TokenKind::Int => LiteralKind::Int,
            TokenKind::Float => LiteralKind::Float,
            TokenKind::String => LiteralKind::String,
            TokenKind::Char => LiteralKind::Char,
            TokenKind::Eof => return Err(self.unexpected_eof(LITERAL)),
            other => {
                let token = self.current();
                let (pos, span) = (token.pos, token.span);
                return Err(self.fatal_at(
                    pos,
                    span,
                    ErrorCode::E1009,
                    format!(
                        "cannot parse expression with token of type {}",
                        other.display_name()
                    ),
                ));
            }
        };

        let token = self.advance();
        Ok(Expr::Literal(Literal {
            kind,
            text: token.text,
            pos: token.pos,
        }))
    }
}
