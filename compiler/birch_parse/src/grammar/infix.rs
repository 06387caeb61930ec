//! Fixity declarations: `infixl 7 :>`.
//!
//! Recorded as written; nothing here changes how later tokens parse.

use birch_diagnostic::ErrorCode;
use birch_ir::{Associativity, InfixDecl, TokenKind, TokenSource};

use crate::recovery::FIXITY;
use crate::{PResult, Parser};

const PRIORITY_RANGE: &str = "Operator priority must be a number between 0 and 9, both included.";

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_infix_decl(&mut self) -> PResult<InfixDecl> {
        let assoc = match self.current_kind() {
            TokenKind::Infixl => Associativity::Left,
            TokenKind::Infixr => Associativity::Right,
            _ => Associativity::NonAssoc,
        };
        let pos = self.expect_one_of(FIXITY)?.pos;

        if !self.check(TokenKind::Int) {
            self.error_expected(TokenKind::Int)?;
        }
        let token = self.advance();
        let priority = match token.text.parse::<u8>() {
            Ok(priority) if priority <= InfixDecl::MAX_PRIORITY => priority,
            _ => {
                return Err(self.fatal_at(token.pos, token.span, ErrorCode::E1006, PRIORITY_RANGE));
            }
        };

        let op = self.parse_op()?;
        Ok(InfixDecl {
            assoc,
            priority,
            op,
            pos,
        })
    }
}
