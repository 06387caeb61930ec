//! Identifiers, operators, and module names.

use birch_diagnostic::ErrorCode;
use birch_ir::{Ident, ModuleName, Span, TokenKind, TokenSource};

use crate::{PResult, Parser};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Case {
    Upper,
    Lower,
}

impl Case {
    fn matches(self, ident: &Ident) -> bool {
        match self {
            Case::Upper => ident.is_upper(),
            Case::Lower => ident.is_lower(),
        }
    }

    fn message(self) -> &'static str {
        match self {
            Case::Upper => "I was expecting an upper case name.",
            Case::Lower => "I was expecting a lower case name.",
        }
    }
}

/// Source span of an identifier as written.
pub(crate) fn ident_span(ident: &Ident) -> Span {
    let len = u32::try_from(ident.name.len()).unwrap_or(0);
    Span::new(ident.pos.offset, ident.pos.offset.saturating_add(len))
}

impl<S: TokenSource> Parser<S> {
    /// Any identifier. A missing one is recorded and replaced by
    /// [`Ident::missing`].
    pub(crate) fn parse_identifier(&mut self) -> PResult<Ident> {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            return Ok(Ident::new(token.text, token.pos));
        }
        let pos = self.current().pos;
        self.expect(TokenKind::Ident)?;
        Ok(Ident::missing(pos))
    }

    pub(crate) fn parse_upper_name(&mut self) -> PResult<Ident> {
        self.parse_cased_name(Case::Upper)
    }

    pub(crate) fn parse_lower_name(&mut self) -> PResult<Ident> {
        self.parse_cased_name(Case::Lower)
    }

    fn parse_cased_name(&mut self, case: Case) -> PResult<Ident> {
        let ident = self.parse_identifier()?;
        self.check_case(&ident, case);
        Ok(ident)
    }

    /// Record a case error for `ident` unless it has `case`. Placeholders
    /// for missing names already have their error.
    pub(crate) fn check_case(&mut self, ident: &Ident, case: Case) {
        if ident.is_missing() || case.matches(ident) {
            return;
        }
        self.error_at(ident.pos, ident_span(ident), ErrorCode::E1004, case.message());
    }

    /// A bare operator symbol.
    pub(crate) fn parse_op(&mut self) -> PResult<Ident> {
        if self.check(TokenKind::Op) {
            let token = self.advance();
            return Ok(Ident::op(token.text, token.pos));
        }
        let pos = self.current().pos;
        self.expect(TokenKind::Op)?;
        Ok(Ident::op(Ident::MISSING, pos))
    }

    /// `name` or `(op)`.
    pub(crate) fn parse_identifier_or_op(&mut self) -> PResult<Ident> {
        if !self.check(TokenKind::LParen) {
            return self.parse_identifier();
        }
        self.advance();
        let op = self.parse_op()?;
        self.expect(TokenKind::RParen)?;
        Ok(op)
    }

    /// `A.B.C`
    pub(crate) fn parse_module_name(&mut self) -> PResult<ModuleName> {
        let mut parts = vec![self.parse_upper_name()?];
        while self.check(TokenKind::Dot) {
            self.advance();
            parts.push(self.parse_upper_name()?);
        }
        Ok(ModuleName::new(parts))
    }
}
