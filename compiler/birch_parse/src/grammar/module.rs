//! Module header, imports, and exposing lists.

use birch_ir::{ExposedIdent, ExposingList, ImportDecl, ModuleDecl, TokenKind, TokenSource};

use super::names::Case;
use crate::recovery::EXPOSED_START;
use crate::{PResult, Parser};

impl<S: TokenSource> Parser<S> {
    /// `module A.B exposing (...)`, the clause being optional.
    pub(crate) fn parse_module(&mut self) -> PResult<ModuleDecl> {
        let pos = self.expect(TokenKind::Module)?.pos;
        let name = self.parse_module_name()?;
        let exposing = self.parse_exposing_clause()?;
        Ok(ModuleDecl {
            name,
            exposing,
            pos,
        })
    }

    /// `import A.B as C exposing (...)`
    pub(crate) fn parse_import(&mut self) -> PResult<ImportDecl> {
        let pos = self.expect(TokenKind::Import)?.pos;
        let module = self.parse_module_name()?;
        let alias = if self.check(TokenKind::As) {
            self.advance();
            Some(self.parse_upper_name()?)
        } else {
            None
        };
        let exposing = self.parse_exposing_clause()?;
        Ok(ImportDecl {
            module,
            alias,
            exposing,
            pos,
        })
    }

    /// `exposing ( ... )` if present.
    ///
    /// An empty list is recorded as an error and yields `None`, as if the
    /// clause were absent.
    fn parse_exposing_clause(&mut self) -> PResult<Option<ExposingList>> {
        if !self.check(TokenKind::Exposing) {
            return Ok(None);
        }
        self.advance();
        self.expect(TokenKind::LParen)?;
        let list = self.parse_exposed_idents()?;
        self.expect(TokenKind::RParen)?;
        Ok(list)
    }

    fn parse_exposed_idents(&mut self) -> PResult<Option<ExposingList>> {
        if self.check(TokenKind::DotDot) {
            self.advance();
            return Ok(Some(ExposingList::Open));
        }
        if !self.check(TokenKind::LParen) && !self.check(TokenKind::Ident) {
            self.error_expected_one_of(EXPOSED_START)?;
            return Ok(None);
        }

        let mut idents = vec![self.parse_exposed_ident()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            idents.push(self.parse_exposed_ident()?);
        }
        Ok(Some(ExposingList::Closed(idents)))
    }

    /// `name`, `(op)`, `Type`, `Type(..)` or `Type(A, B)`.
    fn parse_exposed_ident(&mut self) -> PResult<ExposedIdent> {
        let ident = self.parse_identifier_or_op()?;
        if !self.check(TokenKind::LParen) {
            return Ok(ExposedIdent {
                ident,
                exposing: None,
            });
        }

        // Only union types expose constructors.
        self.check_case(&ident, Case::Upper);
        self.advance();
        let exposing = self.parse_constructor_list()?;
        self.expect(TokenKind::RParen)?;
        Ok(ExposedIdent { ident, exposing })
    }

    fn parse_constructor_list(&mut self) -> PResult<Option<ExposingList>> {
        if self.check(TokenKind::DotDot) {
            self.advance();
            return Ok(Some(ExposingList::Open));
        }
        if self.check(TokenKind::RParen) {
            self.error_expected_one_of(EXPOSED_START)?;
            return Ok(None);
        }

        let mut constructors = Vec::new();
        loop {
            constructors.push(ExposedIdent {
                ident: self.parse_upper_name()?,
                exposing: None,
            });
            if self.check(TokenKind::RParen) {
                break;
            }
            self.expect(TokenKind::Comma)?;
        }
        Ok(Some(ExposingList::Closed(constructors)))
    }
}
