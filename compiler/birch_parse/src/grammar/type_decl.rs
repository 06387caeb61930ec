//! `type alias` and union type declarations.

use birch_ir::{Constructor, Ident, TokenKind, TokenSource, TypeDecl};

use crate::{PResult, Parser};

impl<S: TokenSource> Parser<S> {
    pub(crate) fn parse_type_decl(&mut self) -> PResult<TypeDecl> {
        let pos = self.expect(TokenKind::Type)?.pos;

        if self.check(TokenKind::Alias) {
            self.advance();
            let name = self.parse_upper_name()?;
            let params = self.parse_type_params()?;
            self.expect(TokenKind::Assign)?;
            let ty = self.expect_type()?;
            return Ok(TypeDecl::Alias {
                name,
                params,
                ty,
                pos,
            });
        }

        let name = self.parse_upper_name()?;
        let params = self.parse_type_params()?;
        self.expect(TokenKind::Assign)?;
        let mut constructors = vec![self.parse_constructor()?];
        while self.check(TokenKind::Pipe) {
            self.advance();
            constructors.push(self.parse_constructor()?);
        }
        Ok(TypeDecl::Union {
            name,
            params,
            constructors,
            pos,
        })
    }

    fn parse_type_params(&mut self) -> PResult<Vec<Ident>> {
        let mut params = Vec::new();
        while self.check(TokenKind::Ident) && !self.at_line_start() {
            params.push(self.parse_lower_name()?);
        }
        Ok(params)
    }

    fn parse_constructor(&mut self) -> PResult<Constructor> {
        let name = self.parse_upper_name()?;
        let mut args = Vec::new();
        while let Some(arg) = self.parse_type_arg()? {
            args.push(arg);
        }
        Ok(Constructor { name, args })
    }
}
