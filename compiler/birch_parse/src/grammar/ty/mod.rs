//! Type expressions.
//!
//! ```text
//! type  := atom ('->' atom)*
//! atom  := '(' type (',' type)* ')'
//!        | '{' [field (',' field)*] '}'
//!        | Upper atom*
//!        | lower
//! field := lower ':' type
//! ```
//!
//! An atom never starts in column 1: a token there begins the next
//! declaration, so the type ends before it. A named type takes the atoms
//! after it greedily, and so does every upper-case name among them:
//! `Dict String Int` is `Dict` applied to `String Int`. Arguments may
//! continue on later lines, except where a line opens with what reads as
//! the definition under an annotation: a lower-case name, or `(` when the
//! annotated name is an operator.

use std::mem;

use birch_diagnostic::ErrorCode;
use birch_ir::{Ident, RecordField, Token, TokenKind, TokenSource, Type};
use birch_stack::ensure_sufficient_stack;

use crate::recovery::TYPE_START;
use crate::{Fatal, PResult, Parser};

const EXPECTED_TYPE: &str =
    "I was expecting a type, but I encountered what looks like a declaration instead.";

impl<S: TokenSource> Parser<S> {
    /// A type, or `None` if the current token is in column 1.
    pub(crate) fn parse_type(&mut self) -> PResult<Option<Type>> {
        ensure_sufficient_stack(|| self.parse_type_inner())
    }

    fn parse_type_inner(&mut self) -> PResult<Option<Type>> {
        let Some(first) = self.parse_atom_type()? else {
            return Ok(None);
        };

        let mut args = Vec::new();
        let mut ret = first;
        while self.check(TokenKind::Arrow) {
            self.advance();
            let next = self.expect_atom_type()?;
            args.push(mem::replace(&mut ret, next));
        }

        if args.is_empty() {
            Ok(Some(ret))
        } else {
            Ok(Some(Type::Function {
                args,
                ret: Box::new(ret),
            }))
        }
    }

    /// A type that must be present.
    pub(crate) fn expect_type(&mut self) -> PResult<Type> {
        let token = self.current().clone();
        match self.parse_type()? {
            Some(ty) => Ok(ty),
            None => Err(self.missing_type(&token)),
        }
    }

    fn expect_atom_type(&mut self) -> PResult<Type> {
        let token = self.current().clone();
        match self.parse_atom_type()? {
            Some(ty) => Ok(ty),
            None => Err(self.missing_type(&token)),
        }
    }

    /// The type of an annotation on `name`.
    pub(crate) fn expect_annotation_type(&mut self, name: &Ident) -> PResult<Type> {
        let saved = mem::replace(&mut self.op_annotation, name.is_op);
        let ty = self.expect_type();
        self.op_annotation = saved;
        ty
    }

    fn missing_type(&mut self, at: &Token) -> Fatal {
        self.fatal_at(at.pos, at.span, ErrorCode::E1005, EXPECTED_TYPE)
    }

    fn parse_atom_type(&mut self) -> PResult<Option<Type>> {
        if self.at_line_start() {
            return Ok(None);
        }

        match self.current_kind() {
            TokenKind::LParen => self.parse_paren_type().map(Some),
            TokenKind::LBrace => self.parse_record_type().map(Some),
            TokenKind::Ident => {
                let name = self.parse_identifier()?;
                if !name.is_upper() {
                    return Ok(Some(Type::Var(name)));
                }
                let mut args = Vec::new();
                while let Some(arg) = self.parse_type_arg()? {
                    args.push(arg);
                }
                Ok(Some(Type::Named { name, args }))
            }
            _ => {
                self.error_expected_one_of(TYPE_START)?;
                Err(self.abort_here())
            }
        }
    }

    /// An argument to a named type or constructor, if one follows.
    pub(crate) fn parse_type_arg(&mut self) -> PResult<Option<Type>> {
        if !TYPE_START.contains(self.current_kind()) {
            return Ok(None);
        }
        if self.cursor.starts_line() && self.opens_definition() {
            return Ok(None);
        }
        ensure_sufficient_stack(|| self.parse_atom_type())
    }

    /// Whether the current token reads as an indented definition name
    /// following an annotation.
    fn opens_definition(&self) -> bool {
        match self.current_kind() {
            TokenKind::Ident => starts_lower(&self.current().text),
            TokenKind::LParen => self.op_annotation,
            _ => false,
        }
    }

    /// `(a)` unwraps to `a`; `(a, b, ...)` is a tuple.
    fn parse_paren_type(&mut self) -> PResult<Type> {
        self.expect(TokenKind::LParen)?;
        let first = self.expect_type()?;
        if !self.check(TokenKind::Comma) {
            self.expect(TokenKind::RParen)?;
            return Ok(first);
        }

        let mut elems = vec![first];
        while !self.check(TokenKind::RParen) {
            self.expect(TokenKind::Comma)?;
            elems.push(self.expect_type()?);
        }
        self.advance();
        Ok(Type::Tuple(elems))
    }

    fn parse_record_type(&mut self) -> PResult<Type> {
        self.expect(TokenKind::LBrace)?;
        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if !fields.is_empty() {
                self.expect(TokenKind::Comma)?;
            }
            let name = self.parse_lower_name()?;
            self.expect(TokenKind::Colon)?;
            let ty = self.expect_type()?;
            fields.push(RecordField { name, ty });
        }
        self.advance();
        Ok(Type::Record(fields))
    }
}

fn starts_lower(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
