//! Value definitions and their type annotations.
//!
//! ```text
//! foo : Int -> Int
//! foo x = 1
//! ```
//!
//! The definition after an annotation must repeat the annotated name in the
//! same column. When it does not, the definition is dropped: one error is
//! recorded and parsing resumes at the next line that starts in column 1.

use birch_diagnostic::ErrorCode;
use birch_ir::{Definition, Ident, Position, Span, TokenKind, TokenSource, TypeAnnotation};

use super::names::ident_span;
use crate::recovery::skip_to_line_start;
use crate::{PResult, Parser};

impl<S: TokenSource> Parser<S> {
    /// `Ok(None)` when the definition was rejected.
    pub(crate) fn parse_definition(&mut self) -> PResult<Option<Definition>> {
        let name = self.parse_definition_name()?;

        let (name, annotation) = if self.check(TokenKind::Colon) {
            self.advance();
            let ty = self.expect_annotation_type(&name)?;
            // The definition line starts in column 1 like the annotation.
            let def_name = self.with_indent_floor(0, Self::parse_definition_name)?;

            if def_name.pos.column != name.pos.column {
                let message = format!("Definition of {} can not be indented.", def_name.name);
                self.reject_definition(def_name.pos, ident_span(&def_name), ErrorCode::E1007, message);
                return Ok(None);
            }
            if def_name.name != name.name {
                let message = format!(
                    "A definition must be right below its type annotation, \
                     I found the definition of `{}` after the annotation of `{}` instead.",
                    def_name.name, name.name
                );
                // Reported at the token after the misplaced name.
                let (pos, span) = (self.current().pos, self.current().span);
                self.reject_definition(pos, span, ErrorCode::E1008, message);
                return Ok(None);
            }
            (def_name, Some(TypeAnnotation { name, ty }))
        } else {
            (name, None)
        };

        // Only plain names for now; patterns would go here.
        let mut args = Vec::new();
        while self.check(TokenKind::Ident) {
            args.push(self.parse_lower_name()?);
        }

        self.expect(TokenKind::Assign)?;
        let body = self.parse_expr()?;
        Ok(Some(Definition {
            name,
            annotation,
            args,
            body,
        }))
    }

    /// `name` or `(op)`.
    fn parse_definition_name(&mut self) -> PResult<Ident> {
        if !self.check(TokenKind::LParen) {
            return self.parse_lower_name();
        }
        self.advance();
        let op = self.parse_op()?;
        self.expect(TokenKind::RParen)?;
        Ok(op)
    }

    fn reject_definition(&mut self, pos: Position, span: Span, code: ErrorCode, message: String) {
        self.error_at(pos, span, code, message);
        skip_to_line_start(&mut self.cursor);
        self.session.push_context(self.current().clone());
    }
}
