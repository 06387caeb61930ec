//! Grammar productions.
//!
//! Each submodule adds the productions for one part of the language to
//! [`Parser`] through its own `impl` block. This module holds the file
//! driver, the only place a [`Fatal`] is caught.

mod definition;
mod expr;
mod infix;
mod module;
mod names;
mod ty;
mod type_decl;

use birch_ir::{Decl, File, TokenKind, TokenSource};
use tracing::debug;

use crate::recovery::{skip_to_line_start, DECL_START};
use crate::{PResult, ParseMode, ParseOutput, Parser};

impl<S: TokenSource> Parser<S> {
    /// Parse a whole file: the module header, then declarations until end
    /// of input.
    pub fn parse_file(mut self) -> ParseOutput {
        let file = match self.parse_file_inner() {
            Ok(file) => Some(file),
            Err(fatal) => {
                debug!(
                    pos = %fatal.pos,
                    errors = self.session.error_count(),
                    "parse aborted"
                );
                None
            }
        };
        ParseOutput {
            file,
            errors: self.session.into_errors(),
        }
    }

    fn parse_file_inner(&mut self) -> PResult<File> {
        self.begin_declaration();
        let module = self.parse_module()?;
        let mut imports = Vec::new();
        let mut decls = Vec::new();

        loop {
            self.session.reset_context();
            self.begin_declaration();
            let kind = self.current_kind();
            debug!(
                kind = kind.display_name(),
                line = self.current().pos.line,
                "declaration"
            );

            match kind {
                TokenKind::Eof => break,
                TokenKind::Import => imports.push(self.parse_import()?),
                TokenKind::Type => decls.push(Decl::Type(self.parse_type_decl()?)),
                TokenKind::Infixl | TokenKind::Infixr | TokenKind::Infix => {
                    decls.push(Decl::Infix(self.parse_infix_decl()?));
                }
                TokenKind::Ident | TokenKind::LParen => match self.options.mode {
                    ParseMode::Full => {
                        if let Some(def) = self.parse_definition()? {
                            decls.push(Decl::Definition(def));
                        }
                    }
                    ParseMode::SkipDefinitions => self.skip_declaration(),
                },
                TokenKind::Module
                | TokenKind::Exposing
                | TokenKind::As
                | TokenKind::Alias
                | TokenKind::Op
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Char
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::DotDot
                | TokenKind::Colon
                | TokenKind::Assign
                | TokenKind::Pipe
                | TokenKind::Arrow
                | TokenKind::Comment
                | TokenKind::Error => {
                    self.error_expected_one_of(DECL_START)?;
                    return Err(self.abort_here());
                }
            }
        }

        Ok(File {
            name: self.file_name.clone(),
            module,
            imports,
            decls,
        })
    }

    /// Drop the current declaration: its first token and everything up to
    /// the next token in column 1.
    fn skip_declaration(&mut self) {
        self.cursor.advance();
        let skipped = skip_to_line_start(&mut self.cursor);
        debug!(skipped = skipped + 1, "skipped definition");
        self.session.push_context(self.current().clone());
    }
}
