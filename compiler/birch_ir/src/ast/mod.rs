//! Syntax tree.
//!
//! Every node owns its children; there are no back-references and no
//! sharing. Optional parts are `Option`, never placeholder nodes. Lists that
//! the grammar requires to be non-empty (exposing lists, tuple elements,
//! union constructors, module name segments) are never empty when present.
//!
//! `Display` renders each node back to Birch surface syntax.

mod items;
mod module;
mod types;

use std::fmt;

use crate::Position;

pub use items::{Associativity, Definition, Expr, InfixDecl, Literal, LiteralKind};
pub use module::{ExposedIdent, ExposingList, ImportDecl, ModuleDecl, ModuleName};
pub use types::{Constructor, RecordField, Type, TypeAnnotation, TypeDecl};

/// A name as written in the source.
///
/// `is_op` marks symbolic names (`?`, `:>`) which appear parenthesized
/// wherever they are used as values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: String,
    pub pos: Position,
    pub is_op: bool,
}

impl Ident {
    /// Placeholder name used when an identifier was required but missing.
    pub const MISSING: &'static str = "_";

    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Ident {
            name: name.into(),
            pos,
            is_op: false,
        }
    }

    pub fn op(name: impl Into<String>, pos: Position) -> Self {
        Ident {
            name: name.into(),
            pos,
            is_op: true,
        }
    }

    /// Stand-in for an identifier the parser could not find.
    pub fn missing(pos: Position) -> Self {
        Ident::new(Self::MISSING, pos)
    }

    pub fn is_missing(&self) -> bool {
        !self.is_op && self.name == Self::MISSING
    }

    /// First character is an upper-case letter.
    pub fn is_upper(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }

    /// First character is a lower-case letter.
    pub fn is_lower(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_lowercase)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_op {
            write!(f, "({})", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// A top-level declaration other than an import.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Decl {
    Type(TypeDecl),
    Infix(InfixDecl),
    Definition(Definition),
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Type(decl) => decl.fmt(f),
            Decl::Infix(decl) => decl.fmt(f),
            Decl::Definition(def) => def.fmt(f),
        }
    }
}

/// One parsed source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct File {
    pub name: String,
    pub module: ModuleDecl,
    pub imports: Vec<ImportDecl>,
    pub decls: Vec<Decl>,
}

impl File {
    /// Definitions in declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Definition(def) => Some(def),
            Decl::Type(_) | Decl::Infix(_) => None,
        })
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.module)?;
        if !self.imports.is_empty() {
            writeln!(f)?;
            for import in &self.imports {
                writeln!(f, "{import}")?;
            }
        }
        for decl in &self.decls {
            writeln!(f)?;
            writeln!(f, "{decl}")?;
        }
        Ok(())
    }
}
