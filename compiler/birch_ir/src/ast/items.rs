//! Fixity declarations, definitions, and expressions.

use std::fmt;

use super::{Ident, TypeAnnotation};
use crate::Position;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    Left,
    Right,
    NonAssoc,
}

impl Associativity {
    /// Keyword that introduces a declaration with this associativity.
    pub const fn keyword(self) -> &'static str {
        match self {
            Associativity::Left => "infixl",
            Associativity::Right => "infixr",
            Associativity::NonAssoc => "infix",
        }
    }
}

/// `infixl 7 :>` and friends. `priority` is always in `0..=9`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InfixDecl {
    pub assoc: Associativity,
    pub priority: u8,
    pub op: Ident,
    pub pos: Position,
}

impl InfixDecl {
    pub const MAX_PRIORITY: u8 = 9;
}

impl fmt::Display for InfixDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.assoc.keyword(),
            self.priority,
            self.op.name
        )
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Bool,
    Int,
    Float,
    String,
    Char,
}

/// Literal with its verbatim source text (quotes included for strings and
/// chars).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
    pub pos: Position,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Literal(Literal),
}

impl Expr {
    pub fn pos(&self) -> Position {
        match self {
            Expr::Literal(lit) => lit.pos,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => lit.fmt(f),
        }
    }
}

/// Value definition, optionally preceded by its type annotation.
///
/// When `annotation` is present its name equals `name`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Definition {
    pub name: Ident,
    pub annotation: Option<TypeAnnotation>,
    pub args: Vec<Ident>,
    pub body: Expr,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(annotation) = &self.annotation {
            writeln!(f, "{annotation}")?;
        }
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg.name)?;
        }
        write!(f, " = {}", self.body)
    }
}
