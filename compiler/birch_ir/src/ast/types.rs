//! Type expressions and type declarations.

use std::fmt;

use super::Ident;
use crate::Position;

/// A type expression.
///
/// Parenthesized single types are unwrapped while parsing, so there is no
/// `Paren` variant; `Display` re-inserts parentheses where precedence needs
/// them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// `a -> b -> c`: `args` holds every type but the last.
    Function { args: Vec<Type>, ret: Box<Type> },
    /// `(a, b)`, two or more elements.
    Tuple(Vec<Type>),
    /// `{ x : Int, y : Int }`, possibly empty.
    Record(Vec<RecordField>),
    /// Upper-case constructor applied to zero or more arguments.
    Named { name: Ident, args: Vec<Type> },
    /// Lower-case type variable.
    Var(Ident),
}

impl Type {
    pub fn named(name: Ident) -> Self {
        Type::Named {
            name,
            args: Vec::new(),
        }
    }

    /// Position of the leftmost name in the type, if it has one.
    pub fn pos(&self) -> Option<Position> {
        match self {
            Type::Function { args, ret } => args.first().map_or_else(|| ret.pos(), Type::pos),
            Type::Tuple(elems) => elems.first().and_then(Type::pos),
            Type::Record(fields) => fields.first().map(|field| field.name.pos),
            Type::Named { name, .. } | Type::Var(name) => Some(name.pos),
        }
    }

    fn needs_parens_as_arg(&self) -> bool {
        match self {
            Type::Function { .. } => true,
            Type::Named { args, .. } => !args.is_empty(),
            Type::Tuple(_) | Type::Record(_) | Type::Var(_) => false,
        }
    }

    fn fmt_wrapped(&self, f: &mut fmt::Formatter<'_>, wrap: bool) -> fmt::Result {
        if wrap {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Function { args, ret } => {
                for arg in args {
                    arg.fmt_wrapped(f, matches!(arg, Type::Function { .. }))?;
                    f.write_str(" -> ")?;
                }
                write!(f, "{ret}")
            }
            Type::Tuple(elems) => {
                f.write_str("(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str(")")
            }
            Type::Record(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(" }")
            }
            Type::Named { name, args } => {
                f.write_str(&name.name)?;
                for arg in args {
                    f.write_str(" ")?;
                    arg.fmt_wrapped(f, arg.needs_parens_as_arg())?;
                }
                Ok(())
            }
            Type::Var(name) => f.write_str(&name.name),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordField {
    pub name: Ident,
    pub ty: Type,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name.name, self.ty)
    }
}

/// `name : type` line preceding a definition.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeAnnotation {
    pub name: Ident,
    pub ty: Type,
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.ty)
    }
}

/// One alternative of a union type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Constructor {
    pub name: Ident,
    pub args: Vec<Type>,
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name.name)?;
        for arg in &self.args {
            f.write_str(" ")?;
            arg.fmt_wrapped(f, arg.needs_parens_as_arg())?;
        }
        Ok(())
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeDecl {
    /// `type alias Name params = type`
    Alias {
        name: Ident,
        params: Vec<Ident>,
        ty: Type,
        pos: Position,
    },
    /// `type Name params = Ctor args | ...`
    Union {
        name: Ident,
        params: Vec<Ident>,
        constructors: Vec<Constructor>,
        pos: Position,
    },
}

impl TypeDecl {
    pub fn name(&self) -> &Ident {
        match self {
            TypeDecl::Alias { name, .. } | TypeDecl::Union { name, .. } => name,
        }
    }

    pub fn params(&self) -> &[Ident] {
        match self {
            TypeDecl::Alias { params, .. } | TypeDecl::Union { params, .. } => params,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            TypeDecl::Alias { pos, .. } | TypeDecl::Union { pos, .. } => *pos,
        }
    }
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDecl::Alias { name, ty, .. } => {
                write!(f, "type alias {}", name.name)?;
                for param in self.params() {
                    write!(f, " {}", param.name)?;
                }
                write!(f, " = {ty}")
            }
            TypeDecl::Union {
                name, constructors, ..
            } => {
                write!(f, "type {}", name.name)?;
                for param in self.params() {
                    write!(f, " {}", param.name)?;
                }
                for (i, ctor) in constructors.iter().enumerate() {
                    f.write_str(if i == 0 { " = " } else { " | " })?;
                    write!(f, "{ctor}")?;
                }
                Ok(())
            }
        }
    }
}
