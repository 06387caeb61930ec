//! Small capability traits shared by tokens and syntax nodes.

use crate::ast::{Decl, Definition, Expr, Ident, ImportDecl, InfixDecl, ModuleDecl, TypeDecl};
use crate::{Position, Token};

/// Anything with a start position in the source.
pub trait Positioned {
    fn pos(&self) -> Position;
}

/// Anything that declares or refers to a single name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Positioned for Token {
    fn pos(&self) -> Position {
        self.pos
    }
}

impl Positioned for Ident {
    fn pos(&self) -> Position {
        self.pos
    }
}

impl Positioned for ModuleDecl {
    fn pos(&self) -> Position {
        self.pos
    }
}

impl Positioned for ImportDecl {
    fn pos(&self) -> Position {
        self.pos
    }
}

impl Positioned for TypeDecl {
    fn pos(&self) -> Position {
        TypeDecl::pos(self)
    }
}

impl Positioned for InfixDecl {
    fn pos(&self) -> Position {
        self.pos
    }
}

impl Positioned for Definition {
    fn pos(&self) -> Position {
        self.annotation
            .as_ref()
            .map_or(self.name.pos, |annotation| annotation.name.pos)
    }
}

impl Positioned for Expr {
    fn pos(&self) -> Position {
        Expr::pos(self)
    }
}

impl Positioned for Decl {
    fn pos(&self) -> Position {
        match self {
            Decl::Type(decl) => Positioned::pos(decl),
            Decl::Infix(decl) => decl.pos,
            Decl::Definition(def) => Positioned::pos(def),
        }
    }
}

impl Named for Ident {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TypeDecl {
    fn name(&self) -> &str {
        &TypeDecl::name(self).name
    }
}

impl Named for InfixDecl {
    fn name(&self) -> &str {
        &self.op.name
    }
}

impl Named for Definition {
    fn name(&self) -> &str {
        &self.name.name
    }
}

impl Named for Decl {
    fn name(&self) -> &str {
        match self {
            Decl::Type(decl) => Named::name(decl),
            Decl::Infix(decl) => Named::name(decl),
            Decl::Definition(def) => Named::name(def),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Associativity, Literal, LiteralKind, TypeAnnotation, Type};

    fn int(text: &str, pos: Position) -> Expr {
        Expr::Literal(Literal {
            kind: LiteralKind::Int,
            text: text.to_string(),
            pos,
        })
    }

    #[test]
    fn test_definition_position_prefers_annotation() {
        let def = Definition {
            name: Ident::new("foo", Position::new(2, 1, 10)),
            annotation: Some(TypeAnnotation {
                name: Ident::new("foo", Position::new(1, 1, 0)),
                ty: Type::named(Ident::new("Int", Position::new(1, 7, 6))),
            }),
            args: Vec::new(),
            body: int("1", Position::new(2, 7, 16)),
        };
        assert_eq!(Positioned::pos(&def), Position::new(1, 1, 0));
        assert_eq!(Named::name(&Decl::Definition(def)), "foo");
    }

    #[test]
    fn test_infix_decl_is_named_by_operator() {
        let decl = Decl::Infix(InfixDecl {
            assoc: Associativity::Right,
            priority: 6,
            op: Ident::op("?", Position::new(1, 10, 9)),
            pos: Position::START,
        });
        assert_eq!(Named::name(&decl), "?");
        assert_eq!(Positioned::pos(&decl), Position::START);
    }
}
