//! Birch IR - shared front-end data types
//!
//! This crate contains the data structures every front-end stage agrees on:
//! - Positions and spans for source locations
//! - Tokens, the closed `TokenKind` set, and the `TokenSource` seam the
//!   parser pulls from
//! - The syntax tree produced by the parser (`File`, `Decl`, `Type`, ...)
//!
//! Nothing in here knows how tokens are produced or how errors are reported.
//! Every syntax tree node renders back to source-like text through `Display`,
//! which is what the CLI prints and what the parser tests compare against.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;
mod traits;

pub use ast::{
    Associativity, Constructor, Decl, Definition, ExposedIdent, ExposingList, Expr, File, Ident,
    ImportDecl, InfixDecl, Literal, LiteralKind, ModuleDecl, ModuleName, RecordField, Type,
    TypeAnnotation, TypeDecl,
};
pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenList, TokenSource, TokenStream};
pub use traits::{Named, Positioned};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Position, Span, TokenKind};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Position, 12);
    crate::static_assert_size!(TokenKind, 1);
}
