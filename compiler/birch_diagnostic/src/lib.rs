//! Diagnostics for the Birch front end.
//!
//! Every reportable problem becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability (`birch explain E1004`)
//! - a message saying what went wrong
//! - labels pointing at where it went wrong
//! - notes with the surrounding context
//!
//! Emitters in [`emitter`] render diagnostics for terminals or tools.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
