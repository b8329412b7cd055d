//! In-memory model of the GN build language and its canonical printer.
//!
//! Only the subset needed to declare prebuilt dependencies is modelled:
//! identifiers, booleans, strings, lists and scopes as [`Value`]s, and
//! variable assignments and function calls (with optional blocks) as
//! [`Statement`]s. Every node implements [`Render`], which writes through an
//! indentation-tracking [`Printer`], and [`std::fmt::Display`] with the same
//! output.
//!
//! # Formatting rules
//!
//! - Indentation is two spaces per nesting level.
//! - Lists of up to three elements stay on one line: `[ a, b, c ]`.
//! - Longer lists put one element per line with the closing `]` back at the
//!   level of the line that opened the list.
//! - Scopes put each `key = value,` on its own line.
//! - Call blocks put one statement per line, without separators.
//!
//! # Example
//!
//! ```rust
//! use gngen_cli::gn::{Document, Render, Statement, Value};
//!
//! let doc = Document::new(vec![Statement::block(
//!     "config",
//!     vec![Value::string("zlib_include")],
//!     vec![Statement::var("include_dirs", Value::strings(["/opt/zlib/include"]))],
//! )]);
//!
//! assert_eq!(
//!     doc.render(),
//!     "config(\"zlib_include\") {\n  include_dirs = [ \"/opt/zlib/include\" ]\n}\n"
//! );
//! ```
//!
//! Strings are not escaped. Text containing `"` or a newline is rejected
//! when dependency metadata is loaded and must never reach this module.

mod document;
mod printer;
mod render;
mod statement;
mod value;

pub use document::Document;
pub use printer::{IoSink, LineBuffer, Printer};
pub use render::Render;
pub use statement::{CallStatement, Statement, VarStatement};
pub use value::{Scope, Value};
