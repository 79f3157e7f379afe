//! Indentation-aware text writers.
//!
//! This crate provides [`IndentWriter`], a small state machine that tracks an
//! indent depth and prefixes every new line with the configured indent unit.
//! Where the text ends up is decided by a [`Sink`]:
//!
//! - [`StringBuilder`]: in-memory accumulation ([`BufferedIndentWriter`])
//! - [`IoSink`]: any [`std::io::Write`] such as a file or stdout
//!   ([`StreamIndentWriter`])
//! - [`String`]: plain string buffer
//!
//! Nesting in generated output mirrors nesting in the generating code through
//! [`IndentWriter::scope`] and [`IndentWriter::indented`].
//!
//! # Example
//!
//! ```
//! use indent_writer::IndentWriter;
//!
//! let mut w = IndentWriter::buffered();
//! w.println("{");
//! {
//!     let mut body = w.scope();
//!     body.println("x;");
//! }
//! w.println("}");
//!
//! assert_eq!(w.to_string(), "{\n    x;\n}\n");
//! ```

mod builder;
mod scope;
mod sink;
mod writer;

pub use builder::StringBuilder;
pub use scope::IndentGuard;
pub use sink::{IoSink, Sink};
pub use writer::{
    BufferedIndentWriter, DEFAULT_INDENT_UNIT, IndentOptions, IndentWriter, StreamIndentWriter,
};
