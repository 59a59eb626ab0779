//! Bash-style brace pattern parsing and compilation.
//!
//! [`parse`] turns a pattern containing `{a,b,c}` sets and `{x..y[..step]}`
//! ranges (possibly nested inside literal text) into an owned [`Node`] tree;
//! [`compile`] walks that tree into a fragment embeddable in a larger regex
//! alternation. Malformed brace syntax never errors: unmatched or ambiguous
//! spans degrade to literal text so a hand-written pattern still matches
//! itself. The two hard failures are the input-length guard and compiling a
//! value that is not a parsed tree.
//!
//! ```
//! use bracepat::{compile, parse, CompileOptions, ParseOptions};
//!
//! let ast = parse("src/{lib,main}.rs", &ParseOptions::default()).unwrap();
//! let fragment = compile(&ast, &CompileOptions::default()).unwrap();
//! assert_eq!(fragment, "src/(lib|main).rs");
//! ```
//!
//! Range braces are parsed into their segments for a downstream expansion
//! step but pass through compilation opaquely; see [`ast::RangeSpec`].

pub mod ast;
pub mod compiler;
mod error;
pub mod options;
pub mod parser;
pub mod stringify;

pub use ast::{Brace, BraceKind, Branch, Node, RangeSpec};
pub use compiler::compile;
pub use error::*;
pub use options::{CompileOptions, ParseOptions};
pub use parser::{parse, MAX_LENGTH};
pub use stringify::stringify;
