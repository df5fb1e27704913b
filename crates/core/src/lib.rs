//! jsv-core: scanner, parser and semantic validator for strict JSON-like
//! documents.
//!
//! The pipeline has two stages. The [`scanner`] turns text into tokens on
//! demand; the [`parser`] drives the grammar and builds a parse tree, and
//! the [`validate`] pass enforces content rules on top of it (homogeneous
//! collections, unique non-blank non-reserved keys, well-shaped numbers).
//!
//! # Public API
//!
//! - [`analyze_text()`] / [`analyze_tokens()`] / [`analyze_dump()`] -- run the full pipeline
//! - [`Scanner`], [`TokenSource`], [`TokenStream`] -- token producers
//! - [`Parser`] -- grammar layer only
//! - [`Node`] -- parse tree, with [`Node::render()`] for text output
//! - [`Error`] -- lexical, syntax, semantic or dump failure

pub mod analyze;
pub mod dump;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod source;
pub mod token;
pub mod tree;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::{Collection, DumpError, Error, LexicalError, SemanticError, SyntaxError};
pub use parser::{Parser, MAX_NESTING_DEPTH};
pub use scanner::Scanner;
pub use source::{TokenSource, TokenStream};
pub use token::{Token, TokenKind};
pub use tree::{Branch, Leaf, LeafKind, Node, Rule};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use analyze::{analyze_dump, analyze_source, analyze_text, analyze_tokens};
pub use dump::{read_dump, write_dump};
pub use validate::validate;
