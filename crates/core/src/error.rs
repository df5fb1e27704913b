use crate::token::TokenKind;
use serde::Serialize;
use std::fmt;

/// The scanner could not classify the character at `position`, or a
/// `true`/`false`/`null` literal broke off partway. `character` is `None`
/// when the input ended inside a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Invalid character '{}' at position {position}", display_char(.character))]
pub struct LexicalError {
    pub position: usize,
    pub character: Option<char>,
}

fn display_char(c: &Option<char>) -> String {
    match c {
        Some(c) => c.to_string(),
        None => "EOF".to_owned(),
    }
}

/// The current token does not fit the grammar production being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SyntaxError {
    #[error("Expected token {expected}, got {actual}")]
    Expected {
        expected: TokenKind,
        actual: TokenKind,
    },
    /// No `value` alternative starts with `actual`.
    #[error("Unexpected token {actual} in value")]
    UnexpectedValue { actual: TokenKind },
    /// Lists and dicts open more than `limit` levels deep.
    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Collection kind cited by a homogeneity failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    List,
    Dict,
}

impl Collection {
    fn members(self) -> &'static str {
        match self {
            Collection::List => "List elements",
            Collection::Dict => "Dictionary values",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::List => f.write_str("list"),
            Collection::Dict => f.write_str("dict"),
        }
    }
}

/// The grammar matched but a content rule rejected the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SemanticError {
    #[error("Error type 1 at {literal}: Invalid Decimal Numbers.")]
    InvalidDecimal { literal: String },

    #[error("Error type 2 at \"{key}\": Empty Key")]
    EmptyKey { key: String },

    /// Unnecessary leading zero, or a `+` sign outside an exponent.
    #[error("Error type 3 at {literal}: Invalid Numbers.")]
    InvalidNumber { literal: String },

    #[error("Error type 4 at \"{key}\": Reserved Words as Dictionary Key")]
    ReservedKey { key: String },

    #[error("Error type 5 at \"{key}\": No Duplicate Keys in Dictionary")]
    DuplicateKey { key: String },

    #[error(
        "Error type 6 at {collection}: {} must be of the same type. Expected {expected}, got {actual}",
        .collection.members()
    )]
    Heterogeneous {
        collection: Collection,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Expected STRING or NUMBER as value in pair, got {actual}")]
    PairValueKind { actual: &'static str },
}

impl SemanticError {
    /// Diagnostic rule number (1-6). The pair value-kind restriction is
    /// not one of the numbered rules.
    pub fn code(&self) -> Option<u8> {
        match self {
            SemanticError::InvalidDecimal { .. } => Some(1),
            SemanticError::EmptyKey { .. } => Some(2),
            SemanticError::InvalidNumber { .. } => Some(3),
            SemanticError::ReservedKey { .. } => Some(4),
            SemanticError::DuplicateKey { .. } => Some(5),
            SemanticError::Heterogeneous { .. } => Some(6),
            SemanticError::PairValueKind { .. } => None,
        }
    }
}

/// A malformed line in a token dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DumpError {
    #[error("line {line}: unknown token tag '{tag}'")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: token '{tag}' requires a value")]
    MissingValue { line: usize, tag: String },
}

/// Any failure of a scan/parse/validate run. The first error ends the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Dump(#[from] DumpError),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Lexical(_) => "lexical",
            Error::Syntax(_) => "syntax",
            Error::Semantic(_) => "semantic",
            Error::Dump(_) => "dump",
        }
    }

    /// Semantic rule number, when a numbered rule fired.
    pub fn code(&self) -> Option<u8> {
        match self {
            Error::Semantic(e) => e.code(),
            _ => None,
        }
    }

    /// Structured form for machine-readable reports. Always carries
    /// `kind`, `code` (null when not numbered) and `message`.
    pub fn to_json_value(&self) -> serde_json::Value {
        let detail = match self {
            Error::Lexical(e) => serde_json::to_value(e),
            Error::Syntax(e) => serde_json::to_value(e),
            Error::Semantic(e) => serde_json::to_value(e),
            Error::Dump(e) => serde_json::to_value(e),
        }
        .unwrap_or(serde_json::Value::Null);

        serde_json::json!({
            "code":    self.code(),
            "detail":  detail,
            "kind":    self.kind(),
            "message": self.to_string(),
        })
    }
}
