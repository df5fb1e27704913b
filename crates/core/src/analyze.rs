//! Scan → parse → validate pipeline.
//!
//! This is a thin orchestrator over the parser and the validation pass.
//! Each top-level item is validated as soon as it is parsed, so a content
//! error in an early item is reported even if later input is malformed.

use crate::dump;
use crate::error::Error;
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::source::{TokenSource, TokenStream};
use crate::token::Token;
use crate::tree::{Node, Rule};
use crate::validate;

/// Parse and validate everything the source yields. Returns the `root`
/// node, or the first error.
pub fn analyze_source<S: TokenSource>(source: S) -> Result<Node, Error> {
    let mut parser = Parser::new(source)?;
    let mut items = Vec::new();
    while let Some(item) = parser.parse_item()? {
        validate::validate(&item)?;
        items.push(item);
    }
    Ok(Node::branch(Rule::Root, items))
}

/// Scan raw document text and analyze it.
pub fn analyze_text(text: &str) -> Result<Node, Error> {
    analyze_source(Scanner::new(text))
}

/// Analyze an already-scanned token sequence.
pub fn analyze_tokens(tokens: Vec<Token>) -> Result<Node, Error> {
    analyze_source(TokenStream::new(tokens))
}

/// Read a token dump and analyze it.
pub fn analyze_dump(text: &str) -> Result<Node, Error> {
    let tokens = dump::read_dump(text)?;
    analyze_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SemanticError, SyntaxError};
    use crate::token::TokenKind;

    #[test]
    fn early_content_error_beats_later_syntax_error() {
        let err = analyze_text(r#"[1, "a"] ]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Semantic(SemanticError::Heterogeneous { .. })
        ));
    }

    #[test]
    fn syntax_error_inside_an_item_wins() {
        let err = analyze_text(r#"[01, 2"#).unwrap_err();
        assert_eq!(
            err,
            Error::Syntax(SyntaxError::Expected {
                expected: TokenKind::RBracket,
                actual: TokenKind::Eof,
            })
        );
    }

    #[test]
    fn dump_errors_surface_as_errors() {
        let err = analyze_dump("<[>\n<what>\n").unwrap_err();
        assert_eq!(err.kind(), "dump");
    }

    #[test]
    fn dump_input_is_analyzed() {
        let root = analyze_dump("<[>\n<num, 1>\n<,>\n<num, 2>\n<]>\n").unwrap();
        assert_eq!(root.value_leaf_count(), 2);
    }
}
